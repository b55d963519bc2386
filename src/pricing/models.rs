//! Domain models for hall pricing.
//!
//! Halls and food items are owned by the venue API; the pricing engine only
//! reads them. The result types are transient views recomputed on every
//! change to a booking draft.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a food item as issued by the venue API.
pub type FoodId = String;

/// A bookable hall belonging to a venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub base_price_per_plate: Decimal,
    /// Owner-set price that replaces the base price when present
    #[serde(default)]
    pub price_per_plate_override: Option<Decimal>,
    /// Food bundled into the per-plate price at no extra charge
    #[serde(default)]
    pub included_food_ids: Vec<FoodId>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Hall {
    /// Per-plate price used for official pricing (override wins).
    pub fn effective_price_per_plate(&self) -> Decimal {
        self.price_per_plate_override
            .unwrap_or(self.base_price_per_plate)
    }

    pub fn includes_food(&self, food_id: &str) -> bool {
        self.included_food_ids.iter().any(|id| id == food_id)
    }
}

/// Food item from the venue's menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: Decimal,
}

/// Food catalog keyed by food id.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: HashMap<FoodId, FoodItem>,
}

impl FoodCatalog {
    pub fn new(items: impl IntoIterator<Item = FoodItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.id.clone(), item))
                .collect(),
        }
    }

    pub fn get(&self, food_id: &str) -> Option<&FoodItem> {
        self.items.get(food_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.values()
    }
}

/// How the host expresses an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferMode {
    #[default]
    PerPlate,
    Total,
}

impl OfferMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferMode::PerPlate => "per_plate",
            OfferMode::Total => "total",
        }
    }
}

impl fmt::Display for OfferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OfferMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per_plate" | "perplate" | "per-plate" => Ok(OfferMode::PerPlate),
            "total" => Ok(OfferMode::Total),
            other => Err(format!("unknown offer mode '{}'", other)),
        }
    }
}

/// Host input for one pricing pass.
#[derive(Debug, Clone, Default)]
pub struct OfferInput {
    pub guest_count: u32,
    pub offer_mode: OfferMode,
    /// `None` until the host enters a value
    pub offer_value: Option<Decimal>,
    pub selected_food_ids: Vec<FoodId>,
}

/// Official (un-negotiated) pricing for a hall and guest count
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OfficialPricing {
    pub price_per_plate: Decimal,
    /// Hall cost only: price per plate × guest count
    pub hall_total: Decimal,
    pub extra_food_cost: Decimal,
    /// hall_total + extra_food_cost
    pub grand_total: Decimal,
    /// Selected ids missing from the catalog (priced at zero)
    pub unknown_food_ids: Vec<FoodId>,
}

/// Result of checking an offer against the negotiation floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferValidation {
    pub valid: bool,
    pub minimum: Decimal,
}

/// Offer-derived pricing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NegotiatedPricing {
    pub offered_per_plate: Decimal,
    pub negotiated_total: Decimal,
    /// Settlement price per plate, rounded to the currency unit
    pub final_per_plate: Decimal,
}

/// Full pricing view for a booking draft.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingResult {
    pub guest_count: u32,
    pub offer_mode: OfferMode,
    pub official: OfficialPricing,
    pub negotiated: NegotiatedPricing,
    pub minimum_offer: Decimal,
    pub offer_present: bool,
    pub offer_valid: bool,
    pub exceeds_capacity: bool,
    pub hall_available: bool,
    /// final_per_plate × guest_count
    pub settlement_total: Decimal,
    /// settlement_total + extra food cost.
    ///
    /// Built on the settled per-plate price, not the raw offer: a 500 ask
    /// and a 400 offer for 100 guests settle at 450 and total 45000, while
    /// `negotiated.negotiated_total` stays at the offer's 40000.
    pub grand_total: Decimal,
    pub submittable: bool,
}

/// Pricing block sent to the booking-creation API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingPricing {
    #[serde(with = "rust_decimal::serde::str")]
    pub original_per_plate_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub user_offered_per_plate_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_per_plate_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
}
