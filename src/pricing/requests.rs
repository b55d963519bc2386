//! Request DTOs for pricing API endpoints.
//!
//! Amounts accept JSON numbers or decimal strings.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{FoodCatalog, FoodItem, Hall, OfferInput};
use super::services::{parse_guest_count, parse_offer_mode, PricingError};

pub(crate) fn default_offer_mode() -> String {
    "per_plate".to_string()
}

/// Request to price a booking draft
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub hall: Hall,
    /// Venue food catalog
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    #[serde(default)]
    pub guest_count: Option<Decimal>,
    #[serde(default = "default_offer_mode")]
    pub offer_mode: String,
    #[serde(default)]
    pub offer_value: Option<Decimal>,
    #[serde(default)]
    pub selected_food_ids: Vec<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl QuoteRequest {
    pub fn catalog(&self) -> FoodCatalog {
        FoodCatalog::new(self.foods.iter().cloned())
    }

    pub fn offer_input(&self) -> Result<OfferInput, PricingError> {
        Ok(OfferInput {
            guest_count: parse_guest_count(self.guest_count)?,
            offer_mode: parse_offer_mode(&self.offer_mode)?,
            offer_value: self.offer_value,
            selected_food_ids: self.selected_food_ids.clone(),
        })
    }
}

/// Request to check a single offer against the floor
#[derive(Debug, Deserialize)]
pub struct ValidateOfferRequest {
    pub offer_value: Decimal,
    #[serde(default)]
    pub guest_count: Option<Decimal>,
    /// Per-plate price (per_plate mode) or hall-only total (total mode)
    pub official_reference: Decimal,
    #[serde(default = "default_offer_mode")]
    pub offer_mode: String,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Request to list the food a host may add to a hall
#[derive(Debug, Deserialize)]
pub struct SelectableFoodsRequest {
    pub hall: Hall,
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    #[serde(default)]
    pub currency: Option<String>,
}
