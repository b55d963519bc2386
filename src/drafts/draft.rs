//! Booking draft state.
//!
//! The draft owns the host's current selections; pricing is recomputed from
//! it on demand and never stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::pricing::models::{BookingPricing, FoodCatalog, FoodItem, Hall, OfferInput, OfferMode};
use crate::pricing::services::{self, PricingError};
use crate::pricing::PricingResult;

#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub id: Uuid,
    pub hall: Hall,
    pub catalog: FoodCatalog,
    pub input: OfferInput,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload handed to the booking-creation API on submit
#[derive(Debug, Clone, Serialize)]
pub struct BookingSubmission {
    pub draft_id: Uuid,
    pub hall_id: String,
    pub guest_count: u32,
    pub offer_mode: OfferMode,
    pub selected_food_ids: Vec<String>,
    pub pricing: BookingPricing,
}

impl BookingDraft {
    pub fn new(hall: Hall, foods: Vec<FoodItem>, currency: &str) -> Result<Self, PricingError> {
        let catalog = FoodCatalog::new(foods);
        services::validate_hall(&hall)?;
        services::validate_catalog(&catalog)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            hall,
            catalog,
            input: OfferInput::default(),
            currency: currency.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Switch to another hall. Selections that the new hall includes are dropped.
    pub fn select_hall(&mut self, hall: Hall) -> Result<(), PricingError> {
        services::validate_hall(&hall)?;
        self.input
            .selected_food_ids
            .retain(|id| !hall.includes_food(id));
        self.hall = hall;
        self.touch();
        Ok(())
    }

    pub fn replace_catalog(&mut self, foods: Vec<FoodItem>) -> Result<(), PricingError> {
        let catalog = FoodCatalog::new(foods);
        services::validate_catalog(&catalog)?;
        self.catalog = catalog;
        self.touch();
        Ok(())
    }

    pub fn set_guest_count(&mut self, guest_count: u32) {
        self.input.guest_count = guest_count;
        self.touch();
    }

    /// Change the offer mode. A different mode clears the entered offer.
    pub fn set_offer_mode(&mut self, mode: OfferMode) {
        if self.input.offer_mode != mode {
            self.input.offer_mode = mode;
            self.input.offer_value = None;
        }
        self.touch();
    }

    pub fn set_offer_value(&mut self, offer: Option<Decimal>) -> Result<(), PricingError> {
        if let Some(value) = offer {
            services::ensure_amount("offer_value", value, services::MAX_AMOUNT)?;
        }
        self.input.offer_value = offer;
        self.touch();
        Ok(())
    }

    /// Toggle an extra food item. Returns whether it is now selected.
    pub fn toggle_food(&mut self, food_id: &str) -> Result<bool, PricingError> {
        if self.hall.includes_food(food_id) {
            return Err(PricingError::invalid(
                "food_id",
                format!("{} is already included with hall {}", food_id, self.hall.id),
            ));
        }
        if self.catalog.get(food_id).is_none() {
            return Err(PricingError::invalid(
                "food_id",
                format!("{} is not on the menu", food_id),
            ));
        }

        let selected = &mut self.input.selected_food_ids;
        let now_selected = match selected.iter().position(|id| id == food_id) {
            Some(idx) => {
                selected.remove(idx);
                false
            }
            None => {
                selected.push(food_id.to_string());
                true
            }
        };
        self.touch();
        Ok(now_selected)
    }

    pub fn pricing(&self) -> Result<PricingResult, PricingError> {
        services::price_booking(&self.hall, &self.catalog, &self.input)
    }

    pub fn submission(&self) -> Result<BookingSubmission, PricingError> {
        let result = self.pricing()?;
        let pricing = services::booking_pricing(&result)?;
        Ok(BookingSubmission {
            draft_id: self.id,
            hall_id: self.hall.id.clone(),
            guest_count: result.guest_count,
            offer_mode: result.offer_mode,
            selected_food_ids: self.input.selected_food_ids.clone(),
            pricing,
        })
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
