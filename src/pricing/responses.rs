//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{
    BookingPricing, FoodItem, NegotiatedPricing, OfferMode, OfferValidation, OfficialPricing,
    PricingResult,
};

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount: amount.normalize(),
            currency: currency.to_string(),
        }
    }
}

/// Official pricing block
#[derive(Debug, Serialize)]
pub struct OfficialPricingResponse {
    pub price_per_plate: MoneyResponse,
    pub hall_total: MoneyResponse,
    pub extra_food_cost: MoneyResponse,
    pub grand_total: MoneyResponse,
    pub unknown_food_ids: Vec<String>,
}

impl OfficialPricingResponse {
    pub fn new(official: &OfficialPricing, currency: &str) -> Self {
        Self {
            price_per_plate: MoneyResponse::new(official.price_per_plate, currency),
            hall_total: MoneyResponse::new(official.hall_total, currency),
            extra_food_cost: MoneyResponse::new(official.extra_food_cost, currency),
            grand_total: MoneyResponse::new(official.grand_total, currency),
            unknown_food_ids: official.unknown_food_ids.clone(),
        }
    }
}

/// Offer-derived pricing block
#[derive(Debug, Serialize)]
pub struct NegotiatedPricingResponse {
    pub offered_per_plate: MoneyResponse,
    pub negotiated_total: MoneyResponse,
    pub final_per_plate: MoneyResponse,
}

impl NegotiatedPricingResponse {
    pub fn new(negotiated: &NegotiatedPricing, currency: &str) -> Self {
        Self {
            offered_per_plate: MoneyResponse::new(negotiated.offered_per_plate, currency),
            negotiated_total: MoneyResponse::new(negotiated.negotiated_total, currency),
            final_per_plate: MoneyResponse::new(negotiated.final_per_plate, currency),
        }
    }
}

/// Response for a booking quote
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub guest_count: u32,
    pub offer_mode: OfferMode,
    pub official: OfficialPricingResponse,
    pub negotiated: NegotiatedPricingResponse,
    pub minimum_offer: MoneyResponse,
    pub offer_present: bool,
    pub offer_valid: bool,
    pub exceeds_capacity: bool,
    pub hall_available: bool,
    pub settlement_total: MoneyResponse,
    pub grand_total: MoneyResponse,
    pub submittable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<BookingPricing>,
}

impl QuoteResponse {
    pub fn new(result: &PricingResult, pricing: Option<BookingPricing>, currency: &str) -> Self {
        Self {
            guest_count: result.guest_count,
            offer_mode: result.offer_mode,
            official: OfficialPricingResponse::new(&result.official, currency),
            negotiated: NegotiatedPricingResponse::new(&result.negotiated, currency),
            minimum_offer: MoneyResponse::new(result.minimum_offer, currency),
            offer_present: result.offer_present,
            offer_valid: result.offer_valid,
            exceeds_capacity: result.exceeds_capacity,
            hall_available: result.hall_available,
            settlement_total: MoneyResponse::new(result.settlement_total, currency),
            grand_total: MoneyResponse::new(result.grand_total, currency),
            submittable: result.submittable,
            pricing,
        }
    }
}

/// Response for offer validation
#[derive(Debug, Serialize)]
pub struct OfferValidationResponse {
    pub valid: bool,
    pub minimum: MoneyResponse,
}

impl OfferValidationResponse {
    pub fn new(validation: &OfferValidation, currency: &str) -> Self {
        Self {
            valid: validation.valid,
            minimum: MoneyResponse::new(validation.minimum, currency),
        }
    }
}

/// A food item the host can add
#[derive(Debug, Serialize)]
pub struct FoodItemResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: MoneyResponse,
}

impl FoodItemResponse {
    pub fn new(food: &FoodItem, currency: &str) -> Self {
        Self {
            id: food.id.clone(),
            name: food.name.clone(),
            category: food.category.clone(),
            price: MoneyResponse::new(food.price, currency),
        }
    }
}

/// Response listing selectable extra food
#[derive(Debug, Serialize)]
pub struct SelectableFoodsResponse {
    pub hall_id: String,
    pub foods: Vec<FoodItemResponse>,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
