//! Pricing service functions.
//!
//! Validates raw input at the boundary, then composes the calculators into a
//! full `PricingResult`. Nothing here performs I/O.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::calculators::{
    compute_negotiated, compute_official, grand_total, official_reference, validate_offer,
};
use super::models::{BookingPricing, FoodCatalog, Hall, OfferInput, OfferMode, PricingResult};

/// Pricing error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Offer cannot be submitted: {reason}")]
    OfferNotSubmittable { reason: String },
}

impl PricingError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Largest accepted per-plate price for halls and food.
pub const MAX_PRICE_PER_PLATE: Decimal = dec!(1000000000);

/// Largest accepted head count.
pub const MAX_GUEST_COUNT: u32 = 1_000_000;

/// Largest accepted offer or reference amount. Covers any total reachable
/// with in-range prices and guest counts.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Reject negative or out-of-range amounts so calculator arithmetic cannot
/// overflow.
pub(crate) fn ensure_amount(field: &str, amount: Decimal, max: Decimal) -> Result<(), PricingError> {
    if amount < Decimal::ZERO {
        return Err(PricingError::invalid(
            field,
            format!("must be non-negative, got {}", amount),
        ));
    }
    if amount > max {
        return Err(PricingError::invalid(
            field,
            format!("exceeds maximum allowed ({}), got {}", max, amount),
        ));
    }
    Ok(())
}

fn ensure_guest_count(guest_count: u32) -> Result<(), PricingError> {
    if guest_count > MAX_GUEST_COUNT {
        return Err(PricingError::invalid(
            "guest_count",
            format!("exceeds maximum allowed ({}), got {}", MAX_GUEST_COUNT, guest_count),
        ));
    }
    Ok(())
}

/// Convert a raw guest count into a head count.
///
/// Absent counts are zero (nothing entered yet). Negative, fractional or
/// out-of-range counts are rejected.
pub fn parse_guest_count(raw: Option<Decimal>) -> Result<u32, PricingError> {
    let Some(raw) = raw else {
        return Ok(0);
    };
    ensure_amount("guest_count", raw, Decimal::from(MAX_GUEST_COUNT))?;
    if !raw.fract().is_zero() {
        return Err(PricingError::invalid(
            "guest_count",
            format!("must be a whole number, got {}", raw),
        ));
    }
    raw.to_u32()
        .ok_or_else(|| PricingError::invalid("guest_count", format!("out of range: {}", raw)))
}

pub fn parse_offer_mode(raw: &str) -> Result<OfferMode, PricingError> {
    raw.parse::<OfferMode>()
        .map_err(|reason| PricingError::invalid("offer_mode", reason))
}

pub fn validate_hall(hall: &Hall) -> Result<(), PricingError> {
    if hall.capacity == 0 {
        return Err(PricingError::invalid("hall.capacity", "must be greater than zero"));
    }
    ensure_amount(
        "hall.base_price_per_plate",
        hall.base_price_per_plate,
        MAX_PRICE_PER_PLATE,
    )?;
    if let Some(price) = hall.price_per_plate_override {
        ensure_amount("hall.price_per_plate_override", price, MAX_PRICE_PER_PLATE)?;
    }
    Ok(())
}

pub fn validate_catalog(catalog: &FoodCatalog) -> Result<(), PricingError> {
    for food in catalog.iter() {
        ensure_amount("food.price", food.price, MAX_PRICE_PER_PLATE).map_err(|_| {
            PricingError::invalid(
                "food.price",
                format!(
                    "price of {} must be between 0 and {}, got {}",
                    food.id, MAX_PRICE_PER_PLATE, food.price
                ),
            )
        })?;
    }
    Ok(())
}

pub fn validate_input(input: &OfferInput) -> Result<(), PricingError> {
    ensure_guest_count(input.guest_count)?;
    if let Some(offer) = input.offer_value {
        ensure_amount("offer_value", offer, MAX_AMOUNT)?;
    }
    Ok(())
}

/// Price a booking draft.
///
/// Hard input errors are returned; soft conditions (offer below the floor,
/// unknown food, capacity overrun) are flagged on the result.
pub fn price_booking(
    hall: &Hall,
    catalog: &FoodCatalog,
    input: &OfferInput,
) -> Result<PricingResult, PricingError> {
    validate_hall(hall)?;
    validate_catalog(catalog)?;
    validate_input(input)?;

    let guest_count = input.guest_count;
    let offer_present = input.offer_value.is_some();

    if guest_count == 0 {
        return Ok(PricingResult {
            offer_mode: input.offer_mode,
            offer_present,
            hall_available: hall.available,
            ..PricingResult::default()
        });
    }

    let official = compute_official(hall, guest_count, &input.selected_food_ids, catalog);
    let offer_value = input.offer_value.unwrap_or(Decimal::ZERO);
    let reference = official_reference(&official, input.offer_mode);
    let validation = validate_offer(offer_value, guest_count, reference, input.offer_mode);
    let negotiated = compute_negotiated(
        offer_value,
        input.offer_mode,
        guest_count,
        official.price_per_plate,
    );

    let settlement_total = negotiated.final_per_plate * Decimal::from(guest_count);
    let total = grand_total(settlement_total, official.extra_food_cost);
    let offer_valid = offer_present && validation.valid;
    let exceeds_capacity = guest_count > hall.capacity;

    tracing::debug!(
        "Priced hall {} for {} guests ({}): official {} offer {} final {}",
        hall.id,
        guest_count,
        input.offer_mode,
        official.grand_total,
        offer_value,
        negotiated.final_per_plate
    );

    Ok(PricingResult {
        guest_count,
        offer_mode: input.offer_mode,
        official,
        negotiated,
        minimum_offer: validation.minimum,
        offer_present,
        offer_valid,
        exceeds_capacity,
        hall_available: hall.available,
        settlement_total,
        grand_total: total,
        submittable: offer_valid && !exceeds_capacity && hall.available,
    })
}

/// Build the pricing block for booking submission.
pub fn booking_pricing(result: &PricingResult) -> Result<BookingPricing, PricingError> {
    if !result.submittable {
        return Err(PricingError::OfferNotSubmittable {
            reason: not_submittable_reason(result),
        });
    }
    Ok(BookingPricing {
        original_per_plate_price: result.official.price_per_plate,
        user_offered_per_plate_price: result.negotiated.offered_per_plate,
        final_per_plate_price: result.negotiated.final_per_plate,
        total_cost: result.grand_total,
    })
}

fn not_submittable_reason(result: &PricingResult) -> String {
    if result.guest_count == 0 {
        "guest count is required".to_string()
    } else if !result.offer_present {
        "no offer entered".to_string()
    } else if !result.offer_valid {
        format!("offer is below the minimum of {}", result.minimum_offer)
    } else if result.exceeds_capacity {
        "guest count exceeds hall capacity".to_string()
    } else if !result.hall_available {
        "hall is not available".to_string()
    } else {
        "pricing incomplete".to_string()
    }
}
