//! Core pricing calculation functions.
//!
//! Pure functions for booking price negotiation - no I/O, no shared state.
//! Inputs are assumed to have passed the boundary checks in `services`.

use std::collections::HashSet;

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

use super::models::{
    FoodCatalog, FoodItem, Hall, NegotiatedPricing, OfferMode, OfferValidation, OfficialPricing,
};

/// Fraction of the official reference price below which offers are refused.
pub const NEGOTIATION_FLOOR_RATIO: Decimal = dec!(0.70);

/// Settle at the midpoint between the official price and the offer.
pub const SETTLEMENT_MIDPOINT: bool = true;

/// Round to specified decimal places, halves away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use hallbook_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(-2.5), 0), dec!(-3));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculate official pricing for a hall.
///
/// Extra food cost is the sum of `price × guest_count` over the distinct
/// selected ids. Ids included with the hall add nothing; ids missing from
/// the catalog add nothing and are reported back. A zero guest count yields
/// all-zero pricing.
pub fn compute_official(
    hall: &Hall,
    guest_count: u32,
    selected_food_ids: &[String],
    catalog: &FoodCatalog,
) -> OfficialPricing {
    if guest_count == 0 {
        return OfficialPricing::default();
    }

    let guests = Decimal::from(guest_count);
    let price_per_plate = hall.effective_price_per_plate();

    let mut seen = HashSet::new();
    let mut extra_food_cost = Decimal::ZERO;
    let mut unknown_food_ids = Vec::new();

    for food_id in selected_food_ids {
        if !seen.insert(food_id.as_str()) {
            continue;
        }
        if hall.includes_food(food_id) {
            tracing::debug!("Food {} is included with hall {}, no extra cost", food_id, hall.id);
            continue;
        }
        match catalog.get(food_id) {
            Some(food) => extra_food_cost += food.price * guests,
            None => {
                tracing::warn!("Selected food {} not found in catalog, priced at zero", food_id);
                unknown_food_ids.push(food_id.clone());
            }
        }
    }

    let hall_total = price_per_plate * guests;

    OfficialPricing {
        price_per_plate,
        hall_total,
        extra_food_cost,
        grand_total: hall_total + extra_food_cost,
        unknown_food_ids,
    }
}

/// Official figure an offer is compared against: the per-plate price in
/// `PerPlate` mode, the hall-only total in `Total` mode.
pub fn official_reference(official: &OfficialPricing, offer_mode: OfferMode) -> Decimal {
    match offer_mode {
        OfferMode::PerPlate => official.price_per_plate,
        OfferMode::Total => official.hall_total,
    }
}

/// Lowest acceptable offer for a reference price.
///
/// The mode only selects which reference the caller passes; the ratio is
/// the same for both.
pub fn minimum_allowed_offer(official_reference: Decimal, _offer_mode: OfferMode) -> Decimal {
    official_reference * NEGOTIATION_FLOOR_RATIO
}

/// Check an offer against the floor. The minimum itself is accepted.
pub fn validate_offer(
    offer_value: Decimal,
    _guest_count: u32,
    official_reference: Decimal,
    offer_mode: OfferMode,
) -> OfferValidation {
    let minimum = minimum_allowed_offer(official_reference, offer_mode);
    OfferValidation {
        valid: offer_value >= minimum,
        minimum,
    }
}

/// Derive per-plate and total figures from an offer and settle the final
/// per-plate price. A zero guest count yields all-zero pricing.
pub fn compute_negotiated(
    offer_value: Decimal,
    offer_mode: OfferMode,
    guest_count: u32,
    official_per_plate: Decimal,
) -> NegotiatedPricing {
    if guest_count == 0 {
        return NegotiatedPricing::default();
    }

    let guests = Decimal::from(guest_count);
    let (offered_per_plate, negotiated_total) = match offer_mode {
        OfferMode::PerPlate => (offer_value, offer_value * guests),
        OfferMode::Total => (offer_value / guests, offer_value),
    };

    NegotiatedPricing {
        offered_per_plate,
        negotiated_total,
        final_per_plate: settlement_price(official_per_plate, offered_per_plate),
    }
}

/// Final per-plate price, rounded to the currency unit.
pub fn settlement_price(official_per_plate: Decimal, offered_per_plate: Decimal) -> Decimal {
    if SETTLEMENT_MIDPOINT {
        round_money((official_per_plate + offered_per_plate) / Decimal::TWO, 0)
    } else {
        round_money(offered_per_plate, 0)
    }
}

/// Negotiated total plus extra food.
pub fn grand_total(negotiated_total: Decimal, extra_food_cost: Decimal) -> Decimal {
    negotiated_total + extra_food_cost
}

/// Catalog items a host may add on top of the hall's included food,
/// ordered by category then name.
pub fn selectable_extra_foods<'a>(hall: &Hall, catalog: &'a FoodCatalog) -> Vec<&'a FoodItem> {
    let mut foods: Vec<&FoodItem> = catalog
        .iter()
        .filter(|food| !hall.includes_food(&food.id))
        .collect();
    foods.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
    foods
}
