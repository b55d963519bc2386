//! HTTP routes for the pricing engine.
//!
//! Stateless mirrors of the client-side calculation, so the booking API can
//! re-check figures it receives.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::calculators::{selectable_extra_foods, validate_offer};
use super::models::FoodCatalog;
use super::requests::{QuoteRequest, SelectableFoodsRequest, ValidateOfferRequest};
use super::responses::{
    FoodItemResponse, OfferValidationResponse, QuoteResponse, SelectableFoodsResponse,
};
use super::services::{
    booking_pricing, ensure_amount, parse_guest_count, parse_offer_mode, price_booking,
    validate_catalog, validate_hall, MAX_AMOUNT,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", post(quote))
        .route("/api/pricing/validate-offer", post(validate))
        .route("/api/pricing/selectable-foods", post(selectable_foods))
}

/// Full pricing for a hall, guest count, food selection and offer
async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let input = req.offer_input()?;
    let result = price_booking(&req.hall, &req.catalog(), &input)?;
    let pricing = booking_pricing(&result).ok();
    let currency = state.currency(req.currency.as_deref());

    tracing::info!(
        "Quote for hall {}: {} guests, grand total {}, submittable {}",
        req.hall.id,
        result.guest_count,
        result.grand_total,
        result.submittable
    );

    Ok(Json(QuoteResponse::new(&result, pricing, currency)))
}

/// Check an offer against the negotiation floor
async fn validate(
    State(state): State<AppState>,
    Json(req): Json<ValidateOfferRequest>,
) -> Result<Json<OfferValidationResponse>> {
    let mode = parse_offer_mode(&req.offer_mode)?;
    let guest_count = parse_guest_count(req.guest_count)?;
    ensure_amount("offer_value", req.offer_value, MAX_AMOUNT)?;
    ensure_amount("official_reference", req.official_reference, MAX_AMOUNT)?;

    let validation = validate_offer(req.offer_value, guest_count, req.official_reference, mode);
    let currency = state.currency(req.currency.as_deref());
    Ok(Json(OfferValidationResponse::new(&validation, currency)))
}

/// Catalog items not already included with the hall
async fn selectable_foods(
    State(state): State<AppState>,
    Json(req): Json<SelectableFoodsRequest>,
) -> Result<Json<SelectableFoodsResponse>> {
    validate_hall(&req.hall)?;
    let catalog = FoodCatalog::new(req.foods);
    validate_catalog(&catalog)?;

    let currency = state.currency(req.currency.as_deref());
    let foods = selectable_extra_foods(&req.hall, &catalog)
        .into_iter()
        .map(|food| FoodItemResponse::new(food, currency))
        .collect();

    Ok(Json(SelectableFoodsResponse {
        hall_id: req.hall.id,
        foods,
    }))
}
