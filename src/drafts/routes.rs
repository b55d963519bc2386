//! Booking draft route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cache::SharedDraft;
use crate::error::{AppError, Result};
use crate::pricing::models::{FoodItem, Hall, OfferMode};
use crate::pricing::requests::default_offer_mode;
use crate::pricing::responses::QuoteResponse;
use crate::pricing::services::{booking_pricing, parse_guest_count, parse_offer_mode};
use crate::AppState;

use super::draft::{BookingDraft, BookingSubmission};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/drafts", post(create))
        .route("/api/drafts/:id", get(show).patch(update).delete(discard))
        .route("/api/drafts/:id/mode", put(set_mode))
        .route("/api/drafts/:id/foods/:food_id/toggle", post(toggle_food))
        .route("/api/drafts/:id/submit", post(submit))
}

/// Request to open a draft
#[derive(Debug, Deserialize)]
pub struct CreateDraftRequest {
    pub hall: Hall,
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub guest_count: Option<Decimal>,
    #[serde(default = "default_offer_mode")]
    pub offer_mode: String,
    #[serde(default)]
    pub offer_value: Option<Decimal>,
    #[serde(default)]
    pub selected_food_ids: Vec<String>,
}

/// Partial update of a draft
#[derive(Debug, Deserialize)]
pub struct UpdateDraftRequest {
    #[serde(default)]
    pub hall: Option<Hall>,
    #[serde(default)]
    pub foods: Option<Vec<FoodItem>>,
    #[serde(default)]
    pub guest_count: Option<Decimal>,
    #[serde(default)]
    pub offer_value: Option<Decimal>,
    /// Remove the entered offer
    #[serde(default)]
    pub clear_offer: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetModeRequest {
    pub offer_mode: String,
}

/// Draft with its current pricing
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub id: Uuid,
    pub hall_id: String,
    pub guest_count: u32,
    pub offer_mode: OfferMode,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub offer_value: Option<Decimal>,
    pub selected_food_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub quote: QuoteResponse,
}

impl DraftResponse {
    fn new(draft: &BookingDraft) -> Result<Self> {
        let result = draft.pricing()?;
        let pricing = booking_pricing(&result).ok();
        Ok(Self {
            id: draft.id,
            hall_id: draft.hall.id.clone(),
            guest_count: draft.input.guest_count,
            offer_mode: draft.input.offer_mode,
            offer_value: draft.input.offer_value,
            selected_food_ids: draft.input.selected_food_ids.clone(),
            created_at: draft.created_at,
            updated_at: draft.updated_at,
            quote: QuoteResponse::new(&result, pricing, &draft.currency),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleFoodResponse {
    pub food_id: String,
    pub selected: bool,
    pub draft: DraftResponse,
}

async fn load(state: &AppState, id: Uuid) -> Result<SharedDraft> {
    state.cache.get_draft(id).await.ok_or(AppError::NotFound)
}

/// Open a new draft
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateDraftRequest>,
) -> Result<(StatusCode, Json<DraftResponse>)> {
    let currency = state.currency(req.currency.as_deref()).to_string();
    let mut draft = BookingDraft::new(req.hall, req.foods, &currency)?;

    draft.set_guest_count(parse_guest_count(req.guest_count)?);
    draft.set_offer_mode(parse_offer_mode(&req.offer_mode)?);
    draft.set_offer_value(req.offer_value)?;
    for food_id in &req.selected_food_ids {
        if !draft.input.selected_food_ids.contains(food_id) {
            draft.toggle_food(food_id)?;
        }
    }

    let response = DraftResponse::new(&draft)?;
    state.cache.put_draft(draft).await;
    tracing::info!("Draft {} opened for hall {}", response.id, response.hall_id);

    Ok((StatusCode::CREATED, Json(response)))
}

async fn show(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<DraftResponse>> {
    let shared = load(&state, id).await?;
    let draft = shared.lock().await;
    Ok(Json(DraftResponse::new(&draft)?))
}

/// Apply hall, menu, guest count and offer edits.
///
/// Edits are made on a copy under the draft's lock and stored only if every
/// step succeeds.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDraftRequest>,
) -> Result<Json<DraftResponse>> {
    let shared = load(&state, id).await?;
    let mut current = shared.lock().await;
    let mut draft = current.clone();

    if let Some(foods) = req.foods {
        draft.replace_catalog(foods)?;
    }
    if let Some(hall) = req.hall {
        draft.select_hall(hall)?;
    }
    if req.guest_count.is_some() {
        draft.set_guest_count(parse_guest_count(req.guest_count)?);
    }
    if req.clear_offer {
        draft.set_offer_value(None)?;
    } else if req.offer_value.is_some() {
        draft.set_offer_value(req.offer_value)?;
    }

    let response = DraftResponse::new(&draft)?;
    *current = draft;
    Ok(Json(response))
}

async fn set_mode(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetModeRequest>,
) -> Result<Json<DraftResponse>> {
    let mode = parse_offer_mode(&req.offer_mode)?;
    let shared = load(&state, id).await?;
    let mut draft = shared.lock().await;
    draft.set_offer_mode(mode);

    Ok(Json(DraftResponse::new(&draft)?))
}

async fn toggle_food(
    State(state): State<AppState>,
    Path((id, food_id)): Path<(Uuid, String)>,
) -> Result<Json<ToggleFoodResponse>> {
    let shared = load(&state, id).await?;
    let mut draft = shared.lock().await;
    let selected = draft.toggle_food(&food_id)?;

    Ok(Json(ToggleFoodResponse {
        food_id,
        selected,
        draft: DraftResponse::new(&draft)?,
    }))
}

/// Produce the booking payload and discard the draft
async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingSubmission>> {
    let shared = load(&state, id).await?;
    let draft = shared.lock().await;
    let submission = draft.submission()?;
    state.cache.remove_draft(id).await;

    tracing::info!(
        "Draft {} submitted: {} guests at {} per plate, total {}",
        id,
        submission.guest_count,
        submission.pricing.final_per_plate_price,
        submission.pricing.total_cost
    );
    Ok(Json(submission))
}

async fn discard(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    state
        .cache
        .remove_draft(id)
        .await
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}
