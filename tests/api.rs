use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use hallbook_pricing::{app, config::Config, AppState};

fn test_app() -> Router {
    app(AppState::new(Config::default()))
}

fn hall() -> Value {
    json!({
        "id": "hall-1",
        "name": "Grand Hall",
        "capacity": 300,
        "base_price_per_plate": 500,
        "included_food_ids": ["dal"]
    })
}

fn foods() -> Value {
    json!([
        { "id": "dal", "name": "Dal", "category": "veg", "price": 20 },
        { "id": "paneer", "name": "Paneer", "category": "veg", "price": "50" },
        { "id": "kebab", "name": "Kebab", "category": "non-veg", "price": 30 }
    ])
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn quote_per_plate_offer() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/quote",
        Some(json!({
            "hall": hall(),
            "foods": foods(),
            "guest_count": 100,
            "offer_mode": "per_plate",
            "offer_value": 400
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["minimum_offer"]["amount"], "350");
    assert_eq!(body["minimum_offer"]["currency"], "INR");
    assert_eq!(body["offer_valid"], true);
    assert_eq!(body["negotiated"]["negotiated_total"]["amount"], "40000");
    assert_eq!(body["negotiated"]["final_per_plate"]["amount"], "450");
    assert_eq!(body["grand_total"]["amount"], "45000");
    assert_eq!(body["pricing"]["final_per_plate_price"], "450");
    assert_eq!(body["pricing"]["total_cost"], "45000");
}

#[tokio::test]
async fn quote_total_mode_with_extra_food() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/quote",
        Some(json!({
            "hall": hall(),
            "foods": foods(),
            "guest_count": 100,
            "offer_mode": "total",
            "offer_value": 38000,
            "selected_food_ids": ["paneer", "kebab", "dal"],
            "currency": "USD"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["official"]["hall_total"]["amount"], "50000");
    assert_eq!(body["official"]["extra_food_cost"]["amount"], "8000");
    assert_eq!(body["minimum_offer"]["amount"], "35000");
    assert_eq!(body["negotiated"]["offered_per_plate"]["amount"], "380");
    assert_eq!(body["grand_total"]["currency"], "USD");
}

#[tokio::test]
async fn quote_below_floor_has_no_payload() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/quote",
        Some(json!({
            "hall": hall(),
            "guest_count": 100,
            "offer_value": 300
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offer_valid"], false);
    assert_eq!(body["submittable"], false);
    assert!(body.get("pricing").is_none());
}

#[tokio::test]
async fn quote_zero_guests_is_all_zero() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/quote",
        Some(json!({
            "hall": hall(),
            "foods": foods(),
            "offer_mode": "total",
            "offer_value": 38000,
            "selected_food_ids": ["paneer"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["official"]["grand_total"]["amount"], "0");
    assert_eq!(body["negotiated"]["offered_per_plate"]["amount"], "0");
    assert_eq!(body["grand_total"]["amount"], "0");
}

#[tokio::test]
async fn quote_rejects_invalid_input() {
    let app = test_app();

    for (field, payload) in [
        ("guest_count", json!({ "hall": hall(), "guest_count": -5 })),
        ("guest_count", json!({ "hall": hall(), "guest_count": 10.5 })),
        ("offer_mode", json!({ "hall": hall(), "guest_count": 10, "offer_mode": "hourly" })),
        ("offer_value", json!({ "hall": hall(), "guest_count": 10, "offer_value": -1 })),
    ] {
        let (status, body) = send(&app, "POST", "/api/pricing/quote", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_type"], "invalid_input");
        assert_eq!(body["details"]["field"], field);
    }
}

#[tokio::test]
async fn validate_offer_boundary() {
    let app = test_app();
    let (_, body) = send(
        &app,
        "POST",
        "/api/pricing/validate-offer",
        Some(json!({ "offer_value": 350, "official_reference": 500, "offer_mode": "per_plate" })),
    )
    .await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["minimum"]["amount"], "350");

    let (_, body) = send(
        &app,
        "POST",
        "/api/pricing/validate-offer",
        Some(json!({ "offer_value": "349.99", "official_reference": 500 })),
    )
    .await;
    assert_eq!(body["valid"], false);
}

#[tokio::test]
async fn selectable_foods_exclude_included() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/selectable-foods",
        Some(json!({ "hall": hall(), "foods": foods() })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["foods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["kebab", "paneer"]);
}

#[tokio::test]
async fn draft_lifecycle() {
    let app = test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/drafts",
        Some(json!({ "hall": hall(), "foods": foods() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["quote"]["grand_total"]["amount"], "0");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/drafts/{}", id),
        Some(json!({ "guest_count": 100, "offer_value": 400 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quote"]["negotiated"]["final_per_plate"]["amount"], "450");

    let (_, body) = send(
        &app,
        "POST",
        &format!("/api/drafts/{}/foods/paneer/toggle", id),
        None,
    )
    .await;
    assert_eq!(body["selected"], true);
    assert_eq!(body["draft"]["quote"]["official"]["extra_food_cost"]["amount"], "5000");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/drafts/{}/foods/dal/toggle", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "POST", &format!("/api/drafts/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pricing"]["total_cost"], "50000");
    assert_eq!(body["selected_food_ids"], json!(["paneer"]));

    let (status, _) = send(&app, "GET", &format!("/api/drafts/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn draft_mode_switch_clears_offer() {
    let app = test_app();
    let (_, body) = send(
        &app,
        "POST",
        "/api/drafts",
        Some(json!({ "hall": hall(), "guest_count": 100, "offer_value": 400 })),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["offer_value"], "400");

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/drafts/{}/mode", id),
        Some(json!({ "offer_mode": "total" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offer_mode"], "total");
    assert_eq!(body["offer_value"], Value::Null);
    assert_eq!(body["quote"]["submittable"], false);

    let (status, body) = send(&app, "POST", &format!("/api/drafts/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error_type"], "offer_not_submittable");

    let (status, _) = send(&app, "DELETE", &format!("/api/drafts/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_draft_is_not_found() {
    let app = test_app();
    let (status, body) = send(
        &app,
        "GET",
        "/api/drafts/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn quote_rejects_amounts_beyond_range() {
    let app = test_app();

    let mut huge_hall = hall();
    huge_hall["base_price_per_plate"] = json!("79228162514264337593543950335");
    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/quote",
        Some(json!({ "hall": huge_hall, "guest_count": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "hall.base_price_per_plate");

    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/quote",
        Some(json!({
            "hall": hall(),
            "foods": [{ "id": "gold", "name": "Gold", "price": "79228162514264337593543950335" }],
            "guest_count": 2,
            "selected_food_ids": ["gold"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "food.price");

    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/quote",
        Some(json!({ "hall": hall(), "guest_count": 4000000000u64 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "guest_count");

    let (status, body) = send(
        &app,
        "POST",
        "/api/pricing/validate-offer",
        Some(json!({
            "offer_value": 1,
            "official_reference": "79228162514264337593543950335"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "official_reference");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_draft_edits_are_all_kept() {
    let app = test_app();
    let menu: Vec<Value> = (0..8)
        .map(|i| json!({ "id": format!("dish-{}", i), "name": format!("Dish {}", i), "price": 10 }))
        .collect();

    let (_, body) = send(
        &app,
        "POST",
        "/api/drafts",
        Some(json!({ "hall": hall(), "foods": menu, "guest_count": 10 })),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_string();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..8 {
        let app = app.clone();
        let uri = format!("/api/drafts/{}/foods/dish-{}/toggle", id, i);
        tasks.spawn(async move { send(&app, "POST", &uri, None).await.0 });
    }
    while let Some(status) = tasks.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    let (_, body) = send(&app, "GET", &format!("/api/drafts/{}", id), None).await;
    assert_eq!(body["selected_food_ids"].as_array().unwrap().len(), 8);
    assert_eq!(body["quote"]["official"]["extra_food_cost"]["amount"], "800");
}
