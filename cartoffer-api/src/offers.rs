use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use cartoffer_core::RestaurantId;
use cartoffer_offer::{ApplyRequest, NewOffer};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OfferRequest {
    pub restaurant_id: RestaurantId,
    pub offer_type: String,
    pub offer_value: u64,
    #[serde(default)]
    pub customer_segment: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub response_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplyOfferRequest {
    pub cart_value: u64,
    pub user_id: u64,
    pub restaurant_id: RestaurantId,
}

#[derive(Debug, Serialize)]
pub struct ApplyOfferResponse {
    pub cart_value: u64,
}

#[derive(Debug, Serialize)]
pub struct OfferView {
    pub id: Uuid,
    pub restaurant_id: RestaurantId,
    pub offer_type: String,
    pub offer_value: u64,
    pub customer_segment: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/offer", post(add_offer))
        .route("/api/v1/offers/{restaurant_id}", get(list_offers))
        .route("/api/v1/cart/apply_offer", post(apply_offer))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/offer
/// Register an offer for a restaurant
pub async fn add_offer(
    State(state): State<AppState>,
    Json(req): Json<OfferRequest>,
) -> Result<Json<OfferResponse>, AppError> {
    let offer_type = req.offer_type.clone();
    let accepted = state
        .store
        .add(NewOffer::new(req.restaurant_id, req.offer_type, req.offer_value, req.customer_segment))
        .await?;

    if !accepted {
        return Err(AppError::ValidationError(format!("Unsupported offer type: {}", offer_type)));
    }

    Ok(Json(OfferResponse {
        response_msg: "success".to_string(),
    }))
}

/// GET /api/v1/offers/{restaurant_id}
/// Offers of a restaurant in registration order
pub async fn list_offers(
    State(state): State<AppState>,
    Path(restaurant_id): Path<RestaurantId>,
) -> Result<Json<Vec<OfferView>>, AppError> {
    let offers = state.store.offers_for(restaurant_id).await?;

    let views = offers
        .iter()
        .map(|offer| OfferView {
            id: offer.id,
            restaurant_id: offer.restaurant_id,
            offer_type: offer.offer_type.label().to_string(),
            offer_value: offer.discount_value,
            customer_segment: offer.segments.clone(),
            created_at: offer.created_at,
        })
        .collect();

    Ok(Json(views))
}

/// POST /api/v1/cart/apply_offer
/// Price a cart with the first offer matching the user's segment
pub async fn apply_offer(
    State(state): State<AppState>,
    Json(req): Json<ApplyOfferRequest>,
) -> Result<Json<ApplyOfferResponse>, AppError> {
    let result = state
        .engine
        .apply(ApplyRequest {
            cart_value: req.cart_value,
            user_id: req.user_id,
            restaurant_id: req.restaurant_id,
        })
        .await?;

    Ok(Json(ApplyOfferResponse {
        cart_value: result.cart_value,
    }))
}
