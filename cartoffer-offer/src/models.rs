use cartoffer_core::{RestaurantId, Segment, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An offer as submitted, before its type label is validated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOffer {
    pub restaurant_id: RestaurantId,
    pub offer_type: String,
    pub discount_value: u64,
    pub segments: Vec<String>,
}

impl NewOffer {
    pub fn new(
        restaurant_id: RestaurantId,
        offer_type: impl Into<String>,
        discount_value: u64,
        segments: Vec<String>,
    ) -> Self {
        Self {
            restaurant_id,
            offer_type: offer_type.into(),
            discount_value,
            segments,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyRequest {
    pub cart_value: u64,
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
}

/// Outcome of applying offers to a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyResult {
    pub cart_value: u64,
    /// Offer that produced the discount, if any
    pub applied_offer: Option<Uuid>,
    pub segment: Option<Segment>,
}

impl ApplyResult {
    pub fn unchanged(cart_value: u64, segment: Option<Segment>) -> Self {
        Self {
            cart_value,
            applied_offer: None,
            segment,
        }
    }
}
