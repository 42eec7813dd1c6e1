use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Offer, RestaurantId};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Offer backend error: {0}")]
    Backend(String),

    #[error("Offer serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Repository trait for offer data access.
///
/// Offers are append-only. `offers_for` returns a restaurant's offers in
/// the order they were appended, and never a half-written entry.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn append(&self, offer: Offer) -> Result<(), StorageError>;

    async fn offers_for(&self, restaurant_id: RestaurantId) -> Result<Vec<Arc<Offer>>, StorageError>;
}
