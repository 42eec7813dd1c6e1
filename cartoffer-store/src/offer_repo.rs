use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use cartoffer_core::{Offer, OfferRepository, RestaurantId, StorageError};
use tokio::sync::RwLock;

/// Process-local offer storage keyed by restaurant.
///
/// Offers are published as `Arc<Offer>` under the write lock, so a reader
/// sees either the whole offer or none of it.
#[derive(Debug, Default)]
pub struct InMemoryOfferRepository {
    offers: RwLock<HashMap<RestaurantId, Vec<Arc<Offer>>>>,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn append(&self, offer: Offer) -> Result<(), StorageError> {
        let offer = Arc::new(offer);
        let mut offers = self.offers.write().await;
        offers.entry(offer.restaurant_id).or_default().push(offer);
        Ok(())
    }

    async fn offers_for(&self, restaurant_id: RestaurantId) -> Result<Vec<Arc<Offer>>, StorageError> {
        let offers = self.offers.read().await;
        Ok(offers.get(&restaurant_id).cloned().unwrap_or_default())
    }
}
