use std::sync::Arc;

use async_trait::async_trait;
use cartoffer_core::{Offer, OfferRepository, RestaurantId, StorageError};
use redis::AsyncCommands;
use tracing::info;

/// Offer storage backed by one Redis list per restaurant.
///
/// `RPUSH` and `LRANGE` are single commands, so appends are atomic and reads
/// come back in insertion order.
#[derive(Clone)]
pub struct RedisOfferRepository {
    client: redis::Client,
}

impl RedisOfferRepository {
    pub fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self { client })
    }

    fn key(restaurant_id: RestaurantId) -> String {
        format!("offers:restaurant:{}", restaurant_id)
    }
}

fn backend(e: redis::RedisError) -> StorageError {
    StorageError::Backend(e.to_string())
}

#[async_trait]
impl OfferRepository for RedisOfferRepository {
    async fn append(&self, offer: Offer) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&offer)?;
        let mut conn = self.client.get_multiplexed_async_connection().await.map_err(backend)?;
        let len: i64 = conn.rpush(Self::key(offer.restaurant_id), payload).await.map_err(backend)?;
        info!("Offer {} stored for restaurant {} (position {})", offer.id, offer.restaurant_id, len);
        Ok(())
    }

    async fn offers_for(&self, restaurant_id: RestaurantId) -> Result<Vec<Arc<Offer>>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await.map_err(backend)?;
        let raw: Vec<String> = conn.lrange(Self::key(restaurant_id), 0, -1).await.map_err(backend)?;

        raw.iter()
            .map(|entry| serde_json::from_str::<Offer>(entry).map(Arc::new).map_err(StorageError::from))
            .collect()
    }
}
