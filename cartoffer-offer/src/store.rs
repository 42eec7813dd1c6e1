use std::sync::Arc;

use cartoffer_core::{Offer, OfferRepository, OfferType, RestaurantId};
use tracing::{debug, info, warn};

use crate::engine::OfferError;
use crate::models::NewOffer;

/// Validating front of the offer repository.
///
/// Injected rather than global, so independent stores can coexist.
#[derive(Clone)]
pub struct OfferStore {
    repo: Arc<dyn OfferRepository>,
}

impl OfferStore {
    pub fn new(repo: Arc<dyn OfferRepository>) -> Self {
        Self { repo }
    }

    /// Register an offer. Returns `Ok(false)` when its type label is not
    /// recognized; such offers are never stored.
    pub async fn add(&self, new_offer: NewOffer) -> Result<bool, OfferError> {
        let offer_type = match new_offer.offer_type.parse::<OfferType>() {
            Ok(offer_type) => offer_type,
            Err(e) => {
                warn!("Rejected offer for restaurant {}: {}", new_offer.restaurant_id, e);
                return Ok(false);
            }
        };

        let offer = Offer::new(
            new_offer.restaurant_id,
            offer_type,
            new_offer.discount_value,
            new_offer.segments,
        );

        if !offer.is_matchable() {
            debug!(
                "Offer {} targets no recognized segment ({:?}) and will never apply",
                offer.id, offer.segments
            );
        }

        let (id, restaurant_id) = (offer.id, offer.restaurant_id);
        self.repo.append(offer).await?;
        info!("Offer {} ({} {}) added for restaurant {}", id, offer_type, new_offer.discount_value, restaurant_id);
        Ok(true)
    }

    /// Offers of a restaurant in the order they were added
    pub async fn offers_for(&self, restaurant_id: RestaurantId) -> Result<Vec<Arc<Offer>>, OfferError> {
        Ok(self.repo.offers_for(restaurant_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartoffer_store::InMemoryOfferRepository;

    fn store() -> OfferStore {
        OfferStore::new(Arc::new(InMemoryOfferRepository::new()))
    }

    #[tokio::test]
    async fn test_add_accepts_known_types() {
        let store = store();
        assert!(store.add(NewOffer::new(1, "FLATX", 10, vec!["p1".into()])).await.unwrap());
        assert!(store.add(NewOffer::new(1, "FLATX%", 15, vec!["p2".into()])).await.unwrap());

        let offers = store.offers_for(1).await.unwrap();
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].offer_type, OfferType::FlatAmount);
        assert_eq!(offers[1].offer_type, OfferType::FlatPercent);
    }

    #[tokio::test]
    async fn test_add_rejects_unknown_type() {
        let store = store();
        assert!(!store.add(NewOffer::new(1, "%", 10, vec!["p1".into()])).await.unwrap());
        assert!(!store.add(NewOffer::new(1, "", 10, vec!["p1".into()])).await.unwrap());
        assert!(store.offers_for(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unrecognized_segments_are_stored() {
        let store = store();
        assert!(store.add(NewOffer::new(1, "FLATX", 10, vec!["p4".into()])).await.unwrap());

        let offers = store.offers_for(1).await.unwrap();
        assert_eq!(offers[0].segments, vec!["p4".to_string()]);
    }

    #[tokio::test]
    async fn test_stores_are_independent() {
        let a = store();
        let b = store();
        a.add(NewOffer::new(1, "FLATX", 10, vec!["p1".into()])).await.unwrap();

        assert_eq!(a.offers_for(1).await.unwrap().len(), 1);
        assert!(b.offers_for(1).await.unwrap().is_empty());
    }
}
