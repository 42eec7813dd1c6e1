use std::sync::Arc;

use cartoffer_core::{ResolutionError, SegmentResolver, StorageError};
use tracing::{debug, info};

use crate::models::{ApplyRequest, ApplyResult};
use crate::pricing::apply_discount;
use crate::rules::{recognized_segment, select_offer};
use crate::store::OfferStore;

/// Computes the checkout value of a cart from the restaurant's offers and
/// the user's segment
pub struct OfferApplicationEngine {
    resolver: Arc<dyn SegmentResolver>,
    store: OfferStore,
}

impl OfferApplicationEngine {
    pub fn new(resolver: Arc<dyn SegmentResolver>, store: OfferStore) -> Self {
        Self { resolver, store }
    }

    pub fn store(&self) -> &OfferStore {
        &self.store
    }

    /// Apply the first matching offer to the cart.
    ///
    /// The segment is resolved exactly once. A resolution failure is
    /// returned as an error, never treated as "no segment". The store is
    /// only read, so dropping this future mid-flight leaves it untouched.
    pub async fn apply(&self, request: ApplyRequest) -> Result<ApplyResult, OfferError> {
        let label = self.resolver.resolve(request.user_id).await?;

        let Some(segment) = recognized_segment(label.as_deref()) else {
            debug!("User {} has no recognized segment ({:?})", request.user_id, label);
            return Ok(ApplyResult::unchanged(request.cart_value, None));
        };

        let offers = self.store.offers_for(request.restaurant_id).await?;

        let Some(offer) = select_offer(&offers, segment) else {
            debug!(
                "No offer for segment {} at restaurant {} ({} registered)",
                segment,
                request.restaurant_id,
                offers.len()
            );
            return Ok(ApplyResult::unchanged(request.cart_value, Some(segment)));
        };

        let cart_value = apply_discount(offer.offer_type, request.cart_value, offer.discount_value);
        info!(
            "Applied offer {} ({} {}) for user {} at restaurant {}: {} -> {}",
            offer.id,
            offer.offer_type,
            offer.discount_value,
            request.user_id,
            request.restaurant_id,
            request.cart_value,
            cart_value
        );

        Ok(ApplyResult {
            cart_value,
            applied_offer: Some(offer.id),
            segment: Some(segment),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OfferError {
    #[error("Segment resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Offer storage failed: {0}")]
    Storage(#[from] StorageError),
}
