use std::sync::Arc;

use cartoffer_core::{OfferRepository, SegmentResolver};
use cartoffer_offer::{OfferApplicationEngine, OfferStore};

#[derive(Clone)]
pub struct AppState {
    pub store: OfferStore,
    pub engine: Arc<OfferApplicationEngine>,
}

impl AppState {
    pub fn new(repo: Arc<dyn OfferRepository>, resolver: Arc<dyn SegmentResolver>) -> Self {
        let store = OfferStore::new(repo);
        let engine = Arc::new(OfferApplicationEngine::new(resolver, store.clone()));
        Self { store, engine }
    }
}
