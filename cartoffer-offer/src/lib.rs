pub mod models;
pub mod store;
pub mod rules;
pub mod pricing;
pub mod engine;

pub use models::{ApplyRequest, ApplyResult, NewOffer};
pub use store::OfferStore;
pub use engine::{OfferApplicationEngine, OfferError};
