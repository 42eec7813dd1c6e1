pub mod models;
pub mod repository;
pub mod segment;

pub use models::{Offer, OfferType, RestaurantId, Segment, UserId};
pub use repository::{OfferRepository, StorageError};
pub use segment::{ResolutionError, SegmentResolver, StaticSegmentResolver};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid offer type: {0}")]
    InvalidOfferType(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
