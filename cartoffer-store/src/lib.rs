pub mod app_config;
pub mod offer_repo;
pub mod redis_repo;
pub mod segment_client;

pub use offer_repo::InMemoryOfferRepository;
pub use redis_repo::RedisOfferRepository;
pub use segment_client::HttpSegmentResolver;
