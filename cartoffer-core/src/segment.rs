use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::models::UserId;

/// Failure to learn a user's segment. Distinct from the user having none.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("Segment service unreachable: {0}")]
    Transport(String),

    #[error("Segment service timed out")]
    Timeout,

    #[error("Segment service answered with status {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid segment response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait SegmentResolver: Send + Sync {
    /// Look up the raw segment label for a user. `Ok(None)` means the
    /// service knows of no segment; labels are returned unfiltered.
    async fn resolve(&self, user_id: UserId) -> Result<Option<String>, ResolutionError>;
}

/// Resolver answering from a fixed table. Unknown users have no segment.
#[derive(Debug, Default)]
pub struct StaticSegmentResolver {
    answers: HashMap<UserId, Result<Option<String>, ResolutionError>>,
    calls: AtomicUsize,
}

impl StaticSegmentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segment(mut self, user_id: UserId, label: impl Into<String>) -> Self {
        self.answers.insert(user_id, Ok(Some(label.into())));
        self
    }

    pub fn without_segment(mut self, user_id: UserId) -> Self {
        self.answers.insert(user_id, Ok(None));
        self
    }

    pub fn failing(mut self, user_id: UserId, error: ResolutionError) -> Self {
        self.answers.insert(user_id, Err(error));
        self
    }

    /// Number of `resolve` calls served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SegmentResolver for StaticSegmentResolver {
    async fn resolve(&self, user_id: UserId) -> Result<Option<String>, ResolutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Resolving segment for user {} from static table", user_id);

        self.answers.get(&user_id).cloned().unwrap_or(Ok(None))
    }
}
