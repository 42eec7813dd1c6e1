use std::time::Duration;

use async_trait::async_trait;
use cartoffer_core::{ResolutionError, SegmentResolver, UserId};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::app_config::SegmentServiceConfig;

#[derive(Debug, Deserialize)]
struct SegmentResponse {
    #[serde(default)]
    segment: Option<String>,
}

/// Resolves user segments over HTTP.
///
/// `GET {base_url}/api/v1/user_segment?user_id={id}` answering
/// `{"segment": "p1"}`; a null or missing field means no segment.
#[derive(Debug, Clone)]
pub struct HttpSegmentResolver {
    client: Client,
    base_url: String,
}

impl HttpSegmentResolver {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &SegmentServiceConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.base_url.clone(), Duration::from_millis(config.timeout_ms))
    }

    fn url(&self, user_id: UserId) -> String {
        format!(
            "{}/api/v1/user_segment?user_id={}",
            self.base_url.trim_end_matches('/'),
            user_id
        )
    }
}

fn classify(e: reqwest::Error) -> ResolutionError {
    if e.is_timeout() {
        ResolutionError::Timeout
    } else if e.is_decode() {
        ResolutionError::InvalidResponse(e.to_string())
    } else {
        ResolutionError::Transport(e.to_string())
    }
}

#[async_trait]
impl SegmentResolver for HttpSegmentResolver {
    async fn resolve(&self, user_id: UserId) -> Result<Option<String>, ResolutionError> {
        let response = self.client.get(self.url(user_id)).send().await.map_err(|e| {
            warn!("Segment lookup for user {} failed: {}", user_id, e);
            classify(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Segment service returned {} for user {}", status, user_id);
            return Err(ResolutionError::UnexpectedStatus(status.as_u16()));
        }

        let body: SegmentResponse = response.json().await.map_err(classify)?;
        debug!("User {} resolved to segment {:?}", user_id, body.segment);
        Ok(body.segment)
    }
}
