//! # Availability Text Generation
//!
//! The formatting service turns a list of selected slots into shareable text.
//! [`TextGenerator`] is the seam the application talks to; [`AvailabilityClient`]
//! is the HTTP implementation.
//!
//! ## Wire contract
//!
//! ```text
//! POST {base_url}/availability/
//! X-API-Key: <key>
//! Content-Type: application/json
//!
//! {"selected_slots": [...], "user_timezone": "...", "recipient_timezone": null,
//!  "output_format": "...", "slot_granularity_minutes": 30}
//! ```
//!
//! Any non-2xx status is a failure regardless of its body.

use std::time::Duration;

use async_trait::async_trait;
use eyre::WrapErr;
use timetext_core::{
    errors::{TextError, TextResult},
    models::availability::{AvailabilityRequest, AvailabilityResponse},
};
use tracing::{debug, warn};

use crate::config::ApiConfig;

/// Header carrying the static client key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Produces rendered availability text for a request
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &AvailabilityRequest) -> TextResult<String>;
}

/// HTTP client for the availability formatting service
#[derive(Debug, Clone)]
pub struct AvailabilityClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl AvailabilityClient {
    /// Builds a client for the given service configuration
    ///
    /// # Errors
    ///
    /// * `TextError::Transport` - The underlying HTTP client could not be built
    pub fn new(config: ApiConfig) -> TextResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder.build().wrap_err("Failed to build HTTP client")?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for AvailabilityClient {
    async fn generate(&self, request: &AvailabilityRequest) -> TextResult<String> {
        let url = self.config.endpoint_url();
        debug!(
            "Requesting availability text for {} slots from {}",
            request.selected_slots.len(),
            url
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(request)
            .send()
            .await
            .wrap_err("Failed to reach the formatting service")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Formatting service returned {}: {}", status, body);
            return Err(TextError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AvailabilityResponse = response
            .json()
            .await
            .wrap_err("Failed to decode formatting service response")?;

        Ok(parsed.text_output)
    }
}
