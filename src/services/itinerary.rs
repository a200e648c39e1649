use crate::models::TravelerProfile;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the itinerary generator.
///
/// Transport-level failures (`Unavailable`) are kept distinct from
/// application-level error payloads (`Upstream`) so callers can map them to
/// different responses.
#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("itinerary service unreachable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("itinerary service error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("invalid response from itinerary service: {0}")]
    InvalidResponse(String),
}

/// Client for the external AI itinerary generator.
///
/// The generator receives the traveler's persona and vibe and returns an
/// arbitrary structured itinerary. The payload is treated as an opaque blob;
/// this service passes it through without inspecting it. No retries are
/// performed here; retry policy belongs to the caller.
pub struct ItineraryClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ItineraryClient {
    pub fn new(base_url: String, api_key: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, api_key, client }
    }

    /// Generate an itinerary for a profile.
    ///
    /// The profile must carry persona answers; the caller checks that before
    /// invoking this.
    pub async fn generate(&self, profile: &TravelerProfile) -> Result<Value, ItineraryError> {
        let url = format!(
            "{}/v1/itineraries",
            self.base_url.trim_end_matches('/'),
        );

        let payload = serde_json::json!({
            "userId": profile.user_id,
            "persona": profile.persona,
            "vibe": profile.vibe,
        });

        tracing::debug!("Requesting itinerary for user: {}", profile.user_id);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The generator answered, but with an application-level error.
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read body".to_string());
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or(body);

            return Err(ItineraryError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| ItineraryError::InvalidResponse(e.to_string()))?;

        json.get("itinerary")
            .cloned()
            .ok_or_else(|| ItineraryError::InvalidResponse("missing itinerary field".into()))
    }
}
