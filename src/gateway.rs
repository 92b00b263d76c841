//! Prediction Gateway
//!
//! Boundary to the remote crop-scoring service. The service receives a
//! FeatureVector as a JSON POST body and answers with
//! `{"predictions": [{"crop"|"name": .., "probability"|"confidence": ..}, ..]}`.
//!
//! Any failure (transport, status, body shape, nothing usable) is returned as
//! a `GatewayError`: the service being unavailable is an expected outcome, and
//! the resolver falls back to the heuristic ranker.

use crate::features::FeatureVector;
use crate::prediction::{CropPrediction, ResultSet};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Why the scoring service could not supply a ranking
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("prediction request failed: {0}")]
    Transport(String),

    #[error("prediction service returned HTTP {0}")]
    Status(u16),

    #[error("prediction response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prediction response has no `predictions` array")]
    MissingPredictions,

    #[error("prediction response contained no usable predictions")]
    NoUsablePredictions,

    #[error("prediction service is disabled")]
    Offline,
}

/// Source of remote crop rankings
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Top-ranked crops for the features, or the reason none are available
    async fn predict(&self, features: &FeatureVector) -> Result<ResultSet, GatewayError>;
}

#[async_trait]
impl<G: PredictionGateway + ?Sized> PredictionGateway for std::sync::Arc<G> {
    async fn predict(&self, features: &FeatureVector) -> Result<ResultSet, GatewayError> {
        (**self).predict(features).await
    }
}

/// Gateway for deployments without a scoring service; always unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGateway;

#[async_trait]
impl PredictionGateway for OfflineGateway {
    async fn predict(&self, _features: &FeatureVector) -> Result<ResultSet, GatewayError> {
        Err(GatewayError::Offline)
    }
}

// ============================================================================
// Response normalization
// ============================================================================

const NAME_FIELDS: [&str; 2] = ["crop", "name"];
const SCORE_FIELDS: [&str; 2] = ["probability", "confidence"];

/// Normalize one `predictions` element; None when no crop name resolves
fn normalize_entry(entry: &Value) -> Option<CropPrediction> {
    let name = NAME_FIELDS
        .iter()
        .find_map(|field| entry.get(field).and_then(Value::as_str).filter(|s| !s.is_empty()))?;

    let probability = SCORE_FIELDS
        .iter()
        .find_map(|field| entry.get(field).and_then(Value::as_f64))
        .unwrap_or(0.0);

    Some(CropPrediction::new(name, probability))
}

/// Turn a decoded response body into a ResultSet (top 3, probability descending)
pub fn normalize_response(body: &Value) -> Result<ResultSet, GatewayError> {
    let entries = body
        .get("predictions")
        .and_then(Value::as_array)
        .ok_or(GatewayError::MissingPredictions)?;

    let results = ResultSet::ranked(entries.iter().filter_map(normalize_entry));
    if results.is_empty() {
        return Err(GatewayError::NoUsablePredictions);
    }

    Ok(results)
}

// ============================================================================
// HTTP gateway
// ============================================================================

#[cfg(feature = "http")]
pub use http::HttpPredictionGateway;

#[cfg(feature = "http")]
mod http {
    use super::{normalize_response, GatewayError, PredictionGateway};
    use crate::config::AdvisorConfig;
    use crate::features::FeatureVector;
    use crate::prediction::ResultSet;
    use anyhow::{Context, Result};
    use async_trait::async_trait;
    use reqwest::Client;
    use serde_json::Value;

    /// JSON-over-HTTP client for the scoring service
    #[derive(Debug, Clone)]
    pub struct HttpPredictionGateway {
        client: Client,
        endpoint: String,
    }

    impl HttpPredictionGateway {
        pub fn new(endpoint: impl Into<String>) -> Self {
            Self {
                client: Client::new(),
                endpoint: endpoint.into(),
            }
        }

        /// Client with the configured timeout and user agent
        pub fn from_config(config: &AdvisorConfig) -> Result<Self> {
            let client = Client::builder()
                .timeout(config.timeout())
                .user_agent(config.user_agent.clone())
                .build()
                .context("Failed to build prediction HTTP client")?;

            Ok(Self {
                client,
                endpoint: config.prediction_url.clone(),
            })
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    #[async_trait]
    impl PredictionGateway for HttpPredictionGateway {
        async fn predict(&self, features: &FeatureVector) -> Result<ResultSet, GatewayError> {
            tracing::debug!(endpoint = %self.endpoint, ?features, "Requesting remote prediction");

            let response = self
                .client
                .post(&self.endpoint)
                .json(features)
                .send()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(GatewayError::Status(status.as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;
            let body: Value = serde_json::from_slice(&bytes)?;

            let results = normalize_response(&body)?;
            tracing::debug!(count = results.len(), "Remote prediction received");
            Ok(results)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_accepts_alternate_fields() {
        let body = json!({
            "predictions": [
                { "name": "Maize", "confidence": 0.2 },
                { "crop": "Rice", "probability": 0.7 },
                { "crop": "Cotton", "confidence": 0.1 },
            ]
        });
        let results = normalize_response(&body).unwrap();
        assert_eq!(results.names(), ["Rice", "Maize", "Cotton"]);
        assert_eq!(results.as_slice()[1].probability, 0.2);
    }

    #[test]
    fn test_normalize_prefers_first_numeric_score() {
        let body = json!({
            "predictions": [
                { "crop": "Wheat", "probability": "high", "confidence": 0.4 },
                { "crop": "", "name": "Pulses", "probability": 0.3, "confidence": 0.9 },
                { "crop": "Rice" },
            ]
        });
        let results = normalize_response(&body).unwrap();
        assert_eq!(results.names(), ["Wheat", "Pulses", "Rice"]);
        assert_eq!(results.as_slice()[0].probability, 0.4);
        assert_eq!(results.as_slice()[1].probability, 0.3);
        assert_eq!(results.as_slice()[2].probability, 0.0);
    }

    #[test]
    fn test_normalize_drops_nameless_and_truncates() {
        let body = json!({
            "predictions": [
                { "probability": 0.99 },
                { "crop": 12, "probability": 0.9 },
                { "crop": "A", "probability": 0.1 },
                { "crop": "B", "probability": 0.4 },
                { "crop": "C", "probability": 0.3 },
                { "crop": "D", "probability": 0.2 },
            ]
        });
        let results = normalize_response(&body).unwrap();
        assert_eq!(results.names(), ["B", "C", "D"]);
    }

    #[test]
    fn test_normalize_rejects_unusable_shapes() {
        assert!(matches!(
            normalize_response(&json!({ "predictions": [] })),
            Err(GatewayError::NoUsablePredictions)
        ));
        assert!(matches!(
            normalize_response(&json!({ "predictions": [{ "probability": 1.0 }] })),
            Err(GatewayError::NoUsablePredictions)
        ));
        assert!(matches!(
            normalize_response(&json!({ "predictions": "Rice" })),
            Err(GatewayError::MissingPredictions)
        ));
        assert!(matches!(
            normalize_response(&json!([{ "crop": "Rice" }])),
            Err(GatewayError::MissingPredictions)
        ));
    }

    #[tokio::test]
    async fn test_offline_gateway_is_unavailable() {
        let features = crate::features::compute_features(&Default::default());
        assert!(matches!(
            OfflineGateway.predict(&features).await,
            Err(GatewayError::Offline)
        ));
    }
}
