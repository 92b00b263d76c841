//! Result Resolver
//!
//! Fallback policy: use the gateway's ranking when it is available and
//! non-empty, otherwise the heuristic ranking. Always yields 1..=3 results.

use crate::features::FeatureVector;
use crate::gateway::{GatewayError, PredictionGateway};
use crate::heuristic::rank_crops;
use crate::prediction::ResultSet;
use serde::Serialize;

/// Where a final ranking came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultSource {
    /// Remote scoring service
    Remote,
    /// Local rule-based fallback
    Heuristic,
}

/// Final ranking plus its origin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub results: ResultSet,
    pub source: ResultSource,
}

impl Resolution {
    pub fn heuristic(features: &FeatureVector) -> Self {
        Self {
            results: rank_crops(features),
            source: ResultSource::Heuristic,
        }
    }
}

/// Apply the fallback policy to a gateway outcome
pub fn choose(remote: Result<ResultSet, GatewayError>, features: &FeatureVector) -> Resolution {
    match remote {
        Ok(results) if !results.is_empty() => Resolution {
            results,
            source: ResultSource::Remote,
        },
        Ok(_) => {
            tracing::warn!("Prediction service returned no results; using heuristic ranking");
            Resolution::heuristic(features)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Prediction service unavailable; using heuristic ranking");
            Resolution::heuristic(features)
        }
    }
}

/// Combines a PredictionGateway with the heuristic fallback
pub struct ResultResolver<G> {
    gateway: G,
}

impl<G: PredictionGateway> ResultResolver<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Ask the gateway, falling back to the heuristic ranker. Never fails.
    pub async fn resolve(&self, features: &FeatureVector) -> Resolution {
        let remote = self.gateway.predict(features).await;
        let resolution = choose(remote, features);
        tracing::info!(
            source = ?resolution.source,
            top = resolution.results.first().map(|p| p.name.as_str()).unwrap_or_default(),
            "Resolved crop ranking"
        );
        resolution
    }
}
