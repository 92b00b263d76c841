//! Crop Advisor
//!
//! Decision pipeline behind a step-by-step crop recommendation wizard:
//! questionnaire answers become a numeric feature vector, a remote scoring
//! service ranks crops for it, and a rule-based ranker takes over whenever
//! that service is unavailable, so a top-3 recommendation is always produced.
//!
//! Modules:
//! - `catalog/`: Questions, options and crop metadata (bilingual)
//! - `features`: AnswerSet → FeatureVector
//! - `heuristic`: Offline crop ranking
//! - `gateway`: Remote scoring service client
//! - `resolver`: Remote-or-heuristic fallback policy
//! - `wizard`: Session state machine
//! - `view_models`: Renderer snapshots

pub mod catalog;
pub mod config;
pub mod features;
pub mod gateway;
pub mod heuristic;
pub mod logging;
pub mod prediction;
pub mod resolver;
pub mod view_models;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{default_catalog, Crop, Language, QuestionCatalog, QuestionId};
pub use config::AdvisorConfig;
pub use features::{compute_features, AnswerSet, FeatureVector};
pub use gateway::{normalize_response, GatewayError, OfflineGateway, PredictionGateway};
pub use heuristic::rank_crops;
pub use prediction::{CropPrediction, ResultSet};
pub use resolver::{Resolution, ResultResolver, ResultSource};
pub use view_models::WizardView;
pub use wizard::{Phase, StepOutcome, Submission, WizardController, WizardState};

#[cfg(feature = "http")]
pub use gateway::HttpPredictionGateway;
