//! Ranked crop predictions
//!
//! A ResultSet is the top of a ranking: at most three predictions, sorted by
//! probability descending. Sorting is stable, so equal probabilities keep
//! their input order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Maximum number of predictions kept in a ResultSet
pub const MAX_RESULTS: usize = 3;

/// A single crop with its suitability probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPrediction {
    pub name: String,
    pub probability: f64,
}

impl CropPrediction {
    pub fn new(name: impl Into<String>, probability: f64) -> Self {
        Self {
            name: name.into(),
            probability,
        }
    }
}

/// Top-ranked predictions (0..=3 entries, probability descending)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultSet(SmallVec<[CropPrediction; MAX_RESULTS]>);

impl ResultSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rank predictions: stable sort by probability descending, keep the top 3
    pub fn ranked<I>(predictions: I) -> Self
    where
        I: IntoIterator<Item = CropPrediction>,
    {
        let mut all: Vec<CropPrediction> = predictions.into_iter().collect();
        all.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        all.truncate(MAX_RESULTS);
        Self(all.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&CropPrediction> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CropPrediction> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CropPrediction] {
        &self.0
    }

    /// Crop names in rank order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|p| p.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a CropPrediction;
    type IntoIter = std::slice::Iter<'a, CropPrediction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
