//! Heuristic Crop Ranker
//!
//! Offline, rule-based fallback used whenever the remote scoring service is
//! unavailable. Each crop accumulates fixed weights for every climate band its
//! FeatureVector falls into; raw scores are normalized into a probability
//! distribution over the six crops and the top three are returned.
//!
//! Weights are whole tenths so equal sums compare equal. All band bounds are
//! inclusive. Ties keep `Crop::all()` order.

use crate::catalog::Crop;
use crate::features::FeatureVector;
use crate::prediction::{CropPrediction, ResultSet};

/// Feature axis a band is evaluated on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Temperature,
    Humidity,
    Rainfall,
    Nitrogen,
}

impl Axis {
    fn read(&self, features: &FeatureVector) -> f64 {
        match self {
            Axis::Temperature => features.temperature,
            Axis::Humidity => features.humidity,
            Axis::Rainfall => features.rainfall,
            Axis::Nitrogen => features.n,
        }
    }
}

/// Adds `weight` tenths when `lower <= axis value <= upper`
#[derive(Debug, Clone, Copy)]
pub struct ScoreBand {
    pub axis: Axis,
    pub lower: f64,
    pub upper: f64,
    pub weight: u32,
}

impl ScoreBand {
    pub fn holds(&self, features: &FeatureVector) -> bool {
        let value = self.axis.read(features);
        self.lower <= value && value <= self.upper
    }
}

const fn band(axis: Axis, lower: f64, upper: f64, weight: u32) -> ScoreBand {
    ScoreBand { axis, lower, upper, weight }
}

const OPEN: f64 = f64::INFINITY;

// ============================================================================
// Crop score tables
// ============================================================================

static RICE_BANDS: &[ScoreBand] = &[
    band(Axis::Temperature, 24.0, 34.0, 3),
    band(Axis::Humidity, 75.0, OPEN, 3),
    band(Axis::Rainfall, 1000.0, OPEN, 3),
];

static WHEAT_BANDS: &[ScoreBand] = &[
    band(Axis::Temperature, 15.0, 24.0, 4),
    band(Axis::Humidity, 40.0, 65.0, 2),
    band(Axis::Rainfall, 500.0, 800.0, 2),
];

static MAIZE_BANDS: &[ScoreBand] = &[
    band(Axis::Temperature, 20.0, 30.0, 4),
    band(Axis::Rainfall, 600.0, 900.0, 2),
];

static COTTON_BANDS: &[ScoreBand] = &[
    band(Axis::Temperature, 25.0, 35.0, 4),
    band(Axis::Rainfall, 600.0, 1100.0, 2),
];

static SUGARCANE_BANDS: &[ScoreBand] = &[
    band(Axis::Temperature, 22.0, 32.0, 3),
    band(Axis::Rainfall, 1000.0, OPEN, 3),
    band(Axis::Nitrogen, 60.0, OPEN, 2),
];

static PULSES_BANDS: &[ScoreBand] = &[
    band(Axis::Temperature, 20.0, 30.0, 3),
    band(Axis::Nitrogen, -OPEN, 40.0, 3),
    band(Axis::Rainfall, 400.0, 800.0, 2),
];

/// Scoring bands for a crop
pub fn score_bands(crop: Crop) -> &'static [ScoreBand] {
    match crop {
        Crop::Rice => RICE_BANDS,
        Crop::Wheat => WHEAT_BANDS,
        Crop::Maize => MAIZE_BANDS,
        Crop::Cotton => COTTON_BANDS,
        Crop::Sugarcane => SUGARCANE_BANDS,
        Crop::Pulses => PULSES_BANDS,
    }
}

/// Sum of the weights (tenths) of every band that holds
pub fn raw_points(crop: Crop, features: &FeatureVector) -> u32 {
    score_bands(crop)
        .iter()
        .filter(|b| b.holds(features))
        .map(|b| b.weight)
        .sum()
}

/// Unnormalized score (e.g. 0.6 for six tenths)
pub fn raw_score(crop: Crop, features: &FeatureVector) -> f64 {
    f64::from(raw_points(crop, features)) / 10.0
}

/// Probability for every crop, in `Crop::all()` order.
///
/// Uniform 1/6 when no band holds for any crop.
pub fn crop_distribution(features: &FeatureVector) -> Vec<(Crop, f64)> {
    let crops = Crop::all();
    let raw: Vec<u32> = crops.iter().map(|c| raw_points(*c, features)).collect();
    let total: u32 = raw.iter().sum();

    if total == 0 {
        let uniform = 1.0 / crops.len() as f64;
        return crops.iter().map(|c| (*c, uniform)).collect();
    }

    crops
        .iter()
        .zip(raw)
        .map(|(c, points)| (*c, f64::from(points) / f64::from(total)))
        .collect()
}

/// Top-3 crops for a FeatureVector. Never empty.
pub fn rank_crops(features: &FeatureVector) -> ResultSet {
    ResultSet::ranked(
        crop_distribution(features)
            .into_iter()
            .map(|(crop, probability)| CropPrediction::new(crop.name(), probability)),
    )
}
