//! Answer → Feature Mapping
//!
//! Converts a questionnaire AnswerSet into the 7-dimensional numeric
//! FeatureVector expected by the scoring service (N, P, K, temperature,
//! humidity, pH, rainfall).
//!
//! Every dimension is a closed enum whose `Default` is the value used when the
//! answer is absent or unrecognized. Soil type is not a feature itself; it
//! shifts N, P and K before clamping to [0, 100].

use crate::catalog::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// AnswerSet
// ============================================================================

/// Selected option token per question, iterated in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the previous value for that question
    pub fn insert(&mut self, id: QuestionId, value: impl Into<String>) -> Option<String> {
        self.answers.insert(id, value.into())
    }

    pub fn remove(&mut self, id: QuestionId) -> Option<String> {
        self.answers.remove(&id)
    }

    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.answers.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.answers.iter().map(|(id, v)| (*id, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(QuestionId, S)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, S)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().map(|(id, v)| (id, v.into())).collect(),
        }
    }
}

// ============================================================================
// Answer dimensions
// ============================================================================

/// A question whose answer maps to a closed enum with a documented default
pub trait AnswerDimension: Default + Copy {
    const QUESTION: QuestionId;

    /// Parse an option token; unknown tokens yield None
    fn from_token(token: &str) -> Option<Self>;

    /// Read this dimension from an AnswerSet, defaulting absent/unknown answers
    fn from_answers(answers: &AnswerSet) -> Self {
        answers
            .get(Self::QUESTION)
            .and_then(Self::from_token)
            .unwrap_or_default()
    }
}

/// Fertilizer usage (default: medium)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FertilizerUse {
    None,
    Low,
    #[default]
    Medium,
    High,
}

impl FertilizerUse {
    /// Base (N, P, K) before the soil adjustment
    pub fn npk(&self) -> (f64, f64, f64) {
        match self {
            FertilizerUse::None => (10.0, 10.0, 10.0),
            FertilizerUse::Low => (30.0, 25.0, 25.0),
            FertilizerUse::Medium => (60.0, 45.0, 45.0),
            FertilizerUse::High => (90.0, 70.0, 70.0),
        }
    }
}

impl AnswerDimension for FertilizerUse {
    const QUESTION: QuestionId = QuestionId::Fertilizer;

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "none" => Some(FertilizerUse::None),
            "low" => Some(FertilizerUse::Low),
            "medium" => Some(FertilizerUse::Medium),
            "high" => Some(FertilizerUse::High),
            _ => None,
        }
    }
}

/// Perceived temperature (default: warm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureBand {
    Cool,
    #[default]
    Warm,
    Hot,
}

impl TemperatureBand {
    /// Degrees Celsius
    pub fn celsius(&self) -> f64 {
        match self {
            TemperatureBand::Cool => 18.0,
            TemperatureBand::Warm => 26.0,
            TemperatureBand::Hot => 34.0,
        }
    }
}

impl AnswerDimension for TemperatureBand {
    const QUESTION: QuestionId = QuestionId::Temperature;

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "cool" => Some(TemperatureBand::Cool),
            "warm" => Some(TemperatureBand::Warm),
            "hot" => Some(TemperatureBand::Hot),
            _ => None,
        }
    }
}

/// Perceived humidity (default: moderate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HumidityBand {
    Dry,
    #[default]
    Moderate,
    Humid,
}

impl HumidityBand {
    /// Relative humidity (%)
    pub fn percent(&self) -> f64 {
        match self {
            HumidityBand::Dry => 35.0,
            HumidityBand::Moderate => 60.0,
            HumidityBand::Humid => 85.0,
        }
    }
}

impl AnswerDimension for HumidityBand {
    const QUESTION: QuestionId = QuestionId::Humidity;

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "dry" => Some(HumidityBand::Dry),
            "moderate" => Some(HumidityBand::Moderate),
            "humid" => Some(HumidityBand::Humid),
            _ => None,
        }
    }
}

/// Soil reaction (default: neutral)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhBand {
    Acidic,
    #[default]
    Neutral,
    Alkaline,
}

impl PhBand {
    pub fn ph(&self) -> f64 {
        match self {
            PhBand::Acidic => 5.5,
            PhBand::Neutral => 7.0,
            PhBand::Alkaline => 8.3,
        }
    }
}

impl AnswerDimension for PhBand {
    const QUESTION: QuestionId = QuestionId::Ph;

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "acidic" => Some(PhBand::Acidic),
            "neutral" => Some(PhBand::Neutral),
            "alkaline" => Some(PhBand::Alkaline),
            _ => None,
        }
    }
}

/// Seasonal rainfall (default: medium)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RainfallBand {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl RainfallBand {
    /// Annual rainfall (mm)
    pub fn millimetres(&self) -> f64 {
        match self {
            RainfallBand::Low => 500.0,
            RainfallBand::Medium => 800.0,
            RainfallBand::High => 1200.0,
            RainfallBand::VeryHigh => 1800.0,
        }
    }
}

impl AnswerDimension for RainfallBand {
    const QUESTION: QuestionId = QuestionId::Rainfall;

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "low" => Some(RainfallBand::Low),
            "medium" => Some(RainfallBand::Medium),
            "high" => Some(RainfallBand::High),
            "very_high" => Some(RainfallBand::VeryHigh),
            _ => None,
        }
    }
}

/// Soil type; only affects fertility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
    Red,
    Black,
}

impl SoilType {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "sandy" => Some(SoilType::Sandy),
            "loamy" => Some(SoilType::Loamy),
            "clay" => Some(SoilType::Clay),
            "red" => Some(SoilType::Red),
            "black" => Some(SoilType::Black),
            _ => None,
        }
    }

    pub fn from_answers(answers: &AnswerSet) -> Option<Self> {
        answers.get(QuestionId::SoilType).and_then(Self::from_token)
    }

    /// Shift applied to each of N, P, K
    pub fn fertility_adjustment(&self) -> f64 {
        match self {
            SoilType::Black | SoilType::Clay => 5.0,
            SoilType::Sandy => -5.0,
            SoilType::Loamy | SoilType::Red => 0.0,
        }
    }
}

// ============================================================================
// FeatureVector
// ============================================================================

/// Numeric summary of a completed questionnaire (scoring-service request body)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    /// °C
    pub temperature: f64,
    /// %
    pub humidity: f64,
    pub ph: f64,
    /// mm
    pub rainfall: f64,
}

impl FeatureVector {
    /// Short display tags ("N: 95", "Temp: 34°C", ...)
    pub fn display_tags(&self) -> Vec<String> {
        vec![
            format!("N: {}", self.n),
            format!("P: {}", self.p),
            format!("K: {}", self.k),
            format!("Temp: {}°C", self.temperature),
            format!("Humidity: {}%", self.humidity),
            format!("pH: {}", self.ph),
            format!("Rain: {} mm", self.rainfall),
        ]
    }
}

/// Map an AnswerSet to its FeatureVector.
///
/// Pure: absent or unknown answers take each dimension's default.
pub fn compute_features(answers: &AnswerSet) -> FeatureVector {
    let (n, p, k) = FertilizerUse::from_answers(answers).npk();
    let boost = SoilType::from_answers(answers).map_or(0.0, |s| s.fertility_adjustment());
    let nutrient = |base: f64| (base + boost).clamp(0.0, 100.0);

    FeatureVector {
        n: nutrient(n),
        p: nutrient(p),
        k: nutrient(k),
        temperature: TemperatureBand::from_answers(answers).celsius(),
        humidity: HumidityBand::from_answers(answers).percent(),
        ph: PhBand::from_answers(answers).ph(),
        rainfall: RainfallBand::from_answers(answers).millimetres(),
    }
}
