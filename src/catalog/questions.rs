//! Questions and the built-in questionnaire
//!
//! Six multiple-choice questions, each with a closed set of option tokens.
//! The option tokens are the values recorded in an AnswerSet and parsed by
//! the feature computer.

use super::LocalizedText;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Stable question identifiers
///
/// Declaration order matches the built-in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionId {
    SoilType,
    Fertilizer,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

impl QuestionId {
    /// Wire/DOM identifier (e.g. "soilType")
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::SoilType => "soilType",
            QuestionId::Fertilizer => "fertilizer",
            QuestionId::Temperature => "temperature",
            QuestionId::Humidity => "humidity",
            QuestionId::Ph => "ph",
            QuestionId::Rainfall => "rainfall",
        }
    }

    /// Parse a wire identifier; unknown ids yield None
    pub fn from_str_id(id: &str) -> Option<Self> {
        match id {
            "soilType" => Some(QuestionId::SoilType),
            "fertilizer" => Some(QuestionId::Fertilizer),
            "temperature" => Some(QuestionId::Temperature),
            "humidity" => Some(QuestionId::Humidity),
            "ph" => Some(QuestionId::Ph),
            "rainfall" => Some(QuestionId::Rainfall),
            _ => None,
        }
    }
}

/// One selectable answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    /// Token stored in the AnswerSet (e.g. "very_high")
    pub value: &'static str,
    pub label: LocalizedText,
}

/// A single wizard question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: LocalizedText,
    pub options: &'static [AnswerOption],
}

impl Question {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Ordered, immutable list of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Build a catalog from questions in display order.
    ///
    /// Rejects empty catalogs, duplicate ids and questions without options.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            bail!("Question catalog must contain at least one question");
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                bail!("Duplicate question id '{}' in catalog", question.id.as_str());
            }
            if question.options.is_empty() {
                bail!("Question '{}' has no options", question.id.as_str());
            }
        }

        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at a step index
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Step index of a question id
    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn is_valid_option(&self, id: QuestionId, value: &str) -> bool {
        self.question(id).is_some_and(|q| q.has_option(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

// ============================================================================
// Built-in questionnaire
// ============================================================================

static SOIL_TYPE_OPTIONS: &[AnswerOption] = &[
    AnswerOption { value: "sandy", label: LocalizedText::new("Sandy", "रेतीली") },
    AnswerOption { value: "loamy", label: LocalizedText::new("Loamy", "दोमट") },
    AnswerOption { value: "clay", label: LocalizedText::new("Clay", "चिकनी") },
    AnswerOption { value: "red", label: LocalizedText::new("Red", "लाल") },
    AnswerOption { value: "black", label: LocalizedText::new("Black", "काली") },
];

static FERTILIZER_OPTIONS: &[AnswerOption] = &[
    AnswerOption { value: "none", label: LocalizedText::new("None", "कोई नहीं") },
    AnswerOption { value: "low", label: LocalizedText::new("Low", "कम") },
    AnswerOption { value: "medium", label: LocalizedText::new("Medium", "मध्यम") },
    AnswerOption { value: "high", label: LocalizedText::new("High", "अधिक") },
];

static TEMPERATURE_OPTIONS: &[AnswerOption] = &[
    AnswerOption { value: "cool", label: LocalizedText::new("Cool", "ठंडा") },
    AnswerOption { value: "warm", label: LocalizedText::new("Warm", "मध्यम") },
    AnswerOption { value: "hot", label: LocalizedText::new("Hot", "गर्म") },
];

static HUMIDITY_OPTIONS: &[AnswerOption] = &[
    AnswerOption { value: "dry", label: LocalizedText::new("Dry", "शुष्क") },
    AnswerOption { value: "moderate", label: LocalizedText::new("Moderate", "मध्यम") },
    AnswerOption { value: "humid", label: LocalizedText::new("Humid", "अधिक नमी") },
];

static PH_OPTIONS: &[AnswerOption] = &[
    AnswerOption { value: "acidic", label: LocalizedText::new("Acidic", "अम्लीय") },
    AnswerOption { value: "neutral", label: LocalizedText::new("Neutral", "तटस्थ") },
    AnswerOption { value: "alkaline", label: LocalizedText::new("Alkaline", "क्षारीय") },
];

static RAINFALL_OPTIONS: &[AnswerOption] = &[
    AnswerOption { value: "low", label: LocalizedText::new("Low", "कम") },
    AnswerOption { value: "medium", label: LocalizedText::new("Medium", "मध्यम") },
    AnswerOption { value: "high", label: LocalizedText::new("High", "अधिक") },
    AnswerOption { value: "very_high", label: LocalizedText::new("Very High", "बहुत अधिक") },
];

static DEFAULT_QUESTIONS: &[Question] = &[
    Question {
        id: QuestionId::SoilType,
        prompt: LocalizedText::new("What type of soil do you have?", "आपकी मिट्टी का प्रकार क्या है?"),
        options: SOIL_TYPE_OPTIONS,
    },
    Question {
        id: QuestionId::Fertilizer,
        prompt: LocalizedText::new("How much fertilizer do you use?", "आप कितनी खाद का उपयोग करते हैं?"),
        options: FERTILIZER_OPTIONS,
    },
    Question {
        id: QuestionId::Temperature,
        prompt: LocalizedText::new("How is the temperature in your area?", "आपके क्षेत्र का तापमान कैसा है?"),
        options: TEMPERATURE_OPTIONS,
    },
    Question {
        id: QuestionId::Humidity,
        prompt: LocalizedText::new("How is the humidity level?", "नमी का स्तर कैसा है?"),
        options: HUMIDITY_OPTIONS,
    },
    Question {
        id: QuestionId::Ph,
        prompt: LocalizedText::new("How is your soil type?", "आपकी मिट्टी की प्रकृति कैसी है?"),
        options: PH_OPTIONS,
    },
    Question {
        id: QuestionId::Rainfall,
        prompt: LocalizedText::new("How much rainfall do you receive?", "वर्षा कितनी होती है?"),
        options: RAINFALL_OPTIONS,
    },
];

/// The six-question agronomic questionnaire
pub fn default_catalog() -> QuestionCatalog {
    QuestionCatalog {
        questions: DEFAULT_QUESTIONS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_order() {
        let catalog = default_catalog();
        let ids: Vec<QuestionId> = catalog.iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![
                QuestionId::SoilType,
                QuestionId::Fertilizer,
                QuestionId::Temperature,
                QuestionId::Humidity,
                QuestionId::Ph,
                QuestionId::Rainfall,
            ]
        );
        assert_eq!(catalog.position(QuestionId::Ph), Some(4));
    }

    #[test]
    fn test_option_validation() {
        let catalog = default_catalog();
        assert!(catalog.is_valid_option(QuestionId::Rainfall, "very_high"));
        assert!(!catalog.is_valid_option(QuestionId::Temperature, "very_high"));
        assert!(!catalog.is_valid_option(QuestionId::SoilType, "Sandy"));
    }

    #[test]
    fn test_question_id_round_trip_names() {
        for question in default_catalog().iter() {
            assert_eq!(QuestionId::from_str_id(question.id.as_str()), Some(question.id));
        }
        assert_eq!(QuestionId::from_str_id("soil"), None);
        assert_eq!(
            serde_json::to_string(&QuestionId::SoilType).unwrap(),
            "\"soilType\""
        );
    }

    #[test]
    fn test_catalog_rejects_duplicates_and_empty() {
        assert!(QuestionCatalog::new(Vec::new()).is_err());

        let q = DEFAULT_QUESTIONS[0].clone();
        assert!(QuestionCatalog::new(vec![q.clone(), q]).is_err());

        let no_options = Question { options: &[], ..DEFAULT_QUESTIONS[1].clone() };
        assert!(QuestionCatalog::new(vec![no_options]).is_err());

        let short = QuestionCatalog::new(DEFAULT_QUESTIONS[..2].to_vec()).unwrap();
        assert_eq!(short.len(), 2);
    }
}
