//! Question Catalog
//!
//! The fixed, ordered questionnaire the wizard walks through, plus the
//! bilingual crop metadata shown next to recommendations.
//!
//! ## Architecture
//! - `questions.rs` - QuestionId, Question, AnswerOption + built-in catalog
//! - `crops.rs` - Crop enumeration and display metadata

pub mod questions;
pub mod crops;

// Re-export public API
pub use questions::{
    default_catalog, AnswerOption, Question, QuestionCatalog, QuestionId,
};
pub use crops::{Crop, CropInfo, GENERIC_EXPLANATION};

use serde::Serialize;

/// Display language for catalog text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    #[default]
    En,
    Hi,
}

/// A piece of text available in English and Hindi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub hi: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }

    /// Text in the requested language
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Hi => self.hi,
        }
    }
}
