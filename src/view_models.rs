//! View Models for the wizard front end
//!
//! Read-only snapshots handed to the (external) renderer. Everything a screen
//! needs is precomputed here: step counters, progress, selected option,
//! result cards with bilingual text, and feature display tags.

use crate::catalog::{Crop, LocalizedText, Question, QuestionCatalog, GENERIC_EXPLANATION};
use crate::prediction::CropPrediction;
use crate::resolver::ResultSource;
use crate::wizard::{Phase, WizardState};
use serde::Serialize;

/// Suitability message per rank (1st, 2nd, 3rd)
static RANK_MESSAGES: [LocalizedText; 3] = [
    LocalizedText::new("Best suited crop for your field", "(आपके खेत के लिए सबसे उपयुक्त फसल)"),
    LocalizedText::new("Good alternative crop", "(अच्छा वैकल्पिक विकल्प)"),
    LocalizedText::new("Possible crop option", "(संभावित विकल्प)"),
];

/// What the renderer should show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardView<'a> {
    Question(QuestionView<'a>),
    Loading,
    Results(ResultsView),
}

/// A question screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView<'a> {
    /// 1-based step number
    pub step: usize,
    pub total: usize,
    pub progress_percent: f64,
    pub question: &'a Question,
    /// Option to highlight (answer being revisited)
    pub selected: Option<&'a str>,
    pub can_go_back: bool,
}

/// The results screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub cards: Vec<ResultCard>,
    pub feature_tags: Vec<String>,
    pub source: Option<ResultSource>,
}

/// One recommended crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    /// 1-based rank
    pub rank: usize,
    pub crop: String,
    pub hindi_name: Option<&'static str>,
    pub percent: u32,
    pub suitability: LocalizedText,
    pub explanation: LocalizedText,
}

impl ResultCard {
    pub fn new(index: usize, prediction: &CropPrediction) -> Self {
        let info = Crop::from_name(&prediction.name).map(|c| c.info());
        let suitability = RANK_MESSAGES[index.min(RANK_MESSAGES.len() - 1)];

        Self {
            rank: index + 1,
            crop: prediction.name.clone(),
            hindi_name: info.map(|i| i.hindi_name),
            percent: to_percent(prediction.probability),
            suitability,
            explanation: info.map_or(GENERIC_EXPLANATION, |i| i.explanation),
        }
    }
}

/// Probability as a whole percentage (round half up)
pub fn to_percent(probability: f64) -> u32 {
    (probability * 100.0).round().max(0.0) as u32
}

/// Build the view for a session snapshot
pub fn build_view<'a>(catalog: &'a QuestionCatalog, state: &'a WizardState) -> WizardView<'a> {
    match state.phase() {
        Phase::Collecting => {
            let index = state.current_index();
            let Some(question) = catalog.get(index) else {
                return WizardView::Loading;
            };
            let total = catalog.len();
            let step = index + 1;

            WizardView::Question(QuestionView {
                step,
                total,
                progress_percent: step as f64 / total as f64 * 100.0,
                question,
                selected: state
                    .answers()
                    .get(question.id)
                    .or_else(|| state.previous_selection()),
                can_go_back: index > 0,
            })
        }
        Phase::Submitting => WizardView::Loading,
        Phase::Completed => WizardView::Results(ResultsView {
            cards: state
                .results()
                .iter()
                .enumerate()
                .map(|(i, p)| ResultCard::new(i, p))
                .collect(),
            feature_tags: state
                .features()
                .map(|f| f.display_tags())
                .unwrap_or_default(),
            source: state.source(),
        }),
    }
}
