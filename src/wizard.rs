//! Wizard State Machine
//!
//! Drives the questionnaire: one answer per question in catalog order, then a
//! single submission whose ranking is committed when it resolves.
//!
//! ```text
//! Collecting(0) -> .. -> Collecting(n-1) --select--> Submitting --complete--> Completed
//!        ^                                                |                        |
//!        +------------------------ restart ---------------+------------------------+
//! ```
//!
//! The prediction request is the only suspension point. `select_option` hands
//! back a `Submission` carrying a `SessionTicket`; the caller resolves the
//! features and passes the result to `complete`. A restart bumps the session
//! generation, so a ticket issued before it can no longer commit results.

use crate::catalog::{default_catalog, Question, QuestionCatalog, QuestionId};
use crate::features::{compute_features, AnswerSet, FeatureVector};
use crate::gateway::PredictionGateway;
use crate::prediction::ResultSet;
use crate::resolver::{Resolution, ResultResolver, ResultSource};
use crate::view_models::{build_view, WizardView};
use serde::Serialize;

/// Lifecycle phase of a wizard session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Collecting,
    Submitting,
    Completed,
}

/// Snapshot of a wizard session
///
/// Only `WizardController` mutates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardState {
    current_index: usize,
    answers: AnswerSet,
    /// Answer dropped by `go_back` for the question now shown
    previous_selection: Option<String>,
    features: Option<FeatureVector>,
    results: ResultSet,
    source: Option<ResultSource>,
    phase: Phase,
}

impl WizardState {
    pub fn initial() -> Self {
        Self {
            current_index: 0,
            answers: AnswerSet::new(),
            previous_selection: None,
            features: None,
            results: ResultSet::empty(),
            source: None,
            phase: Phase::Collecting,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn previous_selection(&self) -> Option<&str> {
        self.previous_selection.as_deref()
    }

    pub fn features(&self) -> Option<&FeatureVector> {
        self.features.as_ref()
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn source(&self) -> Option<ResultSource> {
        self.source
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Identifies the session a submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket {
    generation: u64,
}

/// A started submission: features to resolve plus the ticket to commit with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submission {
    pub ticket: SessionTicket,
    pub features: FeatureVector,
}

/// Why an answer was not recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Answer keyed to a question other than the current one
    WrongQuestion {
        expected: QuestionId,
        received: QuestionId,
    },
    /// Value is not one of the question's options
    UnknownOption { question: QuestionId, value: String },
}

/// Result of `select_option`
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Moved to the question at `index`
    Advanced { index: usize },
    /// Last answer recorded; resolve and `complete` the submission
    Submitted(Submission),
    /// State untouched
    Rejected(RejectReason),
    /// Not collecting answers; state untouched
    Ignored,
}

/// Owns one wizard session
#[derive(Debug, Clone)]
pub struct WizardController {
    catalog: QuestionCatalog,
    state: WizardState,
    generation: u64,
}

impl WizardController {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog,
            state: WizardState::initial(),
            generation: 0,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn question_count(&self) -> usize {
        self.catalog.len()
    }

    /// Question being asked, if collecting
    pub fn current_question(&self) -> Option<&Question> {
        match self.state.phase {
            Phase::Collecting => self.catalog.get(self.state.current_index),
            _ => None,
        }
    }

    /// Renderer-facing snapshot
    pub fn view(&self) -> WizardView<'_> {
        build_view(&self.catalog, &self.state)
    }

    /// Record the answer for the current question.
    ///
    /// Advances to the next question, or on the last one enters `Submitting`
    /// and returns the submission to resolve.
    pub fn select_option(&mut self, id: QuestionId, value: &str) -> StepOutcome {
        if self.state.phase != Phase::Collecting {
            tracing::debug!(question = id.as_str(), phase = ?self.state.phase, "Ignoring answer outside collection");
            return StepOutcome::Ignored;
        }

        let Some(question) = self.catalog.get(self.state.current_index) else {
            return StepOutcome::Ignored;
        };
        let expected = question.id;
        let is_option = question.has_option(value);

        if expected != id {
            tracing::debug!(expected = expected.as_str(), received = id.as_str(), "Rejecting out-of-order answer");
            return StepOutcome::Rejected(RejectReason::WrongQuestion {
                expected,
                received: id,
            });
        }
        if !is_option {
            tracing::debug!(question = id.as_str(), value, "Rejecting unknown option");
            return StepOutcome::Rejected(RejectReason::UnknownOption {
                question: id,
                value: value.to_string(),
            });
        }

        self.state.answers.insert(id, value);
        self.state.previous_selection = None;

        if self.state.current_index + 1 < self.catalog.len() {
            self.state.current_index += 1;
            tracing::debug!(index = self.state.current_index, "Advanced to next question");
            StepOutcome::Advanced {
                index: self.state.current_index,
            }
        } else {
            StepOutcome::Submitted(self.begin_submission())
        }
    }

    fn begin_submission(&mut self) -> Submission {
        let features = compute_features(&self.state.answers);

        self.state.current_index = self.catalog.len();
        self.state.features = Some(features);
        self.state.results = ResultSet::empty();
        self.state.source = None;
        self.state.phase = Phase::Submitting;

        tracing::info!(generation = self.generation, ?features, "Questionnaire complete; submitting");
        Submission {
            ticket: SessionTicket {
                generation: self.generation,
            },
            features,
        }
    }

    /// Step back one question. Returns false (no-op) at the first question or
    /// outside collection.
    pub fn go_back(&mut self) -> bool {
        if self.state.phase != Phase::Collecting || self.state.current_index == 0 {
            return false;
        }

        self.state.current_index -= 1;
        let revisited = self.catalog.get(self.state.current_index).map(|q| q.id);
        self.state.previous_selection = revisited.and_then(|id| self.state.answers.remove(id));

        tracing::debug!(index = self.state.current_index, "Went back one question");
        true
    }

    /// Reset to a fresh session; any in-flight submission becomes stale
    pub fn restart(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = WizardState::initial();
        tracing::info!(generation = self.generation, "Wizard restarted");
    }

    /// Commit a resolved ranking.
    ///
    /// Returns false, leaving state untouched, when the ticket predates a
    /// restart or the session is not submitting. An empty ranking is replaced
    /// by the heuristic one so a completed session always has results.
    pub fn complete(&mut self, ticket: SessionTicket, resolution: Resolution) -> bool {
        if ticket.generation != self.generation || self.state.phase != Phase::Submitting {
            tracing::warn!(
                ticket = ticket.generation,
                live = self.generation,
                phase = ?self.state.phase,
                "Discarding stale prediction result"
            );
            return false;
        }

        let Some(features) = self.state.features else {
            return false;
        };
        let resolution = if resolution.results.is_empty() {
            Resolution::heuristic(&features)
        } else {
            resolution
        };

        tracing::info!(source = ?resolution.source, crops = ?resolution.results.names(), "Wizard completed");
        self.state.results = resolution.results;
        self.state.source = Some(resolution.source);
        self.state.phase = Phase::Completed;
        true
    }

    /// Resolve a submission and commit it.
    ///
    /// Holds the controller for the whole request; front ends that must stay
    /// responsive during the request resolve separately and call `complete`.
    pub async fn submit<G: PredictionGateway>(
        &mut self,
        submission: Submission,
        resolver: &ResultResolver<G>,
    ) -> bool {
        let resolution = resolver.resolve(&submission.features).await;
        self.complete(submission.ticket, resolution)
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}
