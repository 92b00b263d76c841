// Wizard end-to-end tests
//
// Purpose: drive full questionnaire sessions through the resolver with stub
// scoring services (healthy, empty, malformed, unreachable) and check the
// fallback and stale-response guarantees.

use async_trait::async_trait;
use crop_advisor::{
    normalize_response, AnswerSet, FeatureVector, GatewayError, Phase, PredictionGateway,
    QuestionId, ResultResolver, ResultSet, ResultSource, StepOutcome, Submission,
    WizardController, WizardState,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const SCENARIO_A: [(QuestionId, &str); 6] = [
    (QuestionId::SoilType, "black"),
    (QuestionId::Fertilizer, "high"),
    (QuestionId::Temperature, "hot"),
    (QuestionId::Humidity, "humid"),
    (QuestionId::Ph, "neutral"),
    (QuestionId::Rainfall, "very_high"),
];

const SCENARIO_B: [(QuestionId, &str); 6] = [
    (QuestionId::SoilType, "sandy"),
    (QuestionId::Fertilizer, "none"),
    (QuestionId::Temperature, "cool"),
    (QuestionId::Humidity, "dry"),
    (QuestionId::Ph, "acidic"),
    (QuestionId::Rainfall, "low"),
];

/// Answers a canned response body, counting calls
struct CannedGateway {
    body: Value,
    calls: AtomicUsize,
}

impl CannedGateway {
    fn new(body: Value) -> Self {
        Self {
            body,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PredictionGateway for CannedGateway {
    async fn predict(&self, _features: &FeatureVector) -> Result<ResultSet, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        normalize_response(&self.body)
    }
}

/// Always fails at the transport level
struct UnreachableGateway;

#[async_trait]
impl PredictionGateway for UnreachableGateway {
    async fn predict(&self, _features: &FeatureVector) -> Result<ResultSet, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }
}

fn answer_all(wizard: &mut WizardController, answers: &[(QuestionId, &str)]) -> Submission {
    let mut submission = None;
    for (id, value) in answers {
        match wizard.select_option(*id, value) {
            StepOutcome::Advanced { .. } => {}
            StepOutcome::Submitted(s) => submission = Some(s),
            other => panic!("unexpected outcome for {id:?}: {other:?}"),
        }
    }
    submission.expect("last answer should submit")
}

#[tokio::test]
async fn test_remote_ranking_used_when_available() {
    let gateway = CannedGateway::new(json!({
        "predictions": [
            { "crop": "Sugarcane", "probability": 0.2 },
            { "name": "Rice", "confidence": 0.7 },
            { "crop": "Maize", "probability": 0.05 },
            { "crop": "Cotton", "probability": 0.05 },
        ]
    }));
    let resolver = ResultResolver::new(gateway);
    let mut wizard = WizardController::default();

    let submission = answer_all(&mut wizard, &SCENARIO_A);
    assert!(wizard.submit(submission, &resolver).await);

    let state = wizard.state();
    assert_eq!(state.phase(), Phase::Completed);
    assert_eq!(state.source(), Some(ResultSource::Remote));
    assert_eq!(state.results().names(), ["Rice", "Sugarcane", "Maize"]);
    assert_eq!(resolver.gateway().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_scenario_a_offline_ranks_rice_first() {
    let resolver = ResultResolver::new(UnreachableGateway);
    let mut wizard = WizardController::default();

    let submission = answer_all(&mut wizard, &SCENARIO_A);
    assert_eq!(
        submission.features,
        FeatureVector {
            n: 95.0,
            p: 75.0,
            k: 75.0,
            temperature: 34.0,
            humidity: 85.0,
            ph: 7.0,
            rainfall: 1800.0,
        }
    );

    assert!(wizard.submit(submission, &resolver).await);
    assert_eq!(wizard.state().results().first().unwrap().name, "Rice");
}

#[tokio::test]
async fn test_scenario_b_offline_favours_wheat_and_pulses() {
    let resolver = ResultResolver::new(UnreachableGateway);
    let mut wizard = WizardController::default();

    let submission = answer_all(&mut wizard, &SCENARIO_B);
    assert_eq!((submission.features.n, submission.features.p, submission.features.k), (5.0, 5.0, 5.0));

    wizard.submit(submission, &resolver).await;
    let names = wizard.state().results().names();
    assert_eq!(&names[..2], ["Wheat", "Pulses"]);
}

#[tokio::test]
async fn test_scenario_c_empty_predictions_fall_back() {
    let resolver = ResultResolver::new(CannedGateway::new(json!({ "predictions": [] })));
    let mut wizard = WizardController::default();

    let submission = answer_all(&mut wizard, &SCENARIO_A);
    let expected = crop_advisor::rank_crops(&submission.features);
    assert!(wizard.submit(submission, &resolver).await);

    assert_eq!(wizard.state().source(), Some(ResultSource::Heuristic));
    assert_eq!(wizard.state().results(), &expected);
}

#[tokio::test]
async fn test_scenario_d_transport_failure_still_completes() {
    let resolver = ResultResolver::new(UnreachableGateway);
    let mut wizard = WizardController::default();

    let submission = answer_all(&mut wizard, &SCENARIO_B);
    assert!(wizard.submit(submission, &resolver).await);

    assert_eq!(wizard.state().phase(), Phase::Completed);
    assert_eq!(wizard.state().results().len(), 3);
    assert_eq!(wizard.state().source(), Some(ResultSource::Heuristic));
}

#[tokio::test]
async fn test_malformed_response_falls_back() {
    for body in [
        json!({ "result": "Rice" }),
        json!({ "predictions": [{ "probability": 0.9 }] }),
        json!(null),
    ] {
        let resolver = ResultResolver::new(CannedGateway::new(body));
        let mut wizard = WizardController::default();
        let submission = answer_all(&mut wizard, &SCENARIO_A);

        assert!(wizard.submit(submission, &resolver).await);
        assert_eq!(wizard.state().source(), Some(ResultSource::Heuristic));
        assert_eq!(wizard.state().results().len(), 3);
    }
}

#[tokio::test]
async fn test_restart_during_request_discards_late_result() {
    let gateway = Arc::new(CannedGateway::new(json!({
        "predictions": [{ "crop": "Rice", "probability": 1.0 }]
    })));
    let resolver = ResultResolver::new(Arc::clone(&gateway));
    let mut wizard = WizardController::default();

    let submission = answer_all(&mut wizard, &SCENARIO_A);
    let in_flight = resolver.resolve(&submission.features);

    // User restarts before the response arrives
    wizard.restart();
    let late = in_flight.await;

    assert!(!wizard.complete(submission.ticket, late));
    assert_eq!(wizard.state(), &WizardState::initial());
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_full_session_restart_and_second_run() {
    let resolver = ResultResolver::new(UnreachableGateway);
    let mut wizard = WizardController::default();

    let first = answer_all(&mut wizard, &SCENARIO_A);
    wizard.submit(first, &resolver).await;
    let first_results = wizard.state().results().clone();

    wizard.restart();
    assert_eq!(wizard.state(), WizardController::default().state());

    let second = answer_all(&mut wizard, &SCENARIO_B);
    wizard.submit(second, &resolver).await;
    assert_ne!(wizard.state().results(), &first_results);

    let answers: AnswerSet = SCENARIO_B.iter().copied().collect();
    assert_eq!(wizard.state().answers(), &answers);
}

#[tokio::test]
async fn test_completed_session_ignores_further_input() {
    let resolver = ResultResolver::new(UnreachableGateway);
    let mut wizard = WizardController::default();
    let submission = answer_all(&mut wizard, &SCENARIO_A);
    wizard.submit(submission, &resolver).await;
    let done = wizard.state().clone();

    assert_eq!(wizard.select_option(QuestionId::SoilType, "red"), StepOutcome::Ignored);
    assert!(!wizard.go_back());
    assert!(!wizard.submit(submission, &resolver).await);
    assert_eq!(wizard.state(), &done);
}
