use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crop_advisor::{compute_features, normalize_response, rank_crops, AnswerSet, QuestionId};
use serde_json::json;

fn sample_answers() -> AnswerSet {
    [
        (QuestionId::SoilType, "black"),
        (QuestionId::Fertilizer, "high"),
        (QuestionId::Temperature, "hot"),
        (QuestionId::Humidity, "humid"),
        (QuestionId::Ph, "neutral"),
        (QuestionId::Rainfall, "very_high"),
    ]
    .into_iter()
    .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");
    let answers = sample_answers();
    let features = compute_features(&answers);

    group.bench_function("compute_features", |b| {
        b.iter(|| black_box(compute_features(black_box(&answers))));
    });

    group.bench_function("rank_crops", |b| {
        b.iter(|| black_box(rank_crops(black_box(&features))));
    });

    group.bench_function("compute_and_rank_default_answers", |b| {
        let empty = AnswerSet::new();
        b.iter(|| black_box(rank_crops(&compute_features(black_box(&empty)))));
    });

    group.finish();
}

fn bench_normalize_response(c: &mut Criterion) {
    let body = json!({
        "predictions": [
            { "crop": "Sugarcane", "probability": 0.2 },
            { "name": "Rice", "confidence": 0.7 },
            { "crop": "Maize", "probability": 0.05 },
            { "crop": "Cotton", "probability": 0.03 },
            { "label": "Unnamed", "probability": 0.02 },
        ]
    });

    c.bench_function("normalize_response", |b| {
        b.iter(|| black_box(normalize_response(black_box(&body))));
    });
}

criterion_group!(benches, bench_pipeline, bench_normalize_response);
criterion_main!(benches);
