//! Benchmark for neighbor search over a synthetic catalog.

use catalog::Course;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use features::FeatureExtractor;
use rankers::similar_courses;

const TOPICS: &[&str] = &[
    "rust systems programming memory safety",
    "python data science pandas numpy",
    "javascript web frontend react",
    "sql databases query optimization",
    "machine learning neural networks",
    "devops kubernetes containers deployment",
    "functional programming haskell types",
    "mobile development swift ios",
];

fn synthetic_corpus(size: usize) -> Vec<Course> {
    (0..size)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            Course {
                id: format!("course-{}", i),
                title: format!("{} part {}", topic, i / TOPICS.len()),
                description: Some(topic.to_string()),
                level: Some("all".to_string()),
                category: None,
                average_rating: 4.0,
                enrollments_count: i as u32,
            }
        })
        .collect()
}

fn bench_similar_courses(c: &mut Criterion) {
    let corpus = synthetic_corpus(500);
    let embeddings = FeatureExtractor::new()
        .train(&corpus)
        .expect("non-empty corpus");

    c.bench_function("similar_courses_500", |b| {
        b.iter(|| {
            let neighbors =
                similar_courses(&embeddings, black_box("course-42"), black_box(10)).unwrap();
            black_box(neighbors)
        })
    });
}

fn bench_training(c: &mut Criterion) {
    let corpus = synthetic_corpus(200);
    let extractor = FeatureExtractor::new();

    c.bench_function("train_200", |b| {
        b.iter(|| black_box(extractor.train(black_box(&corpus))))
    });
}

criterion_group!(benches, bench_similar_courses, bench_training);
criterion_main!(benches);
