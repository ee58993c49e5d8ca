//! Criterion benchmarks for Durak.
//!
//! Covers the per-call hot paths:
//! - Normalization
//! - Tokenization with offsets
//! - Suffix stripping and lemmatization
//! - The full analysis pipeline

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use durak::analysis::analyzer::{Analyzer, TurkishAnalyzer};
use durak::analysis::lemma::{LemmaEngine, LemmaEngineConfig, LemmaStrategy};
use durak::analysis::morphology::{StripperConfig, SuffixStripper};
use durak::analysis::normalizer::normalize;
use durak::analysis::tokenizer::TurkishTokenizer;

const WORDS: &[&str] = &[
    "kitaplar", "evlerden", "geliyorum", "gittim", "İstanbul'a", "Ankara'da", "okuldan",
    "masalar", "çocukları", "öğretmenlerimizden", "IĞDIR", "güzel", "2023", "10-15", ":)",
    "https://example.com", "Türk-İslam", "arabalar", "gelmeden", "yapıyorum",
];

/// Generate test sentences for benchmarking.
fn generate_test_texts(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let length = 20 + (i % 30);
            (0..length)
                .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let texts = generate_test_texts(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("turkish_fold", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(normalize(black_box(text), true, true));
            }
        })
    });

    group.finish();
}

fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let tokenizer = TurkishTokenizer::default();
    let texts = generate_test_texts(100);

    group.bench_function("tokenize_single_text", |b| {
        b.iter(|| black_box(tokenizer.tokenize_with_offsets(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("tokenize_batch", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(tokenizer.tokenize_with_offsets(black_box(text)));
            }
        })
    });

    group.finish();
}

fn bench_lemmatization(c: &mut Criterion) {
    let mut group = c.benchmark_group("lemmatization");
    let stripper = SuffixStripper::turkish(StripperConfig::default()).unwrap();

    group.throughput(Throughput::Elements(WORDS.len() as u64));
    group.bench_function("strip_suffixes", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(stripper.strip_suffixes(black_box(word)));
            }
        })
    });

    for strategy in [LemmaStrategy::Lookup, LemmaStrategy::Heuristic, LemmaStrategy::Hybrid] {
        let engine = LemmaEngine::turkish(LemmaEngineConfig::with_strategy(strategy)).unwrap();
        group.bench_function(format!("lemmatize_{strategy}"), |b| {
            b.iter(|| {
                for word in WORDS {
                    black_box(engine.lemmatize(black_box(word)));
                }
            })
        });
    }

    let engine = LemmaEngine::turkish(LemmaEngineConfig::default()).unwrap();
    let words: Vec<&str> = WORDS.iter().cycle().take(10_000).copied().collect();
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("lemmatize_batch_parallel", |b| {
        b.iter(|| black_box(engine.lemmatize_batch(black_box(&words))))
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let engine = Arc::new(LemmaEngine::turkish(LemmaEngineConfig::default()).unwrap());
    let analyzer = TurkishAnalyzer::lemmatizing(engine).unwrap();
    let texts = generate_test_texts(100);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("analyze_batch", |b| {
        b.iter(|| {
            for text in &texts {
                let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_tokenization,
    bench_lemmatization,
    bench_pipeline
);

criterion_main!(benches);
