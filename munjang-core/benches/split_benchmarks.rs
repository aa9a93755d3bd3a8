//! Performance benchmarks for Splitter
//!
//! Run with: cargo bench --bench split_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use munjang_core::domain::ProtectedSpanCodec;
use munjang_core::language::default_rules;
use munjang_core::Splitter;
use std::hint::black_box;

const SOURCE_SENTENCES: &[&str] = &[
    "Dr. Smith arrived at 3.30 today. ",
    "He said \"the results are final.\" ",
    "The budget (approved in Jan. last year) was spent. ",
    "Everyone agreed! ",
    "Was it enough? ",
];

const TRANSLATION_SENTENCES: &[&str] = &[
    "스미스 박사는 오늘 3시 30분에 도착했다. ",
    "그는 \"결과는 최종이다.\"라고 말했다. ",
    "작년 1월에 승인된 예산은 모두 쓰였다. ",
    "모두가 동의했다! ",
    "그것으로 충분했을까? ",
];

/// Generate text of roughly `size` bytes by cycling through sentences
fn generate_text(parts: &[&str], size: usize) -> String {
    let mut text = String::with_capacity(size + 64);
    for part in parts.iter().cycle() {
        if text.len() >= size {
            break;
        }
        text.push_str(part);
    }
    text
}

/// Benchmark splitting at different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let splitter = Splitter::new();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(SOURCE_SENTENCES, size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("split", size), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text), None));
        });
    }

    group.finish();
}

/// Benchmark the masking pass on its own
fn bench_masking(c: &mut Criterion) {
    let rules = default_rules();
    let codec = ProtectedSpanCodec::new(rules.abbreviations());
    let text = generate_text(SOURCE_SENTENCES, 102_400);

    c.bench_function("mask_100kb", |b| b.iter(|| codec.mask(black_box(&text))));
}

/// Benchmark splitting with a translation and the translation check
fn bench_translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");
    let splitter = Splitter::new();
    let source = generate_text(SOURCE_SENTENCES, 10_240);
    let translation = generate_text(TRANSLATION_SENTENCES, 10_240);

    group.bench_function("split_with_translation", |b| {
        b.iter(|| {
            splitter.split(black_box(&source), Some(black_box(translation.as_str())))
        });
    });
    group.bench_function("translation_status", |b| {
        b.iter(|| {
            splitter.translation_status(black_box(&source), Some(black_box(translation.as_str())))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_masking, bench_translation);
criterion_main!(benches);
