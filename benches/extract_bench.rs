//! Extraction benchmarks
//!
//! Run with: `cargo bench --bench extract_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pillarkit::extraction::split_segments;
use pillarkit::{ContentExtractor, ExtractOptions, GenerationRequest};

fn completion(sections: usize) -> String {
    let mut text = String::from("Pillar Content\nTitle: Benchmark Guide\n\n# Benchmark Guide\n\n");
    for i in 0..sections {
        text.push_str(&format!(
            "## Section {i}\n\nParagraph {i} with enough words to look like real article text.\n\n"
        ));
    }
    text.push_str("## Supporting Pages\n\n");
    for i in 0..3 {
        text.push_str(&format!("Title: Page {i}\nSummary: Summary for page {i}.\n\n"));
    }
    text.push_str("Meta Title: Bench\nMeta Description: Bench description.\nKeywords: a, b\n\n");
    text.push_str("LinkedIn Posts\n\n");
    for i in 0..3 {
        text.push_str(&format!("LinkedIn post number {i} with some promotional copy.\n\n"));
    }
    text
}

fn bench_extract(c: &mut Criterion) {
    let request = GenerationRequest::new("benchmarking, rust", "performance readers").unwrap();
    let extractor = ContentExtractor::with_options(ExtractOptions::with_year(2026));

    let small = completion(5);
    let large = completion(200);

    c.bench_function("split_segments_large", |b| {
        b.iter(|| split_segments(black_box(&large)))
    });
    c.bench_function("extract_small", |b| {
        b.iter(|| extractor.extract(black_box(&request), Some(black_box(small.as_str()))))
    });
    c.bench_function("extract_large", |b| {
        b.iter(|| extractor.extract(black_box(&request), Some(black_box(large.as_str()))))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
