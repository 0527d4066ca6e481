//! Benchmarks for streaming segmentation throughput

use cleaver_engine::{Segmenter, Token};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;

/// Generate mixed-script text of roughly `size_kb` kilobytes
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "中华人民共和国成立于1949年。Paoding cuts the ox in 3.5 strokes! 研究生命起源。 ";
    let repetitions = (size_kb * 1024) / base_text.len() + 1;
    base_text.repeat(repetitions)
}

fn benchmark_segment_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_str");
    let segmenter = Segmenter::new().unwrap();

    for size_kb in [64, 1024] {
        let text = generate_test_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{size_kb}KB"), |b| {
            b.iter(|| {
                let _tokens = segmenter.segment_str(black_box(&text)).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_streaming_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming_chunk_size");
    group.sample_size(20);

    let text = generate_test_text(1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for chunk_size in [256, 4 * 1024, 64 * 1024] {
        let segmenter = Segmenter::builder().chunk_size(chunk_size).build().unwrap();
        group.bench_function(format!("{chunk_size}B"), |b| {
            b.iter(|| {
                let mut tokens: Vec<Token> = Vec::new();
                segmenter
                    .segment_into(Cursor::new(black_box(text.as_bytes())), &mut tokens)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_segment_str,
    benchmark_streaming_chunk_sizes
);
criterion_main!(benches);
