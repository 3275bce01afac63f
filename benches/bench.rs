//! Criterion benchmarks for the Croatian stemmer.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use stemmer_hr::StemmerHr;

const WORDS: &[&str] = &[
    "zašao", "neki", "momak", "šumu", "striborovu", "nije", "znao", "ono", "šuma", "začarana",
    "njoj", "svakojaka", "čuda", "zbivaju", "zbivala", "dobra", "ali", "naopaka", "svakome",
    "zasluzi", "hrvatskoga", "knjigama", "gradovima", "putovanja", "trgom", "prsti", "crkva",
];

/// Generate a test document by cycling through the word list.
fn generate_text(word_count: usize) -> String {
    WORDS
        .iter()
        .cycle()
        .take(word_count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_stem(c: &mut Criterion) {
    let stemmer = StemmerHr::bundled();
    let mut group = c.benchmark_group("stem");
    group.throughput(Throughput::Elements(WORDS.len() as u64));

    group.bench_function("words", |b| {
        b.iter(|| {
            for word in WORDS {
                black_box(stemmer.stem(black_box(word)));
            }
        })
    });

    group.finish();
}

fn bench_stem_text(c: &mut Criterion) {
    let stemmer = StemmerHr::bundled();
    let text = generate_text(1000);
    let mut group = c.benchmark_group("stem_text");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("1000_words", |b| {
        b.iter(|| black_box(stemmer.stem_text(black_box(&text))))
    });

    let documents: Vec<String> = (0..64).map(|_| generate_text(200)).collect();
    group.bench_function("parallel_64_docs", |b| {
        b.iter(|| black_box(stemmer.stem_texts(black_box(&documents))))
    });

    group.finish();
}

criterion_group!(benches, bench_stem, bench_stem_text);
criterion_main!(benches);
