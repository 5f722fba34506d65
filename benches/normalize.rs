use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ttsnorm::{eval::BUILTIN_SAMPLES, normalize, TextNormalizer};

fn long_paragraph(repeats: usize) -> String {
    BUILTIN_SAMPLES
        .iter()
        .map(|s| s.original)
        .cycle()
        .take(BUILTIN_SAMPLES.len() * repeats)
        .collect::<Vec<_>>()
        .join("  \n")
}

fn bench_samples(c: &mut Criterion) {
    c.bench_function("normalize_builtin_samples", |b| {
        b.iter(|| {
            for sample in BUILTIN_SAMPLES {
                black_box(normalize(black_box(sample.original)).unwrap());
            }
        })
    });
}

fn bench_paragraph(c: &mut Criterion) {
    let pp = TextNormalizer::new();
    let text = long_paragraph(40);
    c.bench_function("normalize_paragraph_200_sentences", |b| {
        b.iter(|| black_box(pp.process(black_box(&text)).unwrap()))
    });
}

fn bench_ascii_fast_path(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(100);
    c.bench_function("convert_to_ascii_pure_ascii", |b| {
        b.iter(|| black_box(ttsnorm::normalize::convert_to_ascii(black_box(&text))))
    });
}

criterion_group!(benches, bench_samples, bench_paragraph, bench_ascii_fast_path);
criterion_main!(benches);
