use concord_core::lines::index_lines;
use concord_core::tokenizer::tokenize;
use concord_core::ConcordanceBuilder;
use criterion::{criterion_group, criterion_main, Criterion};

fn sample_text() -> String {
    "It was the best of times, it was the worst of times; a well-\nknown age of co-\noperation and com -\npetition.\n"
        .repeat(500)
}

fn bench_tokenize(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("tokenize", |b| b.iter(|| tokenize(&text)));
    c.bench_function("index_lines", |b| b.iter(|| index_lines(&text)));
    c.bench_function("build_concordance", |b| {
        b.iter(|| {
            let mut builder = ConcordanceBuilder::new();
            builder.add_document("a.txt", &text);
            builder.add_document("b.txt", &text);
            builder.build()
        })
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
