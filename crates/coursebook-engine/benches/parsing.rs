use coursebook_engine::parsing::parse_document;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pulldown_cmark::Parser;
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    for size in [10, 100] {
        let content = common::generate_lesson_content(size);
        group.bench_with_input(BenchmarkId::new("blocks", size), &content, |b, content| {
            b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(content))));
        });
    }

    group.finish();
}

fn bench_pulldown_cmark_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_lesson_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let events: Vec<_> = parser.collect();
            std::hint::black_box(events);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse_document, bench_pulldown_cmark_baseline);
criterion_main!(benches);
