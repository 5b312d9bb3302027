use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use notemark_engine::render;
use pulldown_cmark::{Parser, html};
mod common;

fn bench_render_vs_pulldown_cmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });
    group.bench_function("notemark_baseline", |b| {
        b.iter(|| std::hint::black_box(render(std::hint::black_box(&content))));
    });

    group.finish();
}

fn bench_dialect_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("dialect");
    group.sample_size(10);

    for size in [10, 100, 1000] {
        let content = common::generate_dialect_content(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| std::hint::black_box(render(content)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_vs_pulldown_cmark, bench_dialect_sizes);
criterion_main!(benches);
