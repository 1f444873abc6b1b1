//! Benchmark request input validation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sora::similar::SimilarQuery;
use sora_common::{Page, TvId};

fn bench_query_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_parsing");

    group.bench_function("tv_id_valid", |b| {
        b.iter(|| TvId::parse(black_box("1399")));
    });

    group.bench_function("tv_id_invalid", |b| {
        b.iter(|| TvId::parse(black_box("12abc")));
    });

    group.bench_function("page_clamped", |b| {
        b.iter(|| Page::from_query(black_box(Some("50000"))));
    });

    group.bench_function("similar_query", |b| {
        b.iter(|| SimilarQuery::parse(black_box("1399"), black_box(Some("3"))));
    });

    group.finish();
}

criterion_group!(benches, bench_query_parsing);
criterion_main!(benches);
