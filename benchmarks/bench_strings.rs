use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use strutil::strings;

fn sample_text() -> Vec<u8> {
    b"The Quick Brown Fox jumps over the lazy dog. ".repeat(64)
}

fn bench_search_case_insensitive(c: &mut Criterion) {
    let haystack = sample_text();
    c.bench_function("search_case_insensitive", |b| {
        b.iter(|| {
            black_box(strings::search(black_box(&haystack), black_box(b"LAZY DOG!")));
        });
    });
}

fn bench_search_reverse(c: &mut Criterion) {
    let haystack = sample_text();
    c.bench_function("search_reverse", |b| {
        b.iter(|| {
            black_box(strings::search_reverse(black_box(&haystack), black_box(b"quick")));
        });
    });
}

fn bench_replace_all(c: &mut Criterion) {
    let haystack = sample_text();
    c.bench_function("replace_all", |b| {
        b.iter(|| {
            black_box(strings::replace_all(
                black_box(&haystack),
                black_box(b"the"),
                black_box(b"a"),
            ));
        });
    });
}

fn bench_remove_all(c: &mut Criterion) {
    let haystack = sample_text();
    c.bench_function("remove_all", |b| {
        b.iter(|| {
            black_box(strings::remove_all(black_box(&haystack), black_box(b"o")));
        });
    });
}

fn bench_split_join(c: &mut Criterion) {
    let csv = b"alpha,beta,gamma,delta,epsilon,".repeat(32);
    c.bench_function("split_join", |b| {
        b.iter(|| {
            let parts: Vec<Option<Vec<u8>>> = strings::split(black_box(&csv), b",")
                .into_iter()
                .map(Some)
                .collect();
            black_box(strings::join(&parts, b";"));
        });
    });
}

fn bench_sort(c: &mut Criterion) {
    let words = strings::split(&sample_text(), b" ");
    c.bench_function("sort_case_insensitive", |b| {
        b.iter(|| {
            black_box(strings::sort(black_box(words.clone())));
        });
    });
}

fn bench_title_case(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("to_title_case", |b| {
        b.iter(|| {
            black_box(strings::to_title_case(black_box(&text)));
        });
    });
}

criterion_group!(
    search_benches,
    bench_search_case_insensitive,
    bench_search_reverse,
);

criterion_group!(
    transform_benches,
    bench_replace_all,
    bench_remove_all,
    bench_title_case,
);

criterion_group!(collection_benches, bench_split_join, bench_sort);

criterion_main!(search_benches, transform_benches, collection_benches);
