use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rhai::{Dynamic, Engine};

use strutil::config::HostConfig;
use strutil::engine::ScriptEngine;

// =============================================================================
// One-time startup costs
// =============================================================================

fn bench_engine_new_raw(c: &mut Criterion) {
    c.bench_function("engine_new_raw", |b| {
        b.iter(|| {
            black_box(Engine::new());
        });
    });
}

fn bench_function_registration(c: &mut Criterion) {
    let host = HostConfig::default();
    c.bench_function("function_registration", |b| {
        b.iter(|| {
            let mut engine = Engine::new();
            strutil::rhai_functions::register_all_functions(&mut engine, &host);
            black_box(engine);
        });
    });
}

fn bench_script_engine_new(c: &mut Criterion) {
    let host = HostConfig::default();
    c.bench_function("script_engine_new", |b| {
        b.iter(|| {
            black_box(ScriptEngine::new(&host));
        });
    });
}

// =============================================================================
// Per-call costs through the registration layer
// =============================================================================

fn bench_eval_namespaced_call(c: &mut Criterion) {
    let engine = ScriptEngine::new(&HostConfig::default());
    let compiled = engine
        .compile(r#"StringUtils::SearchIndex("The quick brown fox", "FOX", 2)"#)
        .unwrap();
    c.bench_function("eval_namespaced_call", |b| {
        b.iter(|| {
            black_box(engine.eval_compiled(&compiled).unwrap());
        });
    });
}

fn bench_eval_line(c: &mut Criterion) {
    let engine = ScriptEngine::new(&HostConfig::default());
    let compiled = engine
        .compile("ToTitleCase(TrimBoth(ReplaceAll(line, \"_\", \" \")))")
        .unwrap();
    c.bench_function("eval_line_pipeline", |b| {
        b.iter(|| {
            black_box(
                engine
                    .eval_line(&compiled, black_box("  some_snake_case_name  "))
                    .unwrap(),
            );
        });
    });
}

fn bench_eval_array_call(c: &mut Criterion) {
    let engine = ScriptEngine::new(&HostConfig::default());
    let compiled = engine
        .compile(r#"Join(Sort(Split("delta,Alpha,charlie,Bravo", ",")), ",")"#)
        .unwrap();
    c.bench_function("eval_array_call", |b| {
        b.iter(|| {
            let value: Dynamic = engine.eval_compiled(&compiled).unwrap();
            black_box(value);
        });
    });
}

criterion_group!(
    startup_benches,
    bench_engine_new_raw,
    bench_function_registration,
    bench_script_engine_new,
);

criterion_group!(
    eval_benches,
    bench_eval_namespaced_call,
    bench_eval_line,
    bench_eval_array_call,
);

criterion_main!(startup_benches, eval_benches);
