//! Benchmarks for text rules and rule-set evaluation.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fieldrule::prelude::*;

// ============================================================================
// SINGLE RULES
// ============================================================================

fn bench_required(c: &mut Criterion) {
    let mut group = c.benchmark_group("required");
    let rule = required();

    group.bench_function("valid", |b| b.iter(|| rule.validate(black_box("hello"))));
    group.bench_function("whitespace_only", |b| {
        b.iter(|| rule.validate(black_box("      ")))
    });

    group.finish();
}

fn bench_min_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_length");
    let rule = min_length(5);

    group.bench_function("valid", |b| {
        b.iter(|| rule.validate(black_box("hello world")))
    });
    group.bench_function("invalid", |b| b.iter(|| rule.validate(black_box("hi"))));

    group.finish();
}

fn bench_min_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_length_scaling");
    let rule = min_length(5);

    for size in [10, 1_000, 100_000] {
        let input = "a".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| rule.validate(black_box(&input)));
        });
    }

    group.finish();
}

fn bench_min_uppercase(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_uppercase");
    let rule = min_uppercase(2);

    group.bench_function("valid", |b| b.iter(|| rule.validate(black_box("AbC"))));
    group.bench_function("invalid", |b| b.iter(|| rule.validate(black_box("abc"))));
    group.bench_function("uncased_mode", |b| {
        let rule = MinUppercase::uncased(2);
        b.iter(|| rule.validate(black_box("a1b2c3")));
    });

    group.finish();
}

// ============================================================================
// RULE SETS
// ============================================================================

fn bench_rule_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_set");

    let collect_all = RuleSet::new()
        .rule(required())
        .rule(min_length(8))
        .rule(min_uppercase(1));
    let fail_fast = RuleSet::new()
        .with_mode(EvaluationMode::FailFast)
        .rule(required())
        .rule(min_length(8))
        .rule(min_uppercase(1));

    group.bench_function("collect_all_passing", |b| {
        b.iter(|| collect_all.evaluate(black_box("Password")))
    });
    group.bench_function("collect_all_failing", |b| {
        b.iter(|| collect_all.evaluate(black_box("")))
    });
    group.bench_function("fail_fast_failing", |b| {
        b.iter(|| fail_fast.evaluate(black_box("")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_required,
    bench_min_length,
    bench_min_length_scaling,
    bench_min_uppercase,
    bench_rule_set,
);
criterion_main!(benches);
