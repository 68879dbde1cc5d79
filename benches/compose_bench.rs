//! Benchmark for the composition layer.
//!
//! Compares composed, piped, curried and lifted functions against the
//! equivalent hand-written call chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fantasia::compose::lift2;
use fantasia::{compose, curry, pipe};
use std::hint::black_box;

fn add_ten(x: i64) -> i64 {
    x + 10
}

fn double(x: i64) -> i64 {
    x * 2
}

fn square(x: i64) -> i64 {
    x * x
}

// =============================================================================
// compose! / pipe!
// =============================================================================

fn benchmark_compose_vs_direct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose_vs_direct");

    let composed = compose!(square, double, add_ten);
    let piped = pipe!(add_ten, double, square);

    group.bench_function("compose_macro", |bencher| {
        bencher.iter(|| black_box(composed(black_box(5))));
    });

    group.bench_function("pipe_macro", |bencher| {
        bencher.iter(|| black_box(piped(black_box(5))));
    });

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| black_box(square(double(add_ten(black_box(5))))));
    });

    group.finish();
}

fn benchmark_compose_depth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose_depth");

    let depth_two = compose!(double, add_ten);
    let depth_four = compose!(double, add_ten, double, add_ten);
    let depth_eight = compose!(
        double, add_ten, double, add_ten, double, add_ten, double, add_ten
    );

    group.bench_with_input(BenchmarkId::new("functions", 2), &2, |bencher, _| {
        bencher.iter(|| black_box(depth_two(black_box(1))));
    });
    group.bench_with_input(BenchmarkId::new("functions", 4), &4, |bencher, _| {
        bencher.iter(|| black_box(depth_four(black_box(1))));
    });
    group.bench_with_input(BenchmarkId::new("functions", 8), &8, |bencher, _| {
        bencher.iter(|| black_box(depth_eight(black_box(1))));
    });

    group.finish();
}

// =============================================================================
// curry! / lift2
// =============================================================================

fn benchmark_curry(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry");

    let curried = curry!(|a: i64, b: i64, c: i64| a * b + c);
    let partial = curried(3);

    group.bench_function("curried_full_application", |bencher| {
        bencher.iter(|| black_box(curried(black_box(3))(black_box(4))(black_box(5))));
    });

    group.bench_function("reused_partial", |bencher| {
        bencher.iter(|| black_box(partial(black_box(4))(black_box(5))));
    });

    group.bench_function("uncurried_closure", |bencher| {
        let function = |a: i64, b: i64, c: i64| a * b + c;
        bencher.iter(|| black_box(function(black_box(3), black_box(4), black_box(5))));
    });

    group.finish();
}

fn benchmark_lift2(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lift2");

    let greet = |greeting: String| move |name: String| format!("{greeting}, {name}");
    let greeting = |_: &(String, String)| String::from("Moin Moin");
    let full_name = |agent: &(String, String)| format!("{} {}", agent.0, agent.1);
    let welcome = lift2(greet, greeting, full_name);
    let agent = (String::from("James"), String::from("Bond"));

    group.bench_function("lifted", |bencher| {
        bencher.iter(|| black_box(welcome(black_box(&agent))));
    });

    group.bench_function("manual", |bencher| {
        bencher.iter(|| {
            let agent = black_box(&agent);
            black_box(greet(greeting(agent))(full_name(agent)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compose_vs_direct,
    benchmark_compose_depth,
    benchmark_curry,
    benchmark_lift2
);

criterion_main!(benches);
