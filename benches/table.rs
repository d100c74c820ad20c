//! Truth table generation benchmarks.
//!
//! Measures the cost of conversion (once per expression) against evaluation (once per row).
//!
//! Run with:
//! ```bash
//! cargo bench --bench table
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use truth_table::enumerate::enumerate;
use truth_table::normalize::lex;
use truth_table::postfix::to_postfix;
use truth_table::table::validate_and_build_table;
use truth_table::types::Var;

const EXPRESSIONS: [&str; 4] = [
    "p & q | r",
    "!(p → q) ↔ (p & !q)",
    "(p V q V r) & (s -> t)",
    "p ⊕ q ⊕ r ⊕ s ⊕ t",
];

fn bench_build_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_table");

    for n in 1..=5 {
        let exprs: Vec<&str> = EXPRESSIONS
            .iter()
            .copied()
            .filter(|e| {
                truth_table::extract_variables(e)
                    .iter()
                    .all(|v| "pqrst"[..n].contains(v.name()))
            })
            .chain(["p"])
            .collect();
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::new("vars", n), &exprs, |b, exprs| {
            b.iter(|| validate_and_build_table(n, black_box(exprs)).unwrap());
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_postfix");

    for expr in EXPRESSIONS {
        let tokens = lex(expr).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(expr), &tokens, |b, tokens| {
            b.iter(|| to_postfix(black_box(tokens)).unwrap());
        });
    }

    group.finish();
}

fn bench_evaluate_rows(c: &mut Criterion) {
    let vars: Vec<Var> = "pqrst".chars().map(Var::new).collect();
    let postfix = to_postfix(&lex(EXPRESSIONS[3]).unwrap()).unwrap();

    c.bench_function("evaluate_all_rows", |b| {
        b.iter(|| {
            enumerate(&vars)
                .filter(|a| postfix.evaluate(a).unwrap())
                .count()
        });
    });
}

criterion_group!(benches, bench_build_table, bench_convert, bench_evaluate_rows);

criterion_main!(benches);
