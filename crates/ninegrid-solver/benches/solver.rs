//! Benchmarks for the backtracking solver.
//!
//! Measures end-to-end `solve` calls on representative inputs: a typical
//! puzzle, an all-blank board, and an already-complete board.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ninegrid_solver::solve;

const TYPICAL: &str =
    "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";
const SOLVED: &str =
    "769235418851496372432178956174569283395842761628713549283657194516924837947381625";

fn bench_solve(c: &mut Criterion) {
    let empty = ".".repeat(81);
    let puzzles = [
        ("typical", TYPICAL),
        ("empty", empty.as_str()),
        ("complete", SOLVED),
    ];

    for (param, puzzle) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &puzzle, |b, &puzzle| {
            b.iter(|| {
                let solution = solve(hint::black_box(puzzle)).unwrap();
                hint::black_box(solution)
            });
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
