use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossfill::puzzle::{Direction, Puzzle, Variable};
use crossfill::solver::{
    backtracking::BacktrackingSearch, best_first::BestFirstSearch, strategy::SearchStrategy,
};

/// A 5x5 grid with three across and two down slots, and a vocabulary large
/// enough to make the heuristics do some work.
fn bench_puzzle() -> Puzzle {
    let variables = vec![
        Variable::new(0, 0, Direction::Across, 5),
        Variable::new(2, 0, Direction::Across, 5),
        Variable::new(4, 0, Direction::Across, 5),
        Variable::new(0, 0, Direction::Down, 5),
        Variable::new(0, 4, Direction::Down, 5),
    ];
    let crossings = [
        ((0, 3), (0, 0)),
        ((0, 4), (4, 0)),
        ((1, 3), (0, 2)),
        ((1, 4), (4, 2)),
        ((2, 3), (0, 4)),
        ((2, 4), (4, 4)),
    ];
    // One valid fill: CLASS / DRONE / RIDGE across, CEDAR / SIEGE down.
    let words = [
        "CLASS", "DRONE", "RIDGE", "CEDAR", "SIEGE", "CRANE", "SPARE", "STONE", "TIGER", "ROAST",
        "DRAIN", "CIDER", "SLEEP", "GRAPE", "LEDGE", "CHESS", "SCENE", "RINSE", "EAGLE", "MOUSE",
    ];

    Puzzle::new(
        5,
        5,
        variables,
        words.map(String::from),
        &crossings,
    )
    .unwrap()
}

fn backtracking_benchmark(c: &mut Criterion) {
    let puzzle = bench_puzzle();
    let solver = BacktrackingSearch::with_default_heuristics();

    c.bench_function("backtracking 5x5", |b| {
        b.iter(|| {
            let (assignment, _stats) = solver.solve(black_box(&puzzle)).unwrap();
            black_box(assignment)
        })
    });
}

fn best_first_benchmark(c: &mut Criterion) {
    let puzzle = bench_puzzle();
    let solver = BestFirstSearch::new();

    c.bench_function("best-first 5x5", |b| {
        b.iter(|| {
            let (assignment, _stats) = solver.solve(black_box(&puzzle)).unwrap();
            black_box(assignment)
        })
    });
}

criterion_group!(benches, backtracking_benchmark, best_first_benchmark);
criterion_main!(benches);
