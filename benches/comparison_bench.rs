use criterion::{criterion_group, criterion_main, Criterion};
use maze_chaining::{BfsSolver, ExplorationSolver, Maze, MazeSolver, Position};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const DENSITY: f64 = 0.3;
const N_SCENARIOS: usize = 32;

fn random_open_position(maze: &Maze, rng: &mut StdRng) -> Position {
    loop {
        let p = Position::new(
            rng.gen_range(0..maze.rows() as i32),
            rng.gen_range(0..maze.cols() as i32),
        );
        if maze.is_open(&p) {
            return p;
        }
    }
}

/// A random maze of the given size with start/goal pairs on open cells, reproducible per size.
fn random_benchmark(n: usize) -> (Maze, Vec<(Position, Position)>) {
    let mut rng = StdRng::seed_from_u64(n as u64);
    let mut blocked = Vec::new();
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            if rng.gen_bool(DENSITY) {
                blocked.push(Position::new(row, col));
            }
        }
    }
    let maze = Maze::new(n, n, blocked);
    let scenarios = (0..N_SCENARIOS)
        .map(|_| {
            (
                random_open_position(&maze, &mut rng),
                random_open_position(&maze, &mut rng),
            )
        })
        .collect();
    (maze, scenarios)
}

fn maze_bench_solver<S, FS>(c: &mut Criterion, create_solver: FS)
where
    S: MazeSolver,
    FS: Fn() -> S,
{
    for n in [16, 64] {
        let (maze, scenarios) = random_benchmark(n);
        let solver = create_solver();
        let name = solver.name();
        c.bench_function(format!("random {n}x{n}, {name}").as_str(), |b| {
            b.iter(|| {
                for (start, end) in &scenarios {
                    black_box(solver.solve(&maze, *start, *end));
                }
            })
        });
    }
}

fn maze_bench_exploration(c: &mut Criterion) {
    maze_bench_solver(c, ExplorationSolver::new);
}

fn maze_bench_bfs(c: &mut Criterion) {
    maze_bench_solver(c, BfsSolver::new);
}

criterion_group!(benches, maze_bench_exploration, maze_bench_bfs);
criterion_main!(benches);
