use crate::{maze::Maze, position::Position};

pub mod bfs;
pub mod exploration;

/// Outcome of a single search. `path` is [None] when the goal could not be reached; what `cost`
/// counts depends on the solver that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub path: Option<Vec<Position>>,
    pub cost: usize,
    /// Set when the search gave up because its expansion limit was reached, in which case `path`
    /// is [None] even though the goal may be reachable.
    pub limit_reached: bool,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of positions on the path, start and goal included.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Common interface of the maze searches. A solver only holds configuration; all traversal state
/// lives inside a single [solve](Self::solve) call.
pub trait MazeSolver {
    fn name(&self) -> &'static str;

    /// Searches from `start` to `goal`. Both are expected to be open cells of `maze`.
    fn solve(&self, maze: &Maze, start: Position, goal: Position) -> SearchResult;

    fn get_path(&self, maze: &Maze, start: Position, goal: Position) -> Option<Vec<Position>> {
        self.solve(maze, start, goal).path
    }

    fn get_cost(&self, maze: &Maze, start: Position, goal: Position) -> usize {
        self.solve(maze, start, goal).cost
    }
}

/// Checks that `path` runs from `start` to `goal` over open cells using single orthogonal moves
/// and never visits a cell twice.
pub fn is_valid_path(maze: &Maze, path: &[Position], start: &Position, goal: &Position) -> bool {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return false;
    };
    let mut seen = fxhash::FxHashSet::default();
    first == start
        && last == goal
        && path.iter().all(|p| maze.is_open(p) && seen.insert(*p))
        && path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
}
