use crate::error::{MazeError, Result};
use crate::maze::Maze;
use crate::position::Position;
use crate::solver::{bfs::BfsSolver, exploration::ExplorationSolver, MazeSolver, SearchResult};
use core::fmt;
use itertools::Itertools;
use log::info;

/// A maze together with a validated start and goal. Construction rejects endpoints that lie
/// outside the maze or on a blocked cell, which the searches themselves do not check.
#[derive(Clone, Debug)]
pub struct Problem {
    maze: Maze,
    start: Position,
    goal: Position,
}

/// Results of running both searches on the same [Problem].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub exploration: SearchResult,
    pub optimized: SearchResult,
}

impl Problem {
    pub fn new(maze: Maze, start: Position, goal: Position) -> Result<Problem> {
        for position in [start, goal] {
            if !maze.in_bounds(&position) {
                return Err(MazeError::OutOfBounds {
                    position,
                    rows: maze.rows(),
                    cols: maze.cols(),
                });
            }
            if maze.is_blocked(&position) {
                return Err(MazeError::BlockedEndpoint { position });
            }
        }
        Ok(Problem { maze, start, goal })
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Runs both searches with their default configuration.
    pub fn solve(&self) -> Report {
        self.solve_with(&ExplorationSolver::new(), &BfsSolver::new())
    }

    /// Runs the two given solvers independently; neither sees the other's traversal state.
    pub fn solve_with<E, O>(&self, exploration: &E, optimized: &O) -> Report
    where
        E: MazeSolver,
        O: MazeSolver,
    {
        if self.maze.reachable(&self.start, &self.goal) {
            info!("{} is reachable from {}, computing paths", self.goal, self.start);
        } else {
            info!("{} is not reachable from {}", self.goal, self.start);
        }
        let exploration_result = exploration.solve(&self.maze, self.start, self.goal);
        let optimized_result = optimized.solve(&self.maze, self.start, self.goal);
        info!(
            "{}: cost {}; {}: cost {}",
            exploration.name(),
            exploration_result.cost,
            optimized.name(),
            optimized_result.cost
        );
        Report {
            exploration: exploration_result,
            optimized: optimized_result,
        }
    }

    /// The maze drawn with the shortest path of `report` on it.
    pub fn render(&self, report: &Report) -> String {
        let path = report.optimized.path.as_deref();
        self.maze.render(&self.start, &self.goal, path)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.exploration.path {
            Some(path) => {
                writeln!(f, "Path found: [{}]", path.iter().join(", "))?;
                writeln!(f, "Exploration Cost: {}", self.exploration.cost)?;
            }
            None => writeln!(f, "No path found.")?,
        }
        write!(f, "Optimized Cost: {}", self.optimized.cost)
    }
}
