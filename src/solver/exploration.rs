use fxhash::FxHashSet;
use log::{debug, trace, warn};

use crate::{maze::Maze, position::Position, solver::MazeSolver, solver::SearchResult, FxIndexMap};

/// Forward-chaining exploration. The frontier is a fact base mapping each derived but not yet
/// expanded position to the path that derived it. Every round takes the whole fact base as a
/// snapshot, checks each fact against the goal in insertion order and fires the move rules on it;
/// facts derived during a round are only looked at in the next one.
///
/// The reported cost is the size of the explored set, i.e. the number of distinct cells ever
/// added to the fact base. The start seeds the fact base but not the explored set, so it is only
/// counted if a neighbour derives it again. The returned path is some valid path and is not
/// guaranteed to be a shortest one.
#[derive(Clone, Debug, Default)]
pub struct ExplorationSolver {
    /// Gives up after this many positions have been expanded.
    pub max_expansions: Option<usize>,
}

impl ExplorationSolver {
    pub fn new() -> ExplorationSolver {
        ExplorationSolver {
            max_expansions: None,
        }
    }

    pub fn with_max_expansions(max_expansions: usize) -> ExplorationSolver {
        ExplorationSolver {
            max_expansions: Some(max_expansions),
        }
    }
}

impl MazeSolver for ExplorationSolver {
    fn name(&self) -> &'static str {
        "exploration"
    }

    fn solve(&self, maze: &Maze, start: Position, goal: Position) -> SearchResult {
        let mut facts: FxIndexMap<Position, Vec<Position>> = FxIndexMap::default();
        facts.insert(start, vec![start]);
        let mut explored: FxHashSet<Position> = FxHashSet::default();
        let mut expansions = 0;
        let mut round = 0;

        while !facts.is_empty() {
            // Everything derived so far is the snapshot; new facts go into a fresh map that
            // becomes the next round's snapshot.
            let snapshot = std::mem::take(&mut facts);
            trace!("Round {round}: {} facts to expand", snapshot.len());
            for (position, path) in snapshot {
                if position == goal {
                    debug!(
                        "Exploration reached {goal} from {start} in round {round}, explored {}",
                        explored.len()
                    );
                    return SearchResult {
                        path: Some(path),
                        cost: explored.len(),
                        limit_reached: false,
                    };
                }
                if self.max_expansions.is_some_and(|max| expansions >= max) {
                    warn!("Exploration from {start} stopped after {expansions} expansions");
                    return SearchResult {
                        path: None,
                        cost: explored.len(),
                        limit_reached: true,
                    };
                }
                expansions += 1;
                for new_position in maze.successors(&position) {
                    if explored.insert(new_position) {
                        let mut new_path = Vec::with_capacity(path.len() + 1);
                        new_path.extend_from_slice(&path);
                        new_path.push(new_position);
                        facts.insert(new_position, new_path);
                    }
                }
            }
            round += 1;
        }
        debug!(
            "Exploration found no path from {start} to {goal}, explored {} cells",
            explored.len()
        );
        SearchResult {
            path: None,
            cost: explored.len(),
            limit_reached: false,
        }
    }
}
