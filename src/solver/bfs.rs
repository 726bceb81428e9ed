use indexmap::map::Entry::Vacant;
use log::{debug, warn};
use std::collections::VecDeque;
use std::hash::Hash;

use crate::{maze::Maze, position::Position, solver::MazeSolver, solver::SearchResult, FxIndexMap};

/// Breadth-first search. The cost is the number of moves on the returned path, which is minimal;
/// among minimal paths the fixed move rule order decides which one is returned. No path gives a
/// cost of 0.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver {
    /// Gives up after this many positions have been dequeued and expanded.
    pub max_expansions: Option<usize>,
}

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver {
            max_expansions: None,
        }
    }

    pub fn with_max_expansions(max_expansions: usize) -> BfsSolver {
        BfsSolver {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Follows parent indices back from `start` and returns the nodes in forward order.
fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &parent)| {
            *i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

impl MazeSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn solve(&self, maze: &Maze, start: Position, goal: Position) -> SearchResult {
        // Doubles as the visited set: a position is in here from the moment it is enqueued.
        let mut parents: FxIndexMap<Position, usize> = FxIndexMap::default();
        parents.insert(start, usize::MAX);
        let mut queue: VecDeque<usize> = VecDeque::from([0]);
        let mut expansions = 0;

        while let Some(index) = queue.pop_front() {
            let Some((&position, _)) = parents.get_index(index) else {
                continue;
            };
            if position == goal {
                let path = reverse_path(&parents, index);
                let cost = path.len() - 1;
                debug!(
                    "BFS reached {goal} from {start} in {cost} moves, visited {} cells",
                    parents.len()
                );
                return SearchResult {
                    path: Some(path),
                    cost,
                    limit_reached: false,
                };
            }
            if self.max_expansions.is_some_and(|max| expansions >= max) {
                warn!("BFS from {start} stopped after {expansions} expansions");
                return SearchResult {
                    path: None,
                    cost: 0,
                    limit_reached: true,
                };
            }
            expansions += 1;
            for successor in maze.successors(&position) {
                if let Vacant(e) = parents.entry(successor) {
                    queue.push_back(e.index());
                    e.insert(index);
                }
            }
        }
        debug!(
            "BFS found no path from {start} to {goal}, visited {} cells",
            parents.len()
        );
        SearchResult {
            path: None,
            cost: 0,
            limit_reached: false,
        }
    }
}
