//! # maze_chaining
//!
//! Pathfinding on a 4-connected grid maze with two searches that report different costs:
//!
//! - [ExplorationSolver](solver::exploration::ExplorationSolver) treats reachable cells as facts
//!   derived by [forward chaining](https://en.wikipedia.org/wiki/Forward_chaining): every round it
//!   fires the four [move rules](moves::Move) on the whole current frontier. Its cost is the number
//!   of distinct cells it discovered.
//! - [BfsSolver](solver::bfs::BfsSolver) is a
//!   [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) whose cost is the
//!   minimum number of moves.
//!
//! Both run on a read-only [Maze], which also pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) so reachability
//! can be checked without searching. [Problem] validates a start and goal and runs both searches.
//!
//! ```
//! use maze_chaining::{Maze, Position, Problem};
//!
//! let maze = Maze::from_ascii(
//!     "
//!     ...
//!     .#.
//!     ...
//!     ",
//! )
//! .unwrap();
//! let report = Problem::new(maze, Position::new(0, 0), Position::new(2, 2))
//!     .unwrap()
//!     .solve();
//! assert_eq!(report.optimized.cost, 4);
//! assert!(report.exploration.found());
//! ```
mod error;
pub mod maze;
pub mod moves;
pub mod position;
pub mod problem;
pub mod solver;

pub use crate::error::{MazeError, Result};
pub use crate::maze::Maze;
pub use crate::moves::Move;
pub use crate::position::Position;
pub use crate::problem::{Problem, Report};
pub use crate::solver::{bfs::BfsSolver, exploration::ExplorationSolver, MazeSolver, SearchResult};

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Inline capacity for successor lists, one slot per move rule.
pub(crate) const N_SMALLVEC_SIZE: usize = 4;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
