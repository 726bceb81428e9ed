use crate::position::Position;
use thiserror::Error;

/// Result type for the validating constructors of this crate.
pub type Result<T> = std::result::Result<T, MazeError>;

/// Rejections raised when building a [Maze](crate::maze::Maze) or a
/// [Problem](crate::problem::Problem) from untrusted input. The searches themselves never fail;
/// an unreachable goal is reported as a missing path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("{position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Start or goal placed on a blocked cell.
    #[error("start or goal position {position} is on a blocked cell")]
    BlockedEndpoint { position: Position },
}
