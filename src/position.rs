use core::fmt;
use grid_util::point::Point;

/// A cell coordinate given as (row, col), both 0-indexed. Rows grow downwards and columns grow
/// to the right. Coordinates are signed so that out-of-range queries such as `(-1, 0)` can be
/// represented and answered with `false` instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// The [Point] used to address the backing grid, with `x` the column and `y` the row.
    pub fn point(&self) -> Point {
        Point::new(self.col, self.row)
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// True if `other` is exactly one orthogonal move away.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Position {
        Position::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> (i32, i32) {
        (p.row, p.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
