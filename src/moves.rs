use crate::maze::Maze;
use crate::position::Position;
use core::fmt;

/// The four orthogonal move rules shared by both searches.
///
/// Each rule pairs a transform with a guard on the source position. The guard keeps the transform
/// from producing a coordinate outside the grid, and [Move::ALL] fixes the order in which rules are
/// tried: up, down, left, right. That order decides which neighbour is discovered first and hence
/// which path wins among equal-length candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Move::Up => "move_up",
            Move::Down => "move_down",
            Move::Left => "move_left",
            Move::Right => "move_right",
        }
    }

    /// Row and column delta of the transform.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// Must hold on `pos` before [apply](Self::apply) is attempted.
    pub fn guard(&self, maze: &Maze, pos: &Position) -> bool {
        match self {
            Move::Up => pos.row > 0,
            Move::Down => pos.row < maze.rows() as i32 - 1,
            Move::Left => pos.col > 0,
            Move::Right => pos.col < maze.cols() as i32 - 1,
        }
    }

    pub fn apply(&self, pos: &Position) -> Position {
        let (dr, dc) = self.delta();
        Position::new(pos.row + dr, pos.col + dc)
    }

    /// The move leading from `from` to the adjacent `to`, if any.
    pub fn between(from: &Position, to: &Position) -> Option<Move> {
        Move::ALL.into_iter().find(|m| m.apply(from) == *to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
