use crate::error::{MazeError, Result};
use crate::moves::Move;
use crate::position::Position;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [Maze] stores which cells are blocked in a [BoolGrid] (`true` meaning blocked) and keeps the
/// connected components of the open cells in a [UnionFind] so that reachability can be answered
/// without searching. A maze is fixed once built; searches only ever borrow it immutably, so one
/// maze can serve any number of concurrent searches.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: BoolGrid,
    rows: usize,
    cols: usize,
    components: UnionFind<usize>,
}

impl Maze {
    /// Builds a `rows` x `cols` maze with the given blocked cells. Blocked cells outside the grid
    /// are skipped with a warning; use [try_new](Self::try_new) to reject them instead.
    pub fn new<I>(rows: usize, cols: usize, blocked: I) -> Maze
    where
        I: IntoIterator<Item = Position>,
    {
        let mut maze = Maze {
            grid: BoolGrid::new(cols, rows, false),
            rows,
            cols,
            components: UnionFind::new(rows * cols),
        };
        for p in blocked {
            if maze.in_bounds(&p) {
                maze.grid.set(p.col, p.row, true);
            } else {
                warn!("Skipping blocked cell {p} outside the {rows}x{cols} grid");
            }
        }
        maze.generate_components();
        maze
    }

    /// A maze without blocked cells.
    pub fn open(rows: usize, cols: usize) -> Maze {
        Maze::new(rows, cols, std::iter::empty())
    }

    /// Like [new](Self::new), but rejects empty dimensions and blocked cells outside the grid.
    pub fn try_new<I>(rows: usize, cols: usize, blocked: I) -> Result<Maze>
    where
        I: IntoIterator<Item = Position>,
    {
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyGrid { rows, cols });
        }
        let blocked = blocked.into_iter().collect::<Vec<Position>>();
        if let Some(&position) = blocked
            .iter()
            .find(|p| !(0..rows as i32).contains(&p.row) || !(0..cols as i32).contains(&p.col))
        {
            return Err(MazeError::OutOfBounds {
                position,
                rows,
                cols,
            });
        }
        Ok(Maze::new(rows, cols, blocked))
    }

    /// Parses a maze drawn with one line per row, `#` marking a blocked cell and any other
    /// character an open one. Surrounding whitespace on each line is ignored, as are empty lines.
    pub fn from_ascii(text: &str) -> Result<Maze> {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<&str>>();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut blocked = Vec::new();
        for (r, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MazeError::RaggedRow {
                    row: r,
                    expected: cols,
                    found,
                });
            }
            blocked.extend(
                line.chars()
                    .enumerate()
                    .filter(|(_, ch)| *ch == '#')
                    .map(|(c, _)| Position::new(r as i32, c as i32)),
            );
        }
        Maze::try_new(rows, cols, blocked)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        self.grid.point_in_bounds(pos.point())
    }

    /// True iff `pos` lies inside the grid and is not blocked. Never panics, whatever the input.
    pub fn is_open(&self, pos: &Position) -> bool {
        self.in_bounds(pos) && !self.grid.get_point(pos.point())
    }

    pub fn is_blocked(&self, pos: &Position) -> bool {
        self.in_bounds(pos) && self.grid.get_point(pos.point())
    }

    /// All blocked cells in row-major order.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|p| self.is_blocked(p))
    }

    pub fn open_cell_count(&self) -> usize {
        self.positions().filter(|p| self.is_open(p)).count()
    }

    fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| Position::new(r, c)))
    }

    /// The open neighbours of `pos`, in the fixed rule order of [Move::ALL]. A rule contributes
    /// only if its guard holds on `pos`.
    pub fn successors(&self, pos: &Position) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        Move::ALL
            .iter()
            .filter(|m| m.guard(self, pos))
            .map(|m| m.apply(pos))
            .filter(|n| self.is_open(n))
            .collect()
    }

    fn ix(&self, pos: &Position) -> usize {
        self.grid.get_ix_point(&pos.point())
    }

    /// Retrieves the component id a given open [Position] belongs to.
    pub fn get_component(&self, pos: &Position) -> Option<usize> {
        self.is_open(pos).then(|| self.components.find(self.ix(pos)))
    }

    /// Checks if start and goal are open cells on the same connected component.
    pub fn reachable(&self, start: &Position, goal: &Position) -> bool {
        self.is_open(start)
            && self.is_open(goal)
            && self.components.equiv(self.ix(start), self.ix(goal))
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Position, goal: &Position) -> bool {
        !self.reachable(start, goal)
    }

    /// Links up open 4-neighbours into the same components. Linking each cell with its lower and
    /// right neighbour covers every edge once.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        for p in self.positions().collect::<Vec<_>>() {
            if !self.is_open(&p) {
                continue;
            }
            let parent_ix = self.ix(&p);
            for n in [Move::Down.apply(&p), Move::Right.apply(&p)] {
                if self.is_open(&n) {
                    let ix = self.ix(&n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
        info!(
            "Generated connected components for {}x{} maze ({} open cells)",
            self.rows,
            self.cols,
            self.open_cell_count()
        );
    }

    /// Draws the maze one row per line: `S` start, `G` goal, `*` a cell on `path`, `#` blocked and
    /// `.` open.
    pub fn render(&self, start: &Position, goal: &Position, path: Option<&[Position]>) -> String {
        let on_path = |p: &Position| path.map_or(false, |path| path.contains(p));
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for r in 0..self.rows as i32 {
            for c in 0..self.cols as i32 {
                let p = Position::new(r, c);
                let ch = if p == *start {
                    'S'
                } else if p == *goal {
                    'G'
                } else if on_path(&p) {
                    '*'
                } else if self.is_blocked(&p) {
                    '#'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for r in 0..self.rows as i32 {
            let line = (0..self.cols as i32)
                .map(|c| {
                    if self.is_blocked(&Position::new(r, c)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_respects_bounds_and_blocks() {
        let maze = Maze::new(2, 3, [Position::new(1, 1)]);
        assert!(maze.is_open(&Position::new(0, 0)));
        assert!(maze.is_open(&Position::new(1, 2)));
        assert!(!maze.is_open(&Position::new(1, 1)));
        assert!(!maze.is_open(&Position::new(-1, 0)));
        assert!(!maze.is_open(&Position::new(0, -1)));
        assert!(!maze.is_open(&Position::new(2, 0)));
        assert!(!maze.is_open(&Position::new(0, 3)));
        assert_eq!(maze.open_cell_count(), 5);
    }

    #[test]
    fn new_skips_out_of_bounds_blocks() {
        let maze = Maze::new(2, 2, [Position::new(5, 5), Position::new(0, 1)]);
        assert_eq!(maze.blocked_cells().collect::<Vec<_>>(), vec![Position::new(0, 1)]);
    }

    #[test]
    fn try_new_validates() {
        assert_eq!(
            Maze::try_new(0, 3, std::iter::empty()).unwrap_err(),
            MazeError::EmptyGrid { rows: 0, cols: 3 }
        );
        assert_eq!(
            Maze::try_new(2, 2, [Position::new(2, 0)]).unwrap_err(),
            MazeError::OutOfBounds {
                position: Position::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
        assert!(Maze::try_new(2, 2, [Position::new(1, 1)]).is_ok());
    }

    #[test]
    fn parses_ascii() {
        let maze = Maze::from_ascii(
            "
            .#.
            .#.
            ...
            ",
        )
        .unwrap();
        assert_eq!((maze.rows(), maze.cols()), (3, 3));
        assert!(maze.is_blocked(&Position::new(0, 1)));
        assert!(maze.is_blocked(&Position::new(1, 1)));
        assert!(maze.is_open(&Position::new(2, 1)));
        assert_eq!(maze.to_string(), ".#.\n.#.\n...\n");
    }

    #[test]
    fn ragged_ascii_is_rejected() {
        assert_eq!(
            Maze::from_ascii("...\n..").unwrap_err(),
            MazeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn successors_follow_rule_order() {
        let maze = Maze::open(3, 3);
        let centre = Position::new(1, 1);
        assert_eq!(
            maze.successors(&centre).to_vec(),
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2)
            ]
        );
        let blocked = Maze::new(3, 3, [Position::new(0, 1), Position::new(1, 2)]);
        assert_eq!(
            blocked.successors(&centre).to_vec(),
            vec![Position::new(2, 1), Position::new(1, 0)]
        );
        assert!(maze.successors(&Position::new(0, 0)).len() == 2);
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        // |.#.|
        let maze = Maze::new(
            3,
            3,
            [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
        );
        let left = Position::new(0, 0);
        assert!(maze.reachable(&left, &Position::new(2, 0)));
        assert!(maze.unreachable(&left, &Position::new(0, 2)));
        assert!(maze.unreachable(&left, &Position::new(1, 1)));
        assert_eq!(maze.get_component(&Position::new(1, 1)), None);
        assert_eq!(
            maze.get_component(&Position::new(0, 2)),
            maze.get_component(&Position::new(2, 2))
        );
    }

    /// Diagonal contact does not connect cells on a 4-grid.
    #[test]
    fn diagonal_cells_are_not_connected() {
        // |.#|
        // |#.|
        let maze = Maze::new(2, 2, [Position::new(0, 1), Position::new(1, 0)]);
        assert!(maze.unreachable(&Position::new(0, 0), &Position::new(1, 1)));
    }

    #[test]
    fn renders_path() {
        let maze = Maze::new(2, 3, [Position::new(1, 1)]);
        let path = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(
            maze.render(&Position::new(0, 0), &Position::new(0, 2), Some(&path)),
            "S*G\n.#.\n"
        );
        assert_eq!(
            maze.render(&Position::new(0, 0), &Position::new(0, 2), None),
            "S.G\n.#.\n"
        );
    }
}
