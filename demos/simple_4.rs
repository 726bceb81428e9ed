use maze_chaining::{Maze, Position, Problem};

// In this example both searches run on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Moves are restricted to up, down, left and right.

fn main() {
    let maze = Maze::new(3, 3, [Position::new(1, 1)]);
    println!("{}", maze);
    let start = Position::new(0, 0);
    let end = Position::new(2, 2);
    let problem = Problem::new(maze, start, end).unwrap();
    let report = problem.solve();
    println!("{}", report);
    println!();
    print!("{}", problem.render(&report));
}
