use maze_chaining::{Maze, MazeError, Position, Problem};

// A full middle column separates the start from the goal:
//  ___
// |S#E|
// | # |
// | # |
//  ___
// Both searches report that no path exists. Placing the goal on the wall itself is rejected
// before any search runs.

fn main() -> Result<(), MazeError> {
    let maze = Maze::from_ascii(
        "
        .#.
        .#.
        .#.
        ",
    )?;
    let start = Position::new(0, 0);
    let problem = Problem::new(maze.clone(), start, Position::new(0, 2))?;
    println!("{}", problem.solve());

    match Problem::new(maze, start, Position::new(1, 1)) {
        Ok(_) => println!("Unexpectedly accepted a blocked goal"),
        Err(e) => println!("Rejected: {e}"),
    }
    Ok(())
}
