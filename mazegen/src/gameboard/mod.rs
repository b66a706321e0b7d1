pub mod cell;
pub mod maze;

pub use cell::{Axis, Cell, Direction, Edge};
pub use maze::Maze;
