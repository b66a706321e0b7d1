//! Grid maze generation, solving and storage.

pub mod algorithms;
pub mod array;
pub mod codec;
pub mod commands;
pub mod config;
pub mod dims;
pub mod error;
pub mod frontier;
pub mod gameboard;
pub mod solver;
pub mod svg;

pub use commands::{generate, load, save, solve, Generated, SaveFormat};
pub use error::{FormatError, LimitsError, MazeError, PreconditionError, Result};
