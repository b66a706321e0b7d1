//! Whole-maze operations the command line is built from.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{
    algorithms::{random_seed, rng_from_seed, Algorithm},
    codec,
    config::Limits,
    error::{PreconditionError, Result},
    gameboard::Maze,
    solver::{self, Solution},
    svg::{self, SvgStyle},
};

#[derive(Debug, Clone, Copy)]
pub enum SaveFormat<'a> {
    Binary,
    Svg(&'a SvgStyle),
}

/// Generated maze together with the seed that reproduces it.
#[derive(Debug, Clone)]
pub struct Generated {
    pub maze: Maze,
    pub seed: u64,
}

/// Builds a new maze, drawing a fresh seed when none is given.
///
/// The size is checked before anything is allocated.
pub fn generate(
    width: i32,
    height: i32,
    seed: Option<u64>,
    algorithm: Algorithm,
    limits: &Limits,
) -> Result<Generated> {
    limits.validate(width, height)?;

    let seed = seed.unwrap_or_else(random_seed);
    log::info!("generating {width}x{height} maze using {algorithm} with seed {seed}");

    let mut maze = Maze::new(width, height);
    algorithm
        .generator()
        .generate(&mut maze, &mut rng_from_seed(seed));

    Ok(Generated { maze, seed })
}

pub fn load(path: impl AsRef<Path>, limits: &Limits) -> Result<Maze> {
    let path = path.as_ref();
    log::info!("loading maze from {}", path.display());

    let file = File::open(path)?;
    codec::decode(BufReader::new(file), limits)
}

/// Writes the maze to `path`, creating or truncating the file.
pub fn save(maze: &mut Maze, path: impl AsRef<Path>, format: SaveFormat) -> Result<()> {
    // don't leave an empty file behind for a maze that can't be written
    if !maze.is_initialized() {
        return Err(PreconditionError::Uninitialized.into());
    }

    let path = path.as_ref();
    log::info!("saving maze to {}", path.display());

    let writer = BufWriter::new(File::create(path)?);
    match format {
        SaveFormat::Binary => codec::encode(maze, writer).map(|_| ()),
        SaveFormat::Svg(style) => svg::write_svg(maze, writer, style),
    }
}

pub fn solve(maze: &mut Maze) -> Result<Solution> {
    solver::solve(maze)
}
