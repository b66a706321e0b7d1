pub mod division;
pub mod growing_tree;

use std::{fmt, str::FromStr};

use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gameboard::Maze;
pub use division::{RecursiveDivision, Region, Strategy, WallLine, GRANULARITY};
pub use growing_tree::{Bias, GrowingTree};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub fn random_seed() -> u64 {
    thread_rng().gen()
}

pub fn rng_from_seed(seed: u64) -> Random {
    Random::seed_from_u64(seed)
}

pub trait MazeGenerator: fmt::Debug {
    /// Marks the maze initialized and carves a spanning tree into it.
    ///
    /// The maze must already have its final size. All randomness comes from `rng`, so the same
    /// stream always produces the same maze.
    fn generate(&self, maze: &mut Maze, rng: &mut Random);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Growing tree, always extending from the newest cell.
    #[default]
    Backtracker,
    /// Growing tree, extending from a random frontier cell.
    Prim,
    /// Recursive division on the call stack.
    Division,
    /// Recursive division driven by an explicit region stack.
    DivisionStack,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Backtracker,
        Algorithm::Prim,
        Algorithm::Division,
        Algorithm::DivisionStack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Backtracker => "backtracker",
            Self::Prim => "prim",
            Self::Division => "division",
            Self::DivisionStack => "division-stack",
        }
    }

    pub fn generator(self) -> Box<dyn MazeGenerator> {
        match self {
            Self::Backtracker => Box::new(GrowingTree::backtracker()),
            Self::Prim => Box::new(GrowingTree::prim()),
            Self::Division => Box::new(RecursiveDivision::recursive()),
            Self::DivisionStack => Box::new(RecursiveDivision::stack()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm '{0}', expected one of: backtracker, prim, division, division-stack")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
