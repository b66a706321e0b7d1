use rand::Rng as _;

use super::{MazeGenerator, Random};
use crate::{
    dims::Dims,
    gameboard::{Direction, Maze},
};

/// Regions with this many cells or fewer along either axis are not divided any further.
pub const GRANULARITY: i32 = 1;

/// Direction in which a dividing wall line runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallLine {
    /// Runs along x, between two rows, cutting north/south passages.
    Horizontal,
    /// Runs along y, between two columns, cutting east/west passages.
    Vertical,
}

impl WallLine {
    pub fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Rectangle of cells with inclusive bounds, plus the direction of its next wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub low_x: i32,
    pub high_x: i32,
    pub low_y: i32,
    pub high_y: i32,
    pub wall: WallLine,
}

impl Region {
    pub fn whole(size: Dims, wall: WallLine) -> Self {
        Self {
            low_x: 0,
            high_x: size.0 - 1,
            low_y: 0,
            high_y: size.1 - 1,
            wall,
        }
    }

    pub fn span_x(&self) -> i32 {
        self.high_x - self.low_x + 1
    }

    pub fn span_y(&self) -> i32 {
        self.high_y - self.low_y + 1
    }

    pub fn is_terminal(&self) -> bool {
        self.span_x() <= GRANULARITY || self.span_y() <= GRANULARITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Plain function recursion.
    Recursive,
    /// Explicit LIFO stack of regions instead of the call stack.
    Stack,
}

/// Recursive division: start fully open, then keep cutting regions in two with a wall line
/// that has a single gap.
#[derive(Debug, Clone, Copy)]
pub struct RecursiveDivision {
    pub strategy: Strategy,
}

impl RecursiveDivision {
    pub fn recursive() -> Self {
        Self {
            strategy: Strategy::Recursive,
        }
    }

    pub fn stack() -> Self {
        Self {
            strategy: Strategy::Stack,
        }
    }

    /// Cuts one wall line through the region and returns the two halves, or `None` for a
    /// terminal region.
    ///
    /// A horizontal line sits between rows `wall_y` and `wall_y + 1`, a vertical one between
    /// columns `wall_x` and `wall_x + 1`. Every passage crossing the line is removed except at
    /// one gap, drawn uniformly from the cells along the line. Both halves get the other kind
    /// of wall line.
    pub fn split(maze: &mut Maze, region: Region, rng: &mut Random) -> Option<[Region; 2]> {
        if region.is_terminal() {
            return None;
        }

        let wall = region.wall.flip();
        let halves = match region.wall {
            WallLine::Horizontal => {
                let wall_y = rng.gen_range(region.low_y..region.high_y);
                let gap = rng.gen_range(region.low_x..=region.high_x);
                for x in (region.low_x..=region.high_x).filter(|&x| x != gap) {
                    maze.disconnect(Dims(x, wall_y), Direction::South);
                }

                [
                    Region {
                        high_y: wall_y,
                        wall,
                        ..region
                    },
                    Region {
                        low_y: wall_y + 1,
                        wall,
                        ..region
                    },
                ]
            }
            WallLine::Vertical => {
                let wall_x = rng.gen_range(region.low_x..region.high_x);
                let gap = rng.gen_range(region.low_y..=region.high_y);
                for y in (region.low_y..=region.high_y).filter(|&y| y != gap) {
                    maze.disconnect(Dims(wall_x, y), Direction::East);
                }

                [
                    Region {
                        high_x: wall_x,
                        wall,
                        ..region
                    },
                    Region {
                        low_x: wall_x + 1,
                        wall,
                        ..region
                    },
                ]
            }
        };

        Some(halves)
    }

    fn divide(maze: &mut Maze, region: Region, rng: &mut Random) {
        if let Some([first, second]) = Self::split(maze, region, rng) {
            Self::divide(maze, first, rng);
            Self::divide(maze, second, rng);
        }
    }

    fn divide_with_stack(maze: &mut Maze, region: Region, rng: &mut Random) {
        let mut regions = vec![region];

        while let Some(region) = regions.pop() {
            // terminal regions are just dropped
            if let Some([first, second]) = Self::split(maze, region, rng) {
                // pushed in reverse, so the first half is processed first like in `divide`
                regions.push(second);
                regions.push(first);
            }
        }
    }
}

impl MazeGenerator for RecursiveDivision {
    fn generate(&self, maze: &mut Maze, rng: &mut Random) {
        maze.init();
        maze.fill();

        let wall = if rng.gen_bool(0.5) {
            WallLine::Horizontal
        } else {
            WallLine::Vertical
        };
        let region = Region::whole(maze.size(), wall);
        log::debug!(
            "dividing {:?} starting with a {:?} wall using {:?}",
            maze.size(),
            wall,
            self.strategy
        );

        match self.strategy {
            Strategy::Recursive => Self::divide(maze, region, rng),
            Strategy::Stack => Self::divide_with_stack(maze, region, rng),
        }
    }
}
