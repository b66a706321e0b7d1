use std::ops::Not;

use crate::dims::Dims;

/// One of the four edge slots of a [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const COUNT: usize = 4;

    pub fn get_in_order() -> [Direction; 4] {
        use Direction::*;
        [North, South, East, West]
    }

    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }

    pub fn offset(self) -> Dims {
        match self {
            Self::North => Dims(0, -1),
            Self::South => Dims(0, 1),
            Self::East => Dims(1, 0),
            Self::West => Dims(-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Direction leading from `from` to `to`.
    ///
    /// Returns `None` unless the two positions are exactly one step apart along exactly one
    /// axis, so diagonal and distant pairs have no direction.
    pub fn between(from: Dims, to: Dims) -> Option<Self> {
        match (to.0 - from.0, to.1 - from.1) {
            (0, -1) => Some(Self::North),
            (0, 1) => Some(Self::South),
            (1, 0) => Some(Self::East),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }
}

impl Not for Direction {
    type Output = Direction;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

/// Axis of the passages touched by [`Maze::insert_wall`](super::Maze::insert_wall) and
/// [`Maze::delete_wall`](super::Maze::delete_wall).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// West and east passages.
    Horizontal,
    /// North and south passages.
    Vertical,
}

impl Axis {
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Self::Vertical => [Direction::North, Direction::South],
            Self::Horizontal => [Direction::West, Direction::East],
        }
    }
}

/// Directed edge slot.
///
/// `to == None` is the absent edge, which is both the initial state and the state after the
/// passage was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Dims,
    pub to: Option<Dims>,
    pub visited: bool,
    pub on_path: bool,
}

impl Edge {
    pub fn absent(from: Dims) -> Self {
        Self {
            from,
            to: None,
            visited: false,
            on_path: false,
        }
    }

    pub fn new(from: Dims, to: Dims) -> Self {
        Self {
            to: Some(to),
            ..Self::absent(from)
        }
    }

    pub fn is_present(&self) -> bool {
        self.to.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub(crate) pos: Dims,
    pub(crate) edges: [Edge; Direction::COUNT],
    /// Transient flag owned by whichever traversal is currently running.
    pub visited: bool,
    /// Predecessor recorded by the current traversal, reset with the visited flags.
    pub previous: Option<Dims>,
}

impl Cell {
    pub fn new(pos: Dims) -> Cell {
        Cell {
            pos,
            edges: [Edge::absent(pos); Direction::COUNT],
            visited: false,
            previous: None,
        }
    }

    pub fn get_coord(&self) -> Dims {
        self.pos
    }

    pub fn edge(&self, dir: Direction) -> &Edge {
        &self.edges[dir.index()]
    }

    pub(crate) fn edge_mut(&mut self, dir: Direction) -> &mut Edge {
        &mut self.edges[dir.index()]
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        self.edge(dir).is_present()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}
