use smallvec::SmallVec;

use crate::array::Array2D;
use crate::dims::*;
use crate::gameboard::cell::{Axis, Cell, Direction, Edge};

/// Rectangular grid of cells connected by mirrored edges.
///
/// Every present edge `a -> b` in direction `d` has a twin `b -> a` in direction `!d`. All
/// mutating operations here update both sides together, so the invariant holds as long as the
/// edge slots are only touched through this type.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
    initialized: bool,
}

impl Maze {
    /// Creates a closed, uninitialized maze of the given size.
    ///
    /// A negative width or height gives a maze without cells. Sizes from users go through
    /// [`Limits::validate`](crate::config::Limits::validate) first.
    pub fn new(width: i32, height: i32) -> Self {
        Maze {
            cells: Array2D::from_fn(Dims(width, height), Cell::new),
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Marks the maze as populated, so it may be saved.
    pub fn init(&mut self) {
        self.initialized = true;
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> i32 {
        self.size().0
    }

    pub fn height(&self) -> i32 {
        self.size().1
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width() && 0 <= pos.1 && pos.1 < self.height()
    }

    /// Both endpoints are inside the grid and they differ.
    pub fn valid_edge(&self, edge: &Edge) -> bool {
        match edge.to {
            None => false,
            Some(to) => self.is_in_bounds(edge.from) && self.is_in_bounds(to) && edge.from != to,
        }
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn get_cell_mut(&mut self, pos: Dims) -> Option<&mut Cell> {
        self.cells.get_mut(pos)
    }

    pub fn has_passage(&self, pos: Dims, dir: Direction) -> bool {
        self.get_cell(pos).is_some_and(|c| c.is_open(dir))
    }

    /// Grid neighbours of `pos` that lie inside the maze, connected or not.
    pub fn neighbors(&self, pos: Dims) -> SmallVec<[(Direction, Dims); 4]> {
        Direction::get_in_order()
            .into_iter()
            .map(|dir| (dir, pos + dir.offset()))
            .filter(|&(_, n)| self.is_in_bounds(n))
            .collect()
    }

    /// Neighbours reachable from `pos` through a present edge.
    pub fn open_neighbors(&self, pos: Dims) -> SmallVec<[(Direction, Dims); 4]> {
        let Some(cell) = self.get_cell(pos) else {
            return SmallVec::new();
        };

        Direction::get_in_order()
            .into_iter()
            .filter_map(|dir| {
                let edge = cell.edge(dir);
                if self.valid_edge(edge) {
                    edge.to.map(|to| (dir, to))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Carves the passage between `pos` and its neighbour in `dir`, on both sides.
    ///
    /// Returns `false` and changes nothing when either cell is outside the grid.
    pub fn connect(&mut self, pos: Dims, dir: Direction) -> bool {
        let to = pos + dir.offset();
        if !self.is_in_bounds(pos) || !self.is_in_bounds(to) {
            return false;
        }

        if let Some(cell) = self.cells.get_mut(pos) {
            *cell.edge_mut(dir) = Edge::new(pos, to);
        }
        if let Some(other) = self.cells.get_mut(to) {
            *other.edge_mut(!dir) = Edge::new(to, pos);
        }

        true
    }

    /// Removes the passage leaving `pos` in `dir` together with its mirror.
    ///
    /// Returns whether there was a passage to remove.
    pub fn disconnect(&mut self, pos: Dims, dir: Direction) -> bool {
        let Some(cell) = self.cells.get_mut(pos) else {
            return false;
        };
        let edge = cell.edge_mut(dir);
        let Some(to) = edge.to else {
            return false;
        };
        *edge = Edge::absent(pos);

        if let Some(other) = self.cells.get_mut(to) {
            *other.edge_mut(!dir) = Edge::absent(to);
        }

        true
    }

    /// Connects `pos` to both of its neighbours along `axis`, skipping a
    /// neighbour that would fall outside the grid.
    ///
    /// Despite the name this opens passages: a wall in the division sense is the line that is
    /// left standing between carved cells.
    pub fn insert_wall(&mut self, pos: Dims, axis: Axis) {
        for dir in axis.directions() {
            self.connect(pos, dir);
        }
    }

    /// Inverse of [`Maze::insert_wall`]: clears both passages along the axis.
    pub fn delete_wall(&mut self, pos: Dims, axis: Axis) {
        for dir in axis.directions() {
            self.disconnect(pos, dir);
        }
    }

    /// Opens every passage of the grid.
    pub fn fill(&mut self) {
        for pos in Dims::iter_fill(Dims::ZERO, self.size()) {
            self.insert_wall(pos, Axis::Horizontal);
            self.insert_wall(pos, Axis::Vertical);
        }
    }

    /// Resets all transient traversal state: edge and cell visited flags and predecessors.
    pub fn set_unvisited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = false;
            cell.previous = None;
            for edge in cell.edges.iter_mut() {
                edge.visited = false;
            }
        }
    }

    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut() {
            for edge in cell.edges.iter_mut() {
                edge.on_path = false;
            }
        }
    }

    /// Marks the edge leaving `pos` in `dir` and its mirror as visited.
    ///
    /// Returns `true` only when a valid, previously unvisited edge got marked, which makes the
    /// call usable for visiting each undirected edge once.
    pub fn mark_visited(&mut self, pos: Dims, dir: Direction) -> bool {
        let Some(edge) = self.get_cell(pos).map(|c| *c.edge(dir)) else {
            return false;
        };
        if !self.valid_edge(&edge) || edge.visited {
            return false;
        }

        if let Some(cell) = self.cells.get_mut(pos) {
            cell.edge_mut(dir).visited = true;
        }
        if let Some(other) = edge.to.and_then(|to| self.cells.get_mut(to)) {
            other.edge_mut(!dir).visited = true;
        }

        true
    }

    /// Flags the passage leaving `pos` in `dir` and its mirror as part of the solution.
    pub fn set_on_path(&mut self, pos: Dims, dir: Direction) -> bool {
        let Some(edge) = self.get_cell(pos).map(|c| *c.edge(dir)) else {
            return false;
        };
        if !self.valid_edge(&edge) {
            return false;
        }

        if let Some(cell) = self.cells.get_mut(pos) {
            cell.edge_mut(dir).on_path = true;
        }
        if let Some(other) = edge.to.and_then(|to| self.cells.get_mut(to)) {
            other.edge_mut(!dir).on_path = true;
        }

        true
    }

    /// Number of present undirected edges, each counted once.
    ///
    /// Counting consumes the visited flags, call [`Maze::set_unvisited`] before reusing them.
    pub fn edge_count(&mut self) -> usize {
        let mut count = 0;
        for pos in Dims::iter_fill(Dims::ZERO, self.size()) {
            for dir in Direction::get_in_order() {
                if self.mark_visited(pos, dir) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Every present edge exactly once, in row-major order of the cell it was first seen from.
    pub fn undirected_edges(&mut self) -> Vec<Edge> {
        self.set_unvisited();

        let mut edges = Vec::new();
        for pos in Dims::iter_fill(Dims::ZERO, self.size()) {
            for dir in Direction::get_in_order() {
                let Some(edge) = self.get_cell(pos).map(|c| *c.edge(dir)) else {
                    continue;
                };
                if self.mark_visited(pos, dir) {
                    edges.push(edge);
                }
            }
        }

        self.set_unvisited();
        edges
    }

    /// Checks that every present edge points one step away, stays in bounds and has its twin.
    pub fn is_mirrored(&self) -> bool {
        self.cells.iter().all(|cell| {
            Direction::get_in_order().into_iter().all(|dir| {
                let edge = cell.edge(dir);
                match edge.to {
                    None => true,
                    Some(to) => {
                        edge.from == cell.pos
                            && to == cell.pos + dir.offset()
                            && self
                                .get_cell(to)
                                .is_some_and(|other| other.edge(!dir).to == Some(cell.pos))
                    }
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maze_is_closed_and_uninitialized() {
        let mut maze = Maze::new(4, 3);
        assert!(!maze.is_initialized());
        assert_eq!(maze.size(), Dims(4, 3));
        assert_eq!(maze.edge_count(), 0);
        assert!(maze.is_mirrored());
    }

    #[test]
    fn negative_size_has_no_cells() {
        let mut maze = Maze::new(-3, 4);
        assert_eq!(maze.cell_count(), 0);
        assert_eq!(maze.width(), 0);
        assert_eq!(maze.edge_count(), 0);
        assert!(!maze.is_in_bounds(Dims::ZERO));
    }

    #[test]
    fn valid_edge_checks_bounds_and_distinct_ends() {
        let maze = Maze::new(3, 3);
        assert!(maze.valid_edge(&Edge::new(Dims(0, 0), Dims(1, 0))));
        assert!(!maze.valid_edge(&Edge::new(Dims(2, 2), Dims(3, 2))));
        assert!(!maze.valid_edge(&Edge::new(Dims(-1, 0), Dims(0, 0))));
        assert!(!maze.valid_edge(&Edge::new(Dims(1, 1), Dims(1, 1))));
        assert!(!maze.valid_edge(&Edge::absent(Dims(1, 1))));
    }

    #[test]
    fn insert_wall_connects_both_sides() {
        let mut maze = Maze::new(3, 3);
        maze.insert_wall(Dims(1, 1), Axis::Vertical);

        assert!(maze.has_passage(Dims(1, 1), Direction::North));
        assert!(maze.has_passage(Dims(1, 0), Direction::South));
        assert!(maze.has_passage(Dims(1, 1), Direction::South));
        assert!(maze.has_passage(Dims(1, 2), Direction::North));
        assert!(!maze.has_passage(Dims(1, 1), Direction::East));
        assert!(maze.is_mirrored());
        assert_eq!(maze.edge_count(), 2);
    }

    #[test]
    fn insert_wall_skips_outside_neighbours() {
        let mut maze = Maze::new(3, 3);
        maze.insert_wall(Dims(0, 0), Axis::Horizontal);
        maze.insert_wall(Dims(2, 2), Axis::Vertical);

        assert!(maze.has_passage(Dims(0, 0), Direction::East));
        assert!(!maze.has_passage(Dims(0, 0), Direction::West));
        assert!(maze.has_passage(Dims(2, 2), Direction::North));
        assert!(!maze.has_passage(Dims(2, 2), Direction::South));
        assert!(maze.is_mirrored());
        assert_eq!(maze.edge_count(), 2);
    }

    #[test]
    fn delete_wall_clears_both_sides() {
        let mut maze = Maze::new(3, 3);
        maze.fill();
        maze.delete_wall(Dims(1, 1), Axis::Horizontal);

        assert!(!maze.has_passage(Dims(1, 1), Direction::East));
        assert!(!maze.has_passage(Dims(2, 1), Direction::West));
        assert!(!maze.has_passage(Dims(1, 1), Direction::West));
        assert!(!maze.has_passage(Dims(0, 1), Direction::East));
        assert!(maze.has_passage(Dims(1, 1), Direction::North));
        assert!(maze.is_mirrored());
        assert_eq!(maze.edge_count(), 12 - 2);
    }

    #[test]
    fn disconnect_reports_missing_passage() {
        let mut maze = Maze::new(2, 2);
        assert!(!maze.disconnect(Dims(0, 0), Direction::East));
        assert!(maze.connect(Dims(0, 0), Direction::East));
        assert!(maze.disconnect(Dims(1, 0), Direction::West));
        assert!(!maze.has_passage(Dims(0, 0), Direction::East));
        assert!(!maze.connect(Dims(1, 0), Direction::East));
    }

    #[test]
    fn fill_opens_every_passage() {
        let mut maze = Maze::new(5, 4);
        maze.fill();
        assert!(maze.is_mirrored());
        // (w - 1) * h horizontal + w * (h - 1) vertical passages
        assert_eq!(maze.edge_count(), 4 * 4 + 5 * 3);
    }

    #[test]
    fn mark_visited_is_idempotent_and_dual_sided() {
        let mut maze = Maze::new(2, 1);
        maze.connect(Dims(0, 0), Direction::East);

        assert!(maze.mark_visited(Dims(0, 0), Direction::East));
        assert!(!maze.mark_visited(Dims(0, 0), Direction::East));
        assert!(!maze.mark_visited(Dims(1, 0), Direction::West));
        assert!(!maze.mark_visited(Dims(0, 0), Direction::West));

        maze.set_unvisited();
        assert!(maze.mark_visited(Dims(1, 0), Direction::West));
    }

    #[test]
    fn undirected_edges_lists_each_passage_once() {
        let mut maze = Maze::new(3, 2);
        maze.fill();
        let edges = maze.undirected_edges();

        assert_eq!(edges.len(), 7);
        for edge in &edges {
            assert!(maze.valid_edge(edge));
            let reversed = Edge::new(edge.to.unwrap(), edge.from);
            assert!(!edges.contains(&reversed));
        }
        // flags are left clean for the next traversal
        assert_eq!(maze.edge_count(), 7);
    }

    #[test]
    fn neighbours_at_corner_and_centre() {
        let mut maze = Maze::new(3, 3);
        assert_eq!(maze.neighbors(Dims(0, 0)).len(), 2);
        assert_eq!(maze.neighbors(Dims(1, 1)).len(), 4);

        maze.connect(Dims(1, 1), Direction::West);
        let open = maze.open_neighbors(Dims(1, 1));
        assert_eq!(open.as_slice(), &[(Direction::West, Dims(0, 1))]);
    }
}
