use crate::{
    dims::Dims,
    error::{PreconditionError, Result},
    gameboard::{Direction, Maze},
};

/// Outcome of [`solve`]. An unreachable target is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// Cells from the start to the target, both included.
    Reachable(Vec<Dims>),
    /// The target was not reached.
    ///
    /// `partial` leads from the start to the reached cell closest to the target.
    Unreachable { reached: usize, partial: Vec<Dims> },
}

impl Solution {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }

    pub fn path(&self) -> &[Dims] {
        match self {
            Self::Reachable(path) => path,
            Self::Unreachable { partial, .. } => partial,
        }
    }
}

/// Depth-first flood from `start` through present edges.
///
/// Every reached cell is left visited with its predecessor recorded. Returns how many cells
/// were reached.
pub fn flood(maze: &mut Maze, start: Dims) -> usize {
    maze.set_unvisited();

    let Some(cell) = maze.get_cell_mut(start) else {
        return 0;
    };
    cell.visited = true;

    let mut reached = 1;
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        for (_, next) in maze.open_neighbors(current) {
            let Some(cell) = maze.get_cell_mut(next) else {
                continue;
            };
            if !cell.visited {
                cell.visited = true;
                cell.previous = Some(current);
                stack.push(next);
                reached += 1;
            }
        }
    }

    reached
}

/// Follows predecessor links from `to` back to the flood's start.
fn backtrace(maze: &Maze, to: Dims) -> Vec<Dims> {
    let mut path = vec![to];
    let mut current = to;
    while let Some(prev) = maze.get_cell(current).and_then(|c| c.previous) {
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}

/// Finds the path from the top-left cell to the bottom-right one and marks its edges.
pub fn solve(maze: &mut Maze) -> Result<Solution> {
    if !maze.is_initialized() {
        return Err(PreconditionError::Uninitialized.into());
    }

    maze.clear_path();

    let start = Dims::ZERO;
    let target = maze.size() - Dims::ONE;
    let reached = flood(maze, start);

    if maze.get_cell(target).is_some_and(|c| c.visited) {
        let path = backtrace(maze, target);
        for step in path.windows(2) {
            if let &[from, to] = step {
                if let Some(dir) = Direction::between(from, to) {
                    maze.set_on_path(from, dir);
                }
            }
        }

        log::debug!("solution found, {} cells long", path.len());
        return Ok(Solution::Reachable(path));
    }

    let closest = maze
        .get_cells()
        .iter()
        .filter(|c| c.visited)
        .min_by_key(|c| c.get_coord().manhattan(target))
        .map(|c| c.get_coord());
    let partial = closest.map(|c| backtrace(maze, c)).unwrap_or_default();

    log::warn!(
        "target {:?} is unreachable, reached {} of {} cells",
        target,
        reached,
        maze.cell_count()
    );
    Ok(Solution::Unreachable { reached, partial })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{rng_from_seed, Algorithm};
    use crate::error::MazeError;

    #[test]
    fn uninitialized_maze_is_rejected() {
        let mut maze = Maze::new(3, 3);
        assert!(matches!(
            solve(&mut maze),
            Err(MazeError::Precondition(PreconditionError::Uninitialized))
        ));
    }

    #[test]
    fn path_follows_open_passages() {
        for algo in Algorithm::ALL {
            let mut maze = Maze::new(10, 7);
            algo.generator().generate(&mut maze, &mut rng_from_seed(99));

            let solution = solve(&mut maze).unwrap();
            let path = solution.path().to_vec();
            assert!(solution.is_reachable());
            assert_eq!(path.first(), Some(&Dims(0, 0)));
            assert_eq!(path.last(), Some(&Dims(9, 6)));

            for step in path.windows(2) {
                let dir = Direction::between(step[0], step[1]).unwrap();
                assert!(maze.has_passage(step[0], dir));
                assert!(maze.get_cell(step[0]).unwrap().edge(dir).on_path);
                assert!(maze.get_cell(step[1]).unwrap().edge(!dir).on_path);
            }

            let marked = maze
                .undirected_edges()
                .into_iter()
                .filter(|e| e.on_path)
                .count();
            assert_eq!(marked, path.len() - 1);
        }
    }

    #[test]
    fn disconnected_target_is_unreachable() {
        let mut maze = Maze::new(3, 3);
        maze.init();
        maze.connect(Dims(0, 0), Direction::East);
        maze.connect(Dims(1, 0), Direction::South);
        maze.connect(Dims(2, 2), Direction::West);

        let solution = solve(&mut maze).unwrap();
        assert_eq!(
            solution,
            Solution::Unreachable {
                reached: 3,
                partial: vec![Dims(0, 0), Dims(1, 0), Dims(1, 1)],
            }
        );
        assert!(maze.undirected_edges().iter().all(|e| !e.on_path));
    }

    #[test]
    fn flood_counts_component() {
        let mut maze = Maze::new(4, 1);
        maze.connect(Dims(0, 0), Direction::East);
        maze.connect(Dims(2, 0), Direction::East);

        assert_eq!(flood(&mut maze, Dims(0, 0)), 2);
        assert_eq!(flood(&mut maze, Dims(3, 0)), 2);
        assert_eq!(flood(&mut maze, Dims(7, 0)), 0);
    }
}
