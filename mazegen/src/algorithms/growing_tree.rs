use rand::{seq::SliceRandom as _, Rng as _};
use smallvec::SmallVec;

use super::{MazeGenerator, Random};
use crate::{dims::Dims, frontier::Frontier, gameboard::Maze};

/// Which frontier cell the tree grows from next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// Newest cell, giving long winding corridors (recursive backtracker).
    Newest,
    /// Uniformly random cell, giving short branching corridors (randomized Prim).
    Random,
}

#[derive(Debug, Clone, Copy)]
pub struct GrowingTree {
    pub bias: Bias,
}

impl GrowingTree {
    pub fn backtracker() -> Self {
        Self { bias: Bias::Newest }
    }

    pub fn prim() -> Self {
        Self { bias: Bias::Random }
    }

    fn pick(&self, frontier: &mut Frontier, rng: &mut Random) -> Option<Dims> {
        match self.bias {
            Bias::Newest => frontier.get_last(),
            Bias::Random if frontier.is_empty() => None,
            Bias::Random => frontier.get_by_index(rng.gen_range(0..frontier.len())),
        }
    }
}

impl MazeGenerator for GrowingTree {
    fn generate(&self, maze: &mut Maze, rng: &mut Random) {
        maze.init();
        maze.set_unvisited();

        let mut frontier = Frontier::with_capacity(maze.cell_count());
        let Some(origin) = maze.get_cell_mut(Dims::ZERO) else {
            return;
        };
        frontier.insert(origin);

        let mut carved = 0usize;
        while let Some(current) = self.pick(&mut frontier, rng) {
            let unvisited = maze
                .neighbors(current)
                .into_iter()
                .filter(|&(_, pos)| maze.get_cell(pos).is_some_and(|c| !c.visited))
                .collect::<SmallVec<[_; 4]>>();

            let Some(&(dir, next)) = unvisited.choose(rng) else {
                // nothing left to grow into, this cell is finished
                frontier.remove(current);
                continue;
            };

            maze.connect(current, dir);
            carved += 1;
            if let Some(cell) = maze.get_cell_mut(next) {
                cell.previous = Some(current);
                frontier.insert(cell);
            }
        }

        log::debug!("growing tree ({:?}) carved {} passages", self.bias, carved);
    }
}
