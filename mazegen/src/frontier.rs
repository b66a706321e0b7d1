//! Active cell set shared by the growing-tree generators.
//!
//! The generators only differ in which member they grow from next, so the set offers both
//! retrievals: the newest live member ([`Frontier::get_last`]) and an arbitrary member by
//! position ([`Frontier::get_by_index`]).

use hashbrown::HashMap;

use crate::dims::Dims;
use crate::gameboard::Cell;

#[derive(Debug, Clone, Copy)]
struct Slot {
    idx: usize,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Frontier {
    /// Live members, dense. Removal swaps the last member into the hole.
    members: Vec<Dims>,
    index: HashMap<Dims, Slot>,
    /// Insertion order. Entries whose sequence number no longer matches the index are stale
    /// and get popped lazily.
    order: Vec<(Dims, u64)>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, pos: Dims) -> bool {
        self.index.contains_key(&pos)
    }

    /// Adds the cell and marks it visited.
    ///
    /// A cell that's already a member is refused, `false` is returned and nothing changes.
    pub fn insert(&mut self, cell: &mut Cell) -> bool {
        let pos = cell.get_coord();
        if self.contains(pos) {
            return false;
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        self.index.insert(
            pos,
            Slot {
                idx: self.members.len(),
                seq,
            },
        );
        self.members.push(pos);
        self.order.push((pos, seq));
        cell.visited = true;

        true
    }

    pub fn remove(&mut self, pos: Dims) -> bool {
        let Some(Slot { idx, .. }) = self.index.remove(&pos) else {
            return false;
        };

        self.members.swap_remove(idx);
        if let Some(&moved) = self.members.get(idx) {
            if let Some(slot) = self.index.get_mut(&moved) {
                slot.idx = idx;
            }
        }

        true
    }

    /// Most recently inserted member that's still live.
    pub fn get_last(&mut self) -> Option<Dims> {
        while let Some(&(pos, seq)) = self.order.last() {
            if self.index.get(&pos).is_some_and(|slot| slot.seq == seq) {
                return Some(pos);
            }
            self.order.pop();
        }

        None
    }

    /// Member at `i mod len`, `None` for an empty set.
    pub fn get_by_index(&self, i: usize) -> Option<Dims> {
        if self.members.is_empty() {
            return None;
        }

        self.members.get(i % self.members.len()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(count: i32) -> Vec<Cell> {
        (0..count).map(|x| Cell::new(Dims(x, 0))).collect()
    }

    #[test]
    fn insert_marks_visited_and_refuses_duplicates() {
        let mut cells = cells(2);
        let mut frontier = Frontier::new();

        assert!(frontier.insert(&mut cells[0]));
        assert!(cells[0].visited);
        assert!(!cells[1].visited);
        assert!(!frontier.insert(&mut cells[0]));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn get_last_skips_removed_members() {
        let mut cells = cells(4);
        let mut frontier = Frontier::new();
        for cell in cells.iter_mut() {
            frontier.insert(cell);
        }

        assert_eq!(frontier.get_last(), Some(Dims(3, 0)));
        assert!(frontier.remove(Dims(3, 0)));
        assert!(frontier.remove(Dims(2, 0)));
        assert_eq!(frontier.get_last(), Some(Dims(1, 0)));
        assert!(frontier.remove(Dims(0, 0)));
        assert_eq!(frontier.get_last(), Some(Dims(1, 0)));
        assert!(frontier.remove(Dims(1, 0)));
        assert_eq!(frontier.get_last(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn reinserted_member_is_newest_again() {
        let mut cells = cells(3);
        let mut frontier = Frontier::new();
        for cell in cells.iter_mut() {
            frontier.insert(cell);
        }

        frontier.remove(Dims(0, 0));
        frontier.insert(&mut cells[0]);
        assert_eq!(frontier.get_last(), Some(Dims(0, 0)));

        // the stale entry from the first insert must not resurrect it
        frontier.remove(Dims(0, 0));
        frontier.remove(Dims(2, 0));
        assert_eq!(frontier.get_last(), Some(Dims(1, 0)));
    }

    #[test]
    fn get_by_index_wraps_and_tracks_removals() {
        let mut cells = cells(3);
        let mut frontier = Frontier::new();
        assert_eq!(frontier.get_by_index(0), None);

        for cell in cells.iter_mut() {
            frontier.insert(cell);
        }
        assert_eq!(frontier.get_by_index(0), Some(Dims(0, 0)));
        assert_eq!(frontier.get_by_index(4), Some(Dims(1, 0)));

        frontier.remove(Dims(0, 0));
        let live: Vec<_> = (0..frontier.len())
            .filter_map(|i| frontier.get_by_index(i))
            .collect();
        assert_eq!(live.len(), 2);
        assert!(live.contains(&Dims(1, 0)));
        assert!(live.contains(&Dims(2, 0)));
        assert!(!frontier.contains(Dims(0, 0)));
        assert!(!frontier.remove(Dims(0, 0)));
    }
}
