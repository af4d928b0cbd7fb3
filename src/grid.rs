//! Sparse grid storage keyed by cell position.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::schema::{CellState, GameMode};

/// A grid position.
///
/// Coordinates are 64-bit signed integers; the ±1 neighbor arithmetic used
/// by the rule engines cannot reach the representable edge for any cell
/// population that fits in memory, so the full `i64` range is usable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Sparse mapping from position to cell state.
///
/// Only non-absent cells are stored: a Game of Life grid holds only `Alive`
/// entries, a WireWorld grid only conductor/head/tail entries. Iteration
/// order is unspecified and must never affect simulation results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridStore {
    cells: HashMap<Point, CellState>,
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored state at `pos`, or `None` for the mode's absent value.
    #[inline]
    pub fn get(&self, pos: Point) -> Option<CellState> {
        self.cells.get(&pos).copied()
    }

    /// Insert or overwrite a cell. `None` (the absent value) removes the
    /// entry instead, keeping the store sparse.
    #[inline]
    pub fn set(&mut self, pos: Point, state: Option<CellState>) {
        match state {
            Some(state) => {
                self.cells.insert(pos, state);
            }
            None => {
                self.cells.remove(&pos);
            }
        }
    }

    /// Delete the cell at `pos` if present.
    #[inline]
    pub fn remove(&mut self, pos: Point) {
        self.cells.remove(&pos);
    }

    /// Number of stored cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove all cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// The eight Moore-neighborhood positions of `pos`.
    pub fn neighbors8(pos: Point) -> [Point; 8] {
        let Point { x, y } = pos;
        [
            Point::new(x - 1, y - 1),
            Point::new(x, y - 1),
            Point::new(x + 1, y - 1),
            Point::new(x - 1, y),
            Point::new(x + 1, y),
            Point::new(x - 1, y + 1),
            Point::new(x, y + 1),
            Point::new(x + 1, y + 1),
        ]
    }

    /// Iterate over stored `(position, state)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.cells.iter().map(|(&pos, &state)| (pos, state))
    }

    /// Drop every entry whose state is outside `mode`'s alphabet.
    ///
    /// Guards against stale entries after a mode switch or a buggy writer;
    /// the original UI calls the same pass after every load.
    pub fn prune(&mut self, mode: GameMode) {
        self.cells.retain(|_, state| state.belongs_to(mode));
    }

    /// Bounding box of stored cells as `(min, max)` corners, or `None` for
    /// an empty grid.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut entries = self.cells.keys();
        let first = *entries.next()?;
        let (mut min, mut max) = (first, first);
        for &pos in entries {
            min.x = min.x.min(pos.x);
            min.y = min.y.min(pos.y);
            max.x = max.x.max(pos.x);
            max.y = max.y.max(pos.y);
        }
        Some((min, max))
    }
}

impl FromIterator<(Point, CellState)> for GridStore {
    fn from_iter<I: IntoIterator<Item = (Point, CellState)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Point, CellState)> for GridStore {
    fn extend<I: IntoIterator<Item = (Point, CellState)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut grid = GridStore::new();
        let pos = Point::new(3, -7);

        assert_eq!(grid.get(pos), None);

        grid.set(pos, Some(CellState::Alive));
        assert_eq!(grid.get(pos), Some(CellState::Alive));
        assert_eq!(grid.len(), 1);

        grid.remove(pos);
        assert_eq!(grid.get(pos), None);
        assert!(grid.is_empty());

        // Removing again is a no-op.
        grid.remove(pos);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_set_absent_removes() {
        let mut grid = GridStore::new();
        let pos = Point::new(0, 0);

        grid.set(pos, Some(CellState::Conductor));
        grid.set(pos, None);

        assert!(grid.is_empty());
    }

    #[test]
    fn test_neighbors8() {
        let neighbors = GridStore::neighbors8(Point::new(0, 0));
        assert_eq!(neighbors.len(), 8);

        for n in neighbors {
            assert_ne!(n, Point::new(0, 0));
            assert!(n.x.abs() <= 1 && n.y.abs() <= 1);
        }

        // All eight are distinct.
        let mut sorted = neighbors.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn test_prune_drops_foreign_states() {
        let mut grid = GridStore::new();
        grid.set(Point::new(0, 0), Some(CellState::Alive));
        grid.set(Point::new(1, 0), Some(CellState::Conductor));
        grid.set(Point::new(2, 0), Some(CellState::ElectronHead));

        grid.prune(GameMode::WireWorld);

        assert_eq!(grid.get(Point::new(0, 0)), None);
        assert_eq!(grid.get(Point::new(1, 0)), Some(CellState::Conductor));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_prune_disabled_clears_everything() {
        let mut grid: GridStore = [(Point::new(1, 1), CellState::Alive)].into_iter().collect();
        grid.prune(GameMode::Disabled);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_bounds() {
        let mut grid = GridStore::new();
        assert_eq!(grid.bounds(), None);

        grid.set(Point::new(-4, 2), Some(CellState::Alive));
        grid.set(Point::new(7, -1), Some(CellState::Alive));
        grid.set(Point::new(0, 9), Some(CellState::Alive));

        assert_eq!(grid.bounds(), Some((Point::new(-4, -1), Point::new(7, 9))));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a: GridStore = [
            (Point::new(0, 0), CellState::Alive),
            (Point::new(1, 1), CellState::Alive),
        ]
        .into_iter()
        .collect();
        let b: GridStore = [
            (Point::new(1, 1), CellState::Alive),
            (Point::new(0, 0), CellState::Alive),
        ]
        .into_iter()
        .collect();

        assert_eq!(a, b);
    }
}
