//! Game of Life transition rule (B3/S23) over the sparse store.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::grid::{GridStore, Point};
use crate::schema::CellState;

/// Compute the next generation from an immutable snapshot.
///
/// Only live cells and their Moore neighbors are evaluated, so a cycle
/// costs time proportional to the live population, not the grid extent.
/// The result is a fresh store; `current` is never mutated.
pub fn step(current: &GridStore) -> GridStore {
    let mut candidates: HashSet<Point> = HashSet::with_capacity(current.len() * 9);
    for (pos, _) in current.iter() {
        candidates.insert(pos);
        candidates.extend(GridStore::neighbors8(pos));
    }

    let next: Vec<(Point, CellState)> = candidates
        .par_iter()
        .filter_map(|&pos| {
            let alive = current.get(pos).is_some();
            let neighbors = live_neighbors(current, pos);
            let lives = matches!((alive, neighbors), (true, 2) | (_, 3));
            lives.then_some((pos, CellState::Alive))
        })
        .collect();

    next.into_iter().collect()
}

fn live_neighbors(grid: &GridStore, pos: Point) -> u8 {
    GridStore::neighbors8(pos)
        .into_iter()
        .filter(|&n| grid.get(n).is_some())
        .count() as u8
}
