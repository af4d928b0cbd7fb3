//! WireWorld transition rule over the sparse store.

use rayon::prelude::*;

use crate::grid::{GridStore, Point};
use crate::schema::CellState;

/// Compute the next generation from an immutable snapshot.
///
/// Only stored cells are candidates: empty positions never transition away
/// from empty, and conductors are already stored, so no neighborhood
/// expansion is needed. States outside the WireWorld alphabet do not
/// survive the cycle. The result is a fresh store; `current` is never
/// mutated.
pub fn step(current: &GridStore) -> GridStore {
    let entries: Vec<(Point, CellState)> = current.iter().collect();

    let next: Vec<(Point, CellState)> = entries
        .par_iter()
        .filter_map(|&(pos, state)| {
            let next_state = match state {
                CellState::ElectronHead => CellState::ElectronTail,
                CellState::ElectronTail => CellState::Conductor,
                CellState::Conductor => match head_neighbors(current, pos) {
                    1 | 2 => CellState::ElectronHead,
                    _ => CellState::Conductor,
                },
                CellState::Alive => return None,
            };
            Some((pos, next_state))
        })
        .collect();

    next.into_iter().collect()
}

fn head_neighbors(grid: &GridStore, pos: Point) -> u8 {
    GridStore::neighbors8(pos)
        .into_iter()
        .filter(|&n| grid.get(n) == Some(CellState::ElectronHead))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_grid(cells: &[(i64, i64, CellState)]) -> GridStore {
        cells
            .iter()
            .map(|&(x, y, state)| (Point::new(x, y), state))
            .collect()
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        assert!(step(&GridStore::new()).is_empty());
    }

    #[test]
    fn test_head_decays_to_tail_then_conductor() {
        let pos = Point::new(4, -2);
        let grid = wire_grid(&[(4, -2, CellState::ElectronHead)]);

        let once = step(&grid);
        assert_eq!(once.get(pos), Some(CellState::ElectronTail));

        let twice = step(&once);
        assert_eq!(twice.get(pos), Some(CellState::Conductor));

        // An isolated conductor never fires again.
        let thrice = step(&twice);
        assert_eq!(thrice.get(pos), Some(CellState::Conductor));
    }

    #[test]
    fn test_conductor_fires_on_one_or_two_heads() {
        let one = wire_grid(&[
            (0, 0, CellState::Conductor),
            (1, 0, CellState::ElectronHead),
        ]);
        assert_eq!(
            step(&one).get(Point::new(0, 0)),
            Some(CellState::ElectronHead)
        );

        let two = wire_grid(&[
            (0, 0, CellState::Conductor),
            (1, 0, CellState::ElectronHead),
            (0, 1, CellState::ElectronHead),
        ]);
        assert_eq!(
            step(&two).get(Point::new(0, 0)),
            Some(CellState::ElectronHead)
        );
    }

    #[test]
    fn test_conductor_holds_on_zero_or_three_heads() {
        let zero = wire_grid(&[(0, 0, CellState::Conductor)]);
        assert_eq!(
            step(&zero).get(Point::new(0, 0)),
            Some(CellState::Conductor)
        );

        let three = wire_grid(&[
            (0, 0, CellState::Conductor),
            (1, 0, CellState::ElectronHead),
            (0, 1, CellState::ElectronHead),
            (-1, 0, CellState::ElectronHead),
        ]);
        assert_eq!(
            step(&three).get(Point::new(0, 0)),
            Some(CellState::Conductor)
        );
    }

    #[test]
    fn test_population_is_preserved() {
        // A 2x2 wire loop carrying one electron.
        let loop_grid = wire_grid(&[
            (0, 0, CellState::ElectronHead),
            (1, 0, CellState::ElectronTail),
            (0, 1, CellState::Conductor),
            (1, 1, CellState::Conductor),
        ]);

        let mut grid = loop_grid.clone();
        for _ in 0..8 {
            grid = step(&grid);
            assert_eq!(grid.len(), loop_grid.len());
        }
    }

    #[test]
    fn test_signal_travels_along_wire() {
        // Straight wire: tail, head, then conductors stretching east.
        let grid = wire_grid(&[
            (0, 0, CellState::ElectronTail),
            (1, 0, CellState::ElectronHead),
            (2, 0, CellState::Conductor),
            (3, 0, CellState::Conductor),
            (4, 0, CellState::Conductor),
        ]);

        let next = step(&grid);
        assert_eq!(next.get(Point::new(0, 0)), Some(CellState::Conductor));
        assert_eq!(next.get(Point::new(1, 0)), Some(CellState::ElectronTail));
        assert_eq!(next.get(Point::new(2, 0)), Some(CellState::ElectronHead));
        assert_eq!(next.get(Point::new(3, 0)), Some(CellState::Conductor));
    }

    #[test]
    fn test_foreign_state_is_dropped() {
        let grid = wire_grid(&[(0, 0, CellState::Alive), (1, 0, CellState::Conductor)]);
        let next = step(&grid);
        assert_eq!(next.get(Point::new(0, 0)), None);
        assert_eq!(next.len(), 1);
    }
}
