//! Rule engines - per-cycle transition computation for both automata.

pub mod life;
pub mod wire;

use crate::grid::GridStore;
use crate::schema::GameMode;

/// Compute the next generation for `mode` from an immutable snapshot.
///
/// All neighbor counts observe the pre-cycle state: the next generation is
/// built into a fresh store and `current` is left untouched, which also
/// gives each cycle its all-or-nothing behavior — the caller swaps the
/// result in only once the computation has completed.
pub fn next_generation(mode: GameMode, current: &GridStore) -> GridStore {
    match mode {
        GameMode::GameOfLife => life::step(current),
        GameMode::WireWorld => wire::step(current),
        GameMode::Disabled => GridStore::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Point;
    use crate::schema::CellState;

    #[test]
    fn test_disabled_mode_produces_empty_generation() {
        let grid: GridStore = [(Point::new(0, 0), CellState::Alive)].into_iter().collect();
        assert!(next_generation(GameMode::Disabled, &grid).is_empty());
    }

    #[test]
    fn test_dispatch_runs_the_active_rule() {
        let blinker: GridStore = [
            (Point::new(0, -1), CellState::Alive),
            (Point::new(0, 0), CellState::Alive),
            (Point::new(0, 1), CellState::Alive),
        ]
        .into_iter()
        .collect();

        let next = next_generation(GameMode::GameOfLife, &blinker);
        assert_eq!(next.get(Point::new(-1, 0)), Some(CellState::Alive));

        let head: GridStore = [(Point::new(0, 0), CellState::ElectronHead)]
            .into_iter()
            .collect();
        let next = next_generation(GameMode::WireWorld, &head);
        assert_eq!(next.get(Point::new(0, 0)), Some(CellState::ElectronTail));
    }
}
