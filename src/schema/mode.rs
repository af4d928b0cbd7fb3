//! Rule families and the cell-state alphabets they admit.

use serde::{Deserialize, Serialize};

/// Which automaton family a simulation is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Conway's Game of Life (B3/S23).
    #[default]
    GameOfLife,
    /// WireWorld electron-flow automaton.
    WireWorld,
    /// No active rule family; the grid stays empty.
    Disabled,
}

impl GameMode {
    /// Save-token tag for this mode.
    pub fn tag(self) -> &'static str {
        match self {
            GameMode::GameOfLife => "gol",
            GameMode::WireWorld => "wire",
            GameMode::Disabled => "off",
        }
    }

    /// Inverse of [`tag`](Self::tag).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gol" => Some(GameMode::GameOfLife),
            "wire" => Some(GameMode::WireWorld),
            "off" => Some(GameMode::Disabled),
            _ => None,
        }
    }
}

/// State of a stored (non-absent) cell.
///
/// Each mode's absent value (Dead for Game of Life, Empty for WireWorld) is
/// expressed by absence from the store and has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Live Game of Life cell.
    Alive,
    /// WireWorld wire segment.
    Conductor,
    /// WireWorld electron head.
    ElectronHead,
    /// WireWorld electron tail.
    ElectronTail,
}

impl CellState {
    /// Whether this state is part of `mode`'s cell alphabet.
    pub fn belongs_to(self, mode: GameMode) -> bool {
        mode == self.home_mode()
    }

    /// The mode whose alphabet this state belongs to.
    pub fn home_mode(self) -> GameMode {
        match self {
            CellState::Alive => GameMode::GameOfLife,
            CellState::Conductor | CellState::ElectronHead | CellState::ElectronTail => {
                GameMode::WireWorld
            }
        }
    }

    /// One-letter save-token tag.
    pub fn tag(self) -> &'static str {
        match self {
            CellState::Alive => "a",
            CellState::Conductor => "c",
            CellState::ElectronHead => "h",
            CellState::ElectronTail => "t",
        }
    }

    /// Inverse of [`tag`](Self::tag).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "a" => Some(CellState::Alive),
            "c" => Some(CellState::Conductor),
            "h" => Some(CellState::ElectronHead),
            "t" => Some(CellState::ElectronTail),
            _ => None,
        }
    }
}
