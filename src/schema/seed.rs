//! Seed types for initializing simulations from JSON.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{CellState, ConfigError, FillConfig, GameMode, Region};
use crate::grid::Point;

/// Complete seed specification: a mode plus an initial pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Rule family the pattern is painted for.
    pub mode: GameMode,
    /// Pattern to install.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            mode: GameMode::GameOfLife,
            pattern: Pattern::Blinker { center: (0, 0) },
        }
    }
}

/// Predefined initial patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Explicit list of (x, y, state) cells.
    Cells { cells: Vec<(i64, i64, CellState)> },
    /// Bounded random soup of live cells (Game of Life only).
    RandomSoup {
        region: Region,
        density: f32,
        seed: u64,
    },
    /// Vertical period-2 oscillator (Game of Life only).
    Blinker { center: (i64, i64) },
    /// Diagonal spaceship (Game of Life only).
    Glider { origin: (i64, i64) },
}

impl Seed {
    /// Resolve the pattern to concrete cells.
    ///
    /// Fails when the pattern does not fit the declared mode, or when a
    /// soup's fill parameters are out of range.
    pub fn cells(&self) -> Result<Vec<(Point, CellState)>, ConfigError> {
        match &self.pattern {
            Pattern::Cells { cells } => cells
                .iter()
                .map(|&(x, y, state)| {
                    if state.belongs_to(self.mode) {
                        Ok((Point::new(x, y), state))
                    } else {
                        Err(ConfigError::StateOutsideMode {
                            state,
                            mode: self.mode,
                        })
                    }
                })
                .collect(),
            Pattern::RandomSoup {
                region,
                density,
                seed,
            } => {
                self.require_mode(GameMode::GameOfLife)?;
                let fill = FillConfig {
                    region: *region,
                    density: *density,
                    seed: Some(*seed),
                };
                fill.validate()?;
                let mut rng = StdRng::seed_from_u64(*seed);
                Ok(region
                    .points()
                    .filter(|_| rng.gen_bool(f64::from(*density)))
                    .map(|pos| (pos, CellState::Alive))
                    .collect())
            }
            Pattern::Blinker { center } => {
                self.require_mode(GameMode::GameOfLife)?;
                let (cx, cy) = *center;
                Ok((-1..=1)
                    .map(|dy| (Point::new(cx, cy + dy), CellState::Alive))
                    .collect())
            }
            Pattern::Glider { origin } => {
                self.require_mode(GameMode::GameOfLife)?;
                let (ox, oy) = *origin;
                Ok([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
                    .into_iter()
                    .map(|(dx, dy)| (Point::new(ox + dx, oy + dy), CellState::Alive))
                    .collect())
            }
        }
    }

    fn require_mode(&self, required: GameMode) -> Result<(), ConfigError> {
        if self.mode == required {
            Ok(())
        } else {
            Err(ConfigError::PatternModeMismatch {
                required,
                declared: self.mode,
            })
        }
    }
}
