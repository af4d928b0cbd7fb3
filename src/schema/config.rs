//! Parameters for bounded random fills.

use serde::{Deserialize, Serialize};

use super::{CellState, GameMode};
use crate::grid::Point;

/// Axis-aligned window of grid positions.
///
/// `(x, y)` is the top-left corner; the window spans `width * height`
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of positions covered.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= self.x
            && pos.x < self.x + i64::from(self.width)
            && pos.y >= self.y
            && pos.y < self.y + i64::from(self.height)
    }

    /// Iterate positions row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let Region {
            x,
            y,
            width,
            height,
        } = *self;
        (0..i64::from(height))
            .flat_map(move |dy| (0..i64::from(width)).map(move |dx| Point::new(x + dx, y + dy)))
    }
}

/// Parameters for [`Simulation::randomize`](crate::Simulation::randomize).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillConfig {
    /// Window to resample.
    pub region: Region,
    /// Probability that a position comes up alive, within (0, 1].
    pub density: f32,
    /// RNG seed for reproducible fills; `None` draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            region: Region::new(0, 0, 64, 48),
            density: 0.3,
            seed: None,
        }
    }
}

impl FillConfig {
    /// Validate fill parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.area() == 0 {
            return Err(ConfigError::EmptyRegion);
        }
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(ConfigError::InvalidDensity);
        }
        Ok(())
    }
}

/// Fill and seed validation errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("fill region must cover at least one cell")]
    EmptyRegion,
    #[error("fill density must be within (0, 1]")]
    InvalidDensity,
    #[error("pattern is specific to {required:?}, seed declares {declared:?}")]
    PatternModeMismatch {
        required: GameMode,
        declared: GameMode,
    },
    #[error("cell state {state:?} is outside the {mode:?} alphabet")]
    StateOutsideMode { state: CellState, mode: GameMode },
}
