//! Simulation controller - owns the grid, the mode, and the cycle counter.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec::{self, DecodeError};
use crate::engine;
use crate::grid::{GridStore, Point};
use crate::schema::{CellState, ConfigError, FillConfig, GameMode, Seed};

/// Errors from controller operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The operation only makes sense in a different mode.
    #[error("operation requires {required:?} mode, simulation is in {current:?}")]
    ModeMismatch {
        required: GameMode,
        current: GameMode,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A single cellular-automata simulation.
///
/// Owns exactly one [`GridStore`], one [`GameMode`], and one generation
/// counter; collaborators (the rule engines, the codec) only ever see
/// borrowed snapshots within a single call.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    grid: GridStore,
    mode: GameMode,
    generation: u64,
}

impl Simulation {
    pub fn new(mode: GameMode) -> Self {
        Self {
            grid: GridStore::new(),
            mode,
            generation: 0,
        }
    }

    /// Run one cycle: compute the next generation against the pre-cycle
    /// snapshot, swap it in, and bump the generation counter.
    ///
    /// An empty grid still counts a cycle.
    pub fn advance(&mut self) {
        self.grid = engine::next_generation(self.mode, &self.grid);
        self.generation += 1;
    }

    /// Clear all cells and reset the generation counter; mode unchanged.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Switch rule family.
    ///
    /// A real switch clears the grid (the two alphabets are incompatible)
    /// and resets the counter; re-setting the current mode is a no-op.
    pub fn set_mode(&mut self, mode: GameMode) {
        if self.mode == mode {
            return;
        }
        self.grid.clear();
        self.generation = 0;
        self.mode = mode;
    }

    /// Resample a bounded region with live cells (Game of Life only).
    ///
    /// Every position inside the region independently comes up `Alive`
    /// with probability `density`, absent otherwise; positions outside the
    /// region are untouched, as is the generation counter.
    pub fn randomize(&mut self, fill: &FillConfig) -> Result<(), SimError> {
        if self.mode != GameMode::GameOfLife {
            return Err(SimError::ModeMismatch {
                required: GameMode::GameOfLife,
                current: self.mode,
            });
        }
        fill.validate()?;

        let mut rng = match fill.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for pos in fill.region.points() {
            let alive = rng.gen_bool(f64::from(fill.density));
            self.grid.set(pos, alive.then_some(CellState::Alive));
        }

        log::debug!(
            "randomized {} positions at density {}",
            fill.region.area(),
            fill.density
        );
        Ok(())
    }

    /// Encode the current grid and mode as a save token.
    pub fn save(&self) -> String {
        codec::encode(&self.grid, self.mode)
    }

    /// Replace grid and mode from a save token.
    ///
    /// The token is decoded first; on any error the current grid, mode,
    /// and generation are untouched. On success the decoded cells are
    /// installed atomically, pruned against the new mode, and the
    /// generation counter resets to 0.
    pub fn load(&mut self, token: &str) -> Result<(), DecodeError> {
        let (mut grid, mode) = codec::decode(token)?;
        grid.prune(mode);

        self.grid = grid;
        self.mode = mode;
        self.generation = 0;
        log::debug!("loaded {} cells in {:?} mode", self.grid.len(), self.mode);
        Ok(())
    }

    /// Install a schema seed: set its mode, replace the cell set, and
    /// reset the generation counter.
    pub fn seed(&mut self, seed: &Seed) -> Result<(), SimError> {
        let cells = seed.cells()?;
        self.mode = seed.mode;
        self.grid = cells.into_iter().collect();
        self.generation = 0;
        Ok(())
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Completed cycles since the last restart/load/mode switch.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    /// Number of non-absent cells.
    #[inline]
    pub fn population(&self) -> usize {
        self.grid.len()
    }

    /// Iterate over the current cell set.
    pub fn cells(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.grid.iter()
    }

    /// Paint or erase one cell (the direct-editing surface).
    ///
    /// `None` erases. Painting a state outside the current mode's alphabet
    /// is rejected without touching the grid.
    pub fn set_cell(&mut self, pos: Point, state: Option<CellState>) -> Result<(), SimError> {
        if let Some(state) = state {
            if !state.belongs_to(self.mode) {
                return Err(SimError::ModeMismatch {
                    required: state.home_mode(),
                    current: self.mode,
                });
            }
        }
        self.grid.set(pos, state);
        Ok(())
    }

    /// Replace the whole painted cell set; entries outside the current
    /// mode's alphabet are dropped.
    pub fn set_cells(&mut self, cells: impl IntoIterator<Item = (Point, CellState)>) {
        self.grid = cells.into_iter().collect();
        self.grid.prune(self.mode);
    }
}

/// Point-in-time summary of a simulation, for progress reporting.
#[derive(Debug, Clone)]
pub struct SimulationStats {
    pub generation: u64,
    pub population: usize,
    pub bounds: Option<(Point, Point)>,
}

impl SimulationStats {
    pub fn from_sim(sim: &Simulation) -> Self {
        Self {
            generation: sim.generation(),
            population: sim.population(),
            bounds: sim.grid().bounds(),
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            Some((min, max)) => write!(
                f,
                "gen {}: {} cells in ({}, {})..({}, {})",
                self.generation, self.population, min.x, min.y, max.x, max.y
            ),
            None => write!(f, "gen {}: empty", self.generation),
        }
    }
}
