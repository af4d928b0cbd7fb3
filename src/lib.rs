//! Sparse-grid cellular automata: Conway's Game of Life and WireWorld.
//!
//! The engine stores only non-absent cells in a sparse position map, so
//! grids are unbounded in practice and a cycle costs time proportional to
//! the population rather than any grid extent. A simulation's full state
//! (cell set + mode) round-trips through a compact text token suitable for
//! clipboards and `.gol` files.
//!
//! # Architecture
//!
//! The crate is split into five modules:
//!
//! - `schema`: modes, cell alphabets, fill parameters, and JSON seeds
//! - `grid`: sparse position-to-state storage
//! - `engine`: per-cycle transition rules for both automata
//! - `codec`: the portable save-token format
//! - `sim`: the controller tying a grid to a mode and a generation counter
//!
//! # Example
//!
//! ```rust
//! use wirelife::{CellState, GameMode, Point, Simulation};
//!
//! // Paint a blinker and advance one cycle.
//! let mut sim = Simulation::new(GameMode::GameOfLife);
//! for y in -1..=1 {
//!     sim.set_cell(Point::new(0, y), Some(CellState::Alive)).unwrap();
//! }
//! sim.advance();
//! assert_eq!(sim.population(), 3);
//!
//! // Full state survives a save/load round trip.
//! let token = sim.save();
//! let mut restored = Simulation::default();
//! restored.load(&token).unwrap();
//! assert_eq!(restored.grid(), sim.grid());
//! ```

pub mod codec;
pub mod engine;
pub mod grid;
pub mod schema;
pub mod sim;

// Re-export commonly used types
pub use codec::{DecodeError, decode, encode};
pub use grid::{GridStore, Point};
pub use schema::{CellState, ConfigError, FillConfig, GameMode, Pattern, Region, Seed};
pub use sim::{SimError, Simulation, SimulationStats};
