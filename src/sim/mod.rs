//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Per-tick displacements; only the spawn timer consumes elapsed time
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{star_caught, star_missed};
pub use spawn::{maybe_spawn, spawn_star};
pub use state::{GamePhase, GameState, Playfield, Player, Star};
pub use tick::{TickInput, tick};
