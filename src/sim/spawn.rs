//! Timer-driven star spawning
//!
//! The spawn timer accumulates real elapsed milliseconds; everything else in
//! the simulation moves in per-tick displacements.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Star};
use crate::consts::*;

/// Accumulate elapsed time and emit exactly one star once the timer passes
/// the current spawn interval.
pub fn maybe_spawn(state: &mut GameState, dt_ms: f32) {
    state.spawn_timer_ms += dt_ms;
    if state.spawn_timer_ms > state.spawn_interval_ms {
        state.spawn_timer_ms = 0.0;
        let star = spawn_star(state);
        state.stars.push(star);
    }
}

/// Build a new star above the playfield with level-scaled fall speed.
pub fn spawn_star(state: &mut GameState) -> Star {
    let level = state.level as f32;
    let size = state.rng.random_range(STAR_SIZE_MIN..=STAR_SIZE_MAX);

    // On a degenerate (very narrow) playfield the upper bound collapses to
    // the lower margin rather than producing an empty range.
    let x_max = (state.playfield.width - SPAWN_MARGIN - size).max(SPAWN_MARGIN);
    let x = state.rng.random_range(SPAWN_MARGIN..=x_max);

    let vy_min = STAR_VY_BASE_MIN + level * STAR_VY_LEVEL_MIN;
    let vy_max = STAR_VY_BASE_MAX + level * STAR_VY_LEVEL_MAX;
    let vy = state.rng.random_range(vy_min..=vy_max);

    Star {
        pos: Vec2::new(x, STAR_SPAWN_Y),
        size,
        vy,
        points: Star::point_value(size),
    }
}
