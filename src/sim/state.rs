//! Game state and core simulation types
//!
//! All session state lives in [`GameState`]; there are no ambient globals.
//! The controller transitions (`start`, `toggle_pause`, `reset`) are methods
//! here, the per-frame step is in [`crate::sim::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle title screen, nothing simulates
    Title,
    /// Active gameplay
    Playing,
    /// Game is paused (render-only, simulation frozen)
    Paused,
    /// Run ended (lives exhausted)
    GameOver,
}

/// Logical drawable area in unscaled pixel units, top-left origin, y down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub w: f32,
    pub h: f32,
    /// Horizontal displacement per tick while a direction is held
    pub speed: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            w: PLAYER_WIDTH,
            h: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
        }
    }
}

impl Player {
    /// Clamp x into `[0, playfield.width - w]`; must hold after every update
    pub fn clamp_x(&mut self, playfield: &Playfield) {
        self.pos.x = self.pos.x.clamp(0.0, (playfield.width - self.w).max(0.0));
    }

    /// Center horizontally, fixed offset above the playfield bottom
    pub fn place_for_start(&mut self, playfield: &Playfield) {
        self.pos.x = (playfield.width - self.w) / 2.0;
        self.pos.y = playfield.height - self.h - PLAYER_BOTTOM_OFFSET;
    }
}

/// A falling star entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Top-left corner of the star's bounding square
    pub pos: Vec2,
    /// Diameter of the bounding square
    pub size: f32,
    /// Vertical displacement per tick
    pub vy: f32,
    /// Score awarded on catch, fixed at spawn
    pub points: u32,
}

impl Star {
    /// Point value derived deterministically from size
    pub fn point_value(size: f32) -> u32 {
        (size / POINTS_DIVISOR).round() as u32
    }
}

/// Complete game session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; serialized so a restored state continues the same stream
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score, monotone non-decreasing between resets
    pub score: u32,
    /// Remaining lives; the run ends at <= 0
    pub lives: i32,
    /// Difficulty level, >= 1
    pub level: u32,
    /// Milliseconds between spawns, floored at `SPAWN_INTERVAL_MIN_MS`
    pub spawn_interval_ms: f32,
    /// Accumulated time toward the next spawn
    pub spawn_timer_ms: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub playfield: Playfield,
    pub player: Player,
    /// Unordered; resolved exactly once per tick each
    pub stars: Vec<Star>,
}

impl GameState {
    /// Create a fresh session in the Title phase
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            spawn_interval_ms: SPAWN_INTERVAL_START_MS,
            spawn_timer_ms: 0.0,
            time_ticks: 0,
            playfield: Playfield::default(),
            player: Player::default(),
            stars: Vec::new(),
        }
    }

    /// Begin a run. Valid only from Title or GameOver; positions the paddle
    /// and zeroes the spawn timer but does NOT touch score/lives/level -
    /// Start and Reset are distinct actions.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Title | GamePhase::GameOver => {
                self.spawn_timer_ms = 0.0;
                self.player.place_for_start(&self.playfield);
                self.phase = GamePhase::Playing;
                log::info!("run started (seed {})", self.seed);
            }
            _ => {}
        }
    }

    /// Flip Playing <-> Paused; no effect in Title or GameOver
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    /// Return to a fresh Title session. Valid from any phase; resets every
    /// run field atomically and clears all stars.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.level = 1;
        self.spawn_interval_ms = SPAWN_INTERVAL_START_MS;
        self.spawn_timer_ms = 0.0;
        self.time_ticks = 0;
        self.stars.clear();
        self.phase = GamePhase::Title;
    }

    /// Adopt a new playfield size (canvas resize); keeps the paddle legal
    pub fn set_playfield(&mut self, width: f32, height: f32) {
        self.playfield = Playfield::new(width, height);
        self.player.pos.y = height - self.player.h - PLAYER_BOTTOM_OFFSET;
        self.player.clamp_x(&self.playfield);
    }
}
