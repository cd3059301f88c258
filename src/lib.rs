//! Catch the Stars - a falling-star arcade catcher
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collision, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Display/accessibility preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default playfield size in logical pixels (overridden by canvas size)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle geometry
    pub const PLAYER_WIDTH: f32 = 120.0;
    pub const PLAYER_HEIGHT: f32 = 18.0;
    /// Gap between the paddle and the playfield bottom
    pub const PLAYER_BOTTOM_OFFSET: f32 = 8.0;
    /// Horizontal displacement per tick while a direction key is held
    pub const PLAYER_SPEED: f32 = 8.0;

    /// Star diameter range at spawn
    pub const STAR_SIZE_MIN: f32 = 14.0;
    pub const STAR_SIZE_MAX: f32 = 32.0;
    /// Stars enter above the visible playfield
    pub const STAR_SPAWN_Y: f32 = -30.0;
    /// Horizontal margin kept clear on both playfield edges at spawn
    pub const SPAWN_MARGIN: f32 = 10.0;
    /// A star this far below the playfield bottom counts as missed
    pub const MISS_MARGIN: f32 = 40.0;
    /// Point value is `round(size / POINTS_DIVISOR)`
    pub const POINTS_DIVISOR: f32 = 6.0;

    /// Fall speed range, widened by level: `[1.6 + L*0.3, 2.8 + L*0.6]`
    pub const STAR_VY_BASE_MIN: f32 = 1.6;
    pub const STAR_VY_BASE_MAX: f32 = 2.8;
    pub const STAR_VY_LEVEL_MIN: f32 = 0.3;
    pub const STAR_VY_LEVEL_MAX: f32 = 0.6;

    /// Spawn cadence in milliseconds
    pub const SPAWN_INTERVAL_START_MS: f32 = 900.0;
    pub const SPAWN_INTERVAL_STEP_MS: f32 = 120.0;
    pub const SPAWN_INTERVAL_MIN_MS: f32 = 300.0;

    /// Session defaults
    pub const STARTING_LIVES: i32 = 3;
    /// Level advances when score reaches `level * LEVEL_SCORE_STEP`
    pub const LEVEL_SCORE_STEP: u32 = 10;

    /// Cap on per-frame elapsed time fed to the tick (tab switches etc.)
    pub const MAX_FRAME_DT_MS: f32 = 100.0;
}
