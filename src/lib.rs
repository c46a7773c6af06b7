//! Gap Glider - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `input`: Browser input to simulation trigger mapping
//! - `ui`: HUD view model and game-over summary
//! - `renderer`: WebGPU rendering pipeline

pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};
pub use ui::{GameOverSummary, HudView, Medal};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (y grows downward, origin at top-left)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Height of the ground band at the bottom of the playfield
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Avatar defaults - horizontal position never changes
    pub const AVATAR_X: f32 = 80.0;
    pub const AVATAR_RADIUS: f32 = 20.0;

    /// Downward acceleration, units per step²
    pub const GRAVITY: f32 = 0.22;
    /// Velocity assigned on flap (negative = upward)
    pub const FLAP_IMPULSE: f32 = -6.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Horizontal scroll per step
    pub const OBSTACLE_SPEED: f32 = 1.4;
    /// Clearance kept between a gap and the ceiling / ground
    pub const GAP_MARGIN: f32 = 30.0;

    /// Difficulty ramp
    pub const INITIAL_GAP: f32 = 260.0;
    pub const MIN_GAP: f32 = 180.0;
    pub const INITIAL_SPAWN_INTERVAL: u32 = 140;
    pub const MIN_SPAWN_INTERVAL: u32 = 100;
    /// Ramp is re-evaluated at positive multiples of this score
    pub const RAMP_STEP: u32 = 5;
    /// Gap shrink per point of score
    pub const GAP_SHRINK_PER_POINT: f32 = 4.0;
    /// Spawn interval shrinks by `score / INTERVAL_SHRINK_DIVISOR`
    pub const INTERVAL_SHRINK_DIVISOR: u32 = 2;
}
