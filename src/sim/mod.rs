//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per displayed frame
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::{Aabb, avatar_bounds, hits_ground, hits_obstacle};
pub use difficulty::{gap_for_score, interval_for_score, is_ramp_score};
pub use state::{Avatar, CrashCause, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{FrameOutcome, InputOutcome, Trigger, advance_frame, flap, handle_input, start, tick};
