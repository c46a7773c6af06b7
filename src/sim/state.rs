//! Game state and core simulation types
//!
//! One `GameState` owns everything that changes while playing. Instances are
//! independent; nothing here is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start trigger
    Idle,
    /// Active gameplay
    Running,
    /// Run ended by a collision; waiting for restart
    Ended,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Obstacle,
    Ground,
}

/// Things that happened during a step or input, for UI/audio/logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    Spawned { gap_y: f32, gap_size: f32 },
    Scored { score: u32 },
    DifficultyChanged { gap_size: f32, spawn_interval: u32 },
    CeilingBump,
    Crashed { cause: CrashCause, score: u32, best_score: u32 },
    Reset,
}

/// The player's avatar. Horizontal position is fixed by the tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Vertical centre (y grows downward)
    pub y: f32,
    /// Vertical velocity, units per step
    pub vel: f32,
}

impl Avatar {
    /// Avatar at rest in the vertical centre of the playfield
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            y: tuning.playfield_height / 2.0,
            vel: 0.0,
        }
    }

    /// Semi-implicit Euler: velocity first, then position
    #[inline]
    pub fn integrate(&mut self, gravity: f32) {
        self.vel += gravity;
        self.y += self.vel;
    }
}

/// A barrier pair with a vertical opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top of the opening
    pub gap_y: f32,
    /// Height of the opening, fixed at spawn
    pub gap_size: f32,
    /// Already counted towards the score
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_y: f32, gap_size: f32) -> Self {
        Self {
            x,
            gap_y,
            gap_size,
            passed: false,
        }
    }

    /// Right (trailing) edge
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Bottom of the opening
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + self.gap_size
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Parameters this state was built with
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    pub avatar: Avatar,
    /// Obstacles ordered oldest (leftmost) first
    pub obstacles: Vec<Obstacle>,
    /// Score for the current run
    pub score: u32,
    /// Best score across runs of this state
    pub best_score: u32,
    /// Simulation step counter for the current run
    pub frame: u64,
    /// Gap size the next spawned obstacle gets
    pub gap_size: f32,
    /// Steps between spawns
    pub spawn_interval: u32,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the standard tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::standard())
    }

    /// Create a new game state with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            avatar: Avatar::centered(&tuning),
            obstacles: Vec::new(),
            score: 0,
            best_score: 0,
            frame: 0,
            gap_size: tuning.initial_gap,
            spawn_interval: tuning.initial_spawn_interval,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            tuning,
        }
    }

    /// Reinitialise everything except the best score and RNG stream
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.avatar = Avatar::centered(&self.tuning);
        self.obstacles.clear();
        self.score = 0;
        self.frame = 0;
        self.gap_size = self.tuning.initial_gap;
        self.spawn_interval = self.tuning.initial_spawn_interval;
        self.events.push(GameEvent::Reset);
    }

    /// Move to `Ended`, folding the run score into the best score
    pub(crate) fn end_run(&mut self, cause: CrashCause) {
        self.phase = GamePhase::Ended;
        self.best_score = self.best_score.max(self.score);
        log::info!(
            "Run ended ({:?}) at frame {}: score {}, best {}",
            cause,
            self.frame,
            self.score,
            self.best_score
        );
        self.events.push(GameEvent::Crashed {
            cause,
            score: self.score,
            best_score: self.best_score,
        });
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
