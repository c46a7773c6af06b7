//! Per-frame simulation step
//!
//! Core game loop that advances simulation deterministically. One call to
//! [`tick`] is one displayed frame; nothing is scaled by wall-clock time.

use rand::Rng;

use super::collision::{clamp_to_ceiling, hits_ground, hits_obstacle, is_off_screen, is_passed};
use super::difficulty::{gap_for_score, interval_for_score, is_ramp_score};
use super::state::{CrashCause, GameEvent, GamePhase, GameState, Obstacle};

/// Logical input triggers, independent of the device that produced them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Pointer press, touch start or the primary key
    Primary,
    /// The flap key
    Flap,
    /// Restart button on the game-over panel
    Restart,
}

/// What an input trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Started,
    Flapped,
    Restarted,
    Ignored,
}

/// Result of one frame of the external driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Renderer should draw this frame
    pub render: bool,
    /// Driver should schedule another frame
    pub rearm: bool,
}

/// Apply an input trigger according to the current phase
pub fn handle_input(state: &mut GameState, trigger: Trigger) -> InputOutcome {
    match (state.phase, trigger) {
        (GamePhase::Idle, Trigger::Primary) => {
            start(state);
            InputOutcome::Started
        }
        (GamePhase::Running, Trigger::Flap) => {
            flap(state);
            InputOutcome::Flapped
        }
        (GamePhase::Ended, Trigger::Primary | Trigger::Restart) => {
            state.reset();
            log::info!("Reset (best score {})", state.best_score);
            InputOutcome::Restarted
        }
        _ => InputOutcome::Ignored,
    }
}

/// `Idle -> Running`. No-op in any other phase.
pub fn start(state: &mut GameState) {
    if state.phase != GamePhase::Idle {
        return;
    }
    state.phase = GamePhase::Running;
    state.events.push(GameEvent::Started);
    log::info!("Run started (seed {})", state.seed);
}

/// Overwrite the avatar's velocity with the flap impulse. No-op unless running.
pub fn flap(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    state.avatar.vel = state.tuning.flap_impulse;
    state.events.push(GameEvent::Flapped);
}

/// One driver frame: step while running, then report whether to draw and
/// whether to schedule the next frame
pub fn advance_frame(state: &mut GameState) -> FrameOutcome {
    tick(state);
    FrameOutcome {
        render: state.phase != GamePhase::Idle,
        rearm: state.is_running(),
    }
}

/// Advance the game state by one step. Does nothing outside `Running`.
pub fn tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    state.frame += 1;

    let gravity = state.tuning.gravity;
    state.avatar.integrate(gravity);

    apply_difficulty(state);

    if state.frame % state.spawn_interval as u64 == 0 {
        spawn_obstacle(state);
    }

    let speed = state.tuning.obstacle_speed;
    for obstacle in &mut state.obstacles {
        obstacle.x -= speed;
    }

    // Ordered by x, so only the oldest can have left the screen
    if state
        .obstacles
        .first()
        .is_some_and(|o| is_off_screen(o, &state.tuning))
    {
        state.obstacles.remove(0);
    }

    if state
        .obstacles
        .iter()
        .any(|o| hits_obstacle(&state.avatar, o, &state.tuning))
    {
        state.end_run(CrashCause::Obstacle);
        return;
    }

    for obstacle in &mut state.obstacles {
        if !obstacle.passed && is_passed(obstacle, &state.tuning) {
            obstacle.passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
        }
    }

    if hits_ground(&state.avatar, &state.tuning) {
        state.end_run(CrashCause::Ground);
        return;
    }

    if clamp_to_ceiling(&mut state.avatar, &state.tuning) {
        state.events.push(GameEvent::CeilingBump);
    }
}

/// Re-derive gap size and spawn interval from the absolute score
fn apply_difficulty(state: &mut GameState) {
    if !is_ramp_score(&state.tuning, state.score) {
        return;
    }
    let gap_size = gap_for_score(&state.tuning, state.score);
    let spawn_interval = interval_for_score(&state.tuning, state.score);
    if gap_size != state.gap_size || spawn_interval != state.spawn_interval {
        log::debug!(
            "Difficulty at score {}: gap {} -> {}, interval {} -> {}",
            state.score,
            state.gap_size,
            gap_size,
            state.spawn_interval,
            spawn_interval
        );
        state.gap_size = gap_size;
        state.spawn_interval = spawn_interval;
        state.events.push(GameEvent::DifficultyChanged {
            gap_size,
            spawn_interval,
        });
    }
}

/// Push a new obstacle at the right edge with a random gap placement
fn spawn_obstacle(state: &mut GameState) {
    let tuning = &state.tuning;
    // Never let the placement interval collapse
    let gap_size = state.gap_size.min(tuning.max_placeable_gap());
    let span = (tuning.ground_top() - gap_size - 2.0 * tuning.gap_margin).max(1.0);
    let gap_y = state.rng.random_range(0.0..span).floor() + tuning.gap_margin;

    log::debug!(
        "Spawn at frame {}: gap_y {} size {}",
        state.frame,
        gap_y,
        gap_size
    );
    state
        .obstacles
        .push(Obstacle::new(tuning.playfield_width, gap_y, gap_size));
    state.events.push(GameEvent::Spawned { gap_y, gap_size });
}
