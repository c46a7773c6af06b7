//! Score-driven difficulty ramp
//!
//! Gap size and spawn interval are always derived from the absolute score,
//! never decremented relative to their previous value.

use crate::tuning::Tuning;

/// Gap size for a given score, floored at `min_gap`
pub fn gap_for_score(tuning: &Tuning, score: u32) -> f32 {
    (tuning.initial_gap - score as f32 * tuning.gap_shrink_per_point).max(tuning.min_gap)
}

/// Spawn interval for a given score, floored at `min_spawn_interval`
pub fn interval_for_score(tuning: &Tuning, score: u32) -> u32 {
    tuning
        .initial_spawn_interval
        .saturating_sub(score / tuning.interval_shrink_divisor)
        .max(tuning.min_spawn_interval)
}

/// True when the ramp is re-evaluated at this score
#[inline]
pub fn is_ramp_score(tuning: &Tuning, score: u32) -> bool {
    score > 0 && score % tuning.ramp_step == 0
}
