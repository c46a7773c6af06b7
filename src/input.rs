//! Device input to simulation trigger mapping
//!
//! Keeps the DOM handlers dumb: they forward raw key codes and pointer
//! presses here and pass the resulting [`Trigger`] to `sim::handle_input`.

use crate::sim::{GamePhase, Trigger};

/// Map a `KeyboardEvent.code` to a trigger for the current phase.
///
/// `Enter` is always the primary action. `Space` starts from the start
/// screen and flaps otherwise, so it never restarts a finished run.
pub fn key_trigger(code: &str, phase: GamePhase) -> Option<Trigger> {
    match code {
        "Enter" | "NumpadEnter" => Some(Trigger::Primary),
        "Space" => match phase {
            GamePhase::Idle => Some(Trigger::Primary),
            GamePhase::Running | GamePhase::Ended => Some(Trigger::Flap),
        },
        _ => None,
    }
}

/// Mouse down and touch start
pub fn pointer_trigger() -> Trigger {
    Trigger::Primary
}

/// Keys whose browser default (scrolling) should be suppressed
pub fn is_game_key(code: &str) -> bool {
    matches!(code, "Space" | "Enter" | "NumpadEnter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, InputOutcome, handle_input};

    #[test]
    fn test_space_depends_on_phase() {
        assert_eq!(key_trigger("Space", GamePhase::Idle), Some(Trigger::Primary));
        assert_eq!(key_trigger("Space", GamePhase::Running), Some(Trigger::Flap));
        assert_eq!(key_trigger("Space", GamePhase::Ended), Some(Trigger::Flap));
    }

    #[test]
    fn test_enter_is_primary() {
        for phase in [GamePhase::Idle, GamePhase::Running, GamePhase::Ended] {
            assert_eq!(key_trigger("Enter", phase), Some(Trigger::Primary));
        }
        assert_eq!(key_trigger("KeyA", GamePhase::Idle), None);
    }

    #[test]
    fn test_space_never_restarts() {
        let mut state = GameState::new(1);
        let trigger = key_trigger("Space", state.phase).unwrap();
        assert_eq!(handle_input(&mut state, trigger), InputOutcome::Started);

        state.phase = GamePhase::Ended;
        let trigger = key_trigger("Space", state.phase).unwrap();
        assert_eq!(handle_input(&mut state, trigger), InputOutcome::Ignored);
        assert_eq!(state.phase, GamePhase::Ended);

        let trigger = key_trigger("Enter", state.phase).unwrap();
        assert_eq!(handle_input(&mut state, trigger), InputOutcome::Restarted);
    }

    #[test]
    fn test_pointer_starts_and_restarts() {
        let mut state = GameState::new(1);
        assert_eq!(handle_input(&mut state, pointer_trigger()), InputOutcome::Started);
        assert_eq!(handle_input(&mut state, pointer_trigger()), InputOutcome::Ignored);
        state.phase = GamePhase::Ended;
        assert_eq!(handle_input(&mut state, pointer_trigger()), InputOutcome::Restarted);
    }
}
