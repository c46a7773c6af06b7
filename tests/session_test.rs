use gap_glider::sim::*;
use gap_glider::{GameOverSummary, HudView, Medal, Tuning};
use proptest::prelude::*;

/// Step with the avatar pinned at `y` so only obstacles can end the run
fn pinned_step(state: &mut GameState, y: f32) -> FrameOutcome {
    state.avatar = Avatar {
        y,
        vel: -state.tuning.gravity,
    };
    advance_frame(state)
}

#[test]
fn test_free_fall_session() {
    let mut state = GameState::new(2024);
    handle_input(&mut state, Trigger::Primary);

    let mut frames = 0;
    while advance_frame(&mut state).rearm {
        frames += 1;
        assert!(frames < 100, "avatar never reached the ground");
    }

    assert_eq!(state.phase, GamePhase::Ended);
    assert_eq!(state.score, 0);
    assert!(state.obstacles.is_empty());
    let events = state.drain_events();
    assert_eq!(events.first(), Some(&GameEvent::Started));
    assert!(matches!(
        events.last(),
        Some(GameEvent::Crashed {
            cause: CrashCause::Ground,
            score: 0,
            best_score: 0
        })
    ));
}

#[test]
fn test_obstacle_scores_exactly_once() {
    let mut state = GameState::new(77);
    handle_input(&mut state, Trigger::Primary);

    // Wait for the first spawn
    while state.obstacles.is_empty() {
        pinned_step(&mut state, 300.0);
    }
    assert_eq!(state.frame, 140);

    // Line the avatar up with the gap and fly through
    let gap_center = state.obstacles[0].gap_y + state.obstacles[0].gap_size / 2.0;
    let width = state.tuning.obstacle_width;
    let avatar_x = state.tuning.avatar_x;
    while state.obstacles[0].trailing_edge(width) >= avatar_x {
        assert_eq!(state.score, 0);
        assert!(pinned_step(&mut state, gap_center).rearm);
    }

    // The step that moved the trailing edge past the avatar scored it
    assert_eq!(state.score, 1);
    assert!(state.obstacles[0].passed);
    for _ in 0..30 {
        pinned_step(&mut state, gap_center);
    }
    assert_eq!(state.score, 1);
    let scored = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Scored { .. }))
        .count();
    assert_eq!(scored, 1);
}

#[test]
fn test_best_score_survives_restarts() {
    let mut state = GameState::new(5);
    let mut bests = Vec::new();

    for score in [3, 9, 4, 12, 0] {
        handle_input(&mut state, Trigger::Primary);
        state.score = score;
        // Dive into the ground
        state.avatar.y = 499.0;
        state.avatar.vel = 5.0;
        assert!(!advance_frame(&mut state).rearm);
        assert_eq!(state.phase, GamePhase::Ended);

        let hud = HudView::from_state(&state);
        let summary = hud.game_over.expect("game-over panel");
        bests.push(summary.best_score);

        assert_eq!(handle_input(&mut state, Trigger::Primary), InputOutcome::Restarted);
        assert_eq!(state.score, 0);
    }

    assert_eq!(bests, vec![3, 9, 9, 12, 12]);
}

#[test]
fn test_independent_instances() {
    let mut a = GameState::new(1);
    let b = GameState::new(1);
    handle_input(&mut a, Trigger::Primary);
    for _ in 0..10 {
        advance_frame(&mut a);
    }
    assert_eq!(a.frame, 10);
    assert_eq!(b.frame, 0);
    assert_eq!(b.phase, GamePhase::Idle);
}

#[test]
fn test_compact_variant_session() {
    let mut state = GameState::with_tuning(11, Tuning::compact()).unwrap();
    handle_input(&mut state, Trigger::Primary);
    while state.obstacles.is_empty() {
        pinned_step(&mut state, 300.0);
    }
    assert_eq!(state.frame, 110);
    let obstacle = &state.obstacles[0];
    assert_eq!(obstacle.gap_size, 200.0);
    assert!(obstacle.gap_y >= 30.0 && obstacle.gap_y < 520.0 - 200.0 - 30.0);
}

#[test]
fn test_medal_for_final_score() {
    let summary = GameOverSummary::new(41, 41);
    assert_eq!(summary.medal, Some(Medal::Platinum));
}

proptest! {
    #[test]
    fn prop_best_score_monotonic(scores in proptest::collection::vec(0u32..60, 1..20)) {
        let mut state = GameState::new(3);
        let mut previous_best = 0;
        for score in scores {
            handle_input(&mut state, Trigger::Primary);
            state.score = score;
            state.avatar.y = 510.0;
            advance_frame(&mut state);
            prop_assert_eq!(state.phase, GamePhase::Ended);
            prop_assert!(state.best_score >= previous_best);
            prop_assert!(state.best_score >= score);
            previous_best = state.best_score;
            handle_input(&mut state, Trigger::Restart);
            prop_assert_eq!(state.best_score, previous_best);
        }
    }

    #[test]
    fn prop_avatar_never_above_ceiling(flaps in proptest::collection::vec(any::<bool>(), 1..400)) {
        let mut state = GameState::new(8);
        handle_input(&mut state, Trigger::Primary);
        for flap in flaps {
            if state.phase != GamePhase::Running {
                break;
            }
            if flap {
                handle_input(&mut state, Trigger::Flap);
            }
            advance_frame(&mut state);
            if state.phase == GamePhase::Running {
                prop_assert!(state.avatar.y - state.tuning.avatar_radius >= 0.0);
            }
        }
    }
}
