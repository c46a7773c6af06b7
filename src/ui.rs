//! HUD view model
//!
//! Everything the DOM layer needs to show, derived from `GameState` without
//! touching it.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

/// Medal awarded at game over
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Medal {
    /// Highest medal the score qualifies for
    pub fn for_score(score: u32) -> Option<Medal> {
        match score {
            40.. => Some(Medal::Platinum),
            30.. => Some(Medal::Gold),
            20.. => Some(Medal::Silver),
            10.. => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Bronze => "Bronze",
            Medal::Silver => "Silver",
            Medal::Gold => "Gold",
            Medal::Platinum => "Platinum",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Medal::Bronze => "🥉",
            Medal::Silver => "🥈",
            Medal::Gold => "🥇",
            Medal::Platinum => "🏅",
        }
    }
}

/// Text shown for an optional medal
pub fn medal_label(medal: Option<Medal>) -> String {
    match medal {
        Some(m) => format!("{} {} Medal!", m.emoji(), m.as_str()),
        None => "No Medal".to_string(),
    }
}

/// Final numbers for the game-over panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub score: u32,
    pub best_score: u32,
    pub medal: Option<Medal>,
}

impl GameOverSummary {
    pub fn new(score: u32, best_score: u32) -> Self {
        Self {
            score,
            best_score,
            medal: Medal::for_score(score),
        }
    }

    /// "Score: S | Best: B"
    pub fn score_line(&self) -> String {
        format!("Score: {} | Best: {}", self.score, self.best_score)
    }

    pub fn medal_line(&self) -> String {
        medal_label(self.medal)
    }
}

/// What the HUD should show for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    /// Start prompt overlay
    pub start_prompt: bool,
    /// Live score counter, hidden before the first start
    pub score: Option<u32>,
    /// Game-over panel
    pub game_over: Option<GameOverSummary>,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        match state.phase {
            GamePhase::Idle => Self {
                start_prompt: true,
                score: None,
                game_over: None,
            },
            GamePhase::Running => Self {
                start_prompt: false,
                score: Some(state.score),
                game_over: None,
            },
            GamePhase::Ended => Self {
                start_prompt: false,
                score: Some(state.score),
                game_over: Some(GameOverSummary::new(state.score, state.best_score)),
            },
        }
    }
}
