//! Data-driven game balance
//!
//! Every number the simulation reads lives in [`Tuning`]. Two presets ship
//! with the game; anything else can be supplied as (partial) JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error produced while loading or validating a [`Tuning`]
#[derive(Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    Parse(serde_json::Error),
    /// Preset name not recognised
    UnknownPreset(String),
    /// A field holds a value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {}", e),
            TuningError::UnknownPreset(name) => write!(f, "unknown tuning preset '{}'", name),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub ground_height: f32,

    pub avatar_x: f32,
    pub avatar_radius: f32,
    pub gravity: f32,
    pub flap_impulse: f32,

    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    pub gap_margin: f32,

    pub initial_gap: f32,
    pub min_gap: f32,
    pub initial_spawn_interval: u32,
    pub min_spawn_interval: u32,
    pub ramp_step: u32,
    pub gap_shrink_per_point: f32,
    pub interval_shrink_divisor: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl Tuning {
    /// Wide gaps, slow cadence
    pub fn standard() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            avatar_x: AVATAR_X,
            avatar_radius: AVATAR_RADIUS,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            gap_margin: GAP_MARGIN,
            initial_gap: INITIAL_GAP,
            min_gap: MIN_GAP,
            initial_spawn_interval: INITIAL_SPAWN_INTERVAL,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            ramp_step: RAMP_STEP,
            gap_shrink_per_point: GAP_SHRINK_PER_POINT,
            interval_shrink_divisor: INTERVAL_SHRINK_DIVISOR,
        }
    }

    /// Tighter gaps and a faster cadence
    pub fn compact() -> Self {
        Self {
            initial_gap: 200.0,
            min_gap: 120.0,
            initial_spawn_interval: 110,
            min_spawn_interval: 70,
            ..Self::standard()
        }
    }

    /// Look up a preset by name (case-insensitive)
    pub fn preset(name: &str) -> Result<Self, TuningError> {
        match name.trim().to_lowercase().as_str() {
            "" | "standard" | "default" => Ok(Self::standard()),
            "compact" | "hard" => Ok(Self::compact()),
            other => Err(TuningError::UnknownPreset(other.to_string())),
        }
    }

    /// Preset named by a `variant` parameter in a URL query string
    /// (`?variant=compact`); standard when the parameter is absent
    pub fn from_query(query: &str) -> Result<Self, TuningError> {
        let variant = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "variant")
            .map(|(_, value)| value)
            .unwrap_or("");
        Self::preset(variant)
    }

    /// Parse a JSON object; absent fields take their standard value
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Y coordinate of the top of the ground band
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.playfield_height - self.ground_height
    }

    /// Largest gap that still leaves a non-empty placement interval
    #[inline]
    pub fn max_placeable_gap(&self) -> f32 {
        (self.ground_top() - 2.0 * self.gap_margin - 1.0).max(0.0)
    }

    /// Check that the simulation can run with these values
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }

        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        positive("avatar_radius", self.avatar_radius)?;
        positive("gravity", self.gravity)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("obstacle_speed", self.obstacle_speed)?;
        positive("min_gap", self.min_gap)?;
        positive("initial_gap", self.initial_gap)?;

        for (field, value) in [
            ("ground_height", self.ground_height),
            ("gap_margin", self.gap_margin),
            ("avatar_x", self.avatar_x),
            ("gap_shrink_per_point", self.gap_shrink_per_point),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a non-negative finite number",
                });
            }
        }

        if !self.flap_impulse.is_finite() || self.flap_impulse >= 0.0 {
            return Err(TuningError::Invalid {
                field: "flap_impulse",
                reason: "must be negative (upward)",
            });
        }
        if self.ground_height >= self.playfield_height {
            return Err(TuningError::Invalid {
                field: "ground_height",
                reason: "must be smaller than the playfield height",
            });
        }
        if self.max_placeable_gap() <= 0.0 {
            return Err(TuningError::Invalid {
                field: "gap_margin",
                reason: "leaves no room to place a gap",
            });
        }
        if self.min_gap > self.initial_gap {
            return Err(TuningError::Invalid {
                field: "min_gap",
                reason: "must not exceed initial_gap",
            });
        }
        if self.min_spawn_interval == 0 {
            return Err(TuningError::Invalid {
                field: "min_spawn_interval",
                reason: "must be at least one step",
            });
        }
        if self.min_spawn_interval > self.initial_spawn_interval {
            return Err(TuningError::Invalid {
                field: "min_spawn_interval",
                reason: "must not exceed initial_spawn_interval",
            });
        }
        if self.ramp_step == 0 {
            return Err(TuningError::Invalid {
                field: "ramp_step",
                reason: "must be at least 1",
            });
        }
        if self.interval_shrink_divisor == 0 {
            return Err(TuningError::Invalid {
                field: "interval_shrink_divisor",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        assert!(Tuning::standard().validate().is_ok());
        assert!(Tuning::compact().validate().is_ok());
        assert_eq!(Tuning::default(), Tuning::standard());
    }

    #[test]
    fn test_compact_only_changes_ramp() {
        let standard = Tuning::standard();
        let compact = Tuning::compact();
        assert_eq!(compact.initial_gap, 200.0);
        assert_eq!(compact.min_gap, 120.0);
        assert_eq!(compact.initial_spawn_interval, 110);
        assert_eq!(compact.min_spawn_interval, 70);
        assert_eq!(compact.gravity, standard.gravity);
        assert_eq!(compact.obstacle_speed, standard.obstacle_speed);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(Tuning::preset("Compact").unwrap(), Tuning::compact());
        assert_eq!(Tuning::preset("").unwrap(), Tuning::standard());
        assert!(matches!(
            Tuning::preset("nightmare"),
            Err(TuningError::UnknownPreset(name)) if name == "nightmare"
        ));
    }

    #[test]
    fn test_query_variant() {
        assert_eq!(Tuning::from_query("").unwrap(), Tuning::standard());
        assert_eq!(Tuning::from_query("?variant=compact").unwrap(), Tuning::compact());
        assert_eq!(
            Tuning::from_query("?debug=1&variant=standard").unwrap(),
            Tuning::standard()
        );
        assert!(Tuning::from_query("?variant=zzz").is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_standard() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.3, "min_spawn_interval": 90 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.3);
        assert_eq!(tuning.min_spawn_interval, 90);
        assert_eq!(tuning.initial_gap, INITIAL_GAP);
    }

    #[test]
    fn test_json_round_trip_keeps_values() {
        let compact = Tuning::compact();
        let parsed = Tuning::from_json(&compact.to_json().unwrap()).unwrap();
        assert_eq!(parsed, compact);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Tuning::from_json("{ gravity: }").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse tuning"));
    }

    #[test]
    fn test_rejects_upward_gravity_and_downward_flap() {
        let mut tuning = Tuning::standard();
        tuning.gravity = -0.1;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "gravity", .. })
        ));

        let mut tuning = Tuning::standard();
        tuning.flap_impulse = 2.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "flap_impulse", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_ramp_bounds() {
        let mut tuning = Tuning::standard();
        tuning.min_gap = 300.0;
        assert!(tuning.validate().is_err());

        let mut tuning = Tuning::standard();
        tuning.min_spawn_interval = 0;
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_playfield_without_gap_room() {
        let mut tuning = Tuning::standard();
        tuning.playfield_height = 140.0;
        tuning.ground_height = 80.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "gap_margin", .. })
        ));
    }

    #[test]
    fn test_max_placeable_gap() {
        let tuning = Tuning::standard();
        // 600 - 80 - 60 - 1
        assert_eq!(tuning.max_placeable_gap(), 459.0);
        assert_eq!(tuning.ground_top(), 520.0);
    }
}
