//! Player tuning: timings, starting state and step size.

use animated_core::{AnimationError, Millis, Rgba, Vec2};
use serde::{Deserialize, Serialize};

/// Tuning for [`Player`](crate::player::Player).
/// Every field has a default, so a partial JSON document is enough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Time for one positional step or a reset.
    pub move_time: Millis,
    /// Time for a beat flash to fade back to the initial color.
    pub color_time: Millis,

    pub initial_position: Vec2,
    pub initial_radius: f32,
    pub initial_color: Rgba,

    /// Distance covered by one step.
    pub step_distance: f32,
    /// Background the host clears to each frame.
    pub wall_color: Rgba,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_time: Millis::new(210),
            color_time: Millis::new(700),
            initial_position: Vec2::new(200.0, 200.0),
            initial_radius: 50.0,
            initial_color: Rgba::WHITE,
            step_distance: 100.0,
            wall_color: Rgba::rgb(30, 30, 30),
        }
    }
}

impl PlayerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AnimationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        if !self.initial_radius.is_finite() || self.initial_radius < 0.0 {
            return Err(AnimationError::InvalidConfig {
                reason: format!("initial_radius must be >= 0, got {}", self.initial_radius),
            });
        }
        if !self.step_distance.is_finite() {
            return Err(AnimationError::InvalidConfig {
                reason: "step_distance must be finite".to_string(),
            });
        }
        if !self.initial_position.x.is_finite() || !self.initial_position.y.is_finite() {
            return Err(AnimationError::InvalidConfig {
                reason: "initial_position must be finite".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PlayerConfig::default();
        assert_eq!(cfg.move_time, Millis::new(210));
        assert_eq!(cfg.color_time, Millis::new(700));
        assert_eq!(cfg.initial_position, Vec2::new(200.0, 200.0));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let cfg = PlayerConfig::from_json_str(r#"{ "move_time": 100, "initial_radius": 20.0 }"#)
            .unwrap();
        assert_eq!(cfg.move_time, Millis::new(100));
        assert_eq!(cfg.initial_radius, 20.0);
        assert_eq!(cfg.color_time, Millis::new(700));
    }

    #[test]
    fn test_invalid_values() {
        let err = PlayerConfig::from_json_str(r#"{ "initial_radius": -1.0 }"#).unwrap_err();
        assert_eq!(err.category(), "config");

        let err = PlayerConfig::from_json_str(r#"{ "move_time": -5 }"#).unwrap_err();
        assert_eq!(err.category(), "serialization");
    }
}
