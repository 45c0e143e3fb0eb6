//! The circle the host draws: position, radius and color, each animated.

use animated_core::{from, AnimatedValue, AnimationError, Millis, Rgba, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::beat::Beat;
use crate::config::PlayerConfig;

#[derive(Debug)]
pub struct Player {
    pub position: AnimatedValue<Vec2>,
    pub radius: AnimatedValue<f32>,
    pub color: AnimatedValue<Rgba>,
    config: PlayerConfig,
}

/// Plain values read by the rendering side each frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl PlayerSnapshot {
    /// Top-left corner of the circle's bounding box
    #[inline]
    pub fn circle_origin(&self) -> Vec2 {
        self.position - Vec2::splat(self.radius)
    }
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            position: AnimatedValue::new(config.initial_position),
            radius: AnimatedValue::new(config.initial_radius),
            color: AnimatedValue::new(config.initial_color),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Color the host clears to behind the player
    #[inline]
    pub fn wall_color(&self) -> Rgba {
        self.config.wall_color
    }

    /// Flash the beat's color and slide one step in its direction
    pub fn step(&mut self, beat: Beat) -> Result<(), AnimationError> {
        debug!("player: {} step from {:?}", beat.name(), self.position.value());
        self.color.animate(
            from(beat.flash_color())
                .to(self.config.initial_color)
                .during(self.config.color_time)
                .build()?,
        );
        self.position.animate(
            from(self.position.get())
                .by(beat.direction(self.config.step_distance))
                .during(self.config.move_time)
                .build()?,
        );
        Ok(())
    }

    /// Glide position, color and radius back to their initial values
    pub fn reset(&mut self) -> Result<(), AnimationError> {
        debug!("player: reset");
        let cfg = &self.config;
        self.position.animate(
            from(self.position.get())
                .to(cfg.initial_position)
                .during(cfg.move_time)
                .build()?,
        );
        self.color.animate(
            from(self.color.get())
                .to(cfg.initial_color)
                .during(cfg.move_time)
                .build()?,
        );
        self.radius.animate(
            from(self.radius.get())
                .to(cfg.initial_radius)
                .during(cfg.move_time)
                .build()?,
        );
        Ok(())
    }

    pub fn tick(&mut self, delta: Millis) {
        self.position.tick(delta);
        self.radius.tick(delta);
        self.color.tick(delta);
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating() || self.radius.is_animating() || self.color.is_animating()
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.position.get(),
            radius: self.radius.get(),
            color: self.color.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_at_rest() {
        let player = Player::new(&PlayerConfig::default());
        let snap = player.snapshot();
        assert_eq!(snap.position, Vec2::new(200.0, 200.0));
        assert_eq!(snap.radius, 50.0);
        assert_eq!(snap.color, Rgba::WHITE);
        assert_eq!(snap.circle_origin(), Vec2::new(150.0, 150.0));
        assert!(!player.is_animating());
        assert_eq!(player.wall_color(), Rgba::rgb(30, 30, 30));
    }

    #[test]
    fn test_wall_color_follows_config() {
        let json = r#"{ "wall_color": { "r": 1, "g": 2, "b": 3, "a": 255 } }"#;
        let cfg = PlayerConfig::from_json_str(json).unwrap();
        let player = Player::new(&cfg);
        assert_eq!(player.wall_color(), Rgba::rgb(1, 2, 3));
    }

    #[test]
    fn test_step_flashes_immediately_on_first_tick() {
        let mut player = Player::new(&PlayerConfig::default());
        player.step(Beat::Kick).unwrap();
        player.tick(Millis::ZERO);
        assert_eq!(player.color.get(), Rgba::RED);
        assert_eq!(player.position.get(), Vec2::new(200.0, 200.0));
    }
}
