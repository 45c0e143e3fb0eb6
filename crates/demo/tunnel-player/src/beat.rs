//! Drum hits that move the player.

use std::str::FromStr;

use animated_core::{AnimationError, Rgba, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Beat {
    Kick,
    Snare,
    HiHat,
    Shaman,
}

impl Beat {
    pub const ALL: [Beat; 4] = [Beat::Kick, Beat::Snare, Beat::HiHat, Beat::Shaman];

    /// Color the player flashes when this beat lands
    #[inline]
    pub fn flash_color(&self) -> Rgba {
        match self {
            Self::Kick => Rgba::RED,
            Self::Snare => Rgba::GREEN,
            Self::HiHat => Rgba::BLUE,
            Self::Shaman => Rgba::YELLOW,
        }
    }

    /// Displacement for one step of length `step` (screen y grows downward)
    #[inline]
    pub fn direction(&self, step: f32) -> Vec2 {
        match self {
            Self::Kick => Vec2::new(step, 0.0),
            Self::Snare => Vec2::new(0.0, step),
            Self::HiHat => Vec2::new(0.0, -step),
            Self::Shaman => Vec2::new(-step, 0.0),
        }
    }

    /// Numeric code used by recorded cue lists
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Kick),
            1 => Some(Self::Snare),
            2 => Some(Self::HiHat),
            3 => Some(Self::Shaman),
            _ => None,
        }
    }

    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            Self::Kick => 0,
            Self::Snare => 1,
            Self::HiHat => 2,
            Self::Shaman => 3,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Snare => "snare",
            Self::HiHat => "hihat",
            Self::Shaman => "shaman",
        }
    }
}

impl FromStr for Beat {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kick" => Ok(Self::Kick),
            "snare" => Ok(Self::Snare),
            "hihat" | "hi_hat" => Ok(Self::HiHat),
            "shaman" => Ok(Self::Shaman),
            other => Err(AnimationError::new(format!("unknown beat '{other}'"))),
        }
    }
}
