//! Concrete animatable values: 2D positions and RGBA colors.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::interpolate::{lerp_f32, Interpolate, Offset};

/// A 2D vector in screen space
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components equal to `v`
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl Interpolate for Vec2 {
    #[inline]
    fn lerp(&self, end: &Self, t: f32) -> Self {
        Vec2::new(lerp_f32(self.x, end.x, t), lerp_f32(self.y, end.y, t))
    }
}

impl Offset for Vec2 {
    #[inline]
    fn offset(&self, delta: &Self) -> Self {
        *self + *delta
    }
}

/// An 8-bit-per-channel RGBA color
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const YELLOW: Rgba = Rgba::rgb(255, 255, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Interpolate for Rgba {
    #[inline]
    fn lerp(&self, end: &Self, t: f32) -> Self {
        Rgba::new(
            self.r.lerp(&end.r, t),
            self.g.lerp(&end.g, t),
            self.b.lerp(&end.b, t),
            self.a.lerp(&end.a, t),
        )
    }
}

impl Offset for Rgba {
    #[inline]
    fn offset(&self, delta: &Self) -> Self {
        Rgba::new(
            self.r.offset(&delta.r),
            self.g.offset(&delta.g),
            self.b.offset(&delta.b),
            self.a.offset(&delta.a),
        )
    }
}
