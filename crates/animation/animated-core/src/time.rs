//! Millisecond time quantities fed in by the update loop.
//!
//! Every delta, duration and elapsed counter in the core is a [`Millis`].
//! The type is unsigned, so a negative delta cannot reach a transition;
//! signed values coming from a platform clock go through
//! [`Millis::from_signed`] and are rejected there.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Largest f32 strictly below 1.0
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// A non-negative span of animation time in milliseconds
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Millis(u32);

impl Millis {
    /// Zero time
    pub const ZERO: Millis = Millis(0);

    /// Create a time span from whole milliseconds
    #[inline]
    pub const fn new(millis: u32) -> Self {
        Self(millis)
    }

    /// Create a time span from a signed millisecond count
    #[inline]
    pub fn from_signed(millis: i64) -> Result<Self, AnimationError> {
        if millis < 0 {
            return Err(AnimationError::NegativeDelta { delta: millis });
        }
        u32::try_from(millis)
            .map(Self)
            .map_err(|_| AnimationError::DeltaOverflow { delta: millis })
    }

    /// Get time in milliseconds
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add another span, saturating at the upper bound
    #[inline]
    pub const fn saturating_add(self, other: Millis) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Fraction of `total` covered by this span, clamped to `[0, 1]`.
    ///
    /// A zero `total` counts as already covered and yields `1.0`. The result
    /// is exactly `1.0` only once `self >= total`; a span short of `total`
    /// stays below `1.0` even when the f32 rounding would reach it.
    #[inline]
    pub fn ratio(self, total: Millis) -> f32 {
        if self >= total {
            return 1.0;
        }
        let ratio = (f64::from(self.0) / f64::from(total.0)) as f32;
        ratio.min(BELOW_ONE)
    }
}

impl std::ops::Add for Millis {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl std::ops::AddAssign for Millis {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// Easier conversions
impl From<u32> for Millis {
    fn from(millis: u32) -> Self {
        Self(millis)
    }
}

impl From<Millis> for u32 {
    fn from(millis: Millis) -> Self {
        millis.0
    }
}

impl From<Duration> for Millis {
    fn from(duration: Duration) -> Self {
        Self(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
    }
}

impl From<Millis> for Duration {
    fn from(millis: Millis) -> Self {
        Duration::from_millis(u64::from(millis.0))
    }
}

impl TryFrom<i32> for Millis {
    type Error = AnimationError;

    fn try_from(millis: i32) -> Result<Self, Self::Error> {
        Self::from_signed(i64::from(millis))
    }
}

impl TryFrom<i64> for Millis {
    type Error = AnimationError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_signed(millis)
    }
}
