//! Fluent construction of [`LinearTransition`]s.
//!
//! ```
//! use animated_core::{from, AnimatedValue, Millis, Vec2};
//!
//! let mut position = AnimatedValue::new(Vec2::new(200.0, 200.0));
//! let step = from(*position.value())
//!     .by(Vec2::new(100.0, 0.0))
//!     .during(Millis::new(210))
//!     .build()
//!     .unwrap();
//! position.animate(step);
//! position.tick(Millis::new(210));
//! assert_eq!(*position.value(), Vec2::new(300.0, 200.0));
//! ```

use log::debug;

use crate::error::AnimationError;
use crate::interpolate::{Interpolate, Offset};
use crate::linear::LinearTransition;
use crate::time::Millis;

/// Collects the end value and duration for a transition starting at a known value
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionBuilder<T> {
    initial: T,
    end: Option<T>,
    duration: Option<Millis>,
}

/// Start building a transition from `initial`
#[inline]
pub fn from<T: Interpolate>(initial: T) -> TransitionBuilder<T> {
    TransitionBuilder::new(initial)
}

impl<T: Interpolate> TransitionBuilder<T> {
    pub fn new(initial: T) -> Self {
        Self {
            initial,
            end: None,
            duration: None,
        }
    }

    /// End at `end`. Replaces any earlier `to` or `by`.
    pub fn to(mut self, end: T) -> Self {
        self.end = Some(end);
        self
    }

    /// Total time the transition takes
    pub fn during(mut self, duration: Millis) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn initial(&self) -> &T {
        &self.initial
    }

    pub fn build(self) -> Result<LinearTransition<T>, AnimationError> {
        let Some(end) = self.end else {
            debug!("transition builder: no end value set");
            return Err(AnimationError::MissingEnd);
        };
        let Some(duration) = self.duration else {
            debug!("transition builder: no duration set");
            return Err(AnimationError::MissingDuration);
        };
        Ok(LinearTransition::new(self.initial, end, duration))
    }
}

impl<T: Offset> TransitionBuilder<T> {
    /// End at `initial + delta`. Replaces any earlier `to` or `by`.
    pub fn by(mut self, delta: T) -> Self {
        self.end = Some(self.initial.offset(&delta));
        self
    }
}

impl<T: Interpolate> TryFrom<TransitionBuilder<T>> for LinearTransition<T> {
    type Error = AnimationError;

    fn try_from(builder: TransitionBuilder<T>) -> Result<Self, Self::Error> {
        builder.build()
    }
}
