//! Linear interpolation over a fixed duration.

use serde::{Deserialize, Serialize};

use crate::interpolate::Interpolate;
use crate::time::Millis;
use crate::transition::Transition;

/// Blends from `start` to `end` over `duration` as time is fed in.
///
/// Running and Finished are told apart only by `elapsed >= duration`. A
/// zero-duration transition is the one exception: it stays running until the
/// first `advance`, which returns `end` and finishes it, so the owning
/// [`AnimatedValue`](crate::animated::AnimatedValue) still adopts the end
/// value on its next tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearTransition<T> {
    start: T,
    end: T,
    duration: Millis,
    elapsed: Millis,
    advanced: bool,
}

impl<T: Interpolate> LinearTransition<T> {
    pub fn new(start: T, end: T, duration: Millis) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Millis::ZERO,
            advanced: false,
        }
    }

    #[inline]
    pub fn start(&self) -> &T {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &T {
        &self.end
    }

    #[inline]
    pub fn duration(&self) -> Millis {
        self.duration
    }

    #[inline]
    pub fn elapsed(&self) -> Millis {
        self.elapsed
    }

    /// Interpolation factor for the current elapsed time, in `[0, 1]`
    #[inline]
    pub fn progress(&self) -> f32 {
        if !self.advanced {
            return 0.0;
        }
        self.elapsed.ratio(self.duration)
    }

    /// Value at the current elapsed time without consuming any time
    pub fn current(&self) -> T {
        if self.is_finished() {
            return self.end.clone();
        }
        self.start.lerp(&self.end, self.progress())
    }
}

impl<T: Interpolate> Transition<T> for LinearTransition<T> {
    fn advance(&mut self, delta: Millis) -> T {
        self.elapsed += delta;
        self.advanced = true;
        self.current()
    }

    #[inline]
    fn is_finished(&self) -> bool {
        self.advanced && self.elapsed >= self.duration
    }
}
