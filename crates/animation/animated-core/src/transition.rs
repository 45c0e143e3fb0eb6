//! The transition capability driven by [`AnimatedValue`](crate::animated::AnimatedValue).

use crate::time::Millis;

/// A strategy mapping accumulated elapsed time to a value.
///
/// `advance` takes the time consumed since the previous call. Once
/// `is_finished` reports true, further `advance` calls must keep returning
/// the terminal value.
pub trait Transition<T> {
    /// Consume `delta` and return the value at the new elapsed time
    fn advance(&mut self, delta: Millis) -> T;

    /// Whether the transition has reached its terminal value
    fn is_finished(&self) -> bool;
}

impl<T, Tr: Transition<T> + ?Sized> Transition<T> for Box<Tr> {
    #[inline]
    fn advance(&mut self, delta: Millis) -> T {
        (**self).advance(delta)
    }

    #[inline]
    fn is_finished(&self) -> bool {
        (**self).is_finished()
    }
}
