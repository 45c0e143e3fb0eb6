//! A property holder advanced once per frame by its active transition.

use std::fmt;

use log::trace;

use crate::time::Millis;
use crate::transition::Transition;

/// A value with at most one in-flight [`Transition`].
///
/// Installing a transition drops the previous one on the spot; `stop` drops
/// it and freezes the value where it was. Deliberately not `Clone`: a
/// transition is owned by exactly one property.
pub struct AnimatedValue<T> {
    value: T,
    transition: Option<Box<dyn Transition<T>>>,
}

impl<T> AnimatedValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            transition: None,
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Owned copy of the current value
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// Install `transition`, discarding any active one
    pub fn animate<Tr>(&mut self, transition: Tr)
    where
        Tr: Transition<T> + 'static,
    {
        self.animate_boxed(Box::new(transition));
    }

    pub fn animate_boxed(&mut self, transition: Box<dyn Transition<T>>) {
        if self.transition.is_some() {
            trace!("animated value: replacing in-flight transition");
        }
        self.transition = Some(transition);
    }

    /// Drop the active transition, keeping the current value
    pub fn stop(&mut self) {
        if self.transition.take().is_some() {
            trace!("animated value: transition stopped");
        }
    }

    /// Stop any transition and jump straight to `value`
    pub fn set(&mut self, value: T) {
        self.stop();
        self.value = value;
    }

    /// Whether a transition is installed and still running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|transition| !transition.is_finished())
    }

    /// Feed one frame's worth of time to the active transition
    pub fn tick(&mut self, delta: Millis) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        if transition.is_finished() {
            return;
        }
        self.value = transition.advance(delta);
        if transition.is_finished() {
            trace!("animated value: transition finished");
        }
    }
}

impl<T: Default> Default for AnimatedValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for AnimatedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("value", &self.value)
            .field("animating", &self.is_animating())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::LinearTransition;

    /// Counts advances so tests can see whether `tick` reached the transition.
    struct Counting {
        calls: std::rc::Rc<std::cell::Cell<u32>>,
        finished: bool,
    }

    impl Transition<i32> for Counting {
        fn advance(&mut self, _delta: Millis) -> i32 {
            self.calls.set(self.calls.get() + 1);
            -1
        }

        fn is_finished(&self) -> bool {
            self.finished
        }
    }

    #[test]
    fn test_tick_without_transition_is_noop() {
        let mut v = AnimatedValue::new(7i32);
        v.tick(Millis::new(100));
        assert_eq!(*v.value(), 7);
        assert!(!v.is_animating());
    }

    #[test]
    fn test_finished_transition_is_not_advanced() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut v = AnimatedValue::new(3i32);
        v.animate(Counting {
            calls: calls.clone(),
            finished: true,
        });
        v.tick(Millis::new(16));
        assert_eq!(calls.get(), 0);
        assert_eq!(v.get(), 3);
    }

    #[test]
    fn test_running_transition_is_advanced() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut v = AnimatedValue::new(3i32);
        v.animate(Counting {
            calls: calls.clone(),
            finished: false,
        });
        v.tick(Millis::new(16));
        v.tick(Millis::new(16));
        assert_eq!(calls.get(), 2);
        assert_eq!(v.get(), -1);
    }

    #[test]
    fn test_set_stops_and_jumps() {
        let mut v = AnimatedValue::new(0i32);
        v.animate(LinearTransition::new(0, 10, Millis::new(10)));
        v.tick(Millis::new(5));
        v.set(42);
        assert!(!v.is_animating());
        v.tick(Millis::new(5));
        assert_eq!(v.get(), 42);
    }

    #[test]
    fn test_animate_boxed() {
        let mut v = AnimatedValue::<f32>::default();
        let boxed: Box<dyn Transition<f32>> =
            Box::new(LinearTransition::new(0.0, 2.0, Millis::new(2)));
        v.animate_boxed(boxed);
        v.tick(Millis::new(1));
        assert_eq!(v.get(), 1.0);
    }

    #[test]
    fn test_debug_output() {
        let mut v = AnimatedValue::new(1i32);
        v.animate(LinearTransition::new(1, 2, Millis::new(10)));
        let dbg = format!("{v:?}");
        assert!(dbg.contains("value: 1"));
        assert!(dbg.contains("animating: true"));
    }
}
