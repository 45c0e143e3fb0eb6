//! Animated Core
//!
//! Smoothly moves typed values (positions, colors, radii, plain numbers)
//! from one state to another as an external update loop feeds in per-frame
//! time deltas.
//!
//! - [`AnimatedValue`] holds a current value and at most one active transition
//! - [`Transition`] is the strategy interface; [`LinearTransition`] blends linearly
//! - [`TransitionBuilder`] (via [`from`]) assembles a transition with `to`/`by`/`during`
//!
//! Everything here runs synchronously on the caller's thread; nothing
//! allocates per tick beyond producing the new value.

pub mod animated;
pub mod builder;
pub mod error;
pub mod interpolate;
pub mod linear;
pub mod time;
pub mod transition;
pub mod value;

// Re-export common types for convenience
pub use animated::AnimatedValue;
pub use builder::{from, TransitionBuilder};
pub use error::AnimationError;
pub use interpolate::{Interpolate, Offset};
pub use linear::LinearTransition;
pub use time::Millis;
pub use transition::Transition;
pub use value::{Rgba, Vec2};

/// Animation core result type
pub type Result<T> = core::result::Result<T, AnimationError>;
