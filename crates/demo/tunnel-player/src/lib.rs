//! Tunnel Player
//!
//! A circle that steps around the screen on drum hits: each beat flashes its
//! color and slides it one step in the beat's direction. All motion goes
//! through `animated-core`; rendering and audio stay with the host.

pub mod beat;
pub mod config;
pub mod player;
pub mod replay;

pub use beat::Beat;
pub use config::PlayerConfig;
pub use player::{Player, PlayerSnapshot};
pub use replay::{Cue, ReplayClock};
