//! Timed beat cues played back against the frame clock.
//!
//! Each cue's delay counts from the previous cue firing (or from the start).
//! At most one cue fires per frame; a late cue fires on the next frame and
//! the clock restarts from zero at that point, so lateness is not carried
//! over to the following cue.

use std::collections::VecDeque;

use animated_core::Millis;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::beat::Beat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    pub beat: Beat,
    pub delay: Millis,
}

impl Cue {
    pub fn new(beat: Beat, delay: Millis) -> Self {
        Self { beat, delay }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReplayClock {
    cues: VecDeque<Cue>,
    since_last: Millis,
}

impl ReplayClock {
    pub fn new(cues: impl IntoIterator<Item = Cue>) -> Self {
        Self {
            cues: cues.into_iter().collect(),
            since_last: Millis::ZERO,
        }
    }

    /// Advance by one frame and return the cue that became due, if any
    pub fn advance(&mut self, delta: Millis) -> Option<Beat> {
        self.since_last += delta;
        let due = self.cues.front()?.delay <= self.since_last;
        if !due {
            return None;
        }
        let cue = self.cues.pop_front()?;
        trace!("replay: {} due after {}", cue.beat.name(), self.since_last);
        self.since_last = Millis::ZERO;
        Some(cue.beat)
    }

    pub fn remaining(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_delay_elapsed() {
        let mut clock = ReplayClock::new([Cue::new(Beat::Kick, Millis::new(40))]);
        assert_eq!(clock.advance(Millis::new(16)), None);
        assert_eq!(clock.advance(Millis::new(16)), None);
        assert_eq!(clock.advance(Millis::new(16)), Some(Beat::Kick));
        assert!(clock.is_empty());
        assert_eq!(clock.advance(Millis::new(16)), None);
    }

    #[test]
    fn test_one_cue_per_frame_and_reset() {
        let mut clock = ReplayClock::new([
            Cue::new(Beat::Kick, Millis::new(10)),
            Cue::new(Beat::Snare, Millis::ZERO),
            Cue::new(Beat::HiHat, Millis::new(20)),
        ]);
        assert_eq!(clock.advance(Millis::new(100)), Some(Beat::Kick));
        assert_eq!(clock.remaining(), 2);
        assert_eq!(clock.advance(Millis::ZERO), Some(Beat::Snare));
        // Overshoot from the first frame is not carried forward
        assert_eq!(clock.advance(Millis::new(16)), None);
        assert_eq!(clock.advance(Millis::new(4)), Some(Beat::HiHat));
    }
}
