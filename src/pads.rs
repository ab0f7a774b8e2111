//! Pad board — visual feedback state for the on-screen pads.
//!
//! The DOM trick this models: to restart a CSS pulse the frontend must
//! remove the active class, force a reflow, then re-add it. Here that is a
//! per-pad generation counter — every pulse bumps it, so a renderer that
//! diffs generations always sees a restart even mid-window. Each pulse also
//! schedules its own removal 180 ms out, and the earliest pending removal
//! fires first — the same net effect stacked removal timers have in the DOM.

/// How long a pad stays visually active after a pulse, in seconds.
pub const PULSE_SECS: f64 = 0.18;

/// One on-screen pad. The board only owns the transient active state, never
/// the element itself.
#[derive(Debug, Clone)]
struct Pad {
    note: String,
    /// Clock time at which the active state expires; `None` when resting.
    active_until: Option<f64>,
    /// Bumped on every pulse; lets a renderer restart the animation.
    generation: u64,
}

/// The set of pads, discovered once at startup.
#[derive(Debug, Clone)]
pub struct PadBoard {
    pads: Vec<Pad>,
}

impl PadBoard {
    /// Build the board from the notes the host page declares.
    pub fn new<I, S>(notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pads = notes
            .into_iter()
            .map(|note| Pad {
                note: note.into(),
                active_until: None,
                generation: 0,
            })
            .collect();
        PadBoard { pads }
    }

    /// Restart the pulse on the pad for `note`. Returns `false` (and touches
    /// nothing) when no pad carries that note.
    ///
    /// Every pulse schedules its own removal, and the earliest pending
    /// removal still fires: re-triggering inside an active window restarts
    /// the animation (generation bump) but never pushes the window past the
    /// first pulse's deadline.
    pub fn pulse(&mut self, note: &str, now: f64) -> bool {
        let Some(pad) = self.pads.iter_mut().find(|p| p.note == note) else {
            return false;
        };
        let deadline = now + PULSE_SECS;
        pad.active_until = Some(pad.active_until.map_or(deadline, |t| t.min(deadline)));
        pad.generation += 1;
        true
    }

    /// Expire active windows that have elapsed by `now`.
    pub fn tick(&mut self, now: f64) {
        for pad in &mut self.pads {
            if pad.active_until.is_some_and(|t| t <= now) {
                pad.active_until = None;
            }
        }
    }

    /// Is the pad for `note` currently pulsing?
    pub fn is_active(&self, note: &str) -> bool {
        self.pads
            .iter()
            .any(|p| p.note == note && p.active_until.is_some())
    }

    /// Pulse count for `note` since startup; `None` for unknown notes.
    pub fn generation(&self, note: &str) -> Option<u64> {
        self.pads
            .iter()
            .find(|p| p.note == note)
            .map(|p| p.generation)
    }

    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> PadBoard {
        PadBoard::new(["pad1", "pad2", "pad3"])
    }

    #[test]
    fn pulse_activates_the_matching_pad_only() {
        let mut b = board();
        assert!(b.pulse("pad2", 0.0));
        assert!(b.is_active("pad2"));
        assert!(!b.is_active("pad1"));
        assert!(!b.is_active("pad3"));
    }

    #[test]
    fn unknown_note_is_a_noop() {
        let mut b = board();
        assert!(!b.pulse("pad9", 0.0));
        assert!(!b.is_active("pad9"));
        for note in ["pad1", "pad2", "pad3"] {
            assert_eq!(b.generation(note), Some(0), "{note} was touched");
        }
    }

    #[test]
    fn pulse_expires_after_the_window() {
        let mut b = board();
        b.pulse("pad1", 0.0);

        b.tick(0.1);
        assert!(b.is_active("pad1"), "still inside the 180 ms window");

        b.tick(PULSE_SECS);
        assert!(!b.is_active("pad1"), "window elapsed, pad should rest");
    }

    #[test]
    fn retrigger_never_outlives_the_first_window() {
        let mut b = board();
        b.pulse("pad1", 0.0);
        b.pulse("pad1", 0.1);

        b.tick(0.15);
        assert!(b.is_active("pad1"), "inside the first window");

        // The first pulse's removal still fires at 180 ms, re-trigger or not.
        b.tick(PULSE_SECS);
        assert!(!b.is_active("pad1"));

        // A pulse after expiry opens a fresh window.
        b.pulse("pad1", 0.3);
        b.tick(0.3 + 0.1);
        assert!(b.is_active("pad1"));
    }

    #[test]
    fn every_pulse_bumps_the_generation() {
        let mut b = board();
        b.pulse("pad3", 0.0);
        b.pulse("pad3", 0.05);
        b.pulse("pad3", 0.1);
        assert_eq!(b.generation("pad3"), Some(3));
        assert_eq!(b.generation("pad9"), None);
    }
}
