//! Drum machine — wires input, synthesis and visual feedback together.
//!
//! `trigger` fans one note out to the synthesizer and the pad board. The two
//! are independent: an unknown-to-kit note still pulses a matching pad, and
//! a pad-less note still sounds. A missed drum hit is never an error.

use crate::dsp::engine::{AudioEngine, RenderedHit};
use crate::input::{self, InputEvent};
use crate::kit::DrumKit;
use crate::pads::PadBoard;

/// What a single trigger did.
#[derive(Debug, Clone)]
pub struct TriggerOutcome {
    /// The rendered audio, if the note exists in the kit.
    pub hit: Option<RenderedHit>,
    /// Whether a pad pulsed.
    pub pulsed: bool,
}

/// The application root: owns the kit, the lazily created audio engine and
/// the pad board.
#[derive(Debug, Clone)]
pub struct DrumMachine {
    kit: DrumKit,
    sample_rate: f64,
    /// Created on the first audible trigger, reused thereafter — the same
    /// lifecycle a browser AudioContext has under autoplay policies.
    engine: Option<AudioEngine>,
    pads: PadBoard,
}

impl DrumMachine {
    /// A machine with the stock eight-pad kit, one on-screen pad per note.
    pub fn new(sample_rate: u32) -> Self {
        DrumMachine::with_kit(DrumKit::default_kit(), sample_rate)
    }

    pub fn with_kit(kit: DrumKit, sample_rate: u32) -> Self {
        let notes: Vec<String> = kit.notes().map(str::to_string).collect();
        DrumMachine {
            kit,
            sample_rate: sample_rate as f64,
            engine: None,
            pads: PadBoard::new(notes),
        }
    }

    pub fn kit(&self) -> &DrumKit {
        &self.kit
    }

    pub fn pads(&self) -> &PadBoard {
        &self.pads
    }

    /// Has the audio engine been brought up yet?
    pub fn engine_started(&self) -> bool {
        self.engine.is_some()
    }

    /// Fire one note at clock time `now` (seconds): synthesize, then pulse.
    pub fn trigger(&mut self, note: &str, now: f64) -> TriggerOutcome {
        let hit = self.play_pad(note);
        let pulsed = self.pads.pulse(note, now);
        TriggerOutcome { hit, pulsed }
    }

    /// Resolve an input event to a note and trigger it. `None` when the
    /// event maps to nothing (e.g. an unbound key).
    pub fn handle_event(&mut self, event: &InputEvent, now: f64) -> Option<TriggerOutcome> {
        let note = input::note_for_event(event)?.to_string();
        Some(self.trigger(&note, now))
    }

    /// Advance the visual clock, expiring finished pulses.
    pub fn tick(&mut self, now: f64) {
        self.pads.tick(now);
    }

    /// Synthesize one hit. The kit lookup happens before the engine is
    /// touched, so an unknown note renders nothing and never brings the
    /// engine up.
    pub fn play_pad(&mut self, note: &str) -> Option<RenderedHit> {
        let config = *self.kit.get(note)?;
        let sample_rate = self.sample_rate;
        let engine = self
            .engine
            .get_or_insert_with(|| AudioEngine::new(sample_rate));
        Some(engine.render_hit(note, &config))
    }
}
