//! Drum kit — per-note synthesis parameters and the default eight-pad kit.
//!
//! A kit maps opaque note identifiers ("pad1".."pad8" in the default kit) to
//! the parameters the DSP engine needs to synthesize one percussive hit.
//! Kits serialize to the same camelCase JSON shape the web frontend uses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::Waveform;
use crate::error::KitError;

/// Synthesis parameters for one drum voice. Immutable once the kit is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PadConfig {
    /// Starting oscillator frequency in Hz. Must be positive.
    pub frequency: f64,
    /// Waveform type: "sine", "triangle", "square" or "sawtooth".
    #[serde(rename = "type")]
    pub waveform: Waveform,
    /// Decay duration in seconds. Must be positive.
    pub decay: f64,
    /// Ramp the frequency down exponentially over the decay ("thump").
    #[serde(default)]
    pub pitch_drop: bool,
    /// Layer a short white-noise burst under the tone.
    #[serde(default)]
    pub noise: bool,
}

/// A named collection of drum voices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrumKit {
    pads: HashMap<String, PadConfig>,
}

impl DrumKit {
    /// The stock eight-pad kit: kick, snare, closed/open hats, three toms
    /// and a crash.
    pub fn default_kit() -> Self {
        let mut pads = HashMap::new();
        let mut pad = |note: &str, config: PadConfig| {
            pads.insert(note.to_string(), config);
        };

        pad("pad1", PadConfig { frequency: 80.0, waveform: Waveform::Sine, decay: 0.28, pitch_drop: true, noise: false }); // kick
        pad("pad2", PadConfig { frequency: 230.0, waveform: Waveform::Triangle, decay: 0.14, pitch_drop: false, noise: true }); // snare
        pad("pad3", PadConfig { frequency: 4300.0, waveform: Waveform::Square, decay: 0.06, pitch_drop: false, noise: false }); // closed hh
        pad("pad4", PadConfig { frequency: 2900.0, waveform: Waveform::Square, decay: 0.16, pitch_drop: false, noise: true }); // open hh
        pad("pad5", PadConfig { frequency: 100.0, waveform: Waveform::Sine, decay: 0.25, pitch_drop: true, noise: false }); // low tom
        pad("pad6", PadConfig { frequency: 132.0, waveform: Waveform::Sine, decay: 0.22, pitch_drop: true, noise: false }); // mid tom
        pad("pad7", PadConfig { frequency: 170.0, waveform: Waveform::Sine, decay: 0.2, pitch_drop: true, noise: false }); // high tom
        pad("pad8", PadConfig { frequency: 1950.0, waveform: Waveform::Sawtooth, decay: 0.42, pitch_drop: false, noise: true }); // crash

        DrumKit { pads }
    }

    /// Build a kit from explicit entries, validating each one.
    pub fn new(pads: HashMap<String, PadConfig>) -> Result<Self, KitError> {
        let kit = DrumKit { pads };
        kit.validate()?;
        Ok(kit)
    }

    /// Parse a kit from its JSON form (`{"pad1": {"frequency": 80, ...}}`).
    pub fn from_json(json: &str) -> Result<Self, KitError> {
        let kit: DrumKit = serde_json::from_str(json)?;
        kit.validate()?;
        Ok(kit)
    }

    /// Look up the parameters for a note. `None` means the note is unknown
    /// and the caller should do nothing — never an error.
    pub fn get(&self, note: &str) -> Option<&PadConfig> {
        self.pads.get(note)
    }

    /// All note identifiers in this kit (unordered).
    pub fn notes(&self) -> impl Iterator<Item = &str> {
        self.pads.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pads.is_empty()
    }

    fn validate(&self) -> Result<(), KitError> {
        for (note, config) in &self.pads {
            if !(config.frequency > 0.0) {
                return Err(KitError::InvalidFrequency {
                    note: note.clone(),
                    value: config.frequency,
                });
            }
            if !(config.decay > 0.0) {
                return Err(KitError::InvalidDecay {
                    note: note.clone(),
                    value: config.decay,
                });
            }
        }
        Ok(())
    }
}

impl Default for DrumKit {
    fn default() -> Self {
        DrumKit::default_kit()
    }
}
