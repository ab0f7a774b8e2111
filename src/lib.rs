pub mod dsp;
pub mod error;
pub mod input;
pub mod kit;
pub mod machine;
pub mod pads;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::dsp::engine::AudioEngine;
use crate::kit::DrumKit;
use wasm_bindgen::prelude::*;

/// Hit counter feeding the one-shot render functions below. They stand up a
/// fresh engine per call, so the noise seed comes from process state —
/// consecutive hits on a noise-bearing pad never share a burst, same as
/// holding one engine across triggers.
static NEXT_NOISE_SEED: AtomicU64 = AtomicU64::new(0);

fn one_shot_engine(sample_rate: u32) -> AudioEngine {
    let seed = NEXT_NOISE_SEED.fetch_add(1, Ordering::Relaxed);
    AudioEngine::with_noise_seed(sample_rate as f64, seed)
}

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the octapad-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: map a keyboard key (as reported by `KeyboardEvent.key`) to
/// its note identifier, or `undefined` for unbound keys.
#[wasm_bindgen]
pub fn note_for_key(key: &str) -> Option<String> {
    input::note_for_key(key).map(str::to_string)
}

/// WASM-exposed: the pulse window for pad animations, in milliseconds.
#[wasm_bindgen]
pub fn pulse_millis() -> u32 {
    (pads::PULSE_SECS * 1000.0).round() as u32
}

/// WASM-exposed: the stock eight-pad kit as a JS object keyed by note.
#[wasm_bindgen]
pub fn default_kit() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&DrumKit::default_kit())
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: synthesize one hit from the stock kit to mono f32 samples.
/// Returns an empty buffer for unknown notes — a missed hit is a no-op.
#[wasm_bindgen]
pub fn render_pad_samples(note: &str, sample_rate: u32) -> Vec<f32> {
    let kit = DrumKit::default_kit();
    let Some(config) = kit.get(note) else {
        return Vec::new();
    };
    one_shot_engine(sample_rate).render_hit(note, config).samples
}

/// WASM-exposed: synthesize one hit from the stock kit to a WAV byte array
/// (16-bit mono PCM). Empty for unknown notes.
#[wasm_bindgen]
pub fn render_pad_wav(note: &str, sample_rate: u32) -> Vec<u8> {
    let kit = DrumKit::default_kit();
    match kit.get(note) {
        Some(config) => {
            dsp::renderer::render_hit_wav(&mut one_shot_engine(sample_rate), note, config)
        }
        None => Vec::new(),
    }
}

/// WASM-exposed: synthesize one hit from a caller-supplied kit JSON.
/// Malformed or invalid kits error; unknown notes still render nothing.
#[wasm_bindgen]
pub fn render_kit_pad_samples(
    kit_json: &str,
    note: &str,
    sample_rate: u32,
) -> Result<Vec<f32>, JsValue> {
    let kit = DrumKit::from_json(kit_json).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let Some(config) = kit.get(note) else {
        return Ok(Vec::new());
    };
    Ok(one_shot_engine(sample_rate).render_hit(note, config).samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_pad_samples_covers_all_eight_pads() {
        for n in 1..=8 {
            let samples = render_pad_samples(&format!("pad{n}"), 44100);
            assert!(!samples.is_empty(), "pad{n} rendered nothing");
        }
    }

    #[test]
    fn unknown_note_renders_empty() {
        assert!(render_pad_samples("pad0", 44100).is_empty());
        assert!(render_pad_wav("bogus", 44100).is_empty());
    }

    #[test]
    fn custom_kit_renders_through_the_wasm_surface() {
        // JsValue cannot be constructed off-wasm, so only the success paths
        // run here; the failure paths are covered by kit::tests.
        let json = r#"{ "tick": { "frequency": 1000, "type": "square", "decay": 0.05 } }"#;
        let samples = render_kit_pad_samples(json, "tick", 44100).unwrap();
        assert_eq!(samples.len(), ((0.05 + 0.03) * 44100.0_f64).round() as usize);

        assert!(render_kit_pad_samples(json, "other", 44100).unwrap().is_empty());
    }

    #[test]
    fn pulse_window_is_180ms() {
        assert_eq!(pulse_millis(), 180);
    }

    #[test]
    fn consecutive_renders_vary_the_noise_burst() {
        let a = render_pad_samples("pad2", 44100);
        let b = render_pad_samples("pad2", 44100);
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b, "rapid snare hits must not reuse a noise burst");

        let wav_a = render_pad_wav("pad4", 44100);
        let wav_b = render_pad_wav("pad4", 44100);
        assert_ne!(wav_a, wav_b, "open-hat WAV exports should vary too");
    }

    #[test]
    fn tone_only_renders_stay_deterministic() {
        let a = render_pad_samples("pad1", 44100);
        let b = render_pad_samples("pad1", 44100);
        assert_eq!(a, b, "the kick has no noise layer, so renders are stable");
    }
}
