//! Audio Engine — renders drum hits to sample buffers.
//!
//! The engine is the shared audio resource: the application root creates it
//! lazily on the first audible trigger and reuses it for the page's
//! lifetime. Each trigger spins up a fresh `DrumVoice` — no pooling, no
//! rate limiting; voices self-dispose once rendered.

use crate::kit::PadConfig;

use super::voice::DrumVoice;

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// One rendered drum hit, ready for playback or export.
#[derive(Debug, Clone)]
pub struct RenderedHit {
    /// The note that produced this hit.
    pub note: String,
    /// Mono f32 samples, soft-clipped to [-1, 1].
    pub samples: Vec<f32>,
    /// Generator layers that went into the mix (tone, plus noise if any).
    pub layers: usize,
}

/// Renders percussion voices at a fixed sample rate.
#[derive(Debug, Clone)]
pub struct AudioEngine {
    sample_rate: f64,
    /// Per-trigger seed so consecutive noise bursts differ.
    noise_seed: u64,
}

impl AudioEngine {
    pub fn new(sample_rate: f64) -> Self {
        AudioEngine::with_noise_seed(sample_rate, 0)
    }

    /// An engine whose next noise burst uses `noise_seed`. One-shot callers
    /// that cannot hold an engine across hits pass a fresh seed per hit to
    /// keep bursts varying.
    pub fn with_noise_seed(sample_rate: f64, noise_seed: u64) -> Self {
        AudioEngine {
            sample_rate,
            noise_seed,
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Synthesize one hit for `note` with the given parameters.
    pub fn render_hit(&mut self, note: &str, config: &PadConfig) -> RenderedHit {
        let mut voice = DrumVoice::new(config, self.sample_rate, self.noise_seed);
        self.noise_seed = self.noise_seed.wrapping_add(1);

        let mut samples = Vec::with_capacity(voice.total_samples());
        while !voice.is_finished() {
            samples.push(soft_clip(voice.next_sample()) as f32);
        }

        RenderedHit {
            note: note.to_string(),
            samples,
            layers: voice.layer_count(),
        }
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        AudioEngine::new(DEFAULT_SAMPLE_RATE as f64)
    }
}

/// Soft clipper using tanh so a tone + noise sum never clips harshly.
fn soft_clip(x: f64) -> f64 {
    x.tanh()
}
