//! Drum voice — one percussive hit: tone + envelope + optional noise layer.

use crate::kit::PadConfig;

use super::envelope::{ExpRamp, HitEnvelope};
use super::noise::NoiseBurst;
use super::oscillator::Oscillator;

/// Safety margin after the decay window so the final ramp step lands before
/// the voice is torn down.
pub const STOP_MARGIN_SECS: f64 = 0.03;

/// Lowest frequency a pitch drop may reach, in Hz.
pub const PITCH_FLOOR_HZ: f64 = 42.0;
/// Divisor applied to the start frequency to pick the drop target.
pub const PITCH_DROP_RATIO: f64 = 2.8;

/// End frequency of a pitch drop starting at `frequency` Hz.
pub fn pitch_drop_target(frequency: f64) -> f64 {
    (frequency / PITCH_DROP_RATIO).max(PITCH_FLOOR_HZ)
}

/// A single drum hit. Fire-and-forget: renders `decay + STOP_MARGIN_SECS`
/// seconds of audio and is then finished. Voices are never reused.
#[derive(Debug, Clone)]
pub struct DrumVoice {
    oscillator: Oscillator,
    amp: HitEnvelope,
    pitch: Option<ExpRamp>,
    noise: Option<NoiseBurst>,
    total_samples: usize,
    position: usize,
}

impl DrumVoice {
    /// `noise_seed` varies per trigger so rapid hits don't share a burst.
    pub fn new(config: &PadConfig, sample_rate: f64, noise_seed: u64) -> Self {
        let decay_samples = (config.decay * sample_rate).round() as usize;

        let pitch = config.pitch_drop.then(|| {
            ExpRamp::new(
                config.frequency,
                pitch_drop_target(config.frequency),
                decay_samples,
            )
        });

        let noise = config
            .noise
            .then(|| NoiseBurst::new(config.decay, sample_rate, noise_seed));

        DrumVoice {
            oscillator: Oscillator::new(config.waveform, config.frequency, sample_rate),
            amp: HitEnvelope::new(config.decay, sample_rate),
            pitch,
            noise,
            total_samples: ((config.decay + STOP_MARGIN_SECS) * sample_rate).round() as usize,
            position: 0,
        }
    }

    /// Number of samples this voice renders in total.
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Concurrent generator layers: the tone, plus the noise burst if the
    /// pad requests one.
    pub fn layer_count(&self) -> usize {
        1 + self.noise.is_some() as usize
    }

    pub fn has_noise_layer(&self) -> bool {
        self.noise.is_some()
    }

    /// Generate the next mixed sample (tone + noise, unclipped).
    pub fn next_sample(&mut self) -> f64 {
        if self.is_finished() {
            return 0.0;
        }
        self.position += 1;

        if let Some(ramp) = &mut self.pitch {
            self.oscillator.frequency = ramp.next();
        }
        let tone = self.oscillator.next_sample() * self.amp.next_sample();
        let noise = self.noise.as_mut().map_or(0.0, NoiseBurst::next_sample);

        tone + noise
    }

    /// Done once the decay window plus the stop margin has elapsed.
    pub fn is_finished(&self) -> bool {
        self.position >= self.total_samples
    }
}
