//! White-noise burst layered under snare, open-hat and crash voices.
//!
//! A short buffer of uniform noise with its own exponential gain envelope,
//! played once alongside the tone and mixed at the same destination.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::envelope::ExpRamp;

/// Burst length in seconds.
pub const NOISE_SECS: f64 = 0.05;
/// Starting gain of the noise envelope.
pub const NOISE_PEAK: f64 = 0.36;
/// Gain the noise envelope decays to over the voice's decay duration.
pub const NOISE_FLOOR: f64 = 0.001;

/// A single-shot noise source: 50 ms of uniform samples in [-1, 1] under an
/// exponential 0.36 → 0.001 envelope. Silent once the buffer is exhausted.
#[derive(Debug, Clone)]
pub struct NoiseBurst {
    buffer: Vec<f64>,
    gain: ExpRamp,
    position: usize,
}

impl NoiseBurst {
    /// `decay_secs` scales the gain envelope; the audible burst is cut at
    /// `min(NOISE_SECS, decay_secs)`. Seeded so rendering is deterministic.
    pub fn new(decay_secs: f64, sample_rate: f64, seed: u64) -> Self {
        let burst_secs = NOISE_SECS.min(decay_secs);
        let len = (burst_secs * sample_rate).round() as usize;
        let mut rng = SmallRng::seed_from_u64(seed);
        let buffer = (0..len).map(|_| rng.gen_range(-1.0..=1.0)).collect();

        let decay_samples = (decay_secs * sample_rate).round() as usize;
        NoiseBurst {
            buffer,
            gain: ExpRamp::new(NOISE_PEAK, NOISE_FLOOR, decay_samples),
            position: 0,
        }
    }

    /// Next enveloped noise sample; 0.0 once the burst has played out.
    pub fn next_sample(&mut self) -> f64 {
        let Some(&raw) = self.buffer.get(self.position) else {
            return 0.0;
        };
        self.position += 1;
        raw * self.gain.next()
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f64 = 44100.0;

    #[test]
    fn burst_lasts_fifty_milliseconds() {
        let mut burst = NoiseBurst::new(0.14, SR, 1);
        let expected = (NOISE_SECS * SR).round() as usize;
        let mut produced = 0;
        while !burst.is_finished() {
            burst.next_sample();
            produced += 1;
        }
        assert_eq!(produced, expected);
        assert_eq!(burst.next_sample(), 0.0, "finished burst must be silent");
    }

    #[test]
    fn short_decay_shortens_the_burst() {
        let burst = NoiseBurst::new(0.02, SR, 1);
        assert_eq!(burst.buffer.len(), (0.02 * SR).round() as usize);
    }

    #[test]
    fn output_is_bounded_by_peak_gain() {
        let mut burst = NoiseBurst::new(0.42, SR, 7);
        let mut heard = false;
        while !burst.is_finished() {
            let s = burst.next_sample();
            assert!(s.abs() <= NOISE_PEAK, "noise sample {s} exceeds peak gain");
            if s.abs() > 0.01 {
                heard = true;
            }
        }
        assert!(heard, "burst should be audible");
    }

    #[test]
    fn same_seed_same_noise() {
        let mut a = NoiseBurst::new(0.16, SR, 42);
        let mut b = NoiseBurst::new(0.16, SR, 42);
        for _ in 0..100 {
            assert_eq!(a.next_sample(), b.next_sample());
        }
    }
}
