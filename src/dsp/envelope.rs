//! Exponential ramps and the percussion amplitude envelope.
//!
//! Ramp semantics match WebAudio's `exponentialRampToValueAtTime`:
//! `v(t) = v0 * (v1 / v0)^(t / T)`. Exponential ramps are undefined at zero,
//! so "silence" is a small positive floor rather than 0.

/// Peak gain of a drum hit.
pub const AMP_PEAK: f64 = 0.85;
/// Near-silent gain floor. Never exactly zero — exponential ramps break.
pub const AMP_FLOOR: f64 = 0.0001;
/// Attack time in seconds: fast enough to read as a hit, slow enough to
/// avoid a click.
pub const ATTACK_SECS: f64 = 0.01;

/// An exponential ramp from one positive value to another over a fixed
/// number of samples, holding the target afterwards.
///
/// `next()` returns the current value, then advances; sample 0 is the start
/// value and sample `len` is exactly the target.
#[derive(Debug, Clone)]
pub struct ExpRamp {
    value: f64,
    step: f64,
    target: f64,
    remaining: usize,
}

impl ExpRamp {
    /// Both `from` and `to` must be positive.
    pub fn new(from: f64, to: f64, samples: usize) -> Self {
        debug_assert!(from > 0.0 && to > 0.0, "exponential ramp endpoints must be positive");
        if samples == 0 {
            return ExpRamp { value: to, step: 1.0, target: to, remaining: 0 };
        }
        ExpRamp {
            value: from,
            step: (to / from).powf(1.0 / samples as f64),
            target: to,
            remaining: samples,
        }
    }

    /// Current value, then advance one sample toward the target.
    pub fn next(&mut self) -> f64 {
        let out = self.value;
        if self.remaining > 0 {
            self.remaining -= 1;
            // Snap to the target on the last step so multiplicative
            // rounding never accumulates into the held value.
            self.value = if self.remaining == 0 {
                self.target
            } else {
                self.value * self.step
            };
        }
        out
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

/// The two-segment percussion envelope: exponential rise from the floor to
/// `AMP_PEAK` over `ATTACK_SECS`, then exponential fall back to the floor
/// over the remainder of the decay duration. Holds the floor once done.
#[derive(Debug, Clone)]
pub struct HitEnvelope {
    attack: ExpRamp,
    decay: ExpRamp,
}

impl HitEnvelope {
    pub fn new(decay_secs: f64, sample_rate: f64) -> Self {
        let attack_secs = ATTACK_SECS.min(decay_secs);
        let attack_samples = (attack_secs * sample_rate).round() as usize;
        let decay_samples = ((decay_secs - attack_secs) * sample_rate).round() as usize;
        HitEnvelope {
            attack: ExpRamp::new(AMP_FLOOR, AMP_PEAK, attack_samples),
            decay: ExpRamp::new(AMP_PEAK, AMP_FLOOR, decay_samples),
        }
    }

    /// Next gain value in (0, AMP_PEAK].
    pub fn next_sample(&mut self) -> f64 {
        if !self.attack.is_done() {
            self.attack.next()
        } else {
            self.decay.next()
        }
    }

    /// True once the fall has reached the floor (the held tail that covers
    /// the stop margin).
    pub fn is_finished(&self) -> bool {
        self.attack.is_done() && self.decay.is_done()
    }
}
