//! DSP Engine — Pure Rust percussion synthesis.
//!
//! All synthesis runs in Rust for deterministic, cross-platform output.
//! The same code powers browser playback (via AudioWorklet + WASM) and
//! offline WAV rendering in tests and tools.

pub mod engine;
pub mod envelope;
pub mod noise;
pub mod oscillator;
pub mod renderer;
pub mod voice;
