//! WAV renderer — exports a single drum hit as a WAV byte buffer.

use crate::kit::PadConfig;

use super::engine::AudioEngine;

/// Render one hit to a WAV file as bytes (16-bit mono PCM). Borrows the
/// engine so the caller's noise-seed counter keeps advancing across hits.
pub fn render_hit_wav(engine: &mut AudioEngine, note: &str, config: &PadConfig) -> Vec<u8> {
    let sample_rate = engine.sample_rate() as u32;
    let hit = engine.render_hit(note, config);

    let pcm: Vec<i16> = hit
        .samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0) as i16)
        .collect();

    encode_wav(&pcm, sample_rate, 1)
}

/// Encode interleaved i16 PCM samples to a WAV byte buffer.
fn encode_wav(samples: &[i16], sample_rate: u32, channels: u16) -> Vec<u8> {
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::DrumKit;

    #[test]
    fn wav_header_is_valid_mono_pcm() {
        let kit = DrumKit::default_kit();
        let mut engine = AudioEngine::new(44100.0);
        let wav = render_hit_wav(&mut engine, "pad3", kit.get("pad3").unwrap());

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        // 1 channel, 44100 Hz, 16-bit
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 44100);
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
    }

    #[test]
    fn data_chunk_covers_the_whole_hit() {
        let kit = DrumKit::default_kit();
        let mut engine = AudioEngine::new(44100.0);
        let wav = render_hit_wav(&mut engine, "pad8", kit.get("pad8").unwrap());
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        let expected_samples = ((0.42 + 0.03) * 44100.0_f64).round() as u32;
        assert_eq!(data_size, expected_samples * 2);
        assert_eq!(wav.len(), 44 + data_size as usize);
    }
}
