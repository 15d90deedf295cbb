//! Echo-Hiding codec (C5): embed bits as additive delayed copies of each
//! chunk; decode by comparing real-cepstrum peaks at the two candidate
//! delays.

use rustfft::{FftPlanner, num_complex::Complex};

/// `ε` added inside the cepstrum's log-magnitude to avoid `log(0)`.
const CEPSTRUM_EPSILON: f32 = 1e-8;

/// Parameters shared by encode and decode.
#[derive(Debug, Clone, Copy)]
pub struct EchoParams {
    /// Samples per embedded bit.
    pub chunk_size: usize,
    /// Echo delay, in samples, for bit `0`.
    pub delay_0: usize,
    /// Echo delay, in samples, for bit `1`.
    pub delay_1: usize,
    /// Echo gain.
    pub alpha: f32,
}

/// Embeds `bits` starting at `start_offset`, one bit per `chunk_size`-sample
/// chunk. Truncates silently if the span would overrun `samples`. Returns
/// the number of bits actually embedded.
pub fn encode(samples: &mut [i16], bits: &[u8], start_offset: usize, params: EchoParams) -> usize {
    let available_chunks = (samples.len().saturating_sub(start_offset)) / params.chunk_size;
    let n_bits = bits.len().min(available_chunks);

    for (i, &bit) in bits.iter().take(n_bits).enumerate() {
        let chunk_start = start_offset + i * params.chunk_size;
        let chunk_end = chunk_start + params.chunk_size;
        let chunk = &mut samples[chunk_start..chunk_end];

        let delay = if bit == 0 {
            params.delay_0
        } else {
            params.delay_1
        };

        // Single-tap FIR: echo[n] = alpha * chunk[n - delay] for n >= delay.
        let original: Vec<f32> = chunk.iter().map(|&s| s as f32).collect();
        for n in delay..chunk.len() {
            let mixed = original[n] + params.alpha * original[n - delay];
            chunk[n] = mixed.clamp(-32768.0, 32767.0) as i16;
        }
    }

    n_bits
}

/// Decodes one bit per full `chunk_size`-sample chunk starting at
/// `start_offset`. A short final chunk is skipped.
pub fn decode(samples: &[i16], start_offset: usize, params: EchoParams) -> Vec<u8> {
    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(params.chunk_size);
    let ifft = planner.plan_fft_inverse(params.chunk_size);

    let mut bits = Vec::new();
    let mut offset = start_offset;
    let mut scratch_fwd = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];
    let mut scratch_inv = vec![Complex::new(0.0, 0.0); ifft.get_inplace_scratch_len()];

    while offset + params.chunk_size <= samples.len() {
        let chunk = &samples[offset..offset + params.chunk_size];

        let mut spectrum: Vec<Complex<f32>> = chunk
            .iter()
            .map(|&s| Complex::new(s as f32, 0.0))
            .collect();
        fft.process_with_scratch(&mut spectrum, &mut scratch_fwd);

        let mut log_mag: Vec<Complex<f32>> = spectrum
            .iter()
            .map(|c| Complex::new((c.norm() + CEPSTRUM_EPSILON).ln(), 0.0))
            .collect();
        ifft.process_with_scratch(&mut log_mag, &mut scratch_inv);

        let n = params.chunk_size as f32;
        let cepstrum: Vec<f32> = log_mag.iter().map(|c| c.re / n).collect();

        let c0 = cepstrum.get(params.delay_0).copied().unwrap_or(0.0);
        let c1 = cepstrum.get(params.delay_1).copied().unwrap_or(0.0);
        bits.push(if c0 >= c1 { 0 } else { 1 });

        offset += params.chunk_size;
    }

    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise_carrier(len: usize, seed: u64) -> Vec<i16> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                // xorshift64, deterministic, no external dependency needed here.
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                ((state % 20001) as i64 - 10000) as i16
            })
            .collect()
    }

    fn params() -> EchoParams {
        EchoParams {
            chunk_size: 2048,
            delay_0: 50,
            delay_1: 200,
            alpha: 0.5,
        }
    }

    #[test]
    fn test_encode_truncates_at_buffer_end() {
        let mut samples = noise_carrier(2048 * 2 + 100, 7);
        let bits = vec![0u8, 1, 1];
        let encoded = encode(&mut samples, &bits, 0, params());
        assert_eq!(encoded, 2);
    }

    #[test]
    fn test_roundtrip_ber_on_noise_carrier() {
        let carrier = noise_carrier(220_500 - 1000, 42);
        let mut samples = carrier.clone();
        let p = params();

        let payload_bits: Vec<u8> = (0u8..32)
            .flat_map(|byte| (0..8).rev().map(move |sh| (byte >> sh) & 1))
            .collect();

        let encoded_count = encode(&mut samples, &payload_bits, 0, p);
        assert_eq!(encoded_count, payload_bits.len());

        let decoded = decode(&samples, 0, p);
        let compared = decoded.len().min(payload_bits.len());
        let errors = payload_bits[..compared]
            .iter()
            .zip(decoded[..compared].iter())
            .filter(|(a, b)| a != b)
            .count();
        let ber = errors as f64 / compared as f64;
        assert!(ber <= 0.05, "BER {ber} exceeded 5% threshold");
    }

    #[test]
    fn test_decode_skips_short_final_chunk() {
        let samples = noise_carrier(2048 + 100, 3);
        let bits = decode(&samples, 0, params());
        assert_eq!(bits.len(), 1);
    }
}
