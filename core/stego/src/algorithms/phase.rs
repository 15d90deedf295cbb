//! Phase-Coding codec (C6): embed bits as ±π/2 phase of fixed FFT bins of
//! fixed-size segments.

use rustfft::{FftPlanner, num_complex::Complex};
use std::f32::consts::FRAC_PI_2;

/// Fixed segment length in samples.
pub const SEGMENT_SIZE: usize = 256;
/// First FFT bin used to carry a bit.
pub const START_BIN: usize = 20;
/// Bits carried per segment.
pub const BITS_PER_SEGMENT: usize = 8;
/// One-sided spectrum length for a real `SEGMENT_SIZE`-point FFT.
const SPECTRUM_LEN: usize = SEGMENT_SIZE / 2 + 1;
/// Minimum magnitude enforced on bit-carrying bins.
const MIN_MAGNITUDE: f32 = 500.0;

/// Embeds `bits` into non-overlapping `SEGMENT_SIZE`-sample segments
/// starting at `start_offset`, `BITS_PER_SEGMENT` bits per segment. A final
/// short segment is skipped. Returns the number of bits actually embedded.
pub fn encode(samples: &mut [i16], bits: &[u8], start_offset: usize) -> usize {
    if START_BIN + BITS_PER_SEGMENT > SPECTRUM_LEN {
        return 0;
    }

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(SEGMENT_SIZE);
    let ifft = planner.plan_fft_inverse(SEGMENT_SIZE);
    let mut scratch_fwd = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];
    let mut scratch_inv = vec![Complex::new(0.0, 0.0); ifft.get_inplace_scratch_len()];

    let mut encoded = 0usize;
    let mut offset = start_offset;
    let mut bit_iter = bits.iter();

    while offset + SEGMENT_SIZE <= samples.len() && encoded < bits.len() {
        let seg_bits: Vec<u8> = bit_iter.by_ref().take(BITS_PER_SEGMENT).copied().collect();
        if seg_bits.is_empty() {
            break;
        }

        let segment = &mut samples[offset..offset + SEGMENT_SIZE];
        let mut spectrum: Vec<Complex<f32>> =
            segment.iter().map(|&s| Complex::new(s as f32, 0.0)).collect();
        fft.process_with_scratch(&mut spectrum, &mut scratch_fwd);

        let mut magnitude: Vec<f32> = spectrum[..SPECTRUM_LEN].iter().map(|c| c.norm()).collect();
        let mut phase: Vec<f32> = spectrum[..SPECTRUM_LEN].iter().map(|c| c.arg()).collect();

        for (k, &bit) in seg_bits.iter().enumerate() {
            let j = START_BIN + k;
            if magnitude[j] < MIN_MAGNITUDE {
                magnitude[j] = MIN_MAGNITUDE;
            }
            phase[j] = if bit == 0 { -FRAC_PI_2 } else { FRAC_PI_2 };
        }

        let mut full_spectrum = vec![Complex::new(0.0, 0.0); SEGMENT_SIZE];
        for j in 0..SPECTRUM_LEN {
            full_spectrum[j] = Complex::from_polar(magnitude[j], phase[j]);
        }
        for j in SPECTRUM_LEN..SEGMENT_SIZE {
            full_spectrum[j] = full_spectrum[SEGMENT_SIZE - j].conj();
        }

        ifft.process_with_scratch(&mut full_spectrum, &mut scratch_inv);
        let n = SEGMENT_SIZE as f32;
        for (sample, c) in segment.iter_mut().zip(full_spectrum.iter()) {
            *sample = (c.re / n).clamp(-32768.0, 32767.0) as i16;
        }

        encoded += seg_bits.len();
        offset += SEGMENT_SIZE;
    }

    encoded
}

/// Decodes `BITS_PER_SEGMENT` bits from each full `SEGMENT_SIZE`-sample
/// segment starting at `start_offset`. A final short segment is skipped.
pub fn decode(samples: &[i16], start_offset: usize) -> Vec<u8> {
    if START_BIN + BITS_PER_SEGMENT > SPECTRUM_LEN {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(SEGMENT_SIZE);
    let mut scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];

    let mut bits = Vec::new();
    let mut offset = start_offset;

    while offset + SEGMENT_SIZE <= samples.len() {
        let segment = &samples[offset..offset + SEGMENT_SIZE];
        let mut spectrum: Vec<Complex<f32>> =
            segment.iter().map(|&s| Complex::new(s as f32, 0.0)).collect();
        fft.process_with_scratch(&mut spectrum, &mut scratch);

        for k in 0..BITS_PER_SEGMENT {
            let j = START_BIN + k;
            let phase = spectrum[j].arg();
            bits.push(if phase > 0.0 { 1 } else { 0 });
        }

        offset += SEGMENT_SIZE;
    }

    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone_carrier(len: usize) -> Vec<i16> {
        (0..len)
            .map(|i| {
                let t = i as f32;
                (3000.0 * (t * 0.05).sin() + 1000.0 * (t * 0.2).cos()) as i16
            })
            .collect()
    }

    #[test]
    fn test_roundtrip_exact_on_strong_carrier() {
        let mut samples = tone_carrier(256 * 20);
        let payload: Vec<u8> = [0x55u8, 0xAA]
            .iter()
            .flat_map(|b| (0..8).rev().map(move |sh| (b >> sh) & 1))
            .collect();

        let encoded = encode(&mut samples, &payload, 0);
        assert_eq!(encoded, payload.len());

        let decoded = decode(&samples, 0);
        assert_eq!(&decoded[..payload.len()], &payload[..]);
    }

    #[test]
    fn test_skips_short_final_segment() {
        let samples = tone_carrier(256 + 10);
        let bits = decode(&samples, 0);
        assert_eq!(bits.len(), BITS_PER_SEGMENT);
    }

    #[test]
    fn test_encode_returns_zero_bits_embedded_past_capacity() {
        let mut samples = tone_carrier(256);
        let bits = vec![1u8; 8];
        let encoded = encode(&mut samples, &bits, 0);
        assert_eq!(encoded, 8);
        // A second call with nothing left to embed into still behaves.
        let encoded_none = encode(&mut samples, &[], 256);
        assert_eq!(encoded_none, 0);
    }
}
