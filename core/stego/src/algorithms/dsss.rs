//! DSSS codec (C7): embed bits by adding/subtracting a seeded ±1 PN sequence
//! frame.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Fixed frame length in samples.
pub const FRAME_SIZE: usize = 8192;
/// Fixed PN-sequence seed. Part of the wire contract: encoder and decoder
/// must derive the identical sequence.
pub const SEED: u64 = 12345;
/// Fixed embedding strength.
pub const ALPHA: f32 = 500.0;

/// Deterministically derives the `±1` PN sequence of length `frame_size`
/// from [`SEED`] using a PCG64 generator (`rand_pcg::Pcg64::seed_from_u64`),
/// drawing each element via `gen_range(0..2)` and mapping `0 -> -1, 1 -> +1`.
/// Encoder and decoder must call this with the same `frame_size` to agree.
pub fn pn_sequence(frame_size: usize) -> Vec<i8> {
    let mut rng = Pcg64::seed_from_u64(SEED);
    (0..frame_size)
        .map(|_| if rng.gen_range(0..2) == 0 { -1i8 } else { 1i8 })
        .collect()
}

/// Embeds one bit per `FRAME_SIZE`-sample frame starting at `start_offset`.
/// Truncates silently if the span would overrun `samples`. Returns the
/// number of bits actually embedded.
pub fn encode(samples: &mut [i16], bits: &[u8], start_offset: usize) -> usize {
    let available_frames = samples.len().saturating_sub(start_offset) / FRAME_SIZE;
    let n_bits = bits.len().min(available_frames);
    let pn = pn_sequence(FRAME_SIZE);

    for (i, &bit) in bits.iter().take(n_bits).enumerate() {
        let start = start_offset + i * FRAME_SIZE;
        let frame = &mut samples[start..start + FRAME_SIZE];
        let sign = if bit == 1 { 1.0 } else { -1.0 };
        for (sample, &p) in frame.iter_mut().zip(pn.iter()) {
            let mixed = *sample as f32 + sign * ALPHA * p as f32;
            *sample = mixed.clamp(-32768.0, 32767.0) as i16;
        }
    }

    n_bits
}

/// Decodes one bit per full `FRAME_SIZE`-sample frame starting at
/// `start_offset` by correlating against the PN sequence. A short final
/// frame is skipped.
pub fn decode(samples: &[i16], start_offset: usize) -> Vec<u8> {
    let pn = pn_sequence(FRAME_SIZE);
    let mut bits = Vec::new();
    let mut offset = start_offset;

    while offset + FRAME_SIZE <= samples.len() {
        let frame = &samples[offset..offset + FRAME_SIZE];
        let correlation: f32 = frame
            .iter()
            .zip(pn.iter())
            .map(|(&s, &p)| s as f32 * p as f32)
            .sum::<f32>()
            / FRAME_SIZE as f32;
        bits.push(if correlation >= 0.0 { 1 } else { 0 });
        offset += FRAME_SIZE;
    }

    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pn_sequence_is_deterministic() {
        let a = pn_sequence(16);
        let b = pn_sequence(16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pn_sequence_is_bipolar() {
        let pn = pn_sequence(256);
        assert!(pn.iter().all(|&v| v == 1 || v == -1));
    }

    #[test]
    fn test_roundtrip_exact_on_bounded_carrier() {
        let mut samples = vec![0i16; FRAME_SIZE * 4 + 100];
        // max(|sample|) < 10000, per the spec's exact-recovery guarantee.
        for (i, s) in samples.iter_mut().enumerate() {
            *s = ((i * 37) % 9000) as i16 - 4500;
        }

        let payload: Vec<u8> = b"DSSS"
            .iter()
            .flat_map(|b| (0..8).rev().map(move |sh| (b >> sh) & 1))
            .collect();

        let encoded = encode(&mut samples, &payload, 0);
        assert_eq!(encoded, payload.len());

        let decoded = decode(&samples, 0);
        assert_eq!(&decoded[..payload.len()], &payload[..]);
    }

    #[test]
    fn test_decode_skips_short_final_frame() {
        let samples = vec![0i16; FRAME_SIZE + 10];
        let bits = decode(&samples, 0);
        assert_eq!(bits.len(), 1);
    }
}
