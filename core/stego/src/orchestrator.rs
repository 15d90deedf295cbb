//! Orchestrator (C8): writes the Smart Header in LSB at offset 0, dispatches
//! the body to the selected codec at `HEADER_OFFSET`, and reverses the
//! process on decode.

use crate::algorithms::{dsss, echo, lsb, phase};
use crate::bits::{pack_bits, read_lsb, unpack_bits, write_lsb};
use crate::capacity::{DSSS_FRAME_SIZE, PHASE_SEGMENT_SIZE};
use crate::config::{Algorithm, EncodeConfig};
use crate::error::{StegoError, StegoResult};
use crate::header::{HEADER_BITS, SmartHeader};

/// Payload encoding never touches samples before this index; the header
/// plus safety margin occupy `[0, HEADER_OFFSET)`.
pub const HEADER_OFFSET: usize = 1000;

/// Number of samples a body of `n_bits` bits needs under `algorithm`.
fn body_samples_needed(algorithm: Algorithm, n_bits: usize) -> usize {
    match algorithm {
        Algorithm::Lsb => n_bits,
        Algorithm::Echo { chunk_size, .. } => n_bits * chunk_size as usize,
        Algorithm::Phase => n_bits.div_ceil(8) * PHASE_SEGMENT_SIZE,
        Algorithm::Dsss => n_bits * DSSS_FRAME_SIZE,
    }
}

/// Exact payload-byte capacity of `remaining` body samples under
/// `algorithm`, with no extra margin (unlike [`crate::capacity::bytes_available`],
/// which is a caller-facing estimate and reserves a safety margin).
fn exact_capacity_bytes(algorithm: Algorithm, remaining: usize) -> usize {
    match algorithm {
        Algorithm::Lsb => remaining / 8,
        Algorithm::Echo { chunk_size, .. } => (remaining / chunk_size.max(1) as usize) / 8,
        Algorithm::Phase => remaining / PHASE_SEGMENT_SIZE,
        Algorithm::Dsss => (remaining / DSSS_FRAME_SIZE) / 8,
    }
}

fn header_params(algorithm: Algorithm) -> (u16, u16, u16) {
    match algorithm {
        Algorithm::Lsb => (0, 0, 0),
        Algorithm::Echo {
            chunk_size,
            delay_0,
            delay_1,
            ..
        } => (chunk_size, delay_0, delay_1),
        Algorithm::Phase => (PHASE_SEGMENT_SIZE as u16, 20, 0),
        Algorithm::Dsss => (DSSS_FRAME_SIZE as u16, 0, 0),
    }
}

/// Embeds `payload` into a copy of `samples` using `config.algorithm`,
/// returning the stego samples.
pub fn encode(samples: &[i16], payload: &[u8], config: EncodeConfig) -> StegoResult<Vec<i16>> {
    if samples.len() < HEADER_OFFSET {
        return Err(StegoError::audio_too_short(HEADER_OFFSET, samples.len()));
    }

    let n_bits = payload.len() * 8;
    let needed = body_samples_needed(config.algorithm, n_bits);
    if HEADER_OFFSET + needed > samples.len() {
        let capacity = exact_capacity_bytes(config.algorithm, samples.len() - HEADER_OFFSET);
        return Err(StegoError::capacity_exceeded(
            config.algorithm.name(),
            capacity,
            payload.len(),
        ));
    }

    let mut stego = samples.to_vec();

    let (p1, p2, p3) = header_params(config.algorithm);
    let header = SmartHeader {
        algo_id: config.algorithm.id(),
        p1,
        p2,
        p3,
        payload_len: payload.len() as u32,
    };
    let header_bits = unpack_bits(&header.to_bytes());
    debug_assert_eq!(header_bits.len(), HEADER_BITS);
    write_lsb(&mut stego[0..HEADER_BITS], &header_bits);

    let payload_bits = unpack_bits(payload);

    match config.algorithm {
        Algorithm::Lsb => {
            lsb::encode(&mut stego, &payload_bits, HEADER_OFFSET);
        }
        Algorithm::Echo {
            chunk_size,
            delay_0,
            delay_1,
            alpha,
        } => {
            let params = echo::EchoParams {
                chunk_size: chunk_size as usize,
                delay_0: delay_0 as usize,
                delay_1: delay_1 as usize,
                alpha,
            };
            echo::encode(&mut stego, &payload_bits, HEADER_OFFSET, params);
        }
        Algorithm::Phase => {
            phase::encode(&mut stego, &payload_bits, HEADER_OFFSET);
        }
        Algorithm::Dsss => {
            dsss::encode(&mut stego, &payload_bits, HEADER_OFFSET);
        }
    }

    Ok(stego)
}

/// Recovers the payload previously embedded into `samples` by [`encode`].
pub fn decode(samples: &[i16]) -> StegoResult<Vec<u8>> {
    if samples.len() < HEADER_OFFSET {
        return Err(StegoError::audio_too_short(HEADER_OFFSET, samples.len()));
    }

    let header_bits = read_lsb(&samples[0..HEADER_BITS]);
    let header_bytes = pack_bits(&header_bits);
    let header = SmartHeader::from_bytes(&header_bytes)?;

    let needed_bits = header.payload_len as usize * 8;

    let mut decoded = match header.algo_id {
        1 => lsb::decode(samples, HEADER_OFFSET),
        2 => {
            let params = echo::EchoParams {
                chunk_size: header.p1 as usize,
                delay_0: header.p2 as usize,
                delay_1: header.p3 as usize,
                alpha: 0.0, // unused for decoding
            };
            echo::decode(samples, HEADER_OFFSET, params)
        }
        3 => phase::decode(samples, HEADER_OFFSET),
        4 => dsss::decode(samples, HEADER_OFFSET),
        id => return Err(StegoError::unknown_algorithm(id)),
    };

    if decoded.len() < needed_bits {
        eprintln!(
            "warning: decoder produced {} bits, expected {} — zero-padding",
            decoded.len(),
            needed_bits
        );
        decoded.resize(needed_bits, 0);
    } else {
        decoded.truncate(needed_bits);
    }

    Ok(pack_bits(&decoded))
}
