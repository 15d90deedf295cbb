//! Capacity calculator: given a sample count and algorithm, the maximum
//! payload size (in bytes) that algorithm can hide.

use crate::config::Algorithm;

/// Fixed phase-coding segment length (samples).
pub const PHASE_SEGMENT_SIZE: usize = 256;

/// Fixed DSSS frame length (samples).
pub const DSSS_FRAME_SIZE: usize = 8192;

/// The capacity formulas all reserve this many bytes of extra margin beyond
/// the Smart Header.
const MARGIN_BYTES: i64 = 4;

/// Returns the number of payload bytes `algorithm` can hide in `n` samples,
/// clamped at zero. `n` is the *total* carrier length; callers encoding a
/// body that starts at `HEADER_OFFSET` should pass `n` unchanged — the
/// formulas below already express the same reservation the original
/// implementation used.
pub fn bytes_available(n: usize, algorithm: Algorithm) -> usize {
    let n = n as i64;
    let raw = match algorithm {
        Algorithm::Lsb => n / 8 - MARGIN_BYTES,
        Algorithm::Echo { chunk_size, .. } => {
            let chunk_size = chunk_size.max(1) as i64;
            (n / chunk_size) / 8 - MARGIN_BYTES
        }
        Algorithm::Phase => n / PHASE_SEGMENT_SIZE as i64 - MARGIN_BYTES,
        Algorithm::Dsss => (n / DSSS_FRAME_SIZE as i64) / 8 - MARGIN_BYTES,
    };
    raw.max(0) as usize
}
