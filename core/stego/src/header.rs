//! The 15-byte self-describing "Smart Header" embedded via LSB in the first
//! `HEADER_BITS` samples of every stego stream.

use crate::error::StegoError;

/// Size of the Smart Header in bytes.
pub const HEADER_LEN: usize = 15;

/// Number of LSB-carrying samples the header occupies (`HEADER_LEN * 8`).
pub const HEADER_BITS: usize = HEADER_LEN * 8;

const MAGIC: [u8; 2] = *b"st";

/// A parsed Smart Header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartHeader {
    /// Algorithm identifier (`1..=4`).
    pub algo_id: u8,
    /// First algorithm-specific parameter.
    pub p1: u16,
    /// Second algorithm-specific parameter.
    pub p2: u16,
    /// Third algorithm-specific parameter.
    pub p3: u16,
    /// Length of the hidden payload in bytes.
    pub payload_len: u32,
}

impl SmartHeader {
    /// Serializes this header to its 15-byte wire representation:
    /// `<2s B H H H I>` little-endian, followed by a little-endian `u16`
    /// checksum equal to the sum of the first 13 bytes mod `2^16`.
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..2].copy_from_slice(&MAGIC);
        buf[2] = self.algo_id;
        buf[3..5].copy_from_slice(&self.p1.to_le_bytes());
        buf[5..7].copy_from_slice(&self.p2.to_le_bytes());
        buf[7..9].copy_from_slice(&self.p3.to_le_bytes());
        buf[9..13].copy_from_slice(&self.payload_len.to_le_bytes());

        let checksum = checksum_of(&buf[0..13]);
        buf[13..15].copy_from_slice(&checksum.to_le_bytes());
        buf
    }

    /// Parses a 15-byte header, validating the magic and checksum. Never
    /// panics, regardless of the contents of `buf`, as long as
    /// `buf.len() >= HEADER_LEN`.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, StegoError> {
        if buf.len() < HEADER_LEN {
            return Err(StegoError::HeaderInvalid);
        }

        if buf[0..2] != MAGIC {
            return Err(StegoError::HeaderInvalid);
        }

        let checksum = u16::from_le_bytes([buf[13], buf[14]]);
        if checksum_of(&buf[0..13]) != checksum {
            return Err(StegoError::HeaderInvalid);
        }

        Ok(SmartHeader {
            algo_id: buf[2],
            p1: u16::from_le_bytes([buf[3], buf[4]]),
            p2: u16::from_le_bytes([buf[5], buf[6]]),
            p3: u16::from_le_bytes([buf[7], buf[8]]),
            payload_len: u32::from_le_bytes([buf[9], buf[10], buf[11], buf[12]]),
        })
    }
}

fn checksum_of(bytes: &[u8]) -> u16 {
    let sum: u32 = bytes.iter().map(|&b| b as u32).sum();
    (sum % 65536) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> SmartHeader {
        SmartHeader {
            algo_id: 1,
            p1: 0,
            p2: 0,
            p3: 0,
            payload_len: 13,
        }
    }

    #[test]
    fn test_build_then_parse_roundtrip() {
        let header = sample_header();
        let bytes = header.to_bytes();
        let parsed = SmartHeader::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_magic_bytes_are_st() {
        let bytes = sample_header().to_bytes();
        assert_eq!(&bytes[0..2], b"st");
    }

    #[test]
    fn test_roundtrip_with_nonzero_params() {
        let header = SmartHeader {
            algo_id: 2,
            p1: 2048,
            p2: 50,
            p3: 200,
            payload_len: 32,
        };
        let parsed = SmartHeader::from_bytes(&header.to_bytes()).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_bad_magic_is_rejected() {
        let mut bytes = sample_header().to_bytes();
        bytes[0] = b'x';
        assert_eq!(SmartHeader::from_bytes(&bytes), Err(StegoError::HeaderInvalid));
    }

    #[test]
    fn test_bad_checksum_is_rejected() {
        let mut bytes = sample_header().to_bytes();
        bytes[13] ^= 0xFF;
        assert_eq!(SmartHeader::from_bytes(&bytes), Err(StegoError::HeaderInvalid));
    }

    #[test]
    fn test_single_bit_flip_in_checksum_is_detected() {
        let mut bytes = sample_header().to_bytes();
        bytes[13] ^= 0b0000_0001;
        assert!(SmartHeader::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_parse_never_panics_on_short_buffer() {
        for len in 0..HEADER_LEN {
            let buf = vec![0u8; len];
            assert_eq!(SmartHeader::from_bytes(&buf), Err(StegoError::HeaderInvalid));
        }
    }

    #[test]
    fn test_parse_never_panics_on_garbage() {
        let buf = [0xFFu8; HEADER_LEN];
        assert!(SmartHeader::from_bytes(&buf).is_err());
    }
}
