//! Bit-packing utilities: MSB-first byte/bit conversion and sample-LSB I/O.

/// Unpacks a byte buffer into MSB-first bits (`0x4D` -> `[0,1,0,0,1,1,0,1]`).
pub fn unpack_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Packs MSB-first bits into bytes. The trailing partial byte, if any, is
/// zero-padded on the right.
pub fn pack_bits(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            if bit != 0 {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// Writes `bits` into bit 0 of `samples`, one bit per sample, leaving the
/// upper 15 bits untouched. Panics in debug builds if the lengths differ.
pub fn write_lsb(samples: &mut [i16], bits: &[u8]) {
    debug_assert_eq!(
        samples.len(),
        bits.len(),
        "write_lsb requires one bit per sample"
    );
    for (sample, &bit) in samples.iter_mut().zip(bits.iter()) {
        *sample = (*sample & !1) | (bit as i16 & 1);
    }
}

/// Reads bit 0 of each sample, one bit per sample.
pub fn read_lsb(samples: &[i16]) -> Vec<u8> {
    samples.iter().map(|&s| (s & 1) as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_bits_msb_first() {
        assert_eq!(unpack_bits(&[0x4D]), vec![0, 1, 0, 0, 1, 1, 0, 1]);
    }

    #[test]
    fn test_pack_unpack_roundtrip() {
        let original = b"Hello, world!".to_vec();
        let bits = unpack_bits(&original);
        let packed = pack_bits(&bits);
        assert_eq!(packed, original);
    }

    #[test]
    fn test_pack_bits_pads_short_tail() {
        let bits = vec![1, 0, 1];
        let packed = pack_bits(&bits);
        assert_eq!(packed, vec![0b1010_0000]);
    }

    #[test]
    fn test_write_read_lsb_roundtrip() {
        let mut samples = vec![10i16, -5, 32767, -32768, 0];
        let bits = vec![1, 0, 1, 1, 0];
        write_lsb(&mut samples, &bits);
        assert_eq!(read_lsb(&samples), bits);
    }

    #[test]
    fn test_write_lsb_preserves_upper_bits() {
        let mut samples = vec![0b0000_0000_0000_0100i16];
        write_lsb(&mut samples, &[1]);
        assert_eq!(samples[0], 0b0000_0000_0000_0101);
        write_lsb(&mut samples, &[0]);
        assert_eq!(samples[0], 0b0000_0000_0000_0100);
    }

    #[test]
    fn test_empty_bits() {
        assert_eq!(pack_bits(&[]), Vec::<u8>::new());
        assert_eq!(unpack_bits(&[]), Vec::<u8>::new());
    }
}
