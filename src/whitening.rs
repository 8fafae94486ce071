//! Module: whitening
//!
//! Purpose: Reversible bit-stream scrambler to break up long runs of
//! identical bits in a payload before transmission. LFSR scheme from
//! Freescale AN5070 (rev. 0, 07/2015, p. 7), adjusted for bit-accurate
//! counts.
//!
//! The generator is reseeded on every call, so the transform is its own
//! inverse: feeding received whitened data through the same function
//! with the same bit count de-whitens it. Independent of the
//! transmission engine.

/// Whiten (or de-whiten) `buf` in place.
///
/// Operates byte-by-byte over `ceil(bit_count / 8)` bytes: each byte is
/// XORed with the current key, then the key advances once per bit
/// position of that byte (only `bit_count % 8` times for a partial
/// final byte). Trailing unused high bits of a partial final byte are
/// still XORed as part of that byte; their meaning past `bit_count` is
/// the caller's concern.
///
/// Buffers shorter than `ceil(bit_count / 8)` bytes are processed to
/// their end; no panic.
pub fn whiten(buf: &mut [u8], bit_count: usize) {
    let nominal_bytes = bit_count.div_ceil(8);
    let byte_count = nominal_bytes.min(buf.len());

    // Per-call seed; no state survives between calls.
    let mut key_msb: u8 = 0x01;
    let mut key_lsb: u8 = 0xFF;

    for (i, byte) in buf[..byte_count].iter_mut().enumerate() {
        *byte ^= key_lsb;

        let bits = if i + 1 == nominal_bytes && bit_count % 8 != 0 {
            bit_count % 8
        } else {
            8
        };

        for _ in 0..bits {
            let new_msb = (key_lsb & 0x01) ^ ((key_lsb >> 5) & 0x01);
            key_lsb = (key_lsb >> 1) | (key_msb << 7);
            key_msb = new_msb;
        }
    }
}

/// Copy `ceil(bit_count / 8)` bytes from `input` to `out`, then whiten
/// `out` in place.
///
/// Truncates to the shorter of the two slices.
pub fn whiten_into(out: &mut [u8], input: &[u8], bit_count: usize) {
    let byte_count = bit_count
        .div_ceil(8)
        .min(input.len())
        .min(out.len());

    out[..byte_count].copy_from_slice(&input[..byte_count]);
    whiten(&mut out[..byte_count], bit_count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_stream_seed() {
        // First key byte is the 0xFF seed, second follows from eight
        // LFSR advances.
        let mut buf = [0x00, 0x00];
        whiten(&mut buf, 16);
        assert_eq!(buf, [0xFF, 0xE1]);
    }

    #[test]
    fn test_round_trip_restores_buffer() {
        let original: [u8; 6] = [0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x80];

        for bit_count in [1, 7, 8, 9, 15, 16, 24, 33, 48] {
            let mut buf = original;
            whiten(&mut buf, bit_count);
            whiten(&mut buf, bit_count);
            assert_eq!(buf, original, "bit_count={}", bit_count);
        }
    }

    #[test]
    fn test_whitening_changes_data() {
        let mut buf = [0x00u8; 4];
        whiten(&mut buf, 32);
        assert_ne!(buf, [0x00u8; 4]);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let mut a = [0x5A, 0xC3, 0x99];
        let mut b = [0x5A, 0xC3, 0x99];

        whiten(&mut a, 20);
        whiten(&mut b, 20);

        assert_eq!(a, b);
    }

    #[test]
    fn test_only_covered_bytes_touched() {
        let mut buf = [0x11, 0x22, 0x33, 0x44];
        whiten(&mut buf, 12); // ceil(12/8) = 2 bytes

        assert_eq!(buf[2], 0x33);
        assert_eq!(buf[3], 0x44);
        assert_ne!(buf[0], 0x11);
    }

    #[test]
    fn test_zero_bit_count_is_noop() {
        let mut buf = [0xAB, 0xCD];
        whiten(&mut buf, 0);
        assert_eq!(buf, [0xAB, 0xCD]);
    }

    #[test]
    fn test_short_buffer_no_panic() {
        let mut buf = [0x7E];
        whiten(&mut buf, 64);
        assert_eq!(buf, [0x7E ^ 0xFF]);
    }

    #[test]
    fn test_whiten_into_matches_in_place() {
        let input = [0x12, 0x34, 0x56];
        let mut out = [0u8; 3];
        whiten_into(&mut out, &input, 24);

        let mut expected = input;
        whiten(&mut expected, 24);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_whiten_into_round_trip() {
        let input = [0xF0, 0x0F, 0xAA];
        let mut scrambled = [0u8; 3];
        let mut restored = [0u8; 3];

        whiten_into(&mut scrambled, &input, 24);
        whiten_into(&mut restored, &scrambled, 24);

        assert_eq!(restored, input);
    }
}
