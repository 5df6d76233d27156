use crate::gray::{encode, wrap_offset};

#[test]
fn adjacent_codes_differ_by_one_bit() {
    for n in 0..1024usize {
        assert_eq!((encode(n) ^ encode(n + 1)).count_ones(), 1, "n = {}", n);
    }
}

#[test]
fn wrap_step_differs_by_one_bit() {
    // The step from `modulus - 1` back to 0 must also flip exactly one bit.
    for width in 2..16u32 {
        let modulus = 1usize << width;
        assert_eq!((encode(modulus - 1) ^ encode(0)).count_ones(), 1, "width = {}", width);
    }
}

#[test]
fn full_offset_matches_half_space_distance() {
    // Positions a full buffer apart differ by half the counter space; the
    // top-two-bit flip must map one code onto the other for every position.
    for width in 2..12u32 {
        let modulus = 1usize << width;
        let half = modulus >> 1;
        for n in 0..modulus {
            assert_eq!(
                encode((n + half) & (modulus - 1)),
                wrap_offset(encode(n), width),
                "width = {}, n = {}",
                width,
                n,
            );
        }
    }
}

#[cfg(feature = "std")]
mod props {
    use super::*;
    use crate::gray::decode;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hamming_distance_is_one(n in 0..usize::MAX) {
            prop_assert_eq!((encode(n) ^ encode(n + 1)).count_ones(), 1);
        }

        #[test]
        fn decode_inverts_encode(n: usize) {
            prop_assert_eq!(decode(encode(n)), n);
        }

        #[test]
        fn wrap_offset_is_involutive(n: usize, width in 2..usize::BITS) {
            prop_assert_eq!(wrap_offset(wrap_offset(n, width), width), n);
        }
    }
}
