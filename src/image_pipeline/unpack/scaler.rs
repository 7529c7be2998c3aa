use crate::image_pipeline::unpack::types::BitDepth;

/// Keeps the 8 most significant bits of a `depth`-bit sample.
///
/// Out-of-range input saturates at 255 so the mapping stays monotonic.
#[inline]
pub fn scale_to_u8(sample: u16, depth: BitDepth) -> u8 {
    u8::try_from(sample >> depth.preview_shift()).unwrap_or(u8::MAX)
}

pub fn scale_samples(samples: &[u16], depth: BitDepth) -> Vec<u8> {
    samples.iter().map(|&s| scale_to_u8(s, depth)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_raw10_bounds() {
        assert_eq!(scale_to_u8(1023, BitDepth::Raw10), 255);
        assert_eq!(scale_to_u8(0, BitDepth::Raw10), 0);
        assert_eq!(scale_to_u8(4, BitDepth::Raw10), 1);
        assert_eq!(scale_to_u8(3, BitDepth::Raw10), 0);
    }

    #[test]
    fn test_scale_other_depths() {
        assert_eq!(scale_to_u8(4095, BitDepth::Raw12), 255);
        assert_eq!(scale_to_u8(0x7F0, BitDepth::Raw12), 0x7F);
        assert_eq!(scale_to_u8(16383, BitDepth::Raw14), 255);
        assert_eq!(scale_to_u8(0xABCD, BitDepth::Raw16), 0xAB);
        assert_eq!(scale_to_u8(200, BitDepth::Raw8), 200);
    }

    #[test]
    fn test_scale_is_monotonic() {
        for depth in [BitDepth::Raw10, BitDepth::Raw12, BitDepth::Raw14] {
            let mut previous = 0u8;
            for sample in 0..=depth.max_value() {
                let scaled = scale_to_u8(sample, depth);
                assert!(scaled >= previous);
                previous = scaled;
            }
            assert_eq!(previous, 255);
        }
    }

    #[test]
    fn test_scale_saturates_out_of_range() {
        assert_eq!(scale_to_u8(2000, BitDepth::Raw10), 255);
        assert_eq!(scale_to_u8(300, BitDepth::Raw8), 255);
    }

    #[test]
    fn test_scale_samples() {
        assert_eq!(scale_samples(&[0, 512, 1023], BitDepth::Raw10), vec![0, 128, 255]);
    }
}
