//! Bit depth and group geometry of MIPI packed formats

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// Number of packed bytes and produced samples of one indivisible group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLayout {
    pub bytes: usize,
    pub samples: usize,
}

/// Sample bit depth of a sensor dump.
///
/// `Raw8` and `Raw16` are byte aligned and never go through the unpacker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    Raw8,
    Raw10,
    Raw12,
    Raw14,
    Raw16,
}

impl BitDepth {
    pub const ALL: [BitDepth; 5] = [
        BitDepth::Raw8,
        BitDepth::Raw10,
        BitDepth::Raw12,
        BitDepth::Raw14,
        BitDepth::Raw16,
    ];

    pub fn bits(self) -> u32 {
        match self {
            BitDepth::Raw8 => 8,
            BitDepth::Raw10 => 10,
            BitDepth::Raw12 => 12,
            BitDepth::Raw14 => 14,
            BitDepth::Raw16 => 16,
        }
    }

    /// Group geometry, or `None` for the byte-aligned depths.
    pub fn group_layout(self) -> Option<GroupLayout> {
        match self {
            BitDepth::Raw8 | BitDepth::Raw16 => None,
            BitDepth::Raw10 => Some(GroupLayout { bytes: 5, samples: 4 }),
            BitDepth::Raw12 => Some(GroupLayout { bytes: 3, samples: 2 }),
            BitDepth::Raw14 => Some(GroupLayout { bytes: 7, samples: 4 }),
        }
    }

    pub fn is_packed(self) -> bool {
        self.group_layout().is_some()
    }

    /// Right shift that keeps the 8 most significant bits of a sample.
    pub fn preview_shift(self) -> u32 {
        self.bits() - 8
    }

    /// Largest value a sample of this depth can hold.
    pub fn max_value(self) -> u16 {
        match self {
            BitDepth::Raw16 => u16::MAX,
            other => (1u16 << other.bits()) - 1,
        }
    }

    /// Packed byte count for `pixels` samples, rounded up to whole groups.
    pub fn packed_len(self, pixels: usize) -> usize {
        match self.group_layout() {
            Some(layout) => pixels.div_ceil(layout.samples) * layout.bytes,
            None => pixels * (self.bits() as usize / 8),
        }
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = ConversionError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitDepth::Raw8),
            10 => Ok(BitDepth::Raw10),
            12 => Ok(BitDepth::Raw12),
            14 => Ok(BitDepth::Raw14),
            16 => Ok(BitDepth::Raw16),
            other => Err(ConversionError::UnsupportedBitDepth(other)),
        }
    }
}

impl FromStr for BitDepth {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered.strip_prefix("raw").unwrap_or(&lowered);
        let bits: u32 = digits
            .parse()
            .map_err(|_| ConversionError::InvalidBitDepth(s.trim().to_string()))?;
        BitDepth::try_from(bits)
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RAW{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_supported() {
        for depth in BitDepth::ALL {
            assert_eq!(BitDepth::try_from(depth.bits()).unwrap(), depth);
        }
    }

    #[test]
    fn test_try_from_unsupported() {
        let err = BitDepth::try_from(11).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedBitDepth(11)));
        assert!(BitDepth::try_from(0).is_err());
        assert!(BitDepth::try_from(32).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("10".parse::<BitDepth>().unwrap(), BitDepth::Raw10);
        assert_eq!("raw12".parse::<BitDepth>().unwrap(), BitDepth::Raw12);
        assert_eq!("RAW14".parse::<BitDepth>().unwrap(), BitDepth::Raw14);
        assert!(matches!("11".parse::<BitDepth>(), Err(ConversionError::UnsupportedBitDepth(11))));
    }

    #[test]
    fn test_from_str_keeps_non_numeric_input() {
        let err = "ten".parse::<BitDepth>().unwrap_err();
        assert!(matches!(err, ConversionError::InvalidBitDepth(ref text) if text == "ten"));
        assert!(err.to_string().contains("'ten'"));

        let err = " raw1x ".parse::<BitDepth>().unwrap_err();
        assert!(matches!(err, ConversionError::InvalidBitDepth(ref text) if text == "raw1x"));
    }

    #[test]
    fn test_group_layouts() {
        assert_eq!(BitDepth::Raw10.group_layout(), Some(GroupLayout { bytes: 5, samples: 4 }));
        assert_eq!(BitDepth::Raw12.group_layout(), Some(GroupLayout { bytes: 3, samples: 2 }));
        assert_eq!(BitDepth::Raw14.group_layout(), Some(GroupLayout { bytes: 7, samples: 4 }));
        assert_eq!(BitDepth::Raw8.group_layout(), None);
        assert_eq!(BitDepth::Raw16.group_layout(), None);
    }

    #[test]
    fn test_group_bits_are_whole() {
        for depth in BitDepth::ALL {
            if let Some(layout) = depth.group_layout() {
                assert_eq!(layout.bytes * 8, layout.samples * depth.bits() as usize);
            }
        }
    }

    #[test]
    fn test_preview_shift_and_max() {
        assert_eq!(BitDepth::Raw8.preview_shift(), 0);
        assert_eq!(BitDepth::Raw10.preview_shift(), 2);
        assert_eq!(BitDepth::Raw12.preview_shift(), 4);
        assert_eq!(BitDepth::Raw14.preview_shift(), 6);
        assert_eq!(BitDepth::Raw16.preview_shift(), 8);
        assert_eq!(BitDepth::Raw10.max_value(), 1023);
        assert_eq!(BitDepth::Raw14.max_value(), 16383);
        assert_eq!(BitDepth::Raw16.max_value(), u16::MAX);
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(BitDepth::Raw10.packed_len(16), 20);
        assert_eq!(BitDepth::Raw12.packed_len(16), 24);
        assert_eq!(BitDepth::Raw14.packed_len(16), 28);
        assert_eq!(BitDepth::Raw14.packed_len(5), 14);
        assert_eq!(BitDepth::Raw8.packed_len(16), 16);
        assert_eq!(BitDepth::Raw16.packed_len(16), 32);
    }
}
