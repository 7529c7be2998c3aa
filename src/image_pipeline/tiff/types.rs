//! TIFF output settings

use std::str::FromStr;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

impl FromStr for TiffCompression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(TiffCompression::None),
            "lzw" => Ok(TiffCompression::Lzw),
            "deflate-fast" => Ok(TiffCompression::DeflateFast),
            "deflate" | "deflate-balanced" => Ok(TiffCompression::DeflateBalanced),
            "deflate-best" => Ok(TiffCompression::DeflateBest),
            other => Err(format!(
                "unknown TIFF compression '{}' (expected none, lzw, deflate-fast, deflate, deflate-best)",
                other
            )),
        }
    }
}

/// Settings for the 16-bit TIFF export
#[derive(Debug, Clone, Copy, Default)]
pub struct TiffSettings {
    pub compression: TiffCompression,
    /// Horizontal differencing before compression. Slower, smaller for LZW/Deflate.
    pub predictor: bool,
}

impl TiffSettings {
    pub fn new(compression: TiffCompression) -> Self {
        Self {
            compression,
            predictor: false,
        }
    }
}
