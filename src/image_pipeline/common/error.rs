use thiserror::Error;

use crate::image_pipeline::unpack::BitDepth;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Unsupported bit depth: {0} (expected one of 8, 10, 12, 14, 16)")]
    UnsupportedBitDepth(u32),

    #[error("Invalid bit depth '{0}' (expected one of 8, 10, 12, 14, 16)")]
    InvalidBitDepth(String),

    #[error("{0} data is already unpacked, no unpacking required")]
    UnsupportedOperation(BitDepth),

    #[error("Unknown bayer order: {0} (expected bayer_bg, bayer_gb, bayer_rg, bayer_gr or gray)")]
    UnknownBayerOrder(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Sample count mismatch: expected {expected} (width*height), unpacked {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Demosaic failed: {0}")]
    DemosaicError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConversionError::UnsupportedBitDepth(11);
        assert_eq!(
            err.to_string(),
            "Unsupported bit depth: 11 (expected one of 8, 10, 12, 14, 16)"
        );

        let err = ConversionError::InvalidBitDepth("ten".to_string());
        assert_eq!(err.to_string(), "Invalid bit depth 'ten' (expected one of 8, 10, 12, 14, 16)");

        let err = ConversionError::UnsupportedOperation(BitDepth::Raw16);
        assert_eq!(err.to_string(), "RAW16 data is already unpacked, no unpacking required");

        let err = ConversionError::DimensionMismatch { expected: 16, actual: 12 };
        assert!(err.to_string().contains("expected 16"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConversionError = io.into();
        assert!(matches!(err, ConversionError::IoError(_)));
    }
}
