//! Conversion configuration types

use crate::image_pipeline::debayer::types::BayerOrder;
use crate::image_pipeline::preview::DEFAULT_JPEG_QUALITY;
use crate::image_pipeline::raw::types::PassthroughPolicy;
use crate::image_pipeline::tiff::types::TiffSettings;
use crate::image_pipeline::unpack::BitDepth;

/// Configuration for converting one packed dump
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Packed sample depth of the input
    pub depth: BitDepth,
    /// Sensor layout used for the preview; `None` disables the preview
    pub bayer: Option<BayerOrder>,
    /// Handling of RAW8/RAW16 input
    pub passthrough: PassthroughPolicy,
    /// Reject zero dimensions and sample counts other than `width * height`
    pub validate_dimensions: bool,
    /// JPEG quality of the preview (1-100)
    pub jpeg_quality: u8,
    /// Also write a 16-bit TIFF of the unpacked grid
    pub tiff: Option<TiffSettings>,
}

impl ConversionConfig {
    pub fn new(width: usize, height: usize, depth: BitDepth) -> Self {
        Self {
            width,
            height,
            depth,
            bayer: None,
            passthrough: PassthroughPolicy::Skip,
            validate_dimensions: true,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            tiff: None,
        }
    }

    pub fn builder(width: usize, height: usize, depth: BitDepth) -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::new(width, height, depth),
        }
    }
}

/// Builder for ConversionConfig
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn bayer(mut self, bayer: Option<BayerOrder>) -> Self {
        self.config.bayer = bayer;
        self
    }

    pub fn passthrough(mut self, passthrough: PassthroughPolicy) -> Self {
        self.config.passthrough = passthrough;
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.config.validate_dimensions = validate;
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality;
        self
    }

    pub fn tiff(mut self, tiff: Option<TiffSettings>) -> Self {
        self.config.tiff = tiff;
        self
    }

    pub fn build(self) -> ConversionConfig {
        self.config
    }
}

/// What a batch does when one file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log the failure and move on to the next file
    #[default]
    Continue,
    /// Stop at the first failure and return its error
    Abort,
}

/// Configuration for directory runs
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub on_error: ErrorPolicy,
    /// Ignore `*_unpack.raw` files left by earlier runs
    pub skip_unpacked_outputs: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Continue,
            skip_unpacked_outputs: true,
        }
    }
}
