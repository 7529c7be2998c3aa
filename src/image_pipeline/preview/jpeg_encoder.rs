use std::io::Write;

use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::debayer::types::{PreviewColor, PreviewImage};
use crate::image_pipeline::preview::encoder::PreviewEncoder;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Baseline JPEG output through the `image` crate.
pub struct JpegPreviewEncoder {
    quality: u8,
}

impl JpegPreviewEncoder {
    /// `quality` is clamped to 1..=100.
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for JpegPreviewEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}

impl PreviewEncoder for JpegPreviewEncoder {
    fn extension(&self) -> &'static str {
        "jpg"
    }

    fn encode(&self, image: &PreviewImage, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding JPEG preview: {}x{} {:?}, quality {}",
            image.width, image.height, image.color, self.quality
        );

        let expected = image.width * image.height * image.color.channels();
        if image.data.len() != expected {
            return Err(ConversionError::InvalidDimensions(image.width, image.height));
        }

        let width = u32::try_from(image.width)
            .map_err(|_| ConversionError::InvalidDimensions(image.width, image.height))?;
        let height = u32::try_from(image.height)
            .map_err(|_| ConversionError::InvalidDimensions(image.width, image.height))?;
        let color_type = match image.color {
            PreviewColor::Gray => ExtendedColorType::L8,
            PreviewColor::Rgb => ExtendedColorType::Rgb8,
        };

        let mut encoder = JpegEncoder::new_with_quality(output, self.quality);
        encoder
            .encode(&image.data, width, height, color_type)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        debug!("JPEG encoding complete");
        Ok(())
    }
}
