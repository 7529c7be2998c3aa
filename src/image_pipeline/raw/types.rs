//! RAW image data types

use std::borrow::Cow;

use crate::image_pipeline::unpack::BitDepth;

/// What to do with RAW8/RAW16 input, which needs no unpacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassthroughPolicy {
    /// Log and produce no output for the file.
    #[default]
    Skip,
    /// Read the bytes as already unpacked samples and carry on.
    Copy,
}

/// Unpacked single-channel sensor samples, row-major
#[derive(Debug, Clone)]
pub struct RawImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// One sample per pixel, value in the low `depth` bits
    pub data: Vec<u16>,
    /// Bit depth the samples were decoded from
    pub depth: BitDepth,
}

impl RawImageData {
    /// Pixel count implied by the declared dimensions.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether the decoded sample count covers exactly `width * height` pixels.
    pub fn is_complete(&self) -> bool {
        self.data.len() == self.pixel_count()
    }

    /// Samples as native-endian bytes, the layout of the `_unpack.raw` output.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|s| s.to_ne_bytes()).collect()
    }

    /// Samples cut or zero-padded to exactly `width * height`.
    pub fn grid_samples(&self) -> Cow<'_, [u16]> {
        let pixels = self.pixel_count();
        if self.data.len() == pixels {
            return Cow::Borrowed(&self.data);
        }
        let mut samples = self.data.clone();
        samples.resize(pixels, 0);
        Cow::Owned(samples)
    }
}
