//! Types for debayering operations

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// Colour filter alignment of the sensor, named after the first two pixels of row 0.
///
/// `Rg` is RGGB. OpenCV names the same sensor `BayerBG`, since its codes read the
/// second and third pixels of row 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BayerOrder {
    /// B G / G R
    Bg,
    /// G B / R G
    Gb,
    /// R G / G B
    Rg,
    /// G R / B G
    Gr,
    /// Monochrome sensor, no colour reconstruction
    Gray,
}

impl BayerOrder {
    pub const ALL: [BayerOrder; 5] = [
        BayerOrder::Bg,
        BayerOrder::Gb,
        BayerOrder::Rg,
        BayerOrder::Gr,
        BayerOrder::Gray,
    ];

    /// Name accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            BayerOrder::Bg => "bayer_bg",
            BayerOrder::Gb => "bayer_gb",
            BayerOrder::Rg => "bayer_rg",
            BayerOrder::Gr => "bayer_gr",
            BayerOrder::Gray => "gray",
        }
    }
}

impl FromStr for BayerOrder {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BayerOrder::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConversionError::UnknownBayerOrder(s.to_string()))
    }
}

impl fmt::Display for BayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewColor {
    Gray,
    Rgb,
}

impl PreviewColor {
    pub fn channels(self) -> usize {
        match self {
            PreviewColor::Gray => 1,
            PreviewColor::Rgb => 3,
        }
    }
}

/// 8-bit preview image after debayering
#[derive(Debug, Clone)]
pub struct PreviewImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Channel layout of `data`
    pub color: PreviewColor,
    /// Interleaved pixel data, `[R, G, B, R, G, B, ...]` for RGB
    pub data: Vec<u8>,
}
