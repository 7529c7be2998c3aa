use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::types::{BayerOrder, PreviewImage};

/// Colour reconstruction of an 8-bit single-channel sensor grid.
pub trait Demosaicer {
    /// `grid` is row-major and holds exactly `width * height` samples.
    fn demosaic(&self, grid: &[u8], width: usize, height: usize, order: BayerOrder) -> Result<PreviewImage>;
}
