//! Preview encoding module
//!
//! Encodes 8-bit preview images produced by the debayer step.

mod encoder;
mod jpeg_encoder;

pub use encoder::PreviewEncoder;
pub use jpeg_encoder::{JpegPreviewEncoder, DEFAULT_JPEG_QUALITY};
