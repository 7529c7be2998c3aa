//! TIFF writing module
//!
//! Writes unpacked sample grids as single-channel 16-bit TIFF files.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::TiffWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{TiffCompression, TiffSettings};
