//! Packed RAW reading module
//!
//! Turns the bytes of a sensor dump into a single-channel sample grid.

mod reader;
mod mipi_reader;
pub mod types;

pub use reader::RawImageReader;
pub use mipi_reader::MipiRawReader;
pub use types::{PassthroughPolicy, RawImageData};
