//! Unpacking of MIPI CSI-2 packed raw sensor dumps.
//!
//! The [`image_pipeline::unpack`] module holds the bit-exact RAW10/RAW12/RAW14 codec;
//! everything else in [`image_pipeline`] wires it up to files, previews and batches.

pub mod image_pipeline;
pub mod logger;
