//! MIPI CSI-2 packed raw codec
//!
//! Bit-exact expansion of RAW10/RAW12/RAW14 packed groups into `u16` samples, and
//! the right-shift scaler used for 8-bit previews. Nothing in here touches files
//! or image libraries.

mod unpacker;
mod scaler;
pub mod types;

pub use unpacker::{trailing_bytes, unpack, unpack_bits, unpack_raw10, unpack_raw12, unpack_raw14};
pub use scaler::{scale_samples, scale_to_u8};
pub use types::{BitDepth, GroupLayout};
