//! Reader for MIPI CSI-2 packed dumps.
//!
//! A dump carries no header: geometry and depth come from the caller, and the bytes
//! are handed straight to the unpack codec.

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::{PassthroughPolicy, RawImageData};
use crate::image_pipeline::unpack::{self, BitDepth};

/// Decodes headerless packed sensor dumps of a known size and depth.
#[derive(Debug, Clone)]
pub struct MipiRawReader {
    pub width: usize,
    pub height: usize,
    pub depth: BitDepth,
    pub passthrough: PassthroughPolicy,
}

impl MipiRawReader {
    pub fn new(width: usize, height: usize, depth: BitDepth) -> Self {
        Self {
            width,
            height,
            depth,
            passthrough: PassthroughPolicy::default(),
        }
    }

    pub fn with_passthrough(mut self, passthrough: PassthroughPolicy) -> Self {
        self.passthrough = passthrough;
        self
    }

    fn read_unpacked(&self, data: &[u8]) -> Vec<u16> {
        match self.depth {
            BitDepth::Raw16 => {
                if data.len() % 2 != 0 {
                    warn!("Dropping 1 trailing byte of RAW16 input");
                }
                data.chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect()
            }
            _ => data.iter().map(|&b| u16::from(b)).collect(),
        }
    }
}

impl RawImageReader for MipiRawReader {
    /// Unpacks `data` according to the configured depth.
    ///
    /// A partial trailing group is dropped with a warning. RAW8/RAW16 input fails
    /// with [`ConversionError::UnsupportedOperation`] unless the passthrough policy
    /// is [`PassthroughPolicy::Copy`].
    fn read_raw(&self, data: &[u8]) -> Result<RawImageData> {
        debug!("Unpacking {} bytes as {}", data.len(), self.depth);

        let samples = if self.depth.is_packed() {
            let trailing = unpack::trailing_bytes(data.len(), self.depth);
            if trailing > 0 {
                warn!(
                    "Input length {} is not a multiple of the {} group size, dropping {} trailing bytes",
                    data.len(),
                    self.depth,
                    trailing
                );
            }
            unpack::unpack(data, self.depth)?
        } else {
            match self.passthrough {
                PassthroughPolicy::Skip => {
                    return Err(ConversionError::UnsupportedOperation(self.depth));
                }
                PassthroughPolicy::Copy => self.read_unpacked(data),
            }
        };

        debug!("Unpacked {} samples", samples.len());

        Ok(RawImageData {
            width: self.width,
            height: self.height,
            data: samples,
            depth: self.depth,
        })
    }
}
