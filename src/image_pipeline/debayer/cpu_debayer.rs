use std::io::Cursor;

use bayer::{BayerDepth, CFA, Demosaic, RasterDepth, RasterMut};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::debayer::demosaicer::Demosaicer;
use crate::image_pipeline::debayer::types::{BayerOrder, PreviewColor, PreviewImage};

/// Bilinear demosaic on the CPU, backed by the `bayer` crate.
pub struct CpuDebayer;

impl CpuDebayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CpuDebayer {
    fn default() -> Self {
        Self::new()
    }
}

fn cfa_for(order: BayerOrder) -> Option<CFA> {
    match order {
        BayerOrder::Bg => Some(CFA::BGGR),
        BayerOrder::Gb => Some(CFA::GBRG),
        BayerOrder::Rg => Some(CFA::RGGB),
        BayerOrder::Gr => Some(CFA::GRBG),
        BayerOrder::Gray => None,
    }
}

impl Demosaicer for CpuDebayer {
    fn demosaic(&self, grid: &[u8], width: usize, height: usize, order: BayerOrder) -> Result<PreviewImage> {
        if width == 0 || height == 0 || grid.len() != width * height {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        let Some(cfa) = cfa_for(order) else {
            debug!("Gray sensor, skipping demosaic for {}x{}", width, height);
            return Ok(PreviewImage {
                width,
                height,
                color: PreviewColor::Gray,
                data: grid.to_vec(),
            });
        };

        // Bilinear interpolation needs at least one full 2x2 CFA tile
        if width < 2 || height < 2 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        debug!("Running demosaic {}x{}, CFA={:?}, algo=Linear", width, height, cfa);

        let mut output_buf = vec![0u8; width * height * 3];
        let mut output_raster = RasterMut::new(width, height, RasterDepth::Depth8, &mut output_buf);
        let mut cursor = Cursor::new(grid);

        bayer::run_demosaic(
            &mut cursor,
            BayerDepth::Depth8,
            cfa,
            Demosaic::Linear,
            &mut output_raster,
        )
        .map_err(|e| ConversionError::DemosaicError(format!("{:?}", e)))?;

        Ok(PreviewImage {
            width,
            height,
            color: PreviewColor::Rgb,
            data: output_buf,
        })
    }
}
