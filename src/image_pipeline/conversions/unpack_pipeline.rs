use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    conversions::timing::PipelineTimings,
    conversions::types::ConversionConfig,
    debayer::{BayerOrder, CpuDebayer, Demosaicer, PreviewImage},
    preview::{JpegPreviewEncoder, PreviewEncoder},
    raw::{MipiRawReader, RawImageData, RawImageReader},
    tiff::{StandardTiffWriter, TiffWriter},
    unpack::{self, BitDepth},
};

/// Appended to the input file stem for every output file.
pub const UNPACKED_SUFFIX: &str = "_unpack";

/// `dir/name.raw` -> `dir/name_unpack.<extension>`
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}.{}", stem, UNPACKED_SUFFIX, extension))
}

/// Files written for one converted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFiles {
    pub unpacked: PathBuf,
    pub preview: Option<PathBuf>,
    pub tiff: Option<PathBuf>,
    /// Number of samples in the `_unpack.raw` output
    pub samples: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Converted(ConvertedFiles),
    /// Input was byte aligned and the passthrough policy said to leave it alone.
    Skipped(BitDepth),
}

/// Converts a single packed file on disk.
pub trait FileConverter {
    fn convert_file(&self, input_path: &Path) -> Result<ConversionOutcome>;
}

pub struct UnpackPipeline<R: RawImageReader, D: Demosaicer, E: PreviewEncoder, W: TiffWriter> {
    reader: R,
    demosaicer: D,
    encoder: E,
    tiff_writer: W,
    config: ConversionConfig,
}

impl UnpackPipeline<MipiRawReader, CpuDebayer, JpegPreviewEncoder, StandardTiffWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: MipiRawReader::new(config.width, config.height, config.depth)
                .with_passthrough(config.passthrough),
            demosaicer: CpuDebayer::new(),
            encoder: JpegPreviewEncoder::new(config.jpeg_quality),
            tiff_writer: StandardTiffWriter,
            config,
        }
    }
}

impl<R: RawImageReader, D: Demosaicer, E: PreviewEncoder, W: TiffWriter> UnpackPipeline<R, D, E, W> {
    pub fn with_custom(reader: R, demosaicer: D, encoder: E, tiff_writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            demosaicer,
            encoder,
            tiff_writer,
            config,
        }
    }

    fn validate_dimensions(&self, image: &RawImageData) -> Result<()> {
        if !self.config.validate_dimensions {
            if !image.is_complete() {
                warn!(
                    "Unpacked {} samples but {}x{} needs {}, grid outputs will be cut or zero-padded",
                    image.data.len(),
                    image.width,
                    image.height,
                    image.pixel_count()
                );
            }
            return Ok(());
        }

        if image.width == 0 || image.height == 0 {
            return Err(ConversionError::InvalidDimensions(image.width, image.height));
        }

        if !image.is_complete() {
            return Err(ConversionError::DimensionMismatch {
                expected: image.pixel_count(),
                actual: image.data.len(),
            });
        }

        Ok(())
    }

    /// Unpacks an in-memory dump and checks it against the configured geometry.
    pub fn unpack(&self, input_data: &[u8], timings: &mut PipelineTimings) -> Result<RawImageData> {
        let image = timings.time("unpack", || self.reader.read_raw(input_data))?;

        if let Some(elapsed) = timings.get_step("unpack") {
            info!(
                "Unpacked {} samples ({}) in {:.3}ms",
                image.data.len(),
                image.depth,
                elapsed.as_secs_f64() * 1000.0
            );
        }

        self.validate_dimensions(&image)?;
        Ok(image)
    }

    /// Writes samples verbatim as native-endian `u16`.
    pub fn write_unpacked(&self, image: &RawImageData, output: &mut dyn Write) -> Result<()> {
        output.write_all(&image.to_ne_bytes())?;
        Ok(())
    }

    /// Unpacks `input_data` and writes the samples to `output`.
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<RawImageData> {
        let mut timings = PipelineTimings::new();
        let image = self.unpack(input_data, &mut timings)?;
        self.write_unpacked(&image, output)?;
        Ok(image)
    }

    /// Scales the grid to 8 bit and demosaics it for `order`.
    pub fn render_preview(&self, image: &RawImageData, order: BayerOrder) -> Result<PreviewImage> {
        let grid = image.grid_samples();
        let scaled = unpack::scale_samples(&grid, image.depth);
        self.demosaicer.demosaic(&scaled, image.width, image.height, order)
    }

    #[instrument(skip_all, fields(input = %input_path.display()))]
    pub fn convert_file_with_timings(&self, input_path: &Path) -> Result<(ConversionOutcome, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        info!("Processing {}", input_path.display());

        let input_data = timings
            .time("read_input_file", || std::fs::read(input_path))
            .map_err(|e| ConversionError::InputReadError(format!("{}: {}", input_path.display(), e)))?;
        info!("Packed file size: {} bytes", input_data.len());

        let image = match self.unpack(&input_data, &mut timings) {
            Ok(image) => image,
            Err(ConversionError::UnsupportedOperation(depth)) => {
                warn!("{} input needs no unpacking, skipping {}", depth, input_path.display());
                return Ok((ConversionOutcome::Skipped(depth), timings));
            }
            Err(e) => return Err(e),
        };

        // Grid outputs are encoded in memory first so a failing preview or TIFF
        // leaves no partial outputs behind.
        let tiff_bytes = match &self.config.tiff {
            Some(settings) => {
                let mut buffer = Vec::new();
                timings.time("encode_tiff", || self.tiff_writer.write_tiff(&image, &mut buffer, settings))?;
                Some(buffer)
            }
            None => None,
        };

        let preview_bytes = match self.config.bayer {
            Some(order) => {
                let preview = timings.time("demosaic", || self.render_preview(&image, order))?;
                let mut buffer = Vec::new();
                timings.time("encode_preview", || self.encoder.encode(&preview, &mut buffer))?;
                Some((order, buffer))
            }
            None => None,
        };

        let unpacked = output_path(input_path, "raw");
        timings.time("write_unpacked", || {
            write_output(&unpacked, |output| self.write_unpacked(&image, output))
        })?;
        info!("Wrote {}", unpacked.display());

        let tiff = match tiff_bytes {
            Some(bytes) => {
                let path = output_path(input_path, "tiff");
                timings.time("write_tiff", || {
                    write_output(&path, |output| Ok(output.write_all(&bytes)?))
                })?;
                info!("Wrote {}", path.display());
                Some(path)
            }
            None => None,
        };

        let preview = match preview_bytes {
            Some((order, bytes)) => {
                let path = output_path(input_path, self.encoder.extension());
                timings.time("write_preview", || {
                    write_output(&path, |output| Ok(output.write_all(&bytes)?))
                })?;
                info!("Wrote {} ({})", path.display(), order);
                Some(path)
            }
            None => None,
        };

        timings.log_summary();

        let files = ConvertedFiles {
            unpacked,
            preview,
            tiff,
            samples: image.data.len(),
        };
        Ok((ConversionOutcome::Converted(files), timings))
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}

impl<R: RawImageReader, D: Demosaicer, E: PreviewEncoder, W: TiffWriter> FileConverter for UnpackPipeline<R, D, E, W> {
    fn convert_file(&self, input_path: &Path) -> Result<ConversionOutcome> {
        self.convert_file_with_timings(input_path)
            .map(|(outcome, _)| outcome)
    }
}

/// Creates `path`, runs `write` against it and flushes, tagging I/O failures with the path.
fn write_output(path: &Path, write: impl FnOnce(&mut dyn Write) -> Result<()>) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| ConversionError::OutputWriteError(format!("{}: {}", path.display(), e)))?;
    let mut output = BufWriter::new(file);

    match write(&mut output) {
        Err(ConversionError::IoError(e)) => {
            return Err(ConversionError::OutputWriteError(format!("{}: {}", path.display(), e)));
        }
        other => other?,
    }

    output
        .flush()
        .map_err(|e| ConversionError::OutputWriteError(format!("{}: {}", path.display(), e)))
}
