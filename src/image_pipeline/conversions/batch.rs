//! Directory runs over every `.raw` file in a folder.

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::types::{BatchConfig, ErrorPolicy};
use crate::image_pipeline::conversions::unpack_pipeline::{ConversionOutcome, FileConverter, UNPACKED_SUFFIX};

/// Per-file results of a directory run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ConversionError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.skipped.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// `.raw` suffix, any case.
pub fn is_raw_file_name(name: &str) -> bool {
    name.len() >= 4
        && name
            .get(name.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".raw"))
}

fn is_unpacked_output(name: &str) -> bool {
    let suffix = format!("{}.raw", UNPACKED_SUFFIX);
    name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(&suffix))
}

pub struct BatchRunner<C: FileConverter> {
    converter: C,
    config: BatchConfig,
}

impl<C: FileConverter> BatchRunner<C> {
    pub fn new(converter: C, config: BatchConfig) -> Self {
        Self { converter, config }
    }

    /// `.raw` files of `dir`, in the order the file system lists them.
    ///
    /// The listing is taken once up front, so outputs written during the run are
    /// never picked up as inputs.
    pub fn collect_inputs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| ConversionError::InputReadError(format!("{}: {}", dir.display(), e)))?;

        let mut inputs = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !is_raw_file_name(&name) {
                continue;
            }
            if self.config.skip_unpacked_outputs && is_unpacked_output(&name) {
                info!("Ignoring earlier output {}", path.display());
                continue;
            }
            inputs.push(path);
        }
        Ok(inputs)
    }

    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn run(&self, dir: &Path) -> Result<BatchReport> {
        let inputs = self.collect_inputs(dir)?;
        info!("Found {} raw files in {}", inputs.len(), dir.display());

        let mut report = BatchReport::default();
        for path in inputs {
            match self.converter.convert_file(&path) {
                Ok(ConversionOutcome::Converted(_)) => report.converted.push(path),
                Ok(ConversionOutcome::Skipped(_)) => report.skipped.push(path),
                Err(e) => match self.config.on_error {
                    ErrorPolicy::Abort => {
                        error!("Failed to convert {}: {}, aborting batch", path.display(), e);
                        return Err(e);
                    }
                    ErrorPolicy::Continue => {
                        error!("Failed to convert {}: {}", path.display(), e);
                        report.failed.push((path, e));
                    }
                },
            }
        }

        if report.is_success() {
            info!(
                "Batch complete: {} converted, {} skipped",
                report.converted.len(),
                report.skipped.len()
            );
        } else {
            warn!(
                "Batch complete: {} converted, {} skipped, {} failed",
                report.converted.len(),
                report.skipped.len(),
                report.failed.len()
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_file_names() {
        assert!(is_raw_file_name("frame.raw"));
        assert!(is_raw_file_name("FRAME.RAW"));
        assert!(is_raw_file_name("frame.Raw"));
        assert!(is_raw_file_name(".raw"));
        assert!(!is_raw_file_name("frame.raw.bak"));
        assert!(!is_raw_file_name("frame.jpg"));
        assert!(!is_raw_file_name("raw"));
        assert!(!is_raw_file_name("ключ"));
    }

    #[test]
    fn test_unpacked_output_names() {
        assert!(is_unpacked_output("frame_unpack.raw"));
        assert!(is_unpacked_output("frame_UNPACK.RAW"));
        assert!(!is_unpacked_output("frame.raw"));
        assert!(!is_unpacked_output("unpack.raw"));
    }
}
