//! Pipeline conversions module
//!
//! Orchestration of file and directory conversions on top of the unpack codec.

mod batch;
mod timing;
mod types;
mod unpack_pipeline;


pub use batch::{BatchReport, BatchRunner, is_raw_file_name};
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{BatchConfig, ConversionConfig, ConversionConfigBuilder, ErrorPolicy};
pub use unpack_pipeline::{
    ConversionOutcome, ConvertedFiles, FileConverter, UNPACKED_SUFFIX, UnpackPipeline, output_path,
};
