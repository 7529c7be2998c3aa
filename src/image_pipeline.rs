//! Image processing pipeline module
//!
//! The packed-raw codec lives in [`unpack`]; the remaining modules read dumps, write
//! unpacked and TIFF outputs, render previews and orchestrate file and directory runs.

pub mod unpack;
pub mod raw;
pub mod debayer;
pub mod preview;
pub mod tiff;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use unpack::BitDepth;

pub use raw::{
    MipiRawReader,
    PassthroughPolicy,
    RawImageData,
    RawImageReader,
};

pub use debayer::{
    BayerOrder,
    CpuDebayer,
    Demosaicer,
    PreviewImage,
};

pub use preview::{
    JpegPreviewEncoder,
    PreviewEncoder,
};

pub use self::tiff::{
    StandardTiffWriter,
    TiffCompression,
    TiffSettings,
    TiffWriter,
};

pub use conversions::{
    BatchConfig,
    BatchReport,
    BatchRunner,
    ConversionConfig,
    ConversionConfigBuilder,
    ConversionOutcome,
    ErrorPolicy,
    FileConverter,
    UnpackPipeline,
};
