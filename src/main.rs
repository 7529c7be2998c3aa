use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{ArgGroup, Parser};
use mipi_unpack::image_pipeline::{
    BatchConfig, BatchRunner, BayerOrder, BitDepth, ConversionConfig, ConversionOutcome, ErrorPolicy,
    FileConverter, PassthroughPolicy, TiffCompression, TiffSettings, UnpackPipeline,
};
use mipi_unpack::logger;

use tracing::{error, info};

/// Unpack MIPI CSI-2 packed raw dumps (RAW10/12/14) into 16-bit samples
#[derive(Parser, Debug)]
#[command(name = "mipi-unpack", version, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["path", "file"])))]
struct Args {
    /// Directory whose .raw files are converted
    #[arg(long)]
    path: Option<PathBuf>,

    /// Single packed raw file to convert
    #[arg(long)]
    file: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: usize,

    /// Image height in pixels
    #[arg(long)]
    height: usize,

    /// Sample bit depth [8, 10, 12, 14, 16]
    #[arg(long, value_parser = parse_depth)]
    depth: BitDepth,

    /// Sensor layout for the JPEG preview [bayer_bg, bayer_gb, bayer_rg, bayer_gr, gray].
    /// Names the first two pixels of row 0, so bayer_rg is RGGB (OpenCV calls it BayerBG)
    #[arg(long, value_parser = parse_bayer)]
    bayer: Option<BayerOrder>,

    /// Also write a 16-bit TIFF [none, lzw, deflate-fast, deflate, deflate-best]
    #[arg(long, value_parser = parse_tiff)]
    tiff: Option<TiffCompression>,

    /// Use horizontal differencing in the TIFF output
    #[arg(long, default_value_t = false, requires = "tiff")]
    tiff_predictor: bool,

    /// JPEG preview quality (1-100)
    #[arg(long, default_value_t = 90)]
    quality: u8,

    /// Treat 8/16-bit input as already unpacked instead of skipping it
    #[arg(long, default_value_t = false)]
    copy_unpacked: bool,

    /// Accept files whose sample count differs from width*height
    #[arg(long, default_value_t = false)]
    no_validate: bool,

    /// Stop a directory run at the first failing file
    #[arg(long, default_value_t = false)]
    fail_fast: bool,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn parse_depth(s: &str) -> Result<BitDepth, String> {
    s.parse::<BitDepth>().map_err(|e| e.to_string())
}

fn parse_bayer(s: &str) -> Result<BayerOrder, String> {
    s.parse::<BayerOrder>().map_err(|e| e.to_string())
}

fn parse_tiff(s: &str) -> Result<TiffCompression, String> {
    s.parse::<TiffCompression>()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init(args.verbose);

    run(args)
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ConversionConfig::builder(args.width, args.height, args.depth)
        .bayer(args.bayer)
        .passthrough(if args.copy_unpacked {
            PassthroughPolicy::Copy
        } else {
            PassthroughPolicy::Skip
        })
        .validate_dimensions(!args.no_validate)
        .jpeg_quality(args.quality)
        .tiff(args.tiff.map(|compression| TiffSettings {
            compression,
            predictor: args.tiff_predictor,
        }))
        .build();

    info!(
        "Unpacking {}x{} {}, preview: {}",
        config.width,
        config.height,
        config.depth,
        config.bayer.map_or("disabled".to_string(), |order| order.to_string())
    );

    let pipeline = UnpackPipeline::new(config);

    if let Some(dir) = args.path {
        let batch_config = BatchConfig {
            on_error: if args.fail_fast {
                ErrorPolicy::Abort
            } else {
                ErrorPolicy::Continue
            },
            ..BatchConfig::default()
        };
        let report = BatchRunner::new(pipeline, batch_config)
            .run(&dir)
            .with_context(|| format!("batch conversion of {} failed", dir.display()))?;
        if !report.is_success() {
            for (path, e) in &report.failed {
                error!("{}: {}", path.display(), e);
            }
            bail!("{} of {} files failed", report.failed.len(), report.total());
        }
    } else if let Some(file) = args.file {
        match pipeline
            .convert_file(&file)
            .with_context(|| format!("conversion of {} failed", file.display()))?
        {
            ConversionOutcome::Converted(files) => {
                info!("Done: {} samples -> {}", files.samples, files.unpacked.display());
            }
            ConversionOutcome::Skipped(depth) => info!("Nothing to do for {} input", depth),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("mipi-unpack").chain(args.iter().copied()))
    }

    /// Temp dir holding one 4x1 RAW10 frame.
    fn setup() -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("frame.raw");
        std::fs::write(&input, [0xFFu8; 5]).unwrap();
        let input = input.to_str().unwrap().to_string();
        (dir, input)
    }

    fn file_names(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_depth_10_converts() {
        let (dir, input) = setup();
        let args = parse(&["--file", input.as_str(), "--width", "4", "--height", "1", "--depth", "10"]).unwrap();
        run(args).unwrap();
        assert_eq!(file_names(&dir), ["frame.raw", "frame_unpack.raw"]);
    }

    #[test]
    fn test_rejected_arguments_write_nothing() {
        let (dir, input) = setup();
        let path = dir.path().to_str().unwrap();
        let geometry = ["--width", "4", "--height", "1"];
        let cases: Vec<Vec<&str>> = vec![
            vec!["--file", input.as_str(), "--depth", "11"],
            vec!["--file", input.as_str(), "--depth", "ten"],
            vec!["--file", input.as_str(), "--depth", "10", "--bayer", "bayer_xx"],
            vec!["--depth", "10"],
            vec!["--path", path, "--file", input.as_str(), "--depth", "10"],
        ];
        for case in cases {
            let argv: Vec<&str> = case.iter().chain(geometry.iter()).copied().collect();
            assert!(parse(&argv).is_err(), "{argv:?}");
        }
        assert_eq!(file_names(&dir), ["frame.raw"]);
    }

    #[test]
    fn test_parse_errors_name_the_value() {
        let (_dir, input) = setup();
        let with_depth = |depth: &str| {
            parse(&["--file", input.as_str(), "--width", "4", "--height", "1", "--depth", depth])
                .unwrap_err()
                .to_string()
        };
        let err = with_depth("11");
        assert!(err.contains("Unsupported bit depth: 11"), "{err}");
        let err = with_depth("ten");
        assert!(err.contains("'ten'"), "{err}");

        let err = parse(&["--file", input.as_str(), "--width", "4", "--height", "1", "--depth", "10", "--bayer", "bayer_xx"])
            .unwrap_err()
            .to_string();
        assert!(err.contains("bayer_xx"), "{err}");
    }

    #[test]
    fn test_tiff_predictor_flag() {
        let (dir, input) = setup();
        let base = ["--file", input.as_str(), "--width", "4", "--height", "1", "--depth", "10"];

        let mut argv = base.to_vec();
        argv.extend(["--tiff", "lzw", "--tiff-predictor"]);
        let args = parse(&argv).unwrap();
        assert!(args.tiff_predictor);
        run(args).unwrap();
        assert_eq!(file_names(&dir), ["frame.raw", "frame_unpack.raw", "frame_unpack.tiff"]);

        // No TIFF output to apply it to
        let mut argv = base.to_vec();
        argv.push("--tiff-predictor");
        assert!(parse(&argv).is_err());
    }
}
