use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use jigsaw_helper_rs::image_pipeline::{
    BackgroundRemovalPipeline, Bitmap, ClipboardSource, FileSource, ImageSource, OutputFormat,
    PipelineConfig, Resampling, TiffCompression, sample_view,
};
use jigsaw_helper_rs::logger;

use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "jigsaw_helper", about = "Strip the gray background from a screenshot for overlay viewing")]
struct Args {
    /// Image file to process
    #[arg(long, conflicts_with = "clipboard", required_unless_present = "clipboard")]
    input: Option<PathBuf>,

    /// Grab the image from the clipboard instead of a file
    #[arg(long)]
    clipboard: bool,

    /// Where to write the processed image
    #[arg(long, short, default_value = "overlay.png")]
    output: PathBuf,

    /// Minimum max(r,g,b) - min(r,g,b) for a pixel to be kept
    #[arg(long, default_value_t = 3)]
    threshold: u8,

    /// Alpha given to kept pixels
    #[arg(long, default_value_t = 255)]
    opacity: u8,

    /// Crop to the visible content
    #[arg(long)]
    crop: bool,

    /// Integer upscale applied after filtering (1 disables)
    #[arg(long, default_value_t = 2)]
    resize_factor: u32,

    /// Upscale resampling: nearest or lanczos
    #[arg(long, default_value = "nearest")]
    resampling: Resampling,

    /// Output format: png or tiff
    #[arg(long, default_value = "png")]
    format: OutputFormat,

    /// TIFF compression: none, lzw, deflate-fast, deflate, deflate-best
    #[arg(long, default_value = "none")]
    compression: TiffCompression,

    /// TIFF predictor: 1 (none) or 2 (horizontal differencing)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=2))]
    predictor: Option<u16>,

    /// Print the processed pixel at X,Y as #rrggbbaa
    #[arg(long, value_parser = parse_point)]
    sample: Option<(usize, usize)>,

    /// Log per-step durations
    #[arg(long)]
    timings: bool,
}

fn parse_point(s: &str) -> Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let parse = |v: &str| v.trim().parse::<usize>().map_err(|e| format!("'{}': {}", v, e));
    Ok((parse(x)?, parse(y)?))
}

/// Hex color of the processed pixel at `(x, y)`.
fn sample_hex(bitmap: &Bitmap, (x, y): (usize, usize)) -> anyhow::Result<String> {
    match sample_view(bitmap, bitmap.width(), bitmap.height(), x, y) {
        Some(pixel) => Ok(pixel.to_hex()),
        None => bail!("sample point ({}, {}) outside {}x{} image", x, y, bitmap.width(), bitmap.height()),
    }
}

fn run<S: ImageSource>(source: S, args: &Args, config: PipelineConfig) -> anyhow::Result<()> {
    let pipeline = BackgroundRemovalPipeline::new(source, config);

    let (bitmap, timings) = pipeline
        .process_timed()
        .with_context(|| format!("processing {}", pipeline.source().describe()))?;

    if let Some(point) = args.sample {
        println!("{}", sample_hex(&bitmap, point)?);
    }

    if bitmap.is_empty() {
        warn!("Nothing left after background removal, no output written");
        return Ok(());
    }

    pipeline
        .write_to_file(&bitmap, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if args.timings {
        timings.log_summary();
    }

    info!(
        output = %args.output.display(),
        width = bitmap.width(),
        height = bitmap.height(),
        "Done"
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let args = Args::parse();

    info!("Starting jigsaw_helper...");

    let config = PipelineConfig::builder()
        .threshold(args.threshold)
        .opacity(args.opacity)
        .crop(args.crop)
        .resize_factor(args.resize_factor)
        .resampling(args.resampling)
        .format(args.format)
        .compression(args.compression)
        .predictor(args.predictor)
        .build();

    info!("Threshold: {}, opacity: {}", config.filter.threshold, config.filter.opacity);
    info!(
        "Cropping: {}",
        if config.crop {
            "enabled"
        } else {
            "disabled"
        }
    );

    match &args.input {
        Some(path) => run(FileSource::new(path), &args, config),
        None => run(ClipboardSource, &args, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jigsaw_helper_rs::image_pipeline::Pixel;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4"), Ok((3, 4)));
        assert_eq!(parse_point(" 1, 2 "), Ok((1, 2)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("1,-2").is_err());
        assert!(parse_point("1,2,3").is_err());
    }

    #[test]
    fn test_sample_hex() {
        let mut bitmap = Bitmap::filled(3, 2, Pixel::TRANSPARENT);
        bitmap.set_pixel(2, 1, Pixel::new(220, 20, 20, 255)).unwrap();

        assert_eq!(sample_hex(&bitmap, (2, 1)).unwrap(), "#dc1414ff");
        assert_eq!(sample_hex(&bitmap, (0, 0)).unwrap(), "#00000000");

        let err = sample_hex(&bitmap, (3, 1)).unwrap_err();
        assert!(err.to_string().contains("outside 3x2 image"));
        assert!(sample_hex(&Bitmap::empty(), (0, 0)).is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "jigsaw_helper", "--input", "piece.png", "--sample", "4,5",
            "--format", "tiff", "--predictor", "2", "--resampling", "lanczos",
        ])
        .unwrap();
        assert_eq!(args.sample, Some((4, 5)));
        assert_eq!(args.format, OutputFormat::Tiff);
        assert_eq!(args.predictor, Some(2));
        assert_eq!(args.resampling, Resampling::Lanczos);

        let args = Args::try_parse_from(["jigsaw_helper", "--clipboard"]).unwrap();
        assert_eq!(args.resampling, Resampling::Nearest);
        assert_eq!(args.predictor, None);

        assert!(Args::try_parse_from(["jigsaw_helper", "--input", "a.png", "--sample", "3"]).is_err());
        assert!(Args::try_parse_from(["jigsaw_helper", "--input", "a.png", "--predictor", "3"]).is_err());
        assert!(Args::try_parse_from(["jigsaw_helper"]).is_err());
    }
}
