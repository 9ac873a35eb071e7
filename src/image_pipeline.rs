//! Image processing pipeline module
//!
//! Grabs an image, makes its near-gray background transparent and hands the
//! result to an encoder. Sources, filters and writers live in separate
//! modules and are wired together by [`BackgroundRemovalPipeline`].

pub mod bitmap;
pub mod common;
pub mod conversions;
pub mod filter;
pub mod output;
pub mod overlay;
pub mod source;

pub use bitmap::{Bitmap, Pixel, Rect};

pub use common::{
    PipelineError,
    Result,
};

pub use filter::{
    FilterConfig,
    Resampling,
    bounding_box,
    crop,
    crop_to_content,
    remove_background,
    resize,
    sample_view,
    swatch,
};

pub use source::{
    ImageSource,
    FileSource,
    MemorySource,
    ClipboardSource,
};

pub use output::{
    BitmapWriter,
    FormatWriter,
    OutputFormat,
    PipelineConfig,
    PipelineConfigBuilder,
    PngWriter,
    TiffCompression,
    TiffWriter,
};

pub use conversions::{
    BackgroundRemovalPipeline,
    PipelineTimings,
};
