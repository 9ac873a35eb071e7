//! Output writing module
//!
//! This module encodes processed bitmaps to PNG or TIFF and holds the
//! pipeline configuration types.

mod writer;
mod png_writer;
mod tiff_writer;
mod format_writer;
pub mod types;

pub use writer::BitmapWriter;
pub use png_writer::PngWriter;
pub use tiff_writer::TiffWriter;
pub use format_writer::FormatWriter;
pub use types::{OutputFormat, PipelineConfig, PipelineConfigBuilder, TiffCompression};
