//! In-memory RGBA bitmap types
//!
//! Every stage of the pipeline exchanges images as a [`Bitmap`]: 8-bit RGBA,
//! row-major, origin top-left.

pub mod types;

pub use types::{spread, Bitmap, Pixel, Rect, CHANNELS};
