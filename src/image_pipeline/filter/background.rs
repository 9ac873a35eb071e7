//! Background transparency filter.
//!
//! Classifies every pixel by its spread (`max(r,g,b) - min(r,g,b)`):
//! - spread below the threshold: near-neutral gray, white or black. Becomes
//!   `(0, 0, 0, 0)`, color channels included.
//! - otherwise: keeps its color, alpha forced to the configured opacity.
//!
//! Rows are independent and are processed in parallel.

use rayon::prelude::*;
use tracing::debug;

use crate::image_pipeline::bitmap::{spread, Bitmap, CHANNELS};
use crate::image_pipeline::filter::types::FilterConfig;

/// Returns a new bitmap with the background made transparent.
///
/// # Arguments
/// * `bitmap` - Source image, left untouched
/// * `config` - Threshold and foreground opacity
///
/// # Returns
/// Bitmap of identical dimensions
pub fn remove_background(bitmap: &Bitmap, config: &FilterConfig) -> Bitmap {
    let mut output = bitmap.clone();
    remove_background_in_place(&mut output, config);
    output
}

/// In-place variant of [`remove_background`].
pub fn remove_background_in_place(bitmap: &mut Bitmap, config: &FilterConfig) {
    if bitmap.is_empty() {
        return;
    }

    debug!(
        "Removing background: {}x{}, threshold={}, opacity={}",
        bitmap.width(),
        bitmap.height(),
        config.threshold,
        config.opacity
    );

    let stride = bitmap.stride();
    let FilterConfig { threshold, opacity } = *config;

    bitmap
        .data_mut()
        .par_chunks_exact_mut(stride)
        .for_each(|row| {
            for px in row.chunks_exact_mut(CHANNELS) {
                if spread(px[0], px[1], px[2]) < threshold {
                    px.fill(0);
                } else {
                    px[3] = opacity;
                }
            }
        });
}
