//! Color sampling for the color panel

use crate::image_pipeline::bitmap::{Bitmap, Pixel};

/// Height of the color panel bar under the image.
pub const SWATCH_HEIGHT: usize = 20;

/// Returns the source pixel under `(view_x, view_y)` in a view that stretches
/// `bitmap` to `view_width x view_height`, ignoring aspect ratio.
pub fn sample_view(
    bitmap: &Bitmap,
    view_width: usize,
    view_height: usize,
    view_x: usize,
    view_y: usize,
) -> Option<Pixel> {
    if view_x >= view_width || view_y >= view_height || bitmap.is_empty() {
        return None;
    }
    let x = view_x * bitmap.width() / view_width;
    let y = view_y * bitmap.height() / view_height;
    bitmap.pixel(x, y)
}

/// Solid bar of `pixel`, the content of the color panel.
pub fn swatch(pixel: Pixel, width: usize, height: usize) -> Bitmap {
    Bitmap::filled(width, height, pixel)
}
