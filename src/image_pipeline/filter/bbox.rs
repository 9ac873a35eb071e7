//! Bounding box of visible content and cropping

use tracing::{debug, warn};

use crate::image_pipeline::bitmap::{Bitmap, Rect, CHANNELS};
use crate::image_pipeline::common::error::{PipelineError, Result};

/// Smallest rectangle containing every pixel whose alpha is non-zero.
///
/// Returns `None` when the bitmap is empty or fully transparent.
pub fn bounding_box(bitmap: &Bitmap) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;

    for (x, y, px) in bitmap.pixels() {
        if px.is_transparent() {
            continue;
        }
        bounds = Some(match bounds {
            None => Rect::new(x, y, x + 1, y + 1),
            Some(r) => Rect::new(r.x0.min(x), r.y0.min(y), r.x1.max(x + 1), r.y1.max(y + 1)),
        });
    }

    bounds
}

/// Copies `rect` out of `bitmap`.
///
/// Fails with [`PipelineError::InvalidInput`] if the rectangle is inverted or
/// reaches outside the bitmap.
pub fn crop(bitmap: &Bitmap, rect: Rect) -> Result<Bitmap> {
    if rect.x0 > rect.x1 || rect.y0 > rect.y1 {
        return Err(PipelineError::InvalidInput(format!("inverted crop rect {:?}", rect)));
    }
    if rect.x1 > bitmap.width() || rect.y1 > bitmap.height() {
        return Err(PipelineError::InvalidInput(format!(
            "crop rect {:?} outside {}x{} bitmap",
            rect,
            bitmap.width(),
            bitmap.height()
        )));
    }

    let (width, height) = (rect.width(), rect.height());
    let stride = bitmap.stride();
    let row_bytes = width * CHANNELS;
    let mut data = Vec::with_capacity(row_bytes * height);

    for y in rect.y0..rect.y1 {
        let start = y * stride + rect.x0 * CHANNELS;
        data.extend_from_slice(&bitmap.data()[start..start + row_bytes]);
    }

    Bitmap::from_raw(width, height, data)
}

/// Crops to [`bounding_box`]; a fully transparent input yields a 0x0 bitmap.
pub fn crop_to_content(bitmap: &Bitmap) -> Bitmap {
    match bounding_box(bitmap) {
        Some(rect) => {
            debug!("Cropping {}x{} to {:?}", bitmap.width(), bitmap.height(), rect);
            match crop(bitmap, rect) {
                Ok(cropped) => cropped,
                Err(e) => {
                    // bounding_box only returns rects inside the bitmap
                    debug_assert!(false, "bounding box {:?} rejected by crop: {}", rect, e);
                    warn!("Bounding box {:?} rejected by crop: {}; keeping uncropped image", rect, e);
                    bitmap.clone()
                }
            }
        }
        None => {
            debug!("No visible pixels, crop yields empty bitmap");
            Bitmap::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::bitmap::Pixel;

    const RED: Pixel = Pixel::new(220, 30, 30, 255);

    #[test]
    fn test_single_pixel_box() {
        let mut bitmap = Bitmap::filled(4, 4, Pixel::TRANSPARENT);
        bitmap.set_pixel(2, 1, RED).unwrap();

        let rect = bounding_box(&bitmap).unwrap();
        assert_eq!(rect, Rect::new(2, 1, 3, 2));

        let cropped = crop(&bitmap, rect).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (1, 1));
        assert_eq!(cropped.pixel(0, 0), Some(RED));
    }

    #[test]
    fn test_box_spans_all_visible_pixels() {
        let mut bitmap = Bitmap::filled(6, 5, Pixel::TRANSPARENT);
        bitmap.set_pixel(1, 3, RED).unwrap();
        bitmap.set_pixel(4, 1, Pixel::new(0, 0, 0, 1)).unwrap();

        assert_eq!(bounding_box(&bitmap), Some(Rect::new(1, 1, 5, 4)));

        let cropped = crop_to_content(&bitmap);
        assert_eq!((cropped.width(), cropped.height()), (4, 3));
        assert_eq!(cropped.pixel(0, 2), Some(RED));
        assert_eq!(cropped.pixel(3, 0), Some(Pixel::new(0, 0, 0, 1)));
        assert_eq!(cropped.pixel(0, 0), Some(Pixel::TRANSPARENT));
    }

    #[test]
    fn test_all_transparent_has_no_box() {
        let bitmap = Bitmap::filled(3, 3, Pixel::TRANSPARENT);
        assert_eq!(bounding_box(&bitmap), None);
        assert_eq!(bounding_box(&Bitmap::empty()), None);

        let cropped = crop_to_content(&bitmap);
        assert!(cropped.is_empty());
    }

    #[test]
    fn test_crop_rejects_bad_rects() {
        let bitmap = Bitmap::filled(4, 4, RED);
        assert!(matches!(
            crop(&bitmap, Rect::new(2, 0, 5, 1)),
            Err(PipelineError::InvalidInput(_))
        ));
        assert!(matches!(
            crop(&bitmap, Rect::new(3, 0, 1, 1)),
            Err(PipelineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_crop_full_and_empty_rect() {
        let bitmap = Bitmap::filled(4, 2, RED);
        assert_eq!(crop(&bitmap, Rect::new(0, 0, 4, 2)).unwrap(), bitmap);

        let none = crop(&bitmap, Rect::new(1, 1, 1, 1)).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_crop_to_content_never_drops_visible_pixels() {
        for (w, h) in [(1, 1), (7, 3), (4, 9)] {
            for (x, y) in [(0, 0), (w - 1, h - 1), (w / 2, h / 2)] {
                let mut bitmap = Bitmap::filled(w, h, Pixel::TRANSPARENT);
                bitmap.set_pixel(x, y, RED).unwrap();

                let rect = bounding_box(&bitmap).unwrap();
                let cropped = crop_to_content(&bitmap);
                assert!(!cropped.is_empty());
                assert_eq!(cropped, crop(&bitmap, rect).unwrap());
                assert_eq!(cropped.pixel(0, 0), Some(RED));
            }
        }
    }
}
