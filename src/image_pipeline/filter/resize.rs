//! Integer upscaling

use image::imageops::{self, FilterType};
use tracing::debug;

use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::filter::types::Resampling;

/// Scales both dimensions by `factor`.
///
/// A factor of 1 returns an unchanged copy. Empty bitmaps pass through.
pub fn resize(bitmap: &Bitmap, factor: u32, resampling: Resampling) -> Result<Bitmap> {
    if factor == 0 {
        return Err(PipelineError::InvalidInput("resize factor must be at least 1".to_string()));
    }
    if factor == 1 || bitmap.is_empty() {
        return Ok(bitmap.clone());
    }

    let (width, height) = (bitmap.width(), bitmap.height());
    let scaled = |v: usize| {
        u32::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(factor))
            .ok_or(PipelineError::InvalidDimensions(width, height))
    };
    let (new_width, new_height) = (scaled(width)?, scaled(height)?);

    debug!("Resizing {}x{} -> {}x{} ({:?})", width, height, new_width, new_height, resampling);

    let filter = match resampling {
        Resampling::Nearest => FilterType::Nearest,
        Resampling::Lanczos => FilterType::Lanczos3,
    };

    let source: image::RgbaImage = bitmap.clone().try_into()?;
    let resized = imageops::resize(&source, new_width, new_height, filter);

    Ok(Bitmap::from(resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::bitmap::Pixel;

    #[test]
    fn test_doubles_dimensions() {
        let bitmap = Bitmap::filled(3, 2, Pixel::new(10, 200, 30, 255));
        let resized = resize(&bitmap, 2, Resampling::Lanczos).unwrap();
        assert_eq!((resized.width(), resized.height()), (6, 4));
        // Uniform input stays uniform
        assert!(resized.pixels().all(|(_, _, p)| p == Pixel::new(10, 200, 30, 255)));
    }

    #[test]
    fn test_factor_one_is_identity() {
        let mut bitmap = Bitmap::filled(2, 2, Pixel::TRANSPARENT);
        bitmap.set_pixel(1, 0, Pixel::new(1, 2, 3, 4)).unwrap();
        assert_eq!(resize(&bitmap, 1, Resampling::Lanczos).unwrap(), bitmap);
    }

    #[test]
    fn test_zero_factor_rejected() {
        let bitmap = Bitmap::filled(2, 2, Pixel::TRANSPARENT);
        assert!(matches!(resize(&bitmap, 0, Resampling::Nearest), Err(PipelineError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_passes_through() {
        assert!(resize(&Bitmap::empty(), 3, Resampling::Nearest).unwrap().is_empty());
    }

    #[test]
    fn test_nearest_duplicates_pixels() {
        let mut bitmap = Bitmap::filled(3, 1, Pixel::TRANSPARENT);
        bitmap.set_pixel(1, 0, Pixel::new(220, 20, 20, 255)).unwrap();
        bitmap.set_pixel(2, 0, Pixel::new(20, 20, 220, 255)).unwrap();

        let resized = resize(&bitmap, 2, Resampling::Nearest).unwrap();
        assert_eq!((resized.width(), resized.height()), (6, 2));
        for y in 0..2 {
            assert_eq!(resized.pixel(0, y), Some(Pixel::TRANSPARENT));
            assert_eq!(resized.pixel(1, y), Some(Pixel::TRANSPARENT));
            assert_eq!(resized.pixel(2, y), Some(Pixel::new(220, 20, 20, 255)));
            assert_eq!(resized.pixel(3, y), Some(Pixel::new(220, 20, 20, 255)));
            assert_eq!(resized.pixel(4, y), Some(Pixel::new(20, 20, 220, 255)));
            assert_eq!(resized.pixel(5, y), Some(Pixel::new(20, 20, 220, 255)));
        }
    }
}
