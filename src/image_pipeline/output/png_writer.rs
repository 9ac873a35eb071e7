use std::io::Write;
use image::{ExtendedColorType, ImageEncoder};
use image::codecs::png::PngEncoder;
use tracing::debug;
use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::{Result, PipelineError};
use crate::image_pipeline::output::types::PipelineConfig;
use crate::image_pipeline::output::writer::BitmapWriter;

pub struct PngWriter;

impl BitmapWriter for PngWriter {
    fn write_bitmap(&self, image: &Bitmap, output: &mut dyn Write, _config: &PipelineConfig) -> Result<()> {
        if image.is_empty() {
            return Err(PipelineError::EmptyImage);
        }

        debug!("Encoding PNG image: {}x{}", image.width(), image.height());

        let (width, height) = dimensions_u32(image)?;
        PngEncoder::new(output)
            .write_image(image.data(), width, height, ExtendedColorType::Rgba8)
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}

pub(super) fn dimensions_u32(image: &Bitmap) -> Result<(u32, u32)> {
    let (w, h) = (image.width(), image.height());
    match (u32::try_from(w), u32::try_from(h)) {
        (Ok(w32), Ok(h32)) => Ok((w32, h32)),
        _ => Err(PipelineError::InvalidDimensions(w, h)),
    }
}
