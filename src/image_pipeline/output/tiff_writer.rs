use std::io::Write;
use tracing::debug;
use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::{Result, PipelineError};
use crate::image_pipeline::output::png_writer::dimensions_u32;
use crate::image_pipeline::output::types::{PipelineConfig, TiffCompression};
use crate::image_pipeline::output::writer::BitmapWriter;

pub struct TiffWriter;

impl BitmapWriter for TiffWriter {
    fn write_bitmap(&self, image: &Bitmap, output: &mut dyn Write, config: &PipelineConfig) -> Result<()> {
        if image.is_empty() {
            return Err(PipelineError::EmptyImage);
        }

        debug!("Encoding TIFF image: {}x{}", image.width(), image.height());

        let (width, height) = dimensions_u32(image)?;
        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                1 => tiff::tags::Predictor::None,
                2 => tiff::tags::Predictor::Horizontal,
                other => {
                    return Err(PipelineError::InvalidInput(format!(
                        "unsupported TIFF predictor {} (expected 1 or 2)",
                        other
                    )));
                }
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder.write_image::<tiff::encoder::colortype::RGBA8>(
            width,
            height,
            image.data(),
        ).map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete ({} bytes)", buffer.len());
        Ok(())
    }
}
