use std::io::Write;
use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::output::types::{OutputFormat, PipelineConfig};
use crate::image_pipeline::output::writer::BitmapWriter;
use crate::image_pipeline::output::{PngWriter, TiffWriter};

/// Picks the encoder from `PipelineConfig::format`.
pub struct FormatWriter;

impl BitmapWriter for FormatWriter {
    fn write_bitmap(&self, image: &Bitmap, output: &mut dyn Write, config: &PipelineConfig) -> Result<()> {
        match config.format {
            OutputFormat::Png => PngWriter.write_bitmap(image, output, config),
            OutputFormat::Tiff => TiffWriter.write_bitmap(image, output, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::bitmap::Pixel;
    use crate::image_pipeline::common::error::PipelineError;
    use crate::image_pipeline::output::TiffCompression;

    fn piece() -> Bitmap {
        let mut bitmap = Bitmap::filled(5, 3, Pixel::TRANSPARENT);
        bitmap.set_pixel(2, 1, Pixel::new(200, 10, 10, 255)).unwrap();
        bitmap
    }

    #[test]
    fn test_png_decodes_back() {
        let mut out = Vec::new();
        FormatWriter.write_bitmap(&piece(), &mut out, &PipelineConfig::default()).unwrap();

        let decoded = image::load_from_memory_with_format(&out, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.dimensions(), (5, 3));
        assert_eq!(decoded.get_pixel(2, 1).0, [200, 10, 10, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_tiff_decodes_back() {
        for compression in [TiffCompression::None, TiffCompression::Lzw, TiffCompression::DeflateBalanced] {
            let config = PipelineConfig::builder()
                .format(OutputFormat::Tiff)
                .compression(compression)
                .build();
            let mut out = Vec::new();
            FormatWriter.write_bitmap(&piece(), &mut out, &config).unwrap();

            let mut decoder = tiff::decoder::Decoder::new(std::io::Cursor::new(out)).unwrap();
            assert_eq!(decoder.dimensions().unwrap(), (5, 3));
        }
    }

    #[test]
    fn test_tiff_horizontal_predictor_decodes_back() {
        let config = PipelineConfig::builder()
            .format(OutputFormat::Tiff)
            .compression(TiffCompression::Lzw)
            .predictor(Some(2))
            .build();
        let mut out = Vec::new();
        FormatWriter.write_bitmap(&piece(), &mut out, &config).unwrap();

        let mut decoder = tiff::decoder::Decoder::new(std::io::Cursor::new(out)).unwrap();
        assert_eq!(decoder.dimensions().unwrap(), (5, 3));
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U8(data) => {
                assert_eq!(data.len(), 5 * 3 * 4);
                let offset = (5 + 2) * 4;
                assert_eq!(&data[offset..offset + 4], &[200, 10, 10, 255]);
                assert_eq!(&data[0..4], &[0, 0, 0, 0]);
            }
            _ => panic!("expected 8-bit samples"),
        }
    }

    #[test]
    fn test_tiff_unsupported_predictor_is_rejected() {
        let config = PipelineConfig::builder()
            .format(OutputFormat::Tiff)
            .predictor(Some(3))
            .build();
        let mut out = Vec::new();
        let result = FormatWriter.write_bitmap(&piece(), &mut out, &config);
        assert!(matches!(result, Err(PipelineError::InvalidInput(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_bitmap_is_rejected() {
        let mut out = Vec::new();
        let result = FormatWriter.write_bitmap(&Bitmap::empty(), &mut out, &PipelineConfig::default());
        assert!(matches!(result, Err(PipelineError::EmptyImage)));
        assert!(out.is_empty());
    }
}
