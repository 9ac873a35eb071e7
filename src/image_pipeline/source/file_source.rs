//! Image sources backed by encoded image data.
//!
//! Decoding goes through the `image` crate, so any format it was built with
//! (PNG, JPEG, BMP, GIF, TIFF, WebP) is accepted. Whatever the stored color
//! type, the result is converted to 8-bit RGBA.

use std::path::PathBuf;

use tracing::debug;

use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::source::reader::ImageSource;

/// Decodes an encoded image into an RGBA bitmap.
fn decode(data: &[u8]) -> Result<Bitmap> {
    debug!("Decoding image, {} bytes", data.len());

    let decoded = image::load_from_memory(data)
        .map_err(|e| PipelineError::DecodeError(e.to_string()))?;

    debug!("Decoded image: {}x{} ({:?})", decoded.width(), decoded.height(), decoded.color());

    Ok(Bitmap::from(decoded.to_rgba8()))
}

/// Reads an image file from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileSource {
    /// Reads and decodes the file.
    ///
    /// # Returns
    ///
    /// * `Ok(Bitmap)` - Decoded image in RGBA
    /// * `Err(PipelineError::InputReadError)` - The file could not be read
    /// * `Err(PipelineError::DecodeError)` - The bytes are not a supported image
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jigsaw_helper_rs::image_pipeline::{FileSource, ImageSource};
    ///
    /// let bitmap = FileSource::new("jigsaw.png").acquire().unwrap();
    /// println!("{}x{}", bitmap.width(), bitmap.height());
    /// ```
    fn acquire(&self) -> Result<Bitmap> {
        let data = std::fs::read(&self.path).map_err(|e| {
            PipelineError::InputReadError(format!("{}: {}", self.path.display(), e))
        })?;
        decode(&data)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Decodes an image already held in memory.
pub struct MemorySource {
    data: Vec<u8>,
}

impl MemorySource {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }
}

impl ImageSource for MemorySource {
    fn acquire(&self) -> Result<Bitmap> {
        decode(&self.data)
    }

    fn describe(&self) -> String {
        format!("{} bytes in memory", self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encoded_png() -> Vec<u8> {
        let img = image::RgbImage::from_fn(3, 2, |x, y| image::Rgb([x as u8 * 50, y as u8 * 50, 7]));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, image::ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_memory_source_converts_rgb_to_rgba() {
        let bitmap = MemorySource::new(encoded_png()).acquire().unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        let px = bitmap.pixel(2, 1).unwrap();
        assert_eq!((px.r, px.g, px.b, px.a), (100, 50, 7, 255));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let result = MemorySource::new(b"not an image".to_vec()).acquire();
        assert!(matches!(result, Err(PipelineError::DecodeError(_))));
    }

    #[test]
    fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("piece.png");
        std::fs::write(&path, encoded_png()).unwrap();

        let bitmap = FileSource::new(&path).acquire().unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileSource::new(dir.path().join("missing.png")).acquire();
        assert!(matches!(result, Err(PipelineError::InputReadError(_))));
    }
}
