use tracing::debug;

use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::source::reader::ImageSource;

/// Grabs the image currently on the system clipboard.
pub struct ClipboardSource;

impl ImageSource for ClipboardSource {
    fn acquire(&self) -> Result<Bitmap> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PipelineError::ClipboardError(e.to_string()))?;

        let image = clipboard
            .get_image()
            .map_err(|e| PipelineError::ClipboardError(e.to_string()))?;

        debug!("Clipboard image: {}x{}", image.width, image.height);

        // arboard hands out RGBA8
        Bitmap::from_raw(image.width, image.height, image.bytes.into_owned())
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}
