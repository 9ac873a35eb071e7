use std::io::Write;
use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::output::types::PipelineConfig;

pub trait BitmapWriter {
    fn write_bitmap(&self, image: &Bitmap, output: &mut dyn Write, config: &PipelineConfig) -> Result<()>;
}
