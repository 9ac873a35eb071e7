use crate::image_pipeline::bitmap::Bitmap;
use crate::image_pipeline::common::error::Result;

pub trait ImageSource {
    fn acquire(&self) -> Result<Bitmap>;
    fn describe(&self) -> String;
}
