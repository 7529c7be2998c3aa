use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::debayer::types::PreviewImage;

pub trait PreviewEncoder {
    /// File extension of the encoded output, without the dot.
    fn extension(&self) -> &'static str;

    fn encode(&self, image: &PreviewImage, output: &mut dyn Write) -> Result<()>;
}
