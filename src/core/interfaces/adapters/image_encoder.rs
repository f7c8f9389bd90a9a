use anyhow::Result;

use crate::core::models::CapturedImage;

pub trait ImageEncoder: Send + Sync {
    fn encode(&self, image: &CapturedImage) -> Result<Vec<u8>>;

    fn content_type(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;
}
