use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;

use crate::core::interfaces::adapters::ImageEncoder;
use crate::core::models::CapturedImage;
use crate::global_constants::{JPEG_CONTENT_TYPE, JPEG_FILE_EXTENSION, LOG_TAG_UPLOADER};

pub struct JpegImageEncoder {
    quality: u8,
}

impl JpegImageEncoder {
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    fn convert_to_rgb_image(image: &CapturedImage) -> Result<image::RgbImage> {
        image.ensure_encodable()?;

        let rgba_image =
            image::RgbaImage::from_raw(image.width, image.height, image.raw_data().to_vec())
                .ok_or_else(|| anyhow::anyhow!("Failed to create image from raw data"))?;

        Ok(image::DynamicImage::ImageRgba8(rgba_image).to_rgb8())
    }
}

impl ImageEncoder for JpegImageEncoder {
    fn encode(&self, image: &CapturedImage) -> Result<Vec<u8>> {
        let rgb_image = Self::convert_to_rgb_image(image)?;

        let mut buffer = Vec::new();
        {
            let mut encoder = JpegEncoder::new_with_quality(&mut buffer, self.quality);
            encoder
                .encode_image(&rgb_image)
                .context("Failed to encode image as JPEG")?;
        }

        log::debug!(
            "{} Encoded {}x{} image to {} JPEG bytes at quality {}",
            LOG_TAG_UPLOADER,
            image.width,
            image.height,
            buffer.len(),
            self.quality
        );

        Ok(buffer)
    }

    fn content_type(&self) -> &'static str {
        JPEG_CONTENT_TYPE
    }

    fn file_extension(&self) -> &'static str {
        JPEG_FILE_EXTENSION
    }
}
