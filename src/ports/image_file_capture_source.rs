use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::core::interfaces::ports::ImageCaptureSource;
use crate::core::models::CapturedImage;
use crate::global_constants::{LOG_TAG_CAPTURE, PROMPT_IMAGE_PATH};
use crate::ports::ConsolePrompt;

/// Asks for an image file on the console; an empty answer cancels the capture.
pub struct ImageFileCaptureSource {
    prompt: Arc<ConsolePrompt>,
}

impl ImageFileCaptureSource {
    pub fn new(prompt: Arc<ConsolePrompt>) -> Self {
        Self { prompt }
    }

    async fn load_image(path: &Path) -> anyhow::Result<CapturedImage> {
        let bytes = tokio::fs::read(path).await?;
        let rgba_image = image::load_from_memory(&bytes)?.to_rgba8();

        let (width, height) = rgba_image.dimensions();
        Ok(CapturedImage::build_from_raw_data(width, height, rgba_image.into_raw()))
    }

    fn strip_quotes(answer: &str) -> &str {
        answer.trim_matches(|c: char| c == '"' || c == '\'')
    }
}

#[async_trait]
impl ImageCaptureSource for ImageFileCaptureSource {
    async fn request_image(&self) -> Option<CapturedImage> {
        let answer = match self.prompt.read_answer(PROMPT_IMAGE_PATH).await {
            Ok(answer) => answer,
            Err(error) => {
                log::error!("{} {:#}", LOG_TAG_CAPTURE, error);
                return None;
            }
        };

        let path = match answer.as_deref().map(Self::strip_quotes) {
            Some(path) if !path.is_empty() => Path::new(path).to_path_buf(),
            _ => {
                log::info!("{} No image file given, capture cancelled", LOG_TAG_CAPTURE);
                return None;
            }
        };

        match Self::load_image(&path).await {
            Ok(image) => {
                log::info!(
                    "{} Loaded {}x{} image from {:?}",
                    LOG_TAG_CAPTURE,
                    image.width,
                    image.height,
                    path
                );
                Some(image)
            }
            Err(error) => {
                log::error!("{} Failed to load {:?}: {:#}", LOG_TAG_CAPTURE, path, error);
                None
            }
        }
    }
}
