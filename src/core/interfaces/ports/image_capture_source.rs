use async_trait::async_trait;

use crate::core::models::CapturedImage;

/// Yields at most one image per request. `None` means the capture was
/// cancelled or the source could not produce an image.
#[async_trait]
pub trait ImageCaptureSource: Send + Sync {
    async fn request_image(&self) -> Option<CapturedImage>;
}
