use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ImageLocator;

#[async_trait]
pub trait BackendReporter: Send + Sync {
    async fn report_image_url(&self, locator: &ImageLocator) -> Result<()>;
}
