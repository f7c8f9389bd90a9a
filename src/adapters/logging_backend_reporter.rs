use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::BackendReporter;
use crate::core::models::ImageLocator;
use crate::global_constants::LOG_TAG_REPORTER;

/// Placeholder backend: records the URL in the log and nothing else.
pub struct LoggingBackendReporter;

#[async_trait]
impl BackendReporter for LoggingBackendReporter {
    async fn report_image_url(&self, locator: &ImageLocator) -> Result<()> {
        log::info!("{} Sending image URL to backend: {}", LOG_TAG_REPORTER, locator);
        Ok(())
    }
}
