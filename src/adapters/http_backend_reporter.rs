use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;

use crate::core::interfaces::adapters::BackendReporter;
use crate::core::models::ImageLocator;
use crate::global_constants::LOG_TAG_REPORTER;

#[derive(Debug, Serialize)]
struct BackendReportPayload<'a> {
    image_url: &'a str,
}

/// Posts each uploaded image URL to a processing backend. The response body is ignored.
pub struct HttpBackendReporter {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpBackendReporter {
    pub fn new(endpoint_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client for backend reporting")?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.to_string(),
        })
    }
}

#[async_trait]
impl BackendReporter for HttpBackendReporter {
    async fn report_image_url(&self, locator: &ImageLocator) -> Result<()> {
        log::info!(
            "{} Posting image URL to {}: {}",
            LOG_TAG_REPORTER,
            self.endpoint_url,
            locator
        );

        let payload = BackendReportPayload {
            image_url: locator.as_str(),
        };

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(&payload)
            .send()
            .await
            .context("Failed to reach backend")?
            .error_for_status()
            .context("Backend rejected the image URL")?;

        log::debug!("{} backend responded with {}", LOG_TAG_REPORTER, response.status());
        Ok(())
    }
}
