use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::ObjectStore;
use crate::global_constants::{GS_URL_SCHEME, LOG_TAG_FIREBASE};

/// Object store backed by the Firebase Storage REST API.
pub struct FirebaseStorageObjectStore {
    client: reqwest::Client,
    api_url: String,
    bucket: String,
}

impl FirebaseStorageObjectStore {
    pub fn new(api_url: &str, bucket: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client for Firebase Storage")?;

        log::debug!(
            "{} Using bucket {} at {}",
            LOG_TAG_FIREBASE,
            bucket,
            api_url
        );

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            bucket: Self::normalize_bucket_name(bucket),
        })
    }

    /// Accepts both `my-app.firebasestorage.app` and the `gs://my-app.firebasestorage.app/` form.
    fn normalize_bucket_name(bucket: &str) -> String {
        let bucket = bucket.trim();
        bucket
            .strip_prefix(GS_URL_SCHEME)
            .unwrap_or(bucket)
            .trim_end_matches('/')
            .to_string()
    }

    fn construct_bucket_url(&self) -> String {
        format!("{}/v0/b/{}/o", self.api_url, urlencoding::encode(&self.bucket))
    }

    fn construct_upload_url(&self, object_path: &str) -> String {
        format!(
            "{}?uploadType=media&name={}",
            self.construct_bucket_url(),
            urlencoding::encode(object_path)
        )
    }

    fn construct_metadata_url(&self, object_path: &str) -> String {
        format!(
            "{}/{}",
            self.construct_bucket_url(),
            urlencoding::encode(object_path)
        )
    }

    fn construct_download_url(&self, object_path: &str, download_token: &str) -> String {
        format!(
            "{}?alt=media&token={}",
            self.construct_metadata_url(object_path),
            urlencoding::encode(download_token)
        )
    }

    fn extract_download_token(metadata: &serde_json::Value) -> Result<String> {
        metadata["downloadTokens"]
            .as_str()
            .and_then(|tokens| tokens.split(',').map(str::trim).find(|t| !t.is_empty()))
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Object metadata carries no download token"))
    }
}

#[async_trait]
impl ObjectStore for FirebaseStorageObjectStore {
    async fn put_object(&self, object_path: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        log::info!("{} Uploading object {}", LOG_TAG_FIREBASE, object_path);

        let response = self
            .client
            .post(self.construct_upload_url(object_path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .context("Failed to send upload request to Firebase Storage")?
            .error_for_status()
            .context("Firebase Storage rejected the upload")?;

        let response_text = response.text().await?;
        log::debug!("{} upload response: {}", LOG_TAG_FIREBASE, response_text);

        Ok(())
    }

    async fn resolve_locator(&self, object_path: &str) -> Result<String> {
        log::debug!("{} Resolving download URL for {}", LOG_TAG_FIREBASE, object_path);

        let response = self
            .client
            .get(self.construct_metadata_url(object_path))
            .send()
            .await
            .context("Failed to request object metadata from Firebase Storage")?
            .error_for_status()
            .context("Firebase Storage rejected the metadata request")?;

        let response_text = response.text().await?;
        let metadata: serde_json::Value = serde_json::from_str(&response_text)
            .context("Firebase Storage returned malformed metadata")?;

        let download_token = Self::extract_download_token(&metadata)?;
        let download_url = self.construct_download_url(object_path, &download_token);

        log::info!("{} Download URL resolved: {}", LOG_TAG_FIREBASE, download_url);
        Ok(download_url)
    }
}
