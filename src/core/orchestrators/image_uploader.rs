use std::sync::Arc;

use crate::core::interfaces::adapters::{ImageEncoder, ObjectStore};
use crate::core::interfaces::ports::UploadKeyGenerator;
use crate::core::models::{CapturedImage, ImageLocator};
use crate::global_constants::LOG_TAG_UPLOADER;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("failed to encode image: {0:#}")]
    Encoding(anyhow::Error),
    #[error("failed to write object {object_path}: {cause:#}")]
    Transport {
        object_path: String,
        cause: anyhow::Error,
    },
    #[error("object {object_path} was written but its locator could not be resolved: {cause:#}")]
    Resolution {
        object_path: String,
        cause: anyhow::Error,
    },
}

/// Encodes a captured image, stores it under a fresh key and resolves its locator.
pub struct ImageUploader {
    encoder: Arc<dyn ImageEncoder>,
    object_store: Arc<dyn ObjectStore>,
    key_generator: Arc<dyn UploadKeyGenerator>,
    object_prefix: String,
}

impl ImageUploader {
    pub fn new(
        encoder: Arc<dyn ImageEncoder>,
        object_store: Arc<dyn ObjectStore>,
        key_generator: Arc<dyn UploadKeyGenerator>,
        object_prefix: String,
    ) -> Self {
        Self {
            encoder,
            object_store,
            key_generator,
            object_prefix,
        }
    }

    /// Collapses every failure kind into `None` after logging it.
    pub async fn upload(&self, image: &CapturedImage) -> Option<ImageLocator> {
        match self.try_upload(image).await {
            Ok(locator) => Some(locator),
            Err(error) => {
                log::error!("{} Upload failed: {}", LOG_TAG_UPLOADER, error);
                None
            }
        }
    }

    pub async fn try_upload(&self, image: &CapturedImage) -> Result<ImageLocator, UploadError> {
        let encoded_bytes = self.encoder.encode(image).map_err(UploadError::Encoding)?;

        let upload_key = self.key_generator.next_key();
        let object_path =
            upload_key.object_path(&self.object_prefix, self.encoder.file_extension());

        log::info!(
            "{} Uploading {} bytes to {}",
            LOG_TAG_UPLOADER,
            encoded_bytes.len(),
            object_path
        );

        self.object_store
            .put_object(&object_path, encoded_bytes, self.encoder.content_type())
            .await
            .map_err(|cause| UploadError::Transport {
                object_path: object_path.clone(),
                cause,
            })?;

        log::debug!("{} Write complete, resolving locator", LOG_TAG_UPLOADER);

        let locator = self
            .object_store
            .resolve_locator(&object_path)
            .await
            .and_then(ImageLocator::parse)
            .map_err(|cause| UploadError::Resolution {
                object_path: object_path.clone(),
                cause,
            })?;

        log::info!("{} Image available at {}", LOG_TAG_UPLOADER, locator);
        Ok(locator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::UuidUploadKeyGenerator;
    use crate::core::orchestrators::test_doubles::{
        create_test_image, FailingEncoder, FixedKeyGenerator, MockObjectStore, StubEncoder,
    };
    use std::collections::HashSet;

    fn build_uploader(
        object_store: Arc<MockObjectStore>,
        key_generator: Arc<dyn UploadKeyGenerator>,
    ) -> ImageUploader {
        ImageUploader::new(
            Arc::new(StubEncoder),
            object_store,
            key_generator,
            "images".to_string(),
        )
    }

    #[tokio::test]
    async fn test_upload_writes_object_under_prefix_and_returns_locator() {
        let store = Arc::new(MockObjectStore::succeeding());
        let uploader = build_uploader(
            Arc::clone(&store),
            Arc::new(FixedKeyGenerator::new(vec!["key-1"])),
        );

        let locator = uploader.upload(&create_test_image()).await.unwrap();

        assert_eq!(store.written_paths(), vec!["images/key-1.jpg".to_string()]);
        assert_eq!(locator.as_str(), "https://store.test/images/key-1.jpg");
    }

    #[tokio::test]
    async fn test_upload_passes_encoder_content_type_to_store() {
        let store = Arc::new(MockObjectStore::succeeding());
        let uploader = build_uploader(
            Arc::clone(&store),
            Arc::new(FixedKeyGenerator::new(vec!["k"])),
        );

        uploader.upload(&create_test_image()).await.unwrap();

        assert_eq!(store.content_types(), vec!["image/jpeg".to_string()]);
    }

    #[tokio::test]
    async fn test_encoding_failure_skips_network_calls() {
        let store = Arc::new(MockObjectStore::succeeding());
        let uploader = ImageUploader::new(
            Arc::new(FailingEncoder),
            Arc::clone(&store) as Arc<dyn ObjectStore>,
            Arc::new(UuidUploadKeyGenerator),
            "images".to_string(),
        );

        let result = uploader.try_upload(&create_test_image()).await;

        assert!(matches!(result, Err(UploadError::Encoding(_))));
        assert_eq!(store.put_attempts(), 0);
        assert_eq!(store.resolve_attempts(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_as_transport_error() {
        let store = Arc::new(MockObjectStore::failing_put());
        let uploader = build_uploader(Arc::clone(&store), Arc::new(UuidUploadKeyGenerator));

        let result = uploader.try_upload(&create_test_image()).await;

        assert!(matches!(result, Err(UploadError::Transport { .. })));
        assert_eq!(store.resolve_attempts(), 0);
    }

    #[tokio::test]
    async fn test_resolution_failure_keeps_written_object() {
        let store = Arc::new(MockObjectStore::failing_resolve());
        let uploader = build_uploader(Arc::clone(&store), Arc::new(UuidUploadKeyGenerator));

        let result = uploader.try_upload(&create_test_image()).await;

        assert!(matches!(result, Err(UploadError::Resolution { .. })));
        assert_eq!(store.written_paths().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_locator_is_a_resolution_failure() {
        let store = Arc::new(MockObjectStore::returning_empty_locator());
        let uploader = build_uploader(Arc::clone(&store), Arc::new(UuidUploadKeyGenerator));

        let result = uploader.try_upload(&create_test_image()).await;

        assert!(matches!(result, Err(UploadError::Resolution { .. })));
        assert!(uploader.upload(&create_test_image()).await.is_none());
    }

    #[tokio::test]
    async fn test_same_image_uploaded_twice_creates_two_objects() {
        let store = Arc::new(MockObjectStore::succeeding());
        let uploader = build_uploader(Arc::clone(&store), Arc::new(UuidUploadKeyGenerator));
        let image = create_test_image();

        let first = uploader.upload(&image).await.unwrap();
        let second = uploader.upload(&image).await.unwrap();

        assert_ne!(first, second);
        let paths = store.written_paths();
        assert_eq!(paths.len(), 2);
        assert_ne!(paths[0], paths[1]);
    }

    #[tokio::test]
    async fn test_uploader_uses_exactly_the_generated_key() {
        let store = Arc::new(MockObjectStore::succeeding());
        let uploader = build_uploader(
            Arc::clone(&store),
            Arc::new(FixedKeyGenerator::new(vec!["same", "same"])),
        );

        uploader.upload(&create_test_image()).await.unwrap();
        uploader.upload(&create_test_image()).await.unwrap();

        assert_eq!(
            store.written_paths(),
            vec!["images/same.jpg".to_string(), "images/same.jpg".to_string()]
        );
    }

    #[tokio::test]
    async fn test_many_uploads_use_pairwise_distinct_paths() {
        let store = Arc::new(MockObjectStore::succeeding());
        let uploader = build_uploader(Arc::clone(&store), Arc::new(UuidUploadKeyGenerator));
        let image = create_test_image();

        for _ in 0..500 {
            uploader.upload(&image).await.unwrap();
        }

        let unique_paths: HashSet<String> = store.written_paths().into_iter().collect();
        assert_eq!(unique_paths.len(), 500);
    }

    #[test]
    fn test_upload_error_messages_name_the_failure_kind() {
        let error = UploadError::Resolution {
            object_path: "images/a.jpg".to_string(),
            cause: anyhow::anyhow!("no token"),
        };

        let message = error.to_string();

        assert!(message.contains("images/a.jpg"));
        assert!(message.contains("could not be resolved"));
        assert!(message.contains("no token"));
    }
}
