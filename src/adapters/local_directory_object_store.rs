use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use crate::core::interfaces::adapters::ObjectStore;
use crate::global_constants::LOG_TAG_LOCAL_STORE;

/// Stores objects as files under a root directory and hands out `file://` URLs.
pub struct LocalDirectoryObjectStore {
    root_directory: PathBuf,
}

impl LocalDirectoryObjectStore {
    pub fn new(root_directory: PathBuf) -> Self {
        log::debug!(
            "{} Storing objects under {:?}",
            LOG_TAG_LOCAL_STORE,
            root_directory
        );
        Self { root_directory }
    }

    fn resolve_object_file(&self, object_path: &str) -> Result<PathBuf> {
        let relative_path = Path::new(object_path);
        let stays_inside_root = relative_path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

        if !stays_inside_root || object_path.is_empty() {
            anyhow::bail!("Object path {:?} escapes the store root", object_path);
        }

        Ok(self.root_directory.join(relative_path))
    }
}

#[async_trait]
impl ObjectStore for LocalDirectoryObjectStore {
    async fn put_object(&self, object_path: &str, bytes: Vec<u8>, _content_type: &str) -> Result<()> {
        let object_file = self.resolve_object_file(object_path)?;

        if let Some(parent) = object_file.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        tokio::fs::write(&object_file, &bytes)
            .await
            .with_context(|| format!("Failed to write object to {:?}", object_file))?;

        log::info!(
            "{} Wrote {} bytes to {:?}",
            LOG_TAG_LOCAL_STORE,
            bytes.len(),
            object_file
        );
        Ok(())
    }

    async fn resolve_locator(&self, object_path: &str) -> Result<String> {
        let object_file = self.resolve_object_file(object_path)?;

        let absolute_path = tokio::fs::canonicalize(&object_file)
            .await
            .with_context(|| format!("Stored object {:?} not found", object_file))?;

        let file_url = reqwest::Url::from_file_path(&absolute_path).map_err(|_| {
            anyhow::anyhow!("Cannot express {:?} as a file URL", absolute_path)
        })?;

        Ok(file_url.to_string())
    }
}
