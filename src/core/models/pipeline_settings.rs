use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CaptureSourceKind {
    #[default]
    Screen,
    ImageFile,
}

impl fmt::Display for CaptureSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureSourceKind::Screen => write!(f, "Screen"),
            CaptureSourceKind::ImageFile => write!(f, "ImageFile"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ObjectStoreKind {
    #[default]
    Firebase,
    LocalDirectory,
}

impl fmt::Display for ObjectStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectStoreKind::Firebase => write!(f, "Firebase"),
            ObjectStoreKind::LocalDirectory => write!(f, "LocalDirectory"),
        }
    }
}

/// Startup configuration handed to the application builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineSettings {
    pub capture_source: CaptureSourceKind,
    pub object_store: ObjectStoreKind,
    pub firebase_bucket: String,
    pub firebase_api_url: String,
    pub local_store_directory: Option<PathBuf>,
    pub object_prefix: String,
    pub jpeg_quality: u8,
    pub backend_report_url: Option<String>,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            capture_source: CaptureSourceKind::default(),
            object_store: ObjectStoreKind::default(),
            firebase_bucket: global_constants::DEFAULT_FIREBASE_BUCKET.to_string(),
            firebase_api_url: global_constants::FIREBASE_STORAGE_API_URL.to_string(),
            local_store_directory: None,
            object_prefix: global_constants::DEFAULT_OBJECT_PREFIX.to_string(),
            jpeg_quality: global_constants::DEFAULT_JPEG_QUALITY,
            backend_report_url: None,
        }
    }
}

impl PipelineSettings {
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let settings_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Self::get_settings_file_path()?,
        };

        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file at {:?}, writing defaults",
                global_constants::LOG_TAG_SETTINGS,
                settings_path
            );
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let settings: PipelineSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", settings_path))?;

        settings.validate()?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} Capture source: {}, object store: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.capture_source,
            settings.object_store
        );

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            anyhow::bail!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            );
        }

        if self.object_prefix.trim_matches('/').trim().is_empty() {
            anyhow::bail!("object_prefix must not be empty");
        }

        if self.object_store == ObjectStoreKind::Firebase && self.firebase_bucket_name().is_empty() {
            anyhow::bail!("firebase_bucket is required when the Firebase object store is selected");
        }

        Ok(())
    }

    /// Bucket name without a `gs://` scheme or trailing slash.
    pub fn firebase_bucket_name(&self) -> &str {
        let bucket = self.firebase_bucket.trim();
        bucket
            .strip_prefix(global_constants::GS_URL_SCHEME)
            .unwrap_or(bucket)
            .trim_end_matches('/')
    }

    pub fn resolved_local_store_directory(&self) -> PathBuf {
        self.local_store_directory.clone().unwrap_or_else(|| {
            std::env::temp_dir().join(global_constants::LOCAL_STORE_FALLBACK_DIR)
        })
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_CONFIG_DIR);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
