use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Creates one object at `object_path`. A failed write may still leave a
    /// partial object behind.
    async fn put_object(&self, object_path: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<()>;

    async fn resolve_locator(&self, object_path: &str) -> Result<String>;
}
