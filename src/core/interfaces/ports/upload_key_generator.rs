use crate::core::models::UploadKey;

pub trait UploadKeyGenerator: Send + Sync {
    fn next_key(&self) -> UploadKey;
}
