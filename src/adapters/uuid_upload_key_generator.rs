use uuid::Uuid;

use crate::core::interfaces::ports::UploadKeyGenerator;
use crate::core::models::UploadKey;

pub struct UuidUploadKeyGenerator;

impl UploadKeyGenerator for UuidUploadKeyGenerator {
    fn next_key(&self) -> UploadKey {
        UploadKey::new(Uuid::new_v4().to_string())
    }
}
