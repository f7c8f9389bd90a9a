mod firebase_storage_object_store;
mod http_backend_reporter;
mod jpeg_image_encoder;
mod local_directory_object_store;
mod logging_backend_reporter;
mod uuid_upload_key_generator;

pub use firebase_storage_object_store::FirebaseStorageObjectStore;
pub use http_backend_reporter::HttpBackendReporter;
pub use jpeg_image_encoder::JpegImageEncoder;
pub use local_directory_object_store::LocalDirectoryObjectStore;
pub use logging_backend_reporter::LoggingBackendReporter;
pub use uuid_upload_key_generator::UuidUploadKeyGenerator;
