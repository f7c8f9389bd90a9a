mod image_capture_source;
mod upload_key_generator;

pub use image_capture_source::ImageCaptureSource;
pub use upload_key_generator::UploadKeyGenerator;
