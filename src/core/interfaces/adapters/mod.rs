mod backend_reporter;
mod image_encoder;
mod object_store;

pub use backend_reporter::BackendReporter;
pub use image_encoder::ImageEncoder;
pub use object_store::ObjectStore;
