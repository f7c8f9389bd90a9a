mod captured_image;
mod image_locator;
mod pipeline_settings;
mod pipeline_state;
mod upload_key;

pub use captured_image::CapturedImage;
pub use image_locator::ImageLocator;
pub use pipeline_settings::{CaptureSourceKind, ObjectStoreKind, PipelineSettings};
pub use pipeline_state::{PipelineOutcome, PipelineRun, PipelineState};
pub use upload_key::UploadKey;
