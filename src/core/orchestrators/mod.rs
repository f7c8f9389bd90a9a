mod capture_pipeline;
mod image_uploader;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use capture_pipeline::CapturePipeline;
pub use image_uploader::ImageUploader;
