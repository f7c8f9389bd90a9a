mod console_prompt;
mod image_file_capture_source;
mod xcap_screen_capturer;

pub use console_prompt::{CaptureRequest, ConsolePrompt};
pub use image_file_capture_source::ImageFileCaptureSource;
pub use xcap_screen_capturer::XcapScreenCapturer;
