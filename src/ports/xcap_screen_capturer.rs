use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::ports::ImageCaptureSource;
use crate::core::models::CapturedImage;
use crate::global_constants::LOG_TAG_CAPTURE;

/// Grabs the primary monitor as the camera-like input on desktops.
pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn find_primary_monitor(&self) -> Result<xcap::Monitor> {
        let monitors = xcap::Monitor::all().context("Unable to list monitors")?;

        let primary_index = monitors
            .iter()
            .position(|monitor| monitor.is_primary().unwrap_or(false))
            .unwrap_or(0);

        monitors
            .into_iter()
            .nth(primary_index)
            .ok_or_else(|| anyhow::anyhow!("No monitor available to capture"))
    }

    fn capture_monitor_image(&self, monitor: &xcap::Monitor) -> Result<xcap::image::RgbaImage> {
        monitor
            .capture_image()
            .context("Unable to capture monitor")
    }

    fn convert_image_to_captured_image(&self, image: xcap::image::RgbaImage) -> CapturedImage {
        let width_pixels = image.width();
        let height_pixels = image.height();
        let raw_rgba_data = image.into_raw();

        log::info!(
            "{} captured {}x{} screenshot",
            LOG_TAG_CAPTURE,
            width_pixels,
            height_pixels
        );

        CapturedImage::build_from_raw_data(width_pixels, height_pixels, raw_rgba_data)
    }

    fn capture_primary_monitor(&self) -> Result<CapturedImage> {
        let monitor = self.find_primary_monitor()?;
        let captured_image = self.capture_monitor_image(&monitor)?;
        Ok(self.convert_image_to_captured_image(captured_image))
    }
}

/// xcap blocks while the OS grabs the frame, so it runs on the blocking pool.
async fn capture_off_runtime<F>(capture: F) -> Option<CapturedImage>
where
    F: FnOnce() -> Result<CapturedImage> + Send + 'static,
{
    match tokio::task::spawn_blocking(capture).await {
        Ok(Ok(image)) => Some(image),
        Ok(Err(error)) => {
            log::error!("{} Screen capture failed: {:#}", LOG_TAG_CAPTURE, error);
            None
        }
        Err(join_error) => {
            log::error!("{} Screen capture task aborted: {}", LOG_TAG_CAPTURE, join_error);
            None
        }
    }
}

#[async_trait]
impl ImageCaptureSource for XcapScreenCapturer {
    async fn request_image(&self) -> Option<CapturedImage> {
        log::debug!("{} capturing primary monitor", LOG_TAG_CAPTURE);

        capture_off_runtime(|| XcapScreenCapturer.capture_primary_monitor()).await
    }
}
