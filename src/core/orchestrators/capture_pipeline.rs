use std::sync::Arc;

use crate::core::interfaces::adapters::BackendReporter;
use crate::core::interfaces::ports::ImageCaptureSource;
use crate::core::models::{PipelineOutcome, PipelineRun, PipelineState};
use crate::core::orchestrators::ImageUploader;
use crate::global_constants::LOG_TAG_PIPELINE;

struct StateTrace {
    current: PipelineState,
    visited: Vec<PipelineState>,
}

impl StateTrace {
    fn start() -> Self {
        Self {
            current: PipelineState::Idle,
            visited: vec![PipelineState::Idle],
        }
    }

    fn advance(&mut self, next: PipelineState) {
        if !self.current.can_transition_to(next) {
            log::error!(
                "{} Unexpected transition {} -> {}",
                LOG_TAG_PIPELINE,
                self.current,
                next
            );
        }

        log::debug!("{} {} -> {}", LOG_TAG_PIPELINE, self.current, next);
        self.current = next;
        self.visited.push(next);
    }

    fn finish(mut self, outcome: PipelineOutcome) -> PipelineRun {
        self.advance(PipelineState::Idle);
        PipelineRun {
            outcome,
            visited_states: self.visited,
        }
    }
}

/// Capture -> upload -> notify. Invocations share nothing but the adapters,
/// so several may be in flight at once.
pub struct CapturePipeline {
    capture_source: Arc<dyn ImageCaptureSource>,
    image_uploader: ImageUploader,
    backend_reporter: Arc<dyn BackendReporter>,
}

impl CapturePipeline {
    pub fn build(
        capture_source: Arc<dyn ImageCaptureSource>,
        image_uploader: ImageUploader,
        backend_reporter: Arc<dyn BackendReporter>,
    ) -> Self {
        Self {
            capture_source,
            image_uploader,
            backend_reporter,
        }
    }

    pub async fn run_once(&self) -> PipelineRun {
        let mut trace = StateTrace::start();

        trace.advance(PipelineState::Capturing);
        let Some(captured_image) = self.capture_source.request_image().await else {
            log::info!("{} Capture cancelled, nothing to upload", LOG_TAG_PIPELINE);
            return trace.finish(PipelineOutcome::Cancelled);
        };

        log::info!(
            "{} Captured {}x{} image",
            LOG_TAG_PIPELINE,
            captured_image.width,
            captured_image.height
        );

        trace.advance(PipelineState::Uploading);
        let upload_result = self.image_uploader.upload(&captured_image).await;
        drop(captured_image);

        let Some(locator) = upload_result else {
            trace.advance(PipelineState::Failed);
            return trace.finish(PipelineOutcome::Failed);
        };

        trace.advance(PipelineState::Succeeded);

        if let Err(error) = self.backend_reporter.report_image_url(&locator).await {
            log::error!(
                "{} Backend report for {} failed: {:#}",
                LOG_TAG_PIPELINE,
                locator,
                error
            );
        }
        trace.advance(PipelineState::Notified);

        trace.finish(PipelineOutcome::Notified(locator))
    }
}
