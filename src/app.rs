use anyhow::Result;
use std::sync::Arc;

use crate::adapters::{
    FirebaseStorageObjectStore, HttpBackendReporter, JpegImageEncoder, LocalDirectoryObjectStore,
    LoggingBackendReporter, UuidUploadKeyGenerator,
};
use crate::core::interfaces::adapters::{BackendReporter, ObjectStore};
use crate::core::interfaces::ports::ImageCaptureSource;
use crate::core::models::{
    CaptureSourceKind, ObjectStoreKind, PipelineOutcome, PipelineRun, PipelineSettings,
};
use crate::core::orchestrators::{CapturePipeline, ImageUploader};
use crate::global_constants::{self, LOG_TAG_APP};
use crate::ports::{CaptureRequest, ConsolePrompt, ImageFileCaptureSource, XcapScreenCapturer};

/// What an interactive session did, without keeping every run alive.
#[derive(Debug, Default)]
pub struct SessionSummary {
    pub capture_count: usize,
    pub last_run: Option<PipelineRun>,
}

pub struct GraphParseApp {
    pipeline: CapturePipeline,
    prompt: Arc<ConsolePrompt>,
}

impl GraphParseApp {
    pub fn build(settings: &PipelineSettings) -> Result<Self> {
        Self::build_with_prompt(settings, Arc::new(ConsolePrompt::from_stdin()))
    }

    pub fn build_with_prompt(settings: &PipelineSettings, prompt: Arc<ConsolePrompt>) -> Result<Self> {
        log::info!("{} Initializing application", LOG_TAG_APP);
        settings.validate()?;

        let image_uploader = ImageUploader::new(
            Arc::new(JpegImageEncoder::with_quality(settings.jpeg_quality)),
            Self::build_object_store(settings)?,
            Arc::new(UuidUploadKeyGenerator),
            settings.object_prefix.clone(),
        );

        let pipeline = CapturePipeline::build(
            Self::build_capture_source(settings, Arc::clone(&prompt)),
            image_uploader,
            Self::build_backend_reporter(settings)?,
        );

        Ok(Self { pipeline, prompt })
    }

    fn build_capture_source(
        settings: &PipelineSettings,
        prompt: Arc<ConsolePrompt>,
    ) -> Arc<dyn ImageCaptureSource> {
        log::info!("{} Capture source: {}", LOG_TAG_APP, settings.capture_source);

        match settings.capture_source {
            CaptureSourceKind::Screen => Arc::new(XcapScreenCapturer::initialize()),
            CaptureSourceKind::ImageFile => Arc::new(ImageFileCaptureSource::new(prompt)),
        }
    }

    fn build_object_store(settings: &PipelineSettings) -> Result<Arc<dyn ObjectStore>> {
        log::info!("{} Object store: {}", LOG_TAG_APP, settings.object_store);

        let object_store: Arc<dyn ObjectStore> = match settings.object_store {
            ObjectStoreKind::Firebase => Arc::new(FirebaseStorageObjectStore::new(
                &settings.firebase_api_url,
                settings.firebase_bucket_name(),
            )?),
            ObjectStoreKind::LocalDirectory => Arc::new(LocalDirectoryObjectStore::new(
                settings.resolved_local_store_directory(),
            )),
        };

        Ok(object_store)
    }

    fn build_backend_reporter(settings: &PipelineSettings) -> Result<Arc<dyn BackendReporter>> {
        let backend_reporter: Arc<dyn BackendReporter> = match &settings.backend_report_url {
            Some(endpoint_url) => {
                log::info!("{} Reporting image URLs to {}", LOG_TAG_APP, endpoint_url);
                Arc::new(HttpBackendReporter::new(endpoint_url)?)
            }
            None => {
                log::info!("{} No backend configured, image URLs are only logged", LOG_TAG_APP);
                Arc::new(LoggingBackendReporter)
            }
        };

        Ok(backend_reporter)
    }

    pub async fn run_once(&self) -> PipelineRun {
        println!("{}", global_constants::USER_MESSAGE_UPLOADING);
        let run = self.pipeline.run_once().await;
        Self::print_run_summary(&run);
        run
    }

    /// Runs one pipeline invocation per capture request until the user quits.
    pub async fn run_until_quit(&self) -> SessionSummary {
        println!("{}", global_constants::STARTUP_BANNER);

        let mut summary = SessionSummary::default();
        while self.prompt.wait_for_capture_request().await == CaptureRequest::Capture {
            summary.last_run = Some(self.run_once().await);
            summary.capture_count += 1;
        }

        log::info!(
            "{} Exiting after {} capture(s)",
            LOG_TAG_APP,
            summary.capture_count
        );
        summary
    }

    fn print_run_summary(run: &PipelineRun) {
        match &run.outcome {
            PipelineOutcome::Notified(locator) => {
                println!("{}", global_constants::USER_MESSAGE_UPLOADED);
                println!("Processing at: {}", locator);
            }
            PipelineOutcome::Cancelled => println!("{}", global_constants::USER_MESSAGE_CANCELLED),
            PipelineOutcome::Failed => println!("{}", global_constants::USER_MESSAGE_FAILED),
        }
    }
}
