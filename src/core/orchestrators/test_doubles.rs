use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::core::interfaces::adapters::{BackendReporter, ImageEncoder, ObjectStore};
use crate::core::interfaces::ports::{ImageCaptureSource, UploadKeyGenerator};
use crate::core::models::{CapturedImage, ImageLocator, UploadKey};

pub fn create_test_image() -> CapturedImage {
    CapturedImage::build_from_raw_data(8, 8, vec![200u8; 8 * 8 * 4])
}

pub struct MockCaptureSource {
    image: Option<CapturedImage>,
    requests: AtomicUsize,
}

impl MockCaptureSource {
    pub fn yielding(image: CapturedImage) -> Self {
        Self {
            image: Some(image),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn cancelled() -> Self {
        Self {
            image: None,
            requests: AtomicUsize::new(0),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageCaptureSource for MockCaptureSource {
    async fn request_image(&self) -> Option<CapturedImage> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.image.clone()
    }
}

pub struct StubEncoder;

impl ImageEncoder for StubEncoder {
    fn encode(&self, image: &CapturedImage) -> Result<Vec<u8>> {
        Ok(image.raw_data().to_vec())
    }

    fn content_type(&self) -> &'static str {
        "image/jpeg"
    }

    fn file_extension(&self) -> &'static str {
        "jpg"
    }
}

pub struct FailingEncoder;

impl ImageEncoder for FailingEncoder {
    fn encode(&self, _image: &CapturedImage) -> Result<Vec<u8>> {
        anyhow::bail!("simulated encoding failure")
    }

    fn content_type(&self) -> &'static str {
        "image/jpeg"
    }

    fn file_extension(&self) -> &'static str {
        "jpg"
    }
}

pub struct FixedKeyGenerator {
    keys: Mutex<VecDeque<String>>,
}

impl FixedKeyGenerator {
    pub fn new(keys: Vec<&str>) -> Self {
        Self {
            keys: Mutex::new(keys.into_iter().map(String::from).collect()),
        }
    }
}

impl UploadKeyGenerator for FixedKeyGenerator {
    fn next_key(&self) -> UploadKey {
        let key = self
            .keys
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "exhausted".to_string());
        UploadKey::new(key)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StoreBehaviour {
    Succeed,
    FailPut,
    FailResolve,
    EmptyLocator,
}

pub struct MockObjectStore {
    behaviour: StoreBehaviour,
    written: Mutex<Vec<(String, String)>>,
    put_attempts: AtomicUsize,
    resolve_attempts: AtomicUsize,
}

impl MockObjectStore {
    fn with_behaviour(behaviour: StoreBehaviour) -> Self {
        Self {
            behaviour,
            written: Mutex::new(Vec::new()),
            put_attempts: AtomicUsize::new(0),
            resolve_attempts: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::with_behaviour(StoreBehaviour::Succeed)
    }

    pub fn failing_put() -> Self {
        Self::with_behaviour(StoreBehaviour::FailPut)
    }

    pub fn failing_resolve() -> Self {
        Self::with_behaviour(StoreBehaviour::FailResolve)
    }

    pub fn returning_empty_locator() -> Self {
        Self::with_behaviour(StoreBehaviour::EmptyLocator)
    }

    pub fn written_paths(&self) -> Vec<String> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub fn content_types(&self) -> Vec<String> {
        self.written
            .lock()
            .unwrap()
            .iter()
            .map(|(_, content_type)| content_type.clone())
            .collect()
    }

    pub fn put_attempts(&self) -> usize {
        self.put_attempts.load(Ordering::SeqCst)
    }

    pub fn resolve_attempts(&self) -> usize {
        self.resolve_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put_object(&self, object_path: &str, _bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.put_attempts.fetch_add(1, Ordering::SeqCst);

        if self.behaviour == StoreBehaviour::FailPut {
            anyhow::bail!("simulated network error");
        }

        self.written
            .lock()
            .unwrap()
            .push((object_path.to_string(), content_type.to_string()));
        Ok(())
    }

    async fn resolve_locator(&self, object_path: &str) -> Result<String> {
        self.resolve_attempts.fetch_add(1, Ordering::SeqCst);

        match self.behaviour {
            StoreBehaviour::FailResolve => anyhow::bail!("simulated resolution failure"),
            StoreBehaviour::EmptyLocator => Ok(String::new()),
            _ => Ok(format!("https://store.test/{}", object_path)),
        }
    }
}

pub struct RecordingReporter {
    reported: Mutex<Vec<ImageLocator>>,
    fail: bool,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            reported: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            reported: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn reported(&self) -> Vec<ImageLocator> {
        self.reported.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendReporter for RecordingReporter {
    async fn report_image_url(&self, locator: &ImageLocator) -> Result<()> {
        self.reported.lock().unwrap().push(locator.clone());

        if self.fail {
            anyhow::bail!("simulated backend outage");
        }
        Ok(())
    }
}
