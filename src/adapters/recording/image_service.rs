//! Recording adapter for the `ImageService` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::image_service::{ImageRequest, ImageService, RequestImageFuture};

/// Records image service interactions while delegating to an inner implementation.
pub struct RecordingImageService {
    inner: Box<dyn ImageService>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingImageService {
    /// Creates a new recording service wrapping the given implementation.
    pub fn new(inner: Box<dyn ImageService>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ImageService for RecordingImageService {
    fn request_image(&self, request: &ImageRequest) -> RequestImageFuture<'_> {
        let request_clone = request.clone();
        let recorder = Arc::clone(&self.recorder);

        Box::pin(async move {
            let result = self.inner.request_image(&request_clone).await;
            record_result(&recorder, "image_service", "request_image", &request_clone, &result);
            result
        })
    }
}
