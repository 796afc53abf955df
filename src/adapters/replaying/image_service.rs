//! Replaying adapter for the `ImageService` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::image_service::{ImageRequest, ImageService, ImageUrl, RequestImageFuture};

/// Serves recorded image service answers from a cassette.
pub struct ReplayingImageService {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingImageService {
    /// Create a replaying service backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ImageService for ReplayingImageService {
    fn request_image(&self, _request: &ImageRequest) -> RequestImageFuture<'_> {
        let output = next_output(&self.replayer, "image_service", "request_image");
        Box::pin(async move { replay_result::<ImageUrl>(output?) })
    }
}
