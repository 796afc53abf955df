//! Image service port: turns proverb text into an image URL.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::ProverbError;

/// Request body sent to the image service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Proverb text to illustrate.
    pub text: String,
}

/// Successful image service answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// Where the generated image can be fetched.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Boxed future type returned by [`ImageService::request_image`].
pub type RequestImageFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ImageUrl, ProverbError>> + Send + 'a>>;

/// Generates an image for a proverb via an external service.
pub trait ImageService: Send + Sync {
    /// Ask the service for an image of the given text.
    fn request_image(&self, request: &ImageRequest) -> RequestImageFuture<'_>;
}
