//! Live adapter for the proverb image service.

use reqwest::Client;

use crate::error::ProverbError;
use crate::ports::image_service::{ImageRequest, ImageService, ImageUrl, RequestImageFuture};

/// Calls the image service endpoint with `POST {"text": ...}`.
pub struct HttpImageService {
    client: Client,
    endpoint: String,
}

impl HttpImageService {
    /// Create a client for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self { client: Client::new(), endpoint }
    }
}

impl ImageService for HttpImageService {
    fn request_image(&self, request: &ImageRequest) -> RequestImageFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            tracing::debug!(endpoint = %self.endpoint, "requesting image");

            let response = self.client.post(&self.endpoint).json(&request).send().await?;

            let status = response.status();
            let response_text = response.text().await?;

            if !status.is_success() {
                return Err(ProverbError::Api { status: status.as_u16(), message: response_text });
            }

            parse_image_url(&response_text)
        })
    }
}

/// Parse a 2xx body; anything without a non-empty `imageUrl` is malformed.
fn parse_image_url(body: &str) -> Result<ImageUrl, ProverbError> {
    let parsed: ImageUrl = serde_json::from_str(body).map_err(|e| {
        let truncated: String = body.chars().take(200).collect();
        ProverbError::MalformedResponse(format!("{e}. Body: {truncated}"))
    })?;
    if parsed.image_url.trim().is_empty() {
        return Err(ProverbError::MalformedResponse("empty imageUrl".into()));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_body() {
        let body = r#"{"imageUrl": "https://placehold.co/800x800?text=x", "text": "x"}"#;
        assert_eq!(parse_image_url(body).unwrap().image_url, "https://placehold.co/800x800?text=x");
    }

    #[test]
    fn missing_url_is_malformed() {
        let err = parse_image_url(r#"{"text": "x"}"#).unwrap_err();
        assert!(matches!(err, ProverbError::MalformedResponse(_)));
    }

    #[test]
    fn empty_url_is_malformed() {
        let err = parse_image_url(r#"{"imageUrl": "  "}"#).unwrap_err();
        assert!(matches!(err, ProverbError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_image_url("<html>oops</html>").unwrap_err();
        assert!(err.to_string().contains("<html>oops</html>"));
    }
}
