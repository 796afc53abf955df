//! Live adapter that downloads images over HTTP.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::error::ProverbError;
use crate::ports::image_fetcher::{FetchFuture, FetchedImage, ImageFetcher};

/// Plain `GET` downloader.
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Create a new fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for HttpImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFetcher for HttpImageFetcher {
    fn fetch(&self, url: &str) -> FetchFuture<'_> {
        let url = url.to_string();
        Box::pin(async move {
            let response = self.client.get(&url).send().await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(ProverbError::Api { status: status.as_u16(), message });
            }

            let mime_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(mime_essence)
                .unwrap_or_default();
            let data = response.bytes().await?.to_vec();
            tracing::debug!(%url, %mime_type, bytes = data.len(), "fetched image");

            Ok(FetchedImage { data, mime_type })
        })
    }
}

/// `"image/png; charset=binary"` -> `"image/png"`.
fn mime_essence(header: &str) -> String {
    header.split(';').next().unwrap_or_default().trim().to_ascii_lowercase()
}
