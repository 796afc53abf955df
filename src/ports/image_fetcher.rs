//! Image fetcher port used by the download action.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::ProverbError;

/// Raw bytes of a downloaded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedImage {
    /// Raw image bytes.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// MIME type reported by the server (e.g., `"image/png"`).
    pub mime_type: String,
}

/// Boxed future type returned by [`ImageFetcher::fetch`].
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<FetchedImage, ProverbError>> + Send + 'a>>;

/// Downloads image bytes from a URL.
pub trait ImageFetcher: Send + Sync {
    /// Fetch the image at `url`.
    fn fetch(&self, url: &str) -> FetchFuture<'_>;
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_stored_as_base64() {
        let image =
            FetchedImage { data: vec![0x89, 0x50, 0x4E, 0x47], mime_type: "image/png".into() };
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["data"], "iVBORw==");

        let back: FetchedImage = serde_json::from_value(json).unwrap();
        assert_eq!(back.data, vec![0x89, 0x50, 0x4E, 0x47]);
    }
}
