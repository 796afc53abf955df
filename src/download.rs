//! Saving the displayed image as `proverb.png`.

use std::path::{Path, PathBuf};

use crate::error::ProverbError;
use crate::ports::{FetchedImage, ImageFetcher};

/// File name used when no explicit download path is given.
pub const DEFAULT_DOWNLOAD_NAME: &str = "proverb.png";

/// Resolve the download path: explicit path or `proverb.png` in the working directory.
#[must_use]
pub fn resolve_download_path(explicit: Option<&str>) -> PathBuf {
    PathBuf::from(explicit.unwrap_or(DEFAULT_DOWNLOAD_NAME))
}

/// Fetch the image at `url` and save it as PNG at `path`.
///
/// # Errors
///
/// Returns an error if the fetch fails, the bytes are not a decodable image,
/// or the file cannot be written.
pub async fn download_image(
    fetcher: &dyn ImageFetcher,
    url: &str,
    path: &Path,
) -> Result<(), ProverbError> {
    let image = fetcher.fetch(url).await?;
    save_png(&image, path)
}

/// Write image bytes as PNG, converting if the source is another format.
///
/// # Errors
///
/// Returns an error if conversion or writing fails.
pub fn save_png(image: &FetchedImage, path: &Path) -> Result<(), ProverbError> {
    if is_png(image) {
        return std::fs::write(path, &image.data).map_err(ProverbError::Io);
    }

    let decoded = image::load_from_memory(&image.data).map_err(|e| {
        ProverbError::ImageConversion(format!("Failed to decode {}: {e}", describe(image)))
    })?;
    decoded
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| ProverbError::ImageConversion(format!("Failed to save as png: {e}")))
}

fn is_png(image: &FetchedImage) -> bool {
    image.mime_type == "image/png"
        || matches!(image::guess_format(&image.data), Ok(image::ImageFormat::Png))
}

fn describe(image: &FetchedImage) -> &str {
    if image.mime_type.is_empty() {
        "image"
    } else {
        &image.mime_type
    }
}
