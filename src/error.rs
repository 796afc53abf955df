//! Unified error type for proverbs.

use thiserror::Error;

/// Errors that can occur while generating, sharing or illustrating proverbs.
#[derive(Debug, Error)]
pub enum ProverbError {
    /// The user submitted an empty or whitespace-only word.
    #[error("Empty word: enter a word to generate a proverb")]
    EmptyWord,

    /// There is no proverb to act on yet.
    #[error("No proverb selected")]
    NothingSelected,

    /// A history index was out of range.
    #[error("No history entry #{0}")]
    NoSuchEntry(usize),

    /// A share link did not carry a proverb.
    #[error("Share link has no '?p=' proverb: {0}")]
    NotShared(String),

    /// There is no generated image to download.
    #[error("No image to download")]
    NoImage,

    /// The image service returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body or replayed error message.
        message: String,
    },

    /// The image service answered 2xx but the body had no usable `imageUrl`.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A URL could not be built or parsed.
    #[error("Invalid URL: {0}")]
    Url(String),

    /// Copying to the clipboard failed, including the fallback path.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// A cassette could not serve the requested interaction.
    #[error("Replay error: {0}")]
    Replay(String),

    /// Image format conversion error.
    #[error("Image conversion error: {0}")]
    ImageConversion(String),
}
