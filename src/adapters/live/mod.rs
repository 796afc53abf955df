//! Live adapters talking to real systems.

pub mod clipboard;
pub mod image_fetcher;
pub mod image_service;

pub use clipboard::SystemClipboard;
pub use image_fetcher::HttpImageFetcher;
pub use image_service::HttpImageService;
