//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system. Implementations live in `src/adapters/`.

pub mod clipboard;
pub mod image_fetcher;
pub mod image_service;

pub use clipboard::Clipboard;
pub use image_fetcher::{FetchedImage, ImageFetcher};
pub use image_service::{ImageRequest, ImageService, ImageUrl};
