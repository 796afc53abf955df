//! Adapter implementations for port traits.
//!
//! - `live/`: Real HTTP and clipboard implementations
//! - `recording/`: Record HTTP interactions to cassettes
//! - `replaying/`: Replay HTTP interactions from cassettes

pub mod live;
pub mod recording;
pub mod replaying;
