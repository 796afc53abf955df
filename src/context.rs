//! Service context that bundles all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::{HttpImageFetcher, HttpImageService, SystemClipboard};
use crate::adapters::recording::{RecordingImageFetcher, RecordingImageService};
use crate::adapters::replaying::{ReplayingImageFetcher, ReplayingImageService};
use crate::cassette::config::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::ProverbError;
use crate::ports::{Clipboard, ImageFetcher, ImageService};

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// Image service port.
    pub image_service: Box<dyn ImageService>,
    /// Image download port.
    pub fetcher: Box<dyn ImageFetcher>,
    /// Clipboard port.
    pub clipboard: Box<dyn Clipboard>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Drop the recording context and write the cassette to disk.
    ///
    /// Returns `None` when the session made no HTTP calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self, ctx: ServiceContext) -> Result<Option<PathBuf>, String> {
        drop(ctx);
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context talking to the configured endpoint.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self {
            image_service: Box::new(HttpImageService::new(config.endpoint())),
            fetcher: Box::new(HttpImageFetcher::new()),
            clipboard: Box::new(SystemClipboard),
        }
    }

    /// Create a recording context that wraps the live HTTP adapters with a recorder.
    #[must_use]
    pub fn recording(config: &Config) -> (Self, RecordingSession) {
        let live_ctx = Self::live(config);

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".proverbs/cassettes")
            .join(&timestamp)
            .join("session.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-session"),
            get_commit_hash(),
        )));

        let ctx = Self {
            image_service: Box::new(RecordingImageService::new(
                live_ctx.image_service,
                Arc::clone(&recorder),
            )),
            fetcher: Box::new(RecordingImageFetcher::new(live_ctx.fetcher, Arc::clone(&recorder))),
            clipboard: live_ctx.clipboard,
        };

        (ctx, RecordingSession { recorder })
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, ProverbError> {
        let replayer = load_cassette(path)
            .map_err(|e| ProverbError::Config(format!("Failed to load cassette: {e}")))?;
        let replayer = Arc::new(Mutex::new(replayer));
        Ok(Self {
            image_service: Box::new(ReplayingImageService::new(Arc::clone(&replayer))),
            fetcher: Box::new(ReplayingImageFetcher::new(replayer)),
            clipboard: Box::new(SystemClipboard),
        })
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
