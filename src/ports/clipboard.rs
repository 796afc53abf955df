//! Clipboard port.

use crate::error::ProverbError;

/// Writes text to the user's clipboard.
pub trait Clipboard {
    /// Best-effort copy. Failures are reported, never retried.
    ///
    /// # Errors
    ///
    /// Returns [`ProverbError::Clipboard`] if no copy mechanism succeeded.
    fn write_text(&self, text: &str) -> Result<(), ProverbError>;
}
