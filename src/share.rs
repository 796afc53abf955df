//! Share links and clipboard copy.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;

use crate::error::ProverbError;
use crate::ports::Clipboard;

/// Query parameter carrying the proverb text.
pub const SHARE_PARAM: &str = "p";

/// Bytes escaped in a share link: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build `<origin>?p=<percent-encoded text>`, keeping `origin` as given.
///
/// # Errors
///
/// Returns [`ProverbError::Url`] if `origin` is not an absolute URL or
/// already carries a query or fragment.
pub fn build_share_url(origin: &str, text: &str) -> Result<String, ProverbError> {
    let url =
        Url::parse(origin).map_err(|e| ProverbError::Url(format!("bad origin '{origin}': {e}")))?;
    if url.cannot_be_a_base() || url.query().is_some() || url.fragment().is_some() {
        return Err(ProverbError::Url(format!("origin '{origin}' must be a plain base URL")));
    }
    Ok(format!("{origin}?{SHARE_PARAM}={}", utf8_percent_encode(text, COMPONENT)))
}

/// Extract the proverb text from a share link, if it carries one.
#[must_use]
pub fn proverb_from_share_url(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.query()?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_PARAM)
        .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
        .map(std::borrow::Cow::into_owned)
        .filter(|text| !text.trim().is_empty())
}

/// Copy `text` through the given clipboard, logging the outcome.
///
/// # Errors
///
/// Propagates the clipboard's failure without retrying.
pub fn copy_to_clipboard(clipboard: &dyn Clipboard, text: &str) -> Result<(), ProverbError> {
    match clipboard.write_text(text) {
        Ok(()) => {
            tracing::debug!(len = text.len(), "copied to clipboard");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            Err(e)
        }
    }
}
