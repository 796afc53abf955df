//! Replaying adapters that serve recorded interactions from cassettes.

pub mod image_fetcher;
pub mod image_service;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::ProverbError;

pub use image_fetcher::ReplayingImageFetcher;
pub use image_service::ReplayingImageService;

/// Retrieve the next recorded output for a given port and method.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, ProverbError> {
    let mut guard =
        replayer.lock().map_err(|e| ProverbError::Replay(format!("replayer lock poisoned: {e}")))?;
    let interaction = guard.next_interaction(port, method).map_err(ProverbError::Replay)?;
    Ok(interaction.output.clone())
}

/// Turn a recorded `{"Ok": ...}` / `{"Err": "..."}` output back into a result.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, ProverbError> {
    if let Some(err_val) = output.get("Err").or_else(|| output.get("err")) {
        let msg = err_val.as_str().unwrap_or("replayed error");
        return Err(replayed_error(msg));
    }
    let value = match output.get("Ok").or_else(|| output.get("ok")) {
        Some(ok_val) => ok_val.clone(),
        None => output,
    };
    serde_json::from_value(value).map_err(|e| ProverbError::Replay(e.to_string()))
}

/// Recover the HTTP status from a recorded `"API error (500): ..."` message.
fn replayed_error(msg: &str) -> ProverbError {
    let api = msg
        .strip_prefix("API error (")
        .and_then(|rest| rest.split_once("): "))
        .and_then(|(status, message)| Some((status.parse::<u16>().ok()?, message)));
    match api {
        Some((status, message)) => ProverbError::Api { status, message: message.to_string() },
        None => ProverbError::Replay(msg.to_string()),
    }
}
