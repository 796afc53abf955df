//! System clipboard with a command-line fallback.

use std::io::Write;
use std::process::{Command, Stdio};

use cli_clipboard::{ClipboardContext, ClipboardProvider};
use tempfile::NamedTempFile;

use crate::error::ProverbError;
use crate::ports::Clipboard;

/// Copies through the desktop clipboard, falling back to platform copy tools.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ProverbError> {
        let primary = ClipboardContext::new()
            .and_then(|mut ctx| ctx.set_contents(text.to_string()))
            .map_err(|e| e.to_string());

        let Err(primary_err) = primary else {
            return Ok(());
        };
        tracing::debug!(error = %primary_err, "system clipboard unavailable, trying fallback");

        copy_via_commands(text, &fallback_commands()).map_err(|fallback_err| {
            ProverbError::Clipboard(format!("{primary_err}; fallback: {fallback_err}"))
        })
    }
}

/// A command that reads text on stdin and puts it on the clipboard.
type CopyCommand = (&'static str, &'static [&'static str]);

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];
const XSEL_ARGS: &[&str] = &["--clipboard", "--input"];

fn fallback_commands() -> Vec<CopyCommand> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", NO_ARGS)]
    } else if cfg!(windows) {
        vec![("clip", NO_ARGS)]
    } else {
        let mut commands: Vec<CopyCommand> = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            commands.push(("wl-copy", NO_ARGS));
        }
        commands.push(("xclip", XCLIP_ARGS));
        commands.push(("xsel", XSEL_ARGS));
        commands
    }
}

/// Temporary file holding the text while a copy tool reads it.
///
/// The file is removed when the surface is dropped, whatever the copy outcome.
struct TransientCopySurface {
    file: NamedTempFile,
}

impl TransientCopySurface {
    fn new(text: &str) -> std::io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    #[cfg(test)]
    fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    fn copy_with(&self, (program, args): CopyCommand) -> Result<(), String> {
        let input = self.file.reopen().map_err(|e| e.to_string())?;
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::from(input))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| format!("{program}: {e}"))?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("{program}: exited with {status}"))
        }
    }
}

fn copy_via_commands(text: &str, commands: &[CopyCommand]) -> Result<(), String> {
    let surface = TransientCopySurface::new(text).map_err(|e| e.to_string())?;
    let mut errors = Vec::new();
    for &command in commands {
        match surface.copy_with(command) {
            Ok(()) => {
                tracing::debug!(program = command.0, "copied via fallback");
                return Ok(());
            }
            Err(e) => errors.push(e),
        }
    }
    if errors.is_empty() {
        errors.push("no copy command available".into());
    }
    Err(errors.join(", "))
}
