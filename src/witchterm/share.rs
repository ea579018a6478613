use crate::error::{Result, WitchError};
use crate::model::CardRecord;
use std::process::Command;

/// What gets handed to the share capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub url: String,
    pub title: Option<String>,
}

impl SharePayload {
    /// Page reference for the current card, or the bare page when nothing has
    /// been drawn yet.
    pub fn for_card(base_url: &str, card: Option<&CardRecord>) -> Self {
        let base = base_url.trim_end_matches('/');
        match card {
            Some(card) => Self {
                url: format!("{}/#{}", base, card.slug()),
                title: Some(card.name.clone()),
            },
            None => Self {
                url: base.to_string(),
                title: None,
            },
        }
    }

    /// Clipboard text: "title\nurl", or just the url.
    pub fn to_text(&self) -> String {
        match &self.title {
            Some(title) => format!("{}\n{}", title, self.url),
            None => self.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to a system share sheet.
    Shared,
    /// Copied to the clipboard.
    Copied,
    /// The user backed out.
    Cancelled,
}

pub trait ShareTarget {
    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome>;
}

/// Desktop terminals have no share sheet, so sharing means copying the link.
#[derive(Debug, Default)]
pub struct ClipboardShare;

impl ShareTarget for ClipboardShare {
    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome> {
        copy_to_clipboard(&payload.to_text())?;
        Ok(ShareOutcome::Copied)
    }
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(Command::new("pbcopy"), "pbcopy", text)
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        match pipe_to(xclip, "xclip", text) {
            Ok(()) => Ok(()),
            Err(first) => {
                tracing::debug!(error = %first, "xclip unavailable, trying xsel");
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                pipe_to(xsel, "xsel", text).map_err(|_| {
                    WitchError::Share("no clipboard tool found (install xclip or xsel)".into())
                })
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(Command::new("clip"), "clip", text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(WitchError::Share(
            "clipboard not supported on this platform".to_string(),
        ))
    }
}

#[allow(dead_code)]
fn pipe_to(mut command: Command, name: &str, text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| WitchError::Share(format!("failed to spawn {}: {}", name, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| WitchError::Share(format!("failed to write to {}: {}", name, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| WitchError::Share(format!("failed to wait for {}: {}", name, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(WitchError::Share(format!("{} exited with error", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_for_card() {
        let card = CardRecord::new("The Moon", "Dream.", "moon.png");
        let payload = SharePayload::for_card("https://witchweb3.com/", Some(&card));
        assert_eq!(payload.url, "https://witchweb3.com/#the-moon");
        assert_eq!(payload.to_text(), "The Moon\nhttps://witchweb3.com/#the-moon");
    }

    #[test]
    fn test_payload_without_card() {
        let payload = SharePayload::for_card("https://witchweb3.com", None);
        assert_eq!(payload.url, "https://witchweb3.com");
        assert_eq!(payload.to_text(), "https://witchweb3.com");
    }
}
