//! Clipboard sinks.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Write-only destination for the generated command.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Host clipboard.
///
/// On X11 and Wayland the contents are served by this process, so they only
/// outlive it when a clipboard manager picks them up.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// In-process clipboard that keeps the last copied text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_last_copy() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.copy("first").unwrap();
        clipboard.copy("second").unwrap();

        assert_eq!(clipboard.contents.as_deref(), Some("second"));
    }
}
