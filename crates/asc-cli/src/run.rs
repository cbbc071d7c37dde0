//! Run-once driver: build the command, copy it, print it.

use std::io::Write;

use anyhow::{Context, Result};
use asc_core::{Clock, Es256Key, TokenBuilder};

use crate::clipboard::ClipboardSink;
use crate::config::Config;

/// What happened to the clipboard copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub copied: bool,
}

/// Build the authorization command, copy it to `clipboard` and echo it to `out`.
///
/// Key and signing failures abort before any output. A clipboard failure is
/// logged and the command is still printed.
pub fn run<W: Write>(
    config: &Config,
    clock: &dyn Clock,
    clipboard: &mut dyn ClipboardSink,
    out: &mut W,
) -> Result<Outcome> {
    let key = Es256Key::from_pem(&config.private_key_pem)
        .context("Failed to load App Store Connect private key")?;
    let builder = TokenBuilder::new(config.credentials.clone(), key);
    let command = builder
        .build_authorization_command(clock)
        .context("Failed to build authorization command")?;

    let copied = match clipboard.copy(&command) {
        Ok(()) => {
            tracing::info!(kid = %config.credentials.key_id, "Copied curl command to clipboard");
            writeln!(out, "Curl command copied to clipboard:")?;
            true
        }
        Err(e) => {
            tracing::warn!("{}", e);
            writeln!(out, "Clipboard unavailable ({}); curl command:", e)?;
            false
        }
    };
    writeln!(out, "{}", command)?;
    out.flush()?;

    Ok(Outcome { copied })
}
