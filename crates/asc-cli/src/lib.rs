//! ASC CLI - command line tools for the App Store Connect API.
//!
//! - generate_token: signs a token and copies a ready-to-run curl command

pub mod clipboard;
pub mod config;
pub mod run;

pub use clipboard::{ClipboardError, ClipboardSink, MemoryClipboard, SystemClipboard};
pub use config::Config;
pub use run::{run, Outcome};
