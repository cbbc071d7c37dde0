//! CLI tool to copy an authorized App Store Connect curl command to the clipboard.
//!
//! Credentials come from ASC_ISSUER_ID, ASC_KEY_ID, ASC_BUNDLE_ID and either
//! ASC_PRIVATE_KEY or ASC_PRIVATE_KEY_PATH.

use asc_cli::{run, Config, SystemClipboard};
use asc_core::SystemClock;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sign an App Store Connect API token and copy a curl command using it
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    // Logs go to stderr so stdout holds only the command
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("generate_token=info".parse()?)
                .add_directive("asc_cli=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let mut stdout = std::io::stdout().lock();
    run(&config, &SystemClock, &mut SystemClipboard, &mut stdout)?;

    Ok(())
}
