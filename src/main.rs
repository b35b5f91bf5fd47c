//! Video Tools CLI - the video workflow helper
//!
//! Sets up per-user settings and ingests camera media into a project's
//! content-addressed originals directory.

use video_tools::app;
use video_tools::config::{CliArgs, SettingsStore};
use video_tools::error::Result;
use video_tools::prompt::Console;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never land in the middle of a prompt
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::from_env();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let store = SettingsStore::locate()?;
    let mut console = Console::stdio();

    app::run(args.tokens.as_slice(), &store, &mut console)?;
    Ok(())
}
