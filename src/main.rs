//! htmlshot CLI
//!
//! Talks to an html-to-image rendering service over HTTP.
//! The heavy lifting (headless Chrome) happens server-side.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod client;
mod error;
mod input;
mod options;
mod sanitize;
mod screenshot;
mod screenshot_id;

use sanitize::{SanitizeArgs, run_sanitize};
use screenshot::{ScreenshotArgs, run_screenshot};
use screenshot_id::{ScreenshotIdArgs, run_screenshot_id};

#[derive(Parser)]
#[command(name = "htmlshot")]
#[command(version)]
#[command(about = "Render HTML to images via the html-to-image service")]
#[command(long_about = "Sends HTML to an html-to-image rendering service and formats the response.\n\nCommands:\n  screenshot      Render HTML and print a Markdown base64 data URI\n  screenshot-id   Render HTML and print the server-side cache id\n  sanitize        Strip unsafe markup from HTML server-side")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render HTML and print a Markdown base64 data URI
    Screenshot(ScreenshotArgs),
    /// Render HTML and print the server-side cache id
    ScreenshotId(ScreenshotIdArgs),
    /// Strip unsafe markup from HTML via the service
    Sanitize(SanitizeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screenshot(args) => run_screenshot(args).await,
        Commands::ScreenshotId(args) => run_screenshot_id(args).await,
        Commands::Sanitize(args) => run_sanitize(args).await,
    }
}
