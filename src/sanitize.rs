//! sanitize command: Strip unsafe markup via the service
//!
//! The service always removes `<script>` tags; event handler attributes and
//! extra tags are stripped on request.

use crate::client::{RenderClient, DEFAULT_SERVER};
use crate::input::get_html;
use crate::options::SanitizeOptions;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args)]
pub struct SanitizeArgs {
    /// HTML file to sanitize
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Sanitize an inline HTML string
    #[arg(long)]
    html: Option<String>,

    /// Read HTML from stdin
    #[arg(long)]
    stdin: bool,

    /// Render service base URL
    #[arg(long, env = "HTMLSHOT_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Request timeout in milliseconds (runs without one when omitted)
    #[arg(long)]
    timeout: Option<u64>,

    /// Also strip inline on* event handler attributes
    #[arg(long)]
    remove_event_handlers: bool,

    /// Remove every occurrence of a tag (repeatable)
    #[arg(long, value_name = "TAG")]
    remove_tag: Vec<String>,
}

/// Run the sanitize command
pub async fn run_sanitize(args: SanitizeArgs) -> Result<()> {
    let html = get_html(
        args.file.as_deref(),
        args.html.as_deref(),
        args.stdin,
        "sanitize",
    )
    .await?;

    let options = SanitizeOptions {
        remove_event_handlers: if args.remove_event_handlers {
            Some(true)
        } else {
            None
        },
        remove_tags: args.remove_tag,
    };

    eprintln!("Sanitizing {} bytes of HTML...", html.len());

    let client = match args.timeout {
        Some(ms) => RenderClient::with_timeout(&args.server, Duration::from_millis(ms))?,
        None => RenderClient::new(&args.server)?,
    };

    let cleaned = client.sanitize(&html, &options).await?;

    println!("{}", cleaned);
    eprintln!("Done: {} bytes of HTML", cleaned.len());

    Ok(())
}
