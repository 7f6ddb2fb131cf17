//! screenshot-id command: Render HTML and print the server cache id
//!
//! The service renders once, stores the PNG in its cache, and answers with
//! an id; the image itself stays on the server under `/cache/<id>.png`.

use crate::client::{RenderClient, DEFAULT_SERVER};
use crate::input::get_html;
use crate::options::{ImageFormat, RenderOptions};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args)]
pub struct ScreenshotIdArgs {
    /// HTML file to render
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Render an inline HTML string
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

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Device scale factor
    #[arg(long)]
    scale: Option<f64>,

    /// Image format
    #[arg(long, value_enum)]
    format: Option<ImageFormat>,

    /// JPEG quality (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: Option<u8>,

    /// Capture the full scrollable page
    #[arg(long)]
    full_page: bool,
}

/// Run the screenshot-id command
pub async fn run_screenshot_id(args: ScreenshotIdArgs) -> Result<()> {
    let html = get_html(
        args.file.as_deref(),
        args.html.as_deref(),
        args.stdin,
        "screenshot-id",
    )
    .await?;

    let options = RenderOptions {
        width: args.width,
        height: args.height,
        scale: args.scale,
        format: args.format,
        quality: args.quality,
        full_page: if args.full_page { Some(true) } else { None },
    };

    eprintln!("Rendering {} bytes of HTML...", html.len());

    let client = match args.timeout {
        Some(ms) => RenderClient::with_timeout(&args.server, Duration::from_millis(ms))?,
        None => RenderClient::new(&args.server)?,
    };

    let cache_id = client.screenshot_id(&html, &options).await?;

    println!("{}", cache_id);
    eprintln!("Cached at {}", client.cache_url(&cache_id));

    Ok(())
}
