//! screenshot command: Render HTML and emit a Markdown data URI
//!
//! The image never touches disk - the response bytes are base64-encoded
//! into a `data:` URI that Markdown viewers render inline.

use crate::client::{RenderClient, DEFAULT_SERVER};
use crate::error;
use crate::input::get_html;
use crate::options::{ImageFormat, RenderOptions};
use anyhow::Result;
use base64::Engine;
use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

/// Alt text used in the emitted Markdown image link.
const MARKDOWN_ALT: &str = "Base64图片";

#[derive(Args)]
pub struct ScreenshotArgs {
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

    /// Image format (the emitted data URI always declares image/png)
    #[arg(long, value_enum)]
    format: Option<ImageFormat>,

    /// JPEG quality (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: Option<u8>,

    /// Capture the full scrollable page
    #[arg(long)]
    full_page: bool,
}

/// Run the screenshot command
pub async fn run_screenshot(args: ScreenshotArgs) -> Result<()> {
    let html = get_html(
        args.file.as_deref(),
        args.html.as_deref(),
        args.stdin,
        "screenshot",
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

    let markdown = render_markdown(&client, &html, &options).await?;

    println!("{}", markdown);
    eprintln!("Done: {} bytes of Markdown", markdown.len());

    Ok(())
}

/// Render HTML and wrap the returned image as a Markdown data URI
pub async fn render_markdown(
    client: &RenderClient,
    html: &str,
    options: &RenderOptions,
) -> error::Result<String> {
    let bytes = client.screenshot(html, options).await?;
    Ok(markdown_image(&bytes))
}

/// Wrap image bytes as a Markdown-embedded base64 data URI.
///
/// The URI declares `image/png` regardless of the bytes; the format is
/// fixed, not sniffed from the body.
pub fn markdown_image(bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("![{}](data:image/png;base64,{})", MARKDOWN_ALT, b64)
}
