//! HTML input acquisition shared by the subcommands

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;
use tokio::fs;

/// Get the HTML document from --html, --stdin, or a positional file.
///
/// The document is passed through untouched; an empty string is sent as-is.
pub async fn get_html(
    file: Option<&Path>,
    inline: Option<&str>,
    stdin: bool,
    command: &str,
) -> Result<String> {
    if let Some(html) = inline {
        return Ok(html.to_string());
    }

    if stdin {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read stdin")?;
        return Ok(html);
    }

    if let Some(file) = file {
        return fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read file: {}", file.display()));
    }

    eprintln!("Usage:");
    eprintln!("  htmlshot {} <file.html>     Send an HTML file", command);
    eprintln!("  htmlshot {} --html <HTML>   Send an inline HTML string", command);
    eprintln!("  htmlshot {} --stdin         Read HTML from stdin", command);
    std::process::exit(1);
}
