//! htmlshot: client for the html-to-image rendering service
//!
//! Commands:
//! - screenshot: render HTML and print a Markdown base64 data URI
//! - screenshot-id: render HTML and print the server-side cache id
//! - sanitize: strip unsafe markup from HTML server-side

pub mod client;
pub mod error;
pub mod input;
pub mod options;
pub mod sanitize;
pub mod screenshot;
pub mod screenshot_id;

pub use client::{RenderClient, DEFAULT_SERVER};
pub use error::{RenderError, Result};
pub use options::{ImageFormat, RenderOptions, SanitizeOptions};
pub use screenshot::{markdown_image, render_markdown};
