//! Directive scanning and asset rendering for the `inlay` preprocessor.
//!
//! This crate turns a source text containing `/*! include FILE */` markers
//! into the same text with every marker replaced by a base64-encoded,
//! line-wrapped literal of the referenced file. SVG assets are
//! whitespace-minified before encoding so the embedded literal stays small.
//!
//! # Architecture
//!
//! The crate is organized into modules:
//! - [`scanner`]: lazy split of the input into raw spans and directives
//! - [`directive`]: validation of scanned directives into the closed
//!   [`Command`] set
//! - [`svg`]: whitespace-stripping SVG minifier
//! - [`encode`]: base64 encoding and 76-column continuation wrapping
//! - [`render`]: per-directive asset loading and dispatch
//!
//! [`expand`] ties these together and streams the result to a writer.
//!
//! # Example
//!
//! ```ignore
//! use inlay_assets::{AssetRenderer, expand};
//!
//! let renderer = AssetRenderer::new(std::env::current_dir()?);
//! let mut out = Vec::new();
//! expand("var ICON = \"/*! include icon.svg */\";", &renderer, &mut out)?;
//! ```

use std::io::Write;

pub mod directive;
pub mod encode;
mod error;
pub mod render;
pub mod scanner;
pub mod svg;

pub use directive::Command;
pub use error::{AssetError, SvgError};
pub use render::AssetRenderer;
pub use scanner::{ScannedDirective, Segment, scan};

/// Expand every directive in `input`, streaming the result to `out`.
///
/// Raw spans are written through byte-for-byte; each directive is rendered
/// and written as wrapped base64 chunks, every chunk preceded by the
/// continuation marker. Output is streamed, not buffered: on error, chunks
/// already written stay written and the caller must treat the whole output
/// as unusable.
///
/// # Errors
///
/// Returns the first [`AssetError`] encountered; nothing is retried.
pub fn expand<W: Write>(
    input: &str,
    renderer: &AssetRenderer,
    out: &mut W,
) -> Result<(), AssetError> {
    for segment in scan(input) {
        match segment {
            Segment::Raw(text) => out.write_all(text.as_bytes())?,
            Segment::Directive(directive) => {
                let command = Command::parse(&directive)?;
                let encoded = renderer.render(&command)?;
                for chunk in encode::wrap(&encoded) {
                    out.write_all(encode::CONTINUATION.as_bytes())?;
                    out.write_all(chunk.as_bytes())?;
                }
            }
        }
    }
    Ok(())
}
