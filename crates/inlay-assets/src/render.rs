//! Asset loading and rendering.

use std::path::PathBuf;

use crate::directive::Command;
use crate::encode;
use crate::error::AssetError;
use crate::svg;

/// Renders directive commands into base64 asset payloads.
///
/// Asset paths are resolved against a root directory; the CLI passes the
/// process working directory. Files are read fresh on every call, no caching.
#[derive(Debug)]
pub struct AssetRenderer {
    root: PathBuf,
}

impl AssetRenderer {
    /// Create a renderer resolving asset paths against `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Render a command to the contiguous base64 form of its asset.
    ///
    /// The caller wraps the result into continuation lines with
    /// [`encode::wrap`].
    ///
    /// # Errors
    ///
    /// Returns [`AssetError`] if the file is unreadable, not valid UTF-8,
    /// or (for `.svg` files) not well-formed XML.
    pub fn render(&self, command: &Command) -> Result<String, AssetError> {
        match command {
            Command::Include { path } => self.render_include(path),
        }
    }

    fn render_include(&self, path: &str) -> Result<String, AssetError> {
        tracing::debug!(path, "inlining asset");

        let bytes = std::fs::read(self.root.join(path)).map_err(|source| AssetError::AssetIo {
            path: path.to_owned(),
            source,
        })?;
        // UTF-8 is required either way: for parsing in the SVG case, as a
        // validated passthrough otherwise.
        let text = String::from_utf8(bytes).map_err(|source| AssetError::Encoding {
            path: path.to_owned(),
            source,
        })?;

        // Case-sensitive suffix check, matching the original tool.
        let content = if path.ends_with(".svg") {
            svg::minify(&text).map_err(|source| AssetError::MarkupParse {
                path: path.to_owned(),
                source,
            })?
        } else {
            text.into_bytes()
        };

        Ok(encode::encode(&content))
    }
}
