//! Error types for directive scanning and asset rendering.

use std::string::FromUtf8Error;

/// Error during SVG minification.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SvgError {
    /// XML parsing error.
    #[error("XML parse error")]
    XmlParse(#[from] quick_xml::Error),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Write error during re-serialization.
    #[error("XML write error")]
    Io(#[from] std::io::Error),
}

/// Error from scanning or rendering an input.
///
/// Every variant is fatal: the run aborts on the first error, and any output
/// already streamed must be considered unusable.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AssetError {
    /// Unknown directive command or wrong argument count.
    #[error("invalid directive `{marker}`")]
    InvalidDirective {
        /// Original marker text, for diagnostics.
        marker: String,
    },

    /// Asset file missing or unreadable.
    #[error("cannot read asset `{path}`: {source}")]
    AssetIo {
        /// Path as written in the directive.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Asset content is not valid UTF-8.
    #[error("asset `{path}` is not valid UTF-8")]
    Encoding {
        /// Path as written in the directive.
        path: String,
        /// Underlying decoding error.
        source: FromUtf8Error,
    },

    /// Asset with an `.svg` extension is not well-formed XML.
    #[error("malformed SVG in `{path}`: {source}")]
    MarkupParse {
        /// Path as written in the directive.
        path: String,
        /// Underlying minification error.
        source: SvgError,
    },

    /// Output stream write failure.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
