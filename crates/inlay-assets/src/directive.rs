//! Directive command validation.

use crate::error::AssetError;
use crate::scanner::ScannedDirective;

/// A validated directive command.
///
/// Closed set: adding a new command means adding a variant here and a render
/// arm in [`AssetRenderer::render`](crate::AssetRenderer::render).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Inline the referenced file as a wrapped base64 literal.
    Include {
        /// Path of the asset, as written in the directive.
        path: String,
    },
}

impl Command {
    /// Validate a scanned directive into a command.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::InvalidDirective`] for an unknown command name
    /// or a wrong argument count; the error carries the original marker
    /// text for diagnostics.
    pub fn parse(directive: &ScannedDirective<'_>) -> Result<Self, AssetError> {
        match directive.tokens.as_slice() {
            ["include", path] => Ok(Self::Include {
                path: (*path).to_owned(),
            }),
            _ => Err(AssetError::InvalidDirective {
                marker: directive.marker.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scanned<'a>(marker: &'a str, tokens: &[&'a str]) -> ScannedDirective<'a> {
        ScannedDirective {
            marker,
            tokens: tokens.to_vec(),
        }
    }

    #[test]
    fn test_include_with_one_filename() {
        let command = Command::parse(&scanned("/*! include a.txt */", &["include", "a.txt"]));
        assert_eq!(
            command.unwrap(),
            Command::Include {
                path: "a.txt".to_owned()
            }
        );
    }

    #[test]
    fn test_include_without_filename_rejected() {
        let err = Command::parse(&scanned("/*! include */", &["include"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid directive `/*! include */`");
    }

    #[test]
    fn test_include_with_extra_arguments_rejected() {
        let result = Command::parse(&scanned("/*! include a b */", &["include", "a", "b"]));
        assert!(matches!(
            result,
            Err(AssetError::InvalidDirective { .. })
        ));
    }

    #[test]
    fn test_unknown_command_rejected() {
        let result = Command::parse(&scanned("/*! copy a.txt */", &["copy", "a.txt"]));
        assert!(matches!(
            result,
            Err(AssetError::InvalidDirective { .. })
        ));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let result = Command::parse(&scanned("/*!  */", &[]));
        assert!(matches!(
            result,
            Err(AssetError::InvalidDirective { .. })
        ));
    }
}
