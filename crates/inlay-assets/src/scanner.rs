//! Directive scanner.
//!
//! Splits an input text into an ordered sequence of [`Segment`]s: raw
//! passthrough spans and `/*! command args... */` directive markers.

use std::sync::LazyLock;

use regex::Regex;

/// Matches one directive marker. Non-greedy, and `.` does not cross
/// newlines, so the earliest `*/` on the same line closes the marker.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*!(.*?)\*/").unwrap());

/// A scanned unit of the input text.
///
/// Concatenating the raw text of `Raw` segments and the `marker` text of
/// `Directive` segments, in order, reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any marker, passed through byte-for-byte.
    Raw(&'a str),
    /// A directive marker.
    Directive(ScannedDirective<'a>),
}

/// A directive marker as found in the input, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDirective<'a> {
    /// The full marker text including the `/*!` and `*/` delimiters.
    pub marker: &'a str,
    /// Inner text split on whitespace runs, empty tokens discarded.
    ///
    /// May be empty for a marker with no inner tokens; rejected downstream.
    pub tokens: Vec<&'a str>,
}

/// Lazily scan `text` into segments.
///
/// The iterator is finite and non-restartable; each segment is produced on
/// demand so the driver can stream output without buffering the result.
pub fn scan(text: &str) -> Segments<'_> {
    Segments {
        text,
        cursor: 0,
        pending: None,
        done: false,
    }
}

/// Iterator over the [`Segment`]s of an input text. Created by [`scan`].
#[derive(Debug)]
pub struct Segments<'a> {
    text: &'a str,
    /// Byte offset of the first unconsumed input byte.
    cursor: usize,
    /// Directive held back while the preceding raw span is emitted.
    pending: Option<Segment<'a>>,
    done: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }
        if self.done {
            return None;
        }

        match MARKER_RE.captures_at(self.text, self.cursor) {
            Some(caps) => {
                let whole = caps.get(0).unwrap();
                let inner = caps.get(1).unwrap().as_str();
                let directive = Segment::Directive(ScannedDirective {
                    marker: whole.as_str(),
                    tokens: inner.split_whitespace().collect(),
                });
                let raw = &self.text[self.cursor..whole.start()];
                self.cursor = whole.end();
                if raw.is_empty() {
                    Some(directive)
                } else {
                    self.pending = Some(directive);
                    Some(Segment::Raw(raw))
                }
            }
            None => {
                self.done = true;
                let tail = &self.text[self.cursor..];
                self.cursor = self.text.len();
                if tail.is_empty() {
                    None
                } else {
                    Some(Segment::Raw(tail))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn directive<'a>(marker: &'a str, tokens: &[&'a str]) -> Segment<'a> {
        Segment::Directive(ScannedDirective {
            marker,
            tokens: tokens.to_vec(),
        })
    }

    #[test]
    fn test_no_markers_single_raw() {
        let segments: Vec<_> = scan("plain text, no markers").collect();
        assert_eq!(segments, vec![Segment::Raw("plain text, no markers")]);
    }

    #[test]
    fn test_empty_input_no_segments() {
        assert_eq!(scan("").count(), 0);
    }

    #[test]
    fn test_marker_between_raw_spans() {
        let segments: Vec<_> = scan("A/*! include hello.txt */B").collect();
        assert_eq!(
            segments,
            vec![
                Segment::Raw("A"),
                directive("/*! include hello.txt */", &["include", "hello.txt"]),
                Segment::Raw("B"),
            ]
        );
    }

    #[test]
    fn test_marker_at_start_no_leading_raw() {
        let segments: Vec<_> = scan("/*! include a.txt */rest").collect();
        assert_eq!(
            segments,
            vec![
                directive("/*! include a.txt */", &["include", "a.txt"]),
                Segment::Raw("rest"),
            ]
        );
    }

    #[test]
    fn test_marker_at_end_no_trailing_raw() {
        let segments: Vec<_> = scan("head/*! include a.txt */").collect();
        assert_eq!(
            segments,
            vec![
                Segment::Raw("head"),
                directive("/*! include a.txt */", &["include", "a.txt"]),
            ]
        );
    }

    #[test]
    fn test_back_to_back_markers_no_intervening_raw() {
        let segments: Vec<_> = scan("/*! include a *//*! include b */").collect();
        assert_eq!(
            segments,
            vec![
                directive("/*! include a */", &["include", "a"]),
                directive("/*! include b */", &["include", "b"]),
            ]
        );
    }

    #[test]
    fn test_empty_marker_yields_no_tokens() {
        let segments: Vec<_> = scan("/*!  */").collect();
        assert_eq!(segments, vec![directive("/*!  */", &[])]);
    }

    #[test]
    fn test_earliest_close_wins() {
        // The first `*/` closes the marker even with another later.
        let segments: Vec<_> = scan("/*! a */ tail */").collect();
        assert_eq!(
            segments,
            vec![directive("/*! a */", &["a"]), Segment::Raw(" tail */")]
        );
    }

    #[test]
    fn test_marker_does_not_span_lines() {
        let input = "/*! include\na.txt */";
        let segments: Vec<_> = scan(input).collect();
        assert_eq!(segments, vec![Segment::Raw(input)]);
    }

    #[test]
    fn test_whitespace_runs_collapse_to_tokens() {
        let segments: Vec<_> = scan("/*!   include\t \tfile name  */").collect();
        assert_eq!(
            segments,
            vec![directive(
                "/*!   include\t \tfile name  */",
                &["include", "file", "name"]
            )]
        );
    }

    #[test]
    fn test_segment_reconstruction() {
        let input = "start/*! include a.svg */middle/*!  */ end /*! copy x y */";
        let rebuilt: String = scan(input)
            .map(|segment| match segment {
                Segment::Raw(text) => text,
                Segment::Directive(d) => d.marker,
            })
            .collect();
        assert_eq!(rebuilt, input);
    }
}
