//! SVG whitespace minifier.
//!
//! Streams quick-xml events from a reader straight into a writer, trimming
//! leading/trailing whitespace from every text node and dropping the nodes
//! that were whitespace only. Everything else (declaration, doctype,
//! processing instructions, comments, CDATA, attribute spelling) is copied
//! through unchanged, so minifying an already-minified document is a no-op.
//!
//! CDATA sections are kept verbatim and, like child elements, delimit the
//! text nodes around them; only the plain text on either side is trimmed.

use quick_xml::Decoder;
use quick_xml::errors::IllFormedError;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::error::SvgError;

/// Elements whose text content is copied through untouched.
///
/// Stylesheet/script minification was deferred in the original tool;
/// trimming here would corrupt selectors and string literals.
const VERBATIM_ELEMENTS: &[&[u8]] = &[b"style", b"script"];

fn is_verbatim(start: &BytesStart<'_>) -> bool {
    VERBATIM_ELEMENTS.contains(&start.local_name().as_ref())
}

/// Minify an SVG document, returning the re-serialized UTF-8 bytes.
///
/// Entity spellings such as `&#xA0;` survive byte-for-byte: references are
/// copied through as-is, and only the literal text around them is trimmed.
///
/// # Errors
///
/// Returns [`SvgError`] if the document is not well-formed XML, including
/// input that ends with elements still open.
pub fn minify(svg: &str) -> Result<Vec<u8>, SvgError> {
    let mut reader = Reader::from_str(svg);
    reader.config_mut().trim_text(false);

    let mut writer = Writer::new(Vec::new());
    // Depth of enclosing <style>/<script> elements.
    let mut verbatim_depth = 0usize;
    // Elements opened but not yet closed. The reader catches mismatched end
    // tags on its own, but reaching EOF with open elements it reports as a
    // plain end of input; that must still fail as malformed XML.
    let mut open: Vec<String> = Vec::new();
    // Adjacent text and entity-reference events form one DOM text node;
    // trimming applies to the edges of the whole run, not each fragment.
    let mut run: Vec<Event<'_>> = Vec::new();

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Text(_) | Event::GeneralRef(_) if verbatim_depth == 0 => run.push(event),
            Event::Eof => {
                if let Some(tag) = open.pop() {
                    return Err(quick_xml::Error::IllFormed(IllFormedError::MissingEndTag(tag)).into());
                }
                flush_run(&mut run, &mut writer, reader.decoder())?;
                break;
            }
            Event::Start(e) => {
                flush_run(&mut run, &mut writer, reader.decoder())?;
                if is_verbatim(&e) {
                    verbatim_depth += 1;
                }
                open.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                writer.write_event(Event::Start(e))?;
            }
            Event::End(e) => {
                flush_run(&mut run, &mut writer, reader.decoder())?;
                if VERBATIM_ELEMENTS.contains(&e.local_name().as_ref()) {
                    verbatim_depth = verbatim_depth.saturating_sub(1);
                }
                open.pop();
                writer.write_event(Event::End(e))?;
            }
            // Empty elements, CDATA, comments, the XML declaration, doctype
            // and processing instructions pass through; like any non-text
            // node they terminate the current text run.
            other => {
                flush_run(&mut run, &mut writer, reader.decoder())?;
                writer.write_event(other)?;
            }
        }
    }

    Ok(writer.into_inner())
}

/// Write out a pending text run, trimming its leading and trailing edges.
///
/// Entity references inside the run are written unchanged; a fragment that
/// becomes empty after trimming is dropped.
fn flush_run(
    run: &mut Vec<Event<'_>>,
    writer: &mut Writer<Vec<u8>>,
    decoder: Decoder,
) -> Result<(), SvgError> {
    let last = run.len().checked_sub(1);
    for (i, event) in run.drain(..).enumerate() {
        match event {
            Event::Text(text) => {
                let decoded = decoder.decode(&text)?;
                // Entity references arrive as separate events, so this
                // fragment is literal text; trimming char-wise covers the
                // full Unicode whitespace set (U+00A0, U+2028, ...).
                let mut value: &str = &decoded;
                if i == 0 {
                    value = value.trim_start();
                }
                if Some(i) == last {
                    value = value.trim_end();
                }
                if !value.is_empty() {
                    writer.write_event(Event::Text(BytesText::from_escaped(value)))?;
                }
            }
            other => writer.write_event(other)?,
        }
    }
    Ok(())
}
