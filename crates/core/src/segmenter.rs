//! Document segmentation.
//!
//! Splits the full extracted text of a guidelines document into an ordered
//! sequence of raw section blocks, each tagged with its dotted numeric code
//! and title. Segmentation uses only positional and lexical cues: a line whose
//! first token is a well-formed [`SectionCode`], followed by whitespace and a
//! non-empty title, opens a new section; everything up to the next such line
//! (or end of input) is that section's body.
//!
//! The hierarchy suggested by dotted codes is deliberately flattened: a "5.2"
//! heading and a "5.2.1" heading each produce independent sibling sections.
//! Text before the first heading is discarded.

use stg_types::SectionCode;

/// One contiguous section block as found in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    /// Dotted numeric code from the heading line, trimmed.
    pub code: SectionCode,
    /// Title text following the code on the heading line, trimmed.
    pub title: String,
    /// Body text between this heading and the next (or end of input).
    pub body: String,
}

/// Scans `document` and returns its section blocks in document order.
///
/// The final section's body runs to end of input; a document whose last
/// heading has no successor still yields that section in full.
pub fn segment(document: &str) -> Vec<RawSection> {
    let mut sections = Vec::new();
    let mut current: Option<RawSection> = None;

    for line in document.lines() {
        if let Some((code, title)) = parse_heading(line) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(RawSection {
                code,
                title,
                body: String::new(),
            });
        } else if let Some(section) = current.as_mut() {
            section.body.push_str(line);
            section.body.push('\n');
        }
    }

    if let Some(done) = current.take() {
        sections.push(done);
    }

    sections
}

/// Recognizes a section heading line.
///
/// Headings start at the first column: an indented code line is body text.
fn parse_heading(line: &str) -> Option<(SectionCode, String)> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }

    let (first, rest) = line.split_once(char::is_whitespace)?;
    let code = SectionCode::parse(first).ok()?;

    let title = rest.trim();
    if title.is_empty() {
        return None;
    }

    Some((code, title.to_owned()))
}
