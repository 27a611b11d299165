//! Sub-field extraction for section bodies.
//!
//! Pulls the definition, investigations, and treatment fields out of one
//! section's raw body text. The extractor is an explicit state machine over
//! lines: it tracks which field is currently being accumulated and switches on
//! recognized label lines, rather than relying on greedy lookahead patterns.
//!
//! Label matching is case-sensitive on the leading capital letter. This is a
//! heuristic: labels in the source documents are capitalized at the start of a
//! line, while the same words mid-sentence are not, so lower-case occurrences
//! never open a field. An unrecognized capitalized label line (for example
//! "Prevention:") closes the current field and its content is discarded.
//!
//! A missing label is not an error: the corresponding field is simply empty.

/// Labels that open the definition field. First satisfied label wins.
const DEFINITION_LABELS: &[&str] = &["Definition", "Description", "Overview"];

/// Labels that open the investigations field. Longer form listed first so the
/// plural matches before its prefix.
const INVESTIGATIONS_LABELS: &[&str] = &["Investigations", "Investigation"];

/// Labels that open the treatment field.
const TREATMENT_LABELS: &[&str] = &["Treatment", "Management"];

/// Sub-fields extracted from one section body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    /// Definition text, trimmed; empty when no definition label was found.
    pub definition: String,
    /// Investigation line items, trimmed, empty lines dropped.
    pub investigations: Vec<String>,
    /// Treatment line items, trimmed, empty lines dropped.
    pub treatment: Vec<String>,
}

/// The field currently being accumulated.
#[derive(Clone, Copy)]
enum Target {
    /// Before any label, or after an unrecognized or repeated label.
    Discard,
    Definition,
    Investigations,
    Treatment,
}

/// Extracts the definition, investigations, and treatment fields from `body`.
pub fn extract_fields(body: &str) -> ExtractedFields {
    let mut definition: Vec<&str> = Vec::new();
    let mut investigations: Vec<&str> = Vec::new();
    let mut treatment: Vec<&str> = Vec::new();

    let mut seen_definition = false;
    let mut seen_investigations = false;
    let mut seen_treatment = false;

    let mut target = Target::Discard;

    for line in body.lines() {
        if let Some(rest) = match_label(line, DEFINITION_LABELS) {
            target = if seen_definition {
                Target::Discard
            } else {
                seen_definition = true;
                definition.push(rest);
                Target::Definition
            };
            continue;
        }
        if let Some(rest) = match_label(line, INVESTIGATIONS_LABELS) {
            target = if seen_investigations {
                Target::Discard
            } else {
                seen_investigations = true;
                investigations.push(rest);
                Target::Investigations
            };
            continue;
        }
        if let Some(rest) = match_label(line, TREATMENT_LABELS) {
            target = if seen_treatment {
                Target::Discard
            } else {
                seen_treatment = true;
                treatment.push(rest);
                Target::Treatment
            };
            continue;
        }
        if is_generic_label(line) {
            target = Target::Discard;
            continue;
        }

        match target {
            Target::Definition => definition.push(line),
            Target::Investigations => investigations.push(line),
            Target::Treatment => treatment.push(line),
            Target::Discard => {}
        }
    }

    ExtractedFields {
        definition: definition.join("\n").trim().to_owned(),
        investigations: clean_lines(&investigations),
        treatment: clean_lines(&treatment),
    }
}

/// Matches a line against the given labels: `<Label>:` at the first column.
///
/// Returns the text following the colon on the same line.
fn match_label<'a>(line: &'a str, labels: &[&str]) -> Option<&'a str> {
    for label in labels {
        if let Some(rest) = line.strip_prefix(label).and_then(|r| r.strip_prefix(':')) {
            return Some(rest);
        }
    }
    None
}

/// Recognizes a generic field boundary: a single capitalized word followed by
/// a colon at the first column (e.g. "Prevention:", "Complications:").
fn is_generic_label(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.is_empty() || !bytes[0].is_ascii_uppercase() {
        return false;
    }

    let mut i = 1;
    while i < bytes.len() && bytes[i].is_ascii_lowercase() {
        i += 1;
    }

    i > 1 && bytes.get(i) == Some(&b':')
}

fn clean_lines(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
