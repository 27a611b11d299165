//! Structured guideline records.
//!
//! A [`GuidelineRecord`] is the unit the extraction pipeline produces and the
//! resolver returns. Records are created in bulk during document extraction,
//! never mutated afterwards, and replaced wholesale on re-extraction.
//!
//! The serialized form is a JSON object with the fields
//! `section_code, condition, definition, investigations, treatment`, and the
//! full store persists as an ordered JSON array of these objects.

use serde::{Deserialize, Serialize};
use stg_types::SectionCode;

/// One structured guideline entry extracted from the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineRecord {
    /// Dotted numeric identifier, unique within the store; defines canonical ordering.
    pub section_code: SectionCode,

    /// Free-text condition name, the primary matching key.
    ///
    /// Not guaranteed unique, but treated as such: lookups return the first
    /// record in store order with a given title.
    pub condition: String,

    /// Definition or overview text; empty string when the source section had none.
    #[serde(default)]
    pub definition: String,

    /// Ordered investigation line items; empty when the source section had none.
    #[serde(default)]
    pub investigations: Vec<String>,

    /// Ordered treatment line items; empty when the source section had none.
    #[serde(default)]
    pub treatment: Vec<String>,
}
