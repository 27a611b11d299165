//! Constants used throughout the STG core crate.
//!
//! This module contains filename and configuration constants to ensure
//! consistency across the codebase and make maintenance easier.

/// Default filename for the persisted structured guideline records.
pub const DEFAULT_RECORDS_FILENAME: &str = "structured_guidelines.json";

/// Default filename for the persisted abbreviation table.
pub const DEFAULT_ABBREVIATIONS_FILENAME: &str = "abbreviations.json";

/// Default minimum confidence for approximate title matching.
///
/// Zero means the best-scoring title is always accepted, matching the
/// always-return-best-match behaviour of the source pipeline.
pub const DEFAULT_MINIMUM_CONFIDENCE: f64 = 0.0;
