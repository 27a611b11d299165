//! # STG Core
//!
//! Core logic for the STG guideline knowledge base.
//!
//! This crate contains the document-to-record extraction pipeline and the
//! query-resolution pipeline:
//! - Document segmentation and sub-field extraction into [`GuidelineRecord`]s
//! - The in-memory [`RecordStore`] with JSON persistence
//! - The runtime-mutable, persisted [`AbbreviationTable`]
//! - The layered [`QueryResolver`] (code match, abbreviation expansion,
//!   approximate title match)
//!
//! **No transport concerns**: HTTP endpoints, webhook handling, and response
//! formatting belong to the calling binaries and collaborators, not here.

pub mod abbreviations;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod fields;
mod persist;
pub mod record;
pub mod resolver;
pub mod segmenter;
pub mod similarity;
pub mod store;

pub use abbreviations::AbbreviationTable;
pub use config::CoreConfig;
pub use error::{GuidelineError, GuidelineResult};
pub use extract::extract_records;
pub use record::GuidelineRecord;
pub use resolver::{LanguageHint, QueryResolver, Resolution, ResolveOutcome};
pub use stg_types::SectionCode;
pub use store::RecordStore;
