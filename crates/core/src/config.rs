//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during query handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::constants::DEFAULT_MINIMUM_CONFIDENCE;
use crate::{GuidelineError, GuidelineResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    records_path: PathBuf,
    abbreviations_path: PathBuf,
    minimum_confidence: f64,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `minimum_confidence` is the score (0-100) below which the resolver
    /// reports no match instead of returning its best approximate candidate.
    pub fn new(
        records_path: PathBuf,
        abbreviations_path: PathBuf,
        minimum_confidence: f64,
    ) -> GuidelineResult<Self> {
        if !minimum_confidence.is_finite() || !(0.0..=100.0).contains(&minimum_confidence) {
            return Err(GuidelineError::InvalidInput(
                "minimum_confidence must be a finite value between 0 and 100".into(),
            ));
        }

        Ok(Self {
            records_path,
            abbreviations_path,
            minimum_confidence,
        })
    }

    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    pub fn abbreviations_path(&self) -> &Path {
        &self.abbreviations_path
    }

    pub fn minimum_confidence(&self) -> f64 {
        self.minimum_confidence
    }
}

/// Parse the minimum confidence from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default of zero
/// (always accept the best match).
pub fn minimum_confidence_from_env_value(value: Option<String>) -> GuidelineResult<f64> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let parsed = match value {
        Some(v) => v.parse::<f64>().map_err(|e| {
            GuidelineError::InvalidInput(format!("invalid minimum confidence {v:?}: {e}"))
        })?,
        None => return Ok(DEFAULT_MINIMUM_CONFIDENCE),
    };

    if !parsed.is_finite() || !(0.0..=100.0).contains(&parsed) {
        return Err(GuidelineError::InvalidInput(
            "minimum confidence must be a finite value between 0 and 100".into(),
        ));
    }

    Ok(parsed)
}
