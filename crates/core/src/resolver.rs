//! Query resolution.
//!
//! Maps noisy free-text input to a guideline record through a layered
//! matching strategy with fixed precedence:
//!
//! 1. normalize (trim, lower-case)
//! 2. strip a recognized language prefix, recording the hint
//! 3. whole-string abbreviation expansion
//! 4. exact section-code match (always wins over title similarity)
//! 5. approximate title match, highest score, first-in-store tie-break
//! 6. minimum-confidence gate (default zero: always accept the best match)
//!
//! The resolver owns no state of its own beyond shared handles to the record
//! store and abbreviation table, so fixture stores and tables can be injected
//! in tests.

use crate::abbreviations::AbbreviationTable;
use crate::record::GuidelineRecord;
use crate::similarity;
use crate::store::RecordStore;
use std::sync::Arc;

/// Language hints recognized as query prefixes (e.g. "sw: kifua kikuu").
///
/// The hint is recorded for the collaborator rendering the response; it never
/// affects matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageHint {
    English,
    Swahili,
}

impl LanguageHint {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "en" => Some(Self::English),
            "sw" => Some(Self::Swahili),
            _ => None,
        }
    }

    /// Two-letter code for the hint.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Swahili => "sw",
        }
    }
}

/// Terminal outcome of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved(GuidelineRecord),
    NotFound,
}

/// Result of resolving one query: the outcome plus the language hint
/// stripped from the input, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: ResolveOutcome,
    pub language: Option<LanguageHint>,
}

/// Resolves free-text queries against a record store.
#[derive(Debug, Clone)]
pub struct QueryResolver {
    store: Arc<RecordStore>,
    abbreviations: Arc<AbbreviationTable>,
    minimum_confidence: f64,
}

impl QueryResolver {
    /// Creates a resolver over the given store and abbreviation table.
    ///
    /// `minimum_confidence` is the 0-100 score below which approximate title
    /// matches are rejected; zero accepts the best match unconditionally.
    pub fn new(
        store: Arc<RecordStore>,
        abbreviations: Arc<AbbreviationTable>,
        minimum_confidence: f64,
    ) -> Self {
        Self {
            store,
            abbreviations,
            minimum_confidence,
        }
    }

    /// Resolves `query` to a guideline record, or `NotFound`.
    pub fn resolve(&self, query: &str) -> Resolution {
        let normalized = query.trim().to_lowercase();
        let (stripped, language) = strip_language_prefix(&normalized);

        // Whole-string expansion only: a key inside a longer word never fires.
        let text = match self.abbreviations.lookup(stripped) {
            Some(expansion) => {
                tracing::debug!("expanded abbreviation {:?} to {:?}", stripped, expansion);
                expansion
            }
            None => stripped.to_owned(),
        };

        if let Some(record) = self.store.find_by_code(&text) {
            tracing::debug!("resolved {:?} by exact section code", text);
            return Resolution {
                outcome: ResolveOutcome::Resolved(record.clone()),
                language,
            };
        }

        let titles = self.store.all_titles();
        let Some((index, score)) = similarity::best_match(&text, titles.iter().copied()) else {
            // Empty store: there is no candidate set to score against.
            return Resolution {
                outcome: ResolveOutcome::NotFound,
                language,
            };
        };

        if score < self.minimum_confidence {
            tracing::debug!(
                "best title match {:?} scored {:.1}, below minimum confidence {:.1}",
                titles[index],
                score,
                self.minimum_confidence
            );
            return Resolution {
                outcome: ResolveOutcome::NotFound,
                language,
            };
        }

        tracing::debug!(
            "resolved {:?} to title {:?} with score {:.1}",
            text,
            titles[index],
            score
        );

        // Duplicate titles map deterministically to the first record in
        // store order.
        let outcome = match self.store.find_by_title_exact(titles[index]) {
            Some(record) => ResolveOutcome::Resolved(record.clone()),
            None => ResolveOutcome::NotFound,
        };

        Resolution { outcome, language }
    }
}

/// Splits a recognized language prefix off the normalized query.
fn strip_language_prefix(text: &str) -> (&str, Option<LanguageHint>) {
    if let Some((prefix, rest)) = text.split_once(':') {
        if let Some(hint) = LanguageHint::from_prefix(prefix.trim()) {
            return (rest.trim(), Some(hint));
        }
    }
    (text, None)
}
