//! Approximate string similarity scoring.
//!
//! Provides the edit-distance-derived ratio the resolver falls back to when a
//! query matches no section code. Scores are 0-100, case-insensitive, and
//! token-order-insensitive: both sides are lower-cased, split on whitespace,
//! sorted, and rejoined before the normalized Levenshtein ratio is computed,
//! so "infection urinary tract" scores 100 against "urinary tract infection".

/// Scores the similarity of `a` and `b` on a 0-100 scale.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let a = sort_tokens(a);
    let b = sort_tokens(b);
    strsim::normalized_levenshtein(&a, &b) * 100.0
}

/// Finds the highest-scoring candidate for `query`.
///
/// Returns the candidate's index and score. Ties break to the first
/// candidate encountered, which keeps resolution deterministic for stores
/// with duplicate or equally-distant titles. Returns `None` only for an
/// empty candidate set.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let score = token_sort_ratio(query, candidate);
        let better = match best {
            None => true,
            Some((_, top)) => score > top,
        };
        if better {
            best = Some((index, score));
        }
    }

    best
}

fn sort_tokens(text: &str) -> String {
    let mut tokens: Vec<String> = text
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
