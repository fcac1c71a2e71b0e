//! Query normalization: the first step of every search.

/// Terms this short (in chars) are noise for fuzzy matching ("of", "a", "to").
pub const MAX_NOISE_TERM_LEN: usize = 2;

/// Lowercase and trim. This is the form every substring check runs against.
///
/// Inner whitespace is kept: `"first  aid"` only matches a title that has the
/// double space too. The term list below tolerates sloppy spacing.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A query after normalization, ready for scoring.
///
/// Only constructible from a non-blank query, so the scorer never has to
/// think about the empty case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    terms: Vec<String>,
}

impl NormalizedQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = normalize(raw);
        if text.is_empty() {
            return None;
        }
        let terms = text.split_whitespace().map(str::to_string).collect();
        Some(Self { text, terms })
    }

    /// The whole normalized query.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every whitespace-separated term, including short ones.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_multi_term(&self) -> bool {
        self.terms.len() > 1
    }

    /// Terms long enough to take part in fuzzy matching.
    pub fn fuzzy_terms(&self) -> impl Iterator<Item = &str> {
        self.terms
            .iter()
            .map(String::as_str)
            .filter(|term| term.chars().count() > MAX_NOISE_TERM_LEN)
    }
}
