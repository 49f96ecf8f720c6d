//! Keyword list matching
//!
//! Every rule list uses exactly one mechanism: literal substring
//! membership, or compiled regex tests for lists that carry wildcard
//! terms. Match input must already be lowercased by the caller.

use regex::Regex;

/// One keyword list with a fixed matching mechanism
#[derive(Debug, Clone)]
pub enum KeywordSet {
    /// Plain substring membership
    Literal(Vec<String>),
    /// Compiled regex tests
    Pattern(Vec<Regex>),
}

impl KeywordSet {
    /// Build a literal substring list
    pub fn literal(terms: &[&str]) -> Self {
        KeywordSet::Literal(terms.iter().map(|t| t.to_string()).collect())
    }

    /// Build a regex list. Plain terms behave the same under both
    /// mechanisms, so a single wildcard term moves the whole list here.
    pub fn patterns(terms: &[&str]) -> Self {
        let compiled = terms
            .iter()
            .map(|t| Regex::new(t).expect("invalid keyword pattern"))
            .collect();
        KeywordSet::Pattern(compiled)
    }

    /// Test whether any term matches the lowercased text
    pub fn matches(&self, text: &str) -> bool {
        match self {
            KeywordSet::Literal(terms) => terms.iter().any(|t| text.contains(t.as_str())),
            KeywordSet::Pattern(patterns) => patterns.iter().any(|p| p.is_match(text)),
        }
    }

    /// Number of terms in the list
    pub fn len(&self) -> usize {
        match self {
            KeywordSet::Literal(terms) => terms.len(),
            KeywordSet::Pattern(patterns) => patterns.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
