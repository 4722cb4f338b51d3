//! Decision-space gate: decides whether free text is about IT careers.
//!
//! The check is a plain case-insensitive substring search over two fixed term
//! lists. It is deliberately loose: `"kit"` contains `"it"` and `"submit"`
//! does too. Word boundaries are not considered.

/// Terms indicating the input is about information technology.
pub const IT_TERMS: &[&str] = &["it", "information technology", "tech"];

/// Terms indicating the input is about a career.
pub const CAREER_TERMS: &[&str] = &["career", "job", "progress"];

/// Result of classifying a decision-space description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateVerdict {
    pub it_related: bool,
    pub career_related: bool,
}

impl GateVerdict {
    /// In scope only when both term sets matched.
    pub fn accepted(self) -> bool {
        self.it_related && self.career_related
    }
}

/// Classify `input` against both term lists.
pub fn classify(input: &str) -> GateVerdict {
    let lowered = input.to_lowercase();
    GateVerdict {
        it_related: contains_any(&lowered, IT_TERMS),
        career_related: contains_any(&lowered, CAREER_TERMS),
    }
}

/// `true` when `input` names both an IT term and a career term.
pub fn is_in_scope(input: &str) -> bool {
    classify(input).accepted()
}

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| haystack.contains(term))
}
