use std::fmt;

/// Search line could not be turned into a lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Expected 1 to 4 search tokens, got {0}")]
    Format(usize),

    #[error("Word not found: {0}")]
    UnknownWord(String),
}

/// What a modifier slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    PartOfSpeech,
    Distinct,
    Reverse,
}

impl Expected {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expected::PartOfSpeech => "a part of speech",
            Expected::Distinct => "'distinct'",
            Expected::Reverse => "'reverse'",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A modifier token that is not legal at its position.
///
/// `position` counts query tokens from 1, so the first modifier is the 2nd parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierPositionError {
    pub position: usize,
    pub token: String,
    pub expected: &'static [Expected],
}

impl ModifierPositionError {
    pub fn ordinal(&self) -> String {
        ordinal(self.position)
    }

    /// `a part of speech or 'distinct' or 'reverse'`
    pub fn expected_list(&self) -> String {
        join_expected(self.expected)
    }
}

impl fmt::Display for ModifierPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} parameter '{}' should be {}",
            self.ordinal(),
            self.token,
            self.expected_list()
        )
    }
}

impl std::error::Error for ModifierPositionError {}

/// 1 -> "1st", 2 -> "2nd", ...
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn join_expected(expected: &[Expected]) -> String {
    expected
        .iter()
        .map(Expected::as_str)
        .collect::<Vec<_>>()
        .join(" or ")
}
