use crate::error::QueryError;
use crate::preprocess::normalize_word;

pub const QUIT: &str = "!q";
pub const HELP: &str = "!help";

/// Word plus up to three modifiers
pub const MAX_TOKENS: usize = 4;

/// A normalized lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub word: String,
    pub modifiers: Vec<String>,
}

/// What a single search line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Lookup(Query),
}

impl Command {
    /// Tokenize on whitespace, lower-case every token, then normalize the
    /// first one the same way dictionary keys are.
    pub fn parse(line: &str, prefix: &str) -> Result<Self, QueryError> {
        let mut tokens: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();

        if tokens.is_empty() || tokens.len() > MAX_TOKENS {
            return Err(QueryError::Format(tokens.len()));
        }

        let word = normalize_word(&tokens.remove(0), prefix);

        Ok(match word.as_str() {
            QUIT => Command::Quit,
            HELP => Command::Help,
            _ => Command::Lookup(Query {
                word,
                modifiers: tokens,
            }),
        })
    }
}
