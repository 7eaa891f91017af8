use std::cmp;
use std::collections::HashSet;

use crate::error::{Expected, ModifierPositionError};
use crate::types::Entry;

pub const DISTINCT: &str = "distinct";
pub const REVERSE: &str = "reverse";

/// Part-of-speech names accepted as a filter
pub const PARTS_OF_SPEECH: [&str; 8] = [
    "adjective",
    "adverb",
    "noun",
    "conjunction",
    "interjection",
    "preposition",
    "pronoun",
    "verb",
];

/// Accepted alternatives per modifier slot
const SLOTS: [&[Expected]; 3] = [
    &[Expected::PartOfSpeech, Expected::Distinct, Expected::Reverse],
    &[Expected::Distinct, Expected::Reverse],
    &[Expected::Reverse],
];

pub fn is_part_of_speech(token: &str) -> bool {
    PARTS_OF_SPEECH.contains(&token)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    PartOfSpeech(String),
    Distinct,
    Reverse,
}

impl Modifier {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            DISTINCT => Some(Modifier::Distinct),
            REVERSE => Some(Modifier::Reverse),
            pos if is_part_of_speech(pos) => Some(Modifier::PartOfSpeech(pos.to_string())),
            _ => None,
        }
    }

    fn kind(&self) -> Expected {
        match self {
            Modifier::PartOfSpeech(_) => Expected::PartOfSpeech,
            Modifier::Distinct => Expected::Distinct,
            Modifier::Reverse => Expected::Reverse,
        }
    }
}

/// Pipeline output: entries plus the tokens skipped for their position
#[derive(Debug, Clone, Default)]
pub struct Modified {
    /// Entry 0 carries `exists == false` when a filter matched nothing
    pub entries: Vec<Entry>,
    pub rejected: Vec<ModifierPositionError>,
}

/// Tagged view of a pipeline result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Vec<Entry>),
    NotFound,
}

impl Modified {
    pub fn is_found(&self) -> bool {
        self.entries.first().is_some_and(|entry| entry.exists)
    }

    pub fn outcome(self) -> Lookup {
        if self.is_found() {
            Lookup::Found(self.entries)
        } else {
            Lookup::NotFound
        }
    }
}

/// Sorts and filters one word's entries by positional modifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifierPipeline;

impl ModifierPipeline {
    pub fn new() -> Self {
        Self
    }

    pub fn apply<S: AsRef<str>>(&self, mut entries: Vec<Entry>, modifiers: &[S]) -> Modified {
        sort_ascending(&mut entries);

        if modifiers.len() > SLOTS.len() {
            tracing::warn!(
                "{} modifiers given, only the first {} are considered",
                modifiers.len(),
                SLOTS.len()
            );
        }

        let mut rejected = Vec::new();

        for (index, (token, allowed)) in modifiers.iter().zip(SLOTS).enumerate() {
            let token = token.as_ref();
            let modifier = match Modifier::parse(token) {
                Some(modifier) if allowed.contains(&modifier.kind()) => modifier,
                _ => {
                    tracing::debug!("Modifier '{}' rejected at slot {}", token, index + 1);
                    rejected.push(ModifierPositionError {
                        // The word itself is the 1st query token
                        position: index + 2,
                        token: token.to_string(),
                        expected: allowed,
                    });
                    continue;
                }
            };

            match modifier {
                Modifier::Reverse => sort_descending(&mut entries),
                Modifier::Distinct => retain_distinct(&mut entries),
                Modifier::PartOfSpeech(pos) => {
                    if !entries.iter().any(|entry| entry.part_of_speech == pos) {
                        tracing::debug!("No '{}' entries, marking not found", pos);
                        if let Some(first) = entries.first_mut() {
                            first.exists = false;
                        }
                        break;
                    }
                    entries.retain(|entry| entry.part_of_speech == pos);
                }
            }
        }

        Modified { entries, rejected }
    }
}

pub fn sort_ascending(entries: &mut [Entry]) {
    entries.sort_by_cached_key(Entry::sort_key);
}

pub fn sort_descending(entries: &mut [Entry]) {
    entries.sort_by_cached_key(|entry| cmp::Reverse(entry.sort_key()));
}

/// Keep the lowest-index entry of each rendered text
pub fn retain_distinct(entries: &mut Vec<Entry>) {
    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.render()));
}
