use std::collections::BTreeMap;

use crate::error::QueryError;
use crate::types::Entry;

/// Counts gathered while building a dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Unique word keys
    pub keywords: usize,
    /// Entries emitted, duplicates included
    pub definitions: usize,
}

/// Word -> entries, in the order they were parsed.
///
/// A word is a key only if at least one entry was recorded for it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: BTreeMap<String, Vec<Entry>>,
    definitions: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, entry: Entry) {
        self.definitions += 1;
        self.entries
            .entry(entry.word.clone())
            .or_default()
            .push(entry);
    }

    /// Entries for an exact (case-sensitive) key
    pub fn get(&self, word: &str) -> Option<&[Entry]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Owned copy of a word's entries, ready for the modifier pipeline
    pub fn lookup(&self, word: &str) -> Result<Vec<Entry>, QueryError> {
        self.get(word)
            .map(<[Entry]>::to_vec)
            .ok_or_else(|| QueryError::UnknownWord(word.to_string()))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            keywords: self.entries.len(),
            definitions: self.definitions,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Entry> for Dictionary {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<Entry> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}
