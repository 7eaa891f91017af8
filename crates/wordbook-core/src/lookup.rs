use crate::dictionary::Dictionary;
use crate::error::QueryError;
use crate::modifier::{Modified, ModifierPipeline};
use crate::query::Query;

/// Read-only lookups over a loaded dictionary
pub struct LookupService {
    dictionary: Dictionary,
    pipeline: ModifierPipeline,
}

impl LookupService {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            pipeline: ModifierPipeline::new(),
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Copy the word's entries and run them through the modifiers
    pub fn lookup(&self, query: &Query) -> Result<Modified, QueryError> {
        let entries = self.dictionary.lookup(&query.word)?;
        tracing::debug!("'{}': {} entries before modifiers", query.word, entries.len());

        Ok(self.pipeline.apply(entries, query.modifiers.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;

    #[test]
    fn test_lookup_does_not_touch_dictionary() {
        let service = LookupService::new(
            [
                Entry::new("Cat", "noun", "A small animal."),
                Entry::new("Cat", "verb", "To vomit."),
            ]
            .into_iter()
            .collect(),
        );

        let query = Query {
            word: "Cat".to_string(),
            modifiers: vec!["adverb".to_string()],
        };
        let result = service.lookup(&query).unwrap();
        assert!(!result.is_found());

        let stored = service.dictionary().get("Cat").unwrap();
        assert!(stored.iter().all(|e| e.exists));
        assert_eq!(stored.len(), 2);
    }

    #[test]
    fn test_unknown_word() {
        let service = LookupService::new(Dictionary::new());
        let query = Query {
            word: "Dog".to_string(),
            modifiers: vec![],
        };
        assert!(matches!(
            service.lookup(&query),
            Err(QueryError::UnknownWord(word)) if word == "Dog"
        ));
    }
}
