use wordbook_config::dictionary::DictionaryConfig;
use wordbook_core::preprocess::{
    capitalize_first, collapse_whitespace, lowercase_first, normalize_word,
    standardize_definition, DefaultPreprocessor, Preprocessor, DEFAULT_UPPERCASE_PREFIX,
};
use wordbook_core::{Dictionary, Entry};

use crate::cycle::DelimiterCycle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    pub part_of_speech_marker: String,
    pub definition_marker: String,
    pub uppercase_prefix: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            part_of_speech_marker: "|".to_string(),
            definition_marker: "-=>>".to_string(),
            uppercase_prefix: DEFAULT_UPPERCASE_PREFIX.to_string(),
        }
    }
}

impl From<&DictionaryConfig> for ParserOptions {
    fn from(config: &DictionaryConfig) -> Self {
        Self {
            part_of_speech_marker: config.part_of_speech_marker.clone(),
            definition_marker: config.definition_marker.clone(),
            uppercase_prefix: config.uppercase_prefix.clone(),
        }
    }
}

/// Turns `word|pos -=>> definition |pos -=>> definition ...` lines into entries
#[derive(Default)]
pub struct RecordParser {
    options: ParserOptions,
    preprocessor: DefaultPreprocessor,
}

impl RecordParser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse every line of `raw` into one dictionary
    pub fn parse(&self, raw: &str) -> Dictionary {
        let mut cycle = self.cycle();
        let mut dictionary = Dictionary::new();

        for line in raw.lines() {
            dictionary.extend(self.parse_with(line, &mut cycle));
        }

        let stats = dictionary.stats();
        tracing::debug!(
            "Parsed {} keywords, {} definitions",
            stats.keywords,
            stats.definitions
        );
        dictionary
    }

    /// Entries of a single line, in the order they appear
    pub fn parse_line(&self, line: &str) -> Vec<Entry> {
        self.parse_with(line, &mut self.cycle())
    }

    fn cycle(&self) -> DelimiterCycle {
        DelimiterCycle::new(
            self.options.part_of_speech_marker.as_str(),
            self.options.definition_marker.as_str(),
        )
    }

    fn parse_with(&self, line: &str, cycle: &mut DelimiterCycle) -> Vec<Entry> {
        let pos_marker = self.options.part_of_speech_marker.as_str();
        let line = self.preprocessor.process(line);

        let word_part = line.split_once(pos_marker).map_or(line.as_str(), |(word, _)| word);
        let word = normalize_word(word_part, &self.options.uppercase_prefix);

        cycle.reset();

        let mut entries = Vec::new();
        let mut part_of_speech = String::new();
        let mut definition = String::new();

        for token in line.split_whitespace() {
            let expects_part_of_speech = cycle.current() == pos_marker;

            if !token.contains(cycle.current()) {
                definition.push(' ');
                definition.push_str(token);
                continue;
            }

            if expects_part_of_speech {
                let (before, after) = token.split_once(pos_marker).unwrap_or((token, ""));

                // Every part of speech after the first closes the previous sense
                if cycle.cycles() != 0 {
                    definition.push(' ');
                    definition.push_str(before);
                    entries.push(finish(&word, &part_of_speech, &definition, true));
                    definition.clear();
                }

                part_of_speech = lowercase_first(after);
            }

            cycle.advance();
        }

        entries.push(finish(&word, &part_of_speech, &definition, false));
        entries
    }
}

fn finish(word: &str, part_of_speech: &str, definition: &str, capitalize: bool) -> Entry {
    let mut definition = collapse_whitespace(definition);
    if capitalize {
        definition = capitalize_first(&definition);
    }

    Entry::new(word, part_of_speech, standardize_definition(&definition))
}
