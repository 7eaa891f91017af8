use std::fmt;

/// One (word, part of speech, definition) record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,           // e.g., "Cat"
    pub part_of_speech: String, // e.g., "noun"
    pub definition: String,     // e.g., "A small animal."
    /// `false` only on the placeholder left by an unsatisfiable part-of-speech filter
    pub exists: bool,
}

impl Entry {
    pub fn new(
        word: impl Into<String>,
        part_of_speech: impl Into<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
            exists: true,
        }
    }

    /// Combined sort key: part of speech followed directly by the definition
    pub fn sort_key(&self) -> String {
        let mut key = String::with_capacity(self.part_of_speech.len() + self.definition.len());
        key.push_str(&self.part_of_speech);
        key.push_str(&self.definition);
        key
    }

    /// `<word> [<part of speech>] : <definition>`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] : {}",
            self.word, self.part_of_speech, self.definition
        )
    }
}
