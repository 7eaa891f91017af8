/// Default prefix rendered fully uppercase at the start of a word key
pub const DEFAULT_UPPERCASE_PREFIX: &str = "csc";

pub trait Preprocessor {
    // Default line preprocessor
    fn process(&self, text: &str) -> String {
        // Carriage returns first, then collapse whitespace runs
        let text = text.replace('\r', "");
        collapse_whitespace(&text)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Trim both ends and squeeze internal whitespace runs to a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalize a word into its dictionary key form.
///
/// The first letter is capitalized. A word starting with `prefix`
/// (case-insensitive) gets that prefix uppercased instead.
pub fn normalize_word(word: &str, prefix: &str) -> String {
    let has_prefix = !prefix.is_empty()
        && word
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));

    if has_prefix {
        format!("{}{}", prefix.to_uppercase(), &word[prefix.len()..])
    } else {
        capitalize_first(word)
    }
}

/// Collapse a trailing `..` (plus any trailing whitespace) into one period
pub fn standardize_definition(definition: &str) -> String {
    let trimmed = definition.trim_end();
    match trimmed.strip_suffix("..") {
        Some(head) => format!("{head}."),
        None => definition.to_string(),
    }
}
