use std::env;

use serde::{Deserialize, Serialize};

fn default_part_of_speech_marker() -> String {
    "|".to_string()
}

fn default_definition_marker() -> String {
    "-=>>".to_string()
}

fn default_uppercase_prefix() -> String {
    "csc".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Data file to load; prompted for when unset
    #[serde(default)]
    pub data_path: Option<String>,
    /// Marker between a word (or definition) and its part of speech
    #[serde(default = "default_part_of_speech_marker")]
    pub part_of_speech_marker: String,
    /// Marker between a part of speech and its definition
    #[serde(default = "default_definition_marker")]
    pub definition_marker: String,
    /// Word prefix rendered fully uppercase, e.g. "csc340" -> "CSC340"
    #[serde(default = "default_uppercase_prefix")]
    pub uppercase_prefix: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            part_of_speech_marker: default_part_of_speech_marker(),
            definition_marker: default_definition_marker(),
            uppercase_prefix: default_uppercase_prefix(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let data_path = env::var("WORDBOOK_DATA").ok();

        let part_of_speech_marker =
            env::var("WORDBOOK_POS_MARKER").unwrap_or_else(|_| default_part_of_speech_marker());

        let definition_marker =
            env::var("WORDBOOK_DEF_MARKER").unwrap_or_else(|_| default_definition_marker());

        let uppercase_prefix =
            env::var("WORDBOOK_PREFIX").unwrap_or_else(|_| default_uppercase_prefix());

        Self {
            data_path,
            part_of_speech_marker,
            definition_marker,
            uppercase_prefix,
        }
    }
}
