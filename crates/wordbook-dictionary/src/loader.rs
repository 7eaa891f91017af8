use std::fs::File;
use std::io::Read;
use std::path::Path;

use wordbook_core::Dictionary;

use crate::error::LoadError;
use crate::parser::RecordParser;

/// Reads a data file and hands its text to the record parser
#[derive(Default)]
pub struct DictionaryLoader {
    parser: RecordParser,
}

impl DictionaryLoader {
    pub fn new(parser: RecordParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &RecordParser {
        &self.parser
    }

    /// Load dictionary from file path
    pub fn load_from_file(&self, path: &Path) -> Result<Dictionary, LoadError> {
        tracing::info!("Opening data file: {}", path.display());
        let text = read_source(path)?;
        tracing::info!("Closed data file: {}", path.display());

        let dict = self.parser.parse(&text);
        let stats = dict.stats();
        tracing::info!(
            "Loaded {} keywords and {} definitions from file",
            stats.keywords,
            stats.definitions
        );
        Ok(dict)
    }
}

/// The handle lives only inside this call, so it is closed on every return path
fn read_source(path: &Path) -> Result<String, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
