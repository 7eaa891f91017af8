use wordbook_config::Config;
use wordbook_core::{Dictionary, LookupService};

pub struct AppState {
    pub config: Config,
    pub service: LookupService,
}

impl AppState {
    pub fn new(config: Config, dictionary: Dictionary) -> Self {
        Self {
            config,
            service: LookupService::new(dictionary),
        }
    }

    /// Prefix uppercased in both dictionary keys and search words
    pub fn uppercase_prefix(&self) -> &str {
        &self.config.dictionary.uppercase_prefix
    }
}
