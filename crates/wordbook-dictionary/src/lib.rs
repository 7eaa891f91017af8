pub mod cycle;
pub mod error;
pub mod loader;
pub mod parser;

pub use cycle::DelimiterCycle;
pub use error::{CycleError, LoadError};
pub use loader::DictionaryLoader;
pub use parser::{ParserOptions, RecordParser};
