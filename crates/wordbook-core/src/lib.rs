pub mod dictionary;
pub mod error;
pub mod lookup;
pub mod modifier;
pub mod preprocess;
pub mod query;
pub mod types;

pub use dictionary::{Dictionary, DictionaryStats};
pub use error::{Expected, ModifierPositionError, QueryError};
pub use lookup::LookupService;
pub use modifier::{Lookup, Modified, Modifier, ModifierPipeline};
pub use query::{Command, Query};
pub use types::Entry;
