use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File could not be opened: {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File could not be read: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    #[error("A delimiter cycle needs 2 or 3 markers, got {0}")]
    MarkerCount(usize),
}
