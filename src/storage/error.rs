//! Error types raised by the word and score stores.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot open or create {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no words available in the standard or custom word lists")]
    EmptyRepository,
}

pub type Result<T> = std::result::Result<T, StorageError>;
