//! Corpus generation error type.

use std::path::PathBuf;

use pickle_pack::PickleError;
use thiserror::Error;

/// Fatal generation errors. Malformed fixture content is never an error.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Pickle(#[from] PickleError),
    #[error("unknown fixture `{0}`")]
    UnknownFixture(String),
    #[error("invalid artifact extension `{0}`")]
    InvalidExtension(String),
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }
}
