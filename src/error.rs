use std::path::PathBuf;

use crate::corpus::DocID;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Failed to open corpus {}: {source}", .path.display())]
    OpenCorpus {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read document {doc_id}: {source}")]
    ReadDocument {
        doc_id: DocID,
        source: std::io::Error,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
