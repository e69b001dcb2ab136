// crates/engine/src/error.rs
use std::path::PathBuf;

use thiserror::Error;
use wordfreq_shared_kernel::{InfrastructureError, WordFreqError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Input path not found: '{path}'")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Worker pool creation failed: {details}")]
    WorkerPool { details: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<EngineError> for WordFreqError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InputNotFound { path } => {
                InfrastructureError::InputNotFound { path }.into()
            }
            EngineError::FileRead { path, source } => {
                InfrastructureError::InputRead { path, source }.into()
            }
            EngineError::Walk(e) => {
                InfrastructureError::InputExpansion { details: e.to_string() }.into()
            }
            EngineError::WorkerPool { details } => {
                InfrastructureError::WorkerPool { details }.into()
            }
        }
    }
}
