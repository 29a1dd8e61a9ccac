use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModpathError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Reading {} failed: {source}", .path.display())]
    OverrideRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Main module reference not available, a modular main module is required for patching")]
    MissingMainModule,
}

pub type Result<T> = std::result::Result<T, ModpathError>;
