use std::io;

use thiserror::Error;

/// Failures at the file and configuration boundary. Record content never
/// produces an error.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("error reading template '{path}': {source}")]
    ReadTemplate { path: String, source: io::Error },
    #[error("error reading JSON '{path}': {source}")]
    ReadData { path: String, source: io::Error },
    #[error("error parsing JSON '{path}': {source}")]
    ParseData { path: String, source: serde_json::Error },
    #[error("error writing '{path}': {source}")]
    Write { path: String, source: io::Error },
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
