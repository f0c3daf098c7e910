use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between startup and the last menu action.
#[derive(Debug, Error)]
pub enum TrafficAppError {
    #[error("missing asset '{}': {source}", path.display())]
    MissingAsset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read configuration '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("chart rendering failed: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, TrafficAppError>;
