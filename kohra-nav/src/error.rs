//! Error types for KohraNav

use kohra_map::MapLoadError;
use std::path::PathBuf;
use thiserror::Error;

/// KohraNav error type
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Map error: {0}")]
    Load(#[from] MapLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No .csv maps found in {}", .0.display())]
    NoMaps(PathBuf),

    #[error("Benchmark worker failed: {0}")]
    Worker(String),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

impl From<kohra_map::GridError> for NavError {
    fn from(e: kohra_map::GridError) -> Self {
        NavError::Load(MapLoadError::Grid(e))
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
