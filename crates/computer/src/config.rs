use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Machine description loaded from a JSON config file:
///
/// ```json
/// { "name": "TinyVM a1", "mmu": { "variant": "paged", "size_k": 256 } }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub name: String,
    pub mmu: MmuConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct MmuConfig {
    pub variant: Variant,
    /// Requested physical memory in KiB; the engine rounds the byte count up
    /// to whole pages.
    pub size_k: u64,
}

/// The closed set of MMU engines a machine can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Flat,
    Paged,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read machine config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid machine config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
