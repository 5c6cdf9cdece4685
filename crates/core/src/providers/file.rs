use async_trait::async_trait;
use std::path::PathBuf;

use crate::errors::{FetchError, FetchResult};
use crate::models::dropdown::DropdownOptions;
use super::traits::OptionsSource;

/// Reads the dropdown options JSON from disk.
///
/// For desktop or terminal hosts that ship the options file alongside the
/// binary instead of serving it over HTTP.
pub struct FileOptionsSource {
    path: PathBuf,
}

impl FileOptionsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OptionsSource for FileOptionsSource {
    async fn load_options(&self) -> FetchResult<DropdownOptions> {
        // Synchronous read: the options file is small and read once at mount
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            FetchError::Network(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&json)
            .map_err(|e| FetchError::Decode(format!("Failed to parse dropdown data: {e}")))
    }
}
