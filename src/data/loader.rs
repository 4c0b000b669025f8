//! Document Loader Module
//! Reads metadata, household and impact documents from JSON files.

use super::metadata::Metadata;
use crate::household::Household;
use crate::impact::Impact;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Holds the documents the explorer works from.
#[derive(Default)]
pub struct DocumentLoader {
    metadata: Option<Metadata>,
    file_path: Option<PathBuf>,
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON document of any shape.
    pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoaderError> {
        let text = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| LoaderError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read a metadata document.
    pub fn read_metadata(path: &Path) -> Result<Metadata, LoaderError> {
        let metadata: Metadata = Self::read_json(path)?;
        tracing::info!(
            path = %path.display(),
            country = %metadata.country_id,
            parameters = metadata.parameters.len(),
            "metadata loaded"
        );
        Ok(metadata)
    }

    pub fn load_household(path: &Path) -> Result<Household, LoaderError> {
        Self::read_json(path)
    }

    pub fn load_impact(path: &Path) -> Result<Impact, LoaderError> {
        Self::read_json(path)
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Keep metadata read on a background thread
    pub fn set_metadata(&mut self, metadata: Metadata, path: PathBuf) {
        self.metadata = Some(metadata);
        self.file_path = Some(path);
    }
}
