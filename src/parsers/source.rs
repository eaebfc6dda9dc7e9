use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::models::SourceRecord;

pub const PERSPECTIVE_ID_FIELD: &str = "perspectiveId";
pub const NAME_FIELD: &str = "name";

/// Why a single perspective file could not be turned into a [`SourceRecord`]
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("{} is missing required field `{field}`", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("invalid field in {}: {source}", path.display())]
    InvalidField {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has perspectiveId `{id}`, which would replace the index file", path.display())]
    ReservedId { path: PathBuf, id: String },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Io { path, .. }
            | SourceError::Malformed { path, .. }
            | SourceError::NotAnObject { path }
            | SourceError::MissingField { path, .. }
            | SourceError::InvalidField { path, .. }
            | SourceError::ReservedId { path, .. } => path,
        }
    }
}

/// Parse one perspective file and extract its `perspectiveId` and `name`
///
/// The file must be a JSON object carrying both fields. Other fields are ignored.
///
/// # Errors
///
/// Returns a [`SourceError`] describing whether the failure came from the filesystem,
/// from a malformed document, or from a missing/invalid field.
pub fn parse_source_file(path: &Path) -> Result<SourceRecord, SourceError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;

    let document: Value = serde_json::from_str(&contents)
        .map_err(|source| SourceError::Malformed { path: path.to_path_buf(), source })?;

    let Some(object) = document.as_object() else {
        return Err(SourceError::NotAnObject { path: path.to_path_buf() });
    };

    for field in [PERSPECTIVE_ID_FIELD, NAME_FIELD] {
        if !object.contains_key(field) {
            return Err(SourceError::MissingField { path: path.to_path_buf(), field });
        }
    }

    serde_json::from_value(document)
        .map_err(|source| SourceError::InvalidField { path: path.to_path_buf(), source })
}
