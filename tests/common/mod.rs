//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test data directories
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with raw content
    pub fn with_file(self, file_name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(file_name), content)
            .unwrap_or_else(|e| panic!("Failed to write {}: {}", file_name, e));
        self
    }

    /// Add a perspective file
    pub fn with_perspective(self, file_name: &str, perspective: PerspectiveBuilder) -> Self {
        let content = perspective.to_json();
        self.with_file(file_name, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for perspective file contents
pub struct PerspectiveBuilder {
    id: serde_json::Value,
    name: String,
}

impl PerspectiveBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self { id: serde_json::Value::from(id), name: name.to_string() }
    }

    /// Use a numeric perspectiveId
    pub fn numeric(id: u64, name: &str) -> Self {
        Self { id: serde_json::Value::from(id), name: name.to_string() }
    }

    /// Convert to JSON string, including some payload the indexer ignores
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "perspectiveId": self.id,
            "name": self.name,
            "similarityFunction": "default",
            "communities": [],
            "users": [{ "id": 1, "label": "node" }],
        })
        .to_string()
    }
}

/// Sorted file names in a directory
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Path of the default index file
pub fn index_path(dir: &Path) -> PathBuf {
    dir.join("dataList.json")
}

/// Read the index file as raw JSON
pub fn read_index_json(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(index_path(dir)).expect("Failed to read index");
    serde_json::from_str(&content).expect("Index is not valid JSON")
}
