use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub file_name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}
