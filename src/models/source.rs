use serde::{Deserialize, Serialize};

use super::IndexRecord;

/// The parts of a perspective file the indexer cares about
///
/// Everything else in the document is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(
        rename = "perspectiveId",
        deserialize_with = "crate::parsers::deserializers::deserialize_perspective_id"
    )]
    pub perspective_id: String,
    pub name: String,
}

impl SourceRecord {
    /// File name this perspective is expected to live under
    pub fn target_file_name(&self) -> String {
        format!("{}.json", self.perspective_id)
    }
}

impl From<SourceRecord> for IndexRecord {
    fn from(source: SourceRecord) -> Self {
        IndexRecord { id: source.perspective_id, name: source.name }
    }
}
