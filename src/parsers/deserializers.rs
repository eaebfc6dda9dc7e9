use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for perspective ids that accepts both strings and numbers
///
/// Numbers keep their JSON textual form, so `7` becomes `"7"`.
pub fn deserialize_perspective_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => return Err(Error::custom("perspectiveId must be a string or a number")),
    };

    if id.is_empty() {
        return Err(Error::custom("perspectiveId cannot be empty"));
    }

    // The id becomes a file name, so it must stay inside the data directory
    if id.contains(['/', '\\']) || id == "." || id == ".." {
        return Err(Error::custom(format!("perspectiveId is not a valid file name: {:?}", id)));
    }

    Ok(id)
}
