//! Directory scanning for perspective files
//!
//! A file is a candidate when its name *contains* `.json` anywhere, not only as a
//! suffix, so `archive.json.bak` is picked up while `notreallyjson.txt` is not.

pub mod listing;

pub use listing::{JSON_MARKER, is_json_candidate, scan_json_entries};
