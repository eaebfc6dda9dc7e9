//! Index file persistence
//!
//! The index is a JSON array of `{id, name}` records with 2-space indentation, written
//! next to the data it describes (`dataList.json` by default). It is always rewritten
//! from scratch and never merged with a previous version.

pub mod persistence;

pub use persistence::{DEFAULT_INDEX_FILENAME, load_index, render_index, write_index};
