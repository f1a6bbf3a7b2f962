use serde::Deserialize;
use std::path::PathBuf;

/// One element of the input array. Only `key` is consumed; any other
/// fields in the source object are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderEntry {
    pub key: String,
}

/// The input file exactly as read, before trimming or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub entries: Vec<HeaderEntry>,
    pub joined: String,
}

impl ExportResult {
    pub fn from_entries(entries: Vec<HeaderEntry>) -> Self {
        let joined = entries
            .iter()
            .map(|entry| entry.key.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self { entries, joined }
    }
}
