// src/history/mod.rs
//
// File-backed history stores. Both stores are whole-file read-modify-write
// over pretty-printed JSON; writes go to a sibling temp file first and are
// renamed into place so a failed write never truncates good history.

mod menu;
mod price;

pub use menu::MenuStore;
pub use price::PriceStore;

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::HistoryError;

/// Load a JSON array from `path`. A missing file is an empty history;
/// anything unparseable is a distinct, surfaced failure.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, HistoryError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(HistoryError::Io { path: path.to_path_buf(), source: e }),
    };
    serde_json::from_str(&text)
        .map_err(|e| HistoryError::Malformed { path: path.to_path_buf(), source: e })
}

/// Replace `path` with the pretty-printed JSON of `entries`, atomically
/// with respect to readers of the old file.
fn store_json<T: Serialize>(path: &Path, entries: &[T]) -> Result<(), HistoryError> {
    let text = serde_json::to_string_pretty(entries)
        .map_err(|e| HistoryError::Encode { path: path.to_path_buf(), source: e })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| HistoryError::Io { path: path.to_path_buf(), source: e })?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, text)
        .map_err(|e| HistoryError::Io { path: tmp.clone(), source: e })?;
    fs::rename(&tmp, path)
        .map_err(|e| HistoryError::Io { path: path.to_path_buf(), source: e })
}
