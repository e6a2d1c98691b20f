//! JSON document loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{DocumentError, Result};

/// Load and parse a JSON document from disk.
///
/// The path is checked for existence up front; a file that vanishes between
/// the check and the read reports the same not-found failure. The whole
/// document is read into memory in one pass; invalid UTF-8 sequences decode
/// to U+FFFD instead of failing the read.
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()).into());
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(DocumentError::NotFound(path.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };

    debug!("read {} bytes from {}", bytes.len(), path.display());

    parse_document(&String::from_utf8_lossy(&bytes))
}

/// Parse document text as JSON. The document may have any shape.
pub fn parse_document(content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| DocumentError::Parse(e.to_string()).into())
}
