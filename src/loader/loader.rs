//! Transmission File Loader
//!
//! Reads a captured transmission from disk. The buffer is handed to the
//! scanner as-is; framing is the scanner's concern.

use crate::Result;
use std::fs;

/// Loads transmission files from disk
pub struct TransmissionLoader;

impl TransmissionLoader {
    /// Load the raw bytes of a transmission file.
    pub fn load(path: &str) -> Result<Vec<u8>> {
        let data =
            fs::read(path).map_err(|e| format!("Failed to read transmission '{}': {}", path, e))?;
        log::debug!("loaded {} bytes from '{}'", data.len(), path);
        Ok(data)
    }
}
