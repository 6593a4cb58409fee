//! Transmission Loading Domain
//!
//! Handles file I/O for captured transmission buffers.

pub mod loader;

pub use loader::TransmissionLoader;

use crate::Result;

/// Convenience function to load a transmission file from disk
pub fn load_file(path: &str) -> Result<Vec<u8>> {
    TransmissionLoader::load(path)
}
