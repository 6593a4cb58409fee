//! HDLC Movement Transmission Replayer
//!
//! Decodes a captured link-layer transmission of HDLC-framed movement
//! commands and replays them onto a bounded 5x5 grid position. Commands
//! pass through a three-slot delayed-debounce queue on their way to the
//! grid: a command is applied only when the next one arrives, and any run
//! of exactly three consecutive identical commands is discarded as noise.
//! The final position is the only observable result of a replay.
//!
//! # Crate feature flags
//! - `visualization` (default): Terminal grid rendering (`visualization`)
//!
//! # Quick start
//! ## Replay a transmission buffer
//! ```no_run
//! use gridlink::replay;
//! let data = std::fs::read("transmission.bin").unwrap();
//! let position = replay(&data).unwrap();
//! println!("{}", position);
//! ```
//!
//! ## Drive the scanner and replayer by hand
//! ```no_run
//! use gridlink::{FrameScanner, MoveReplayer};
//! let data = std::fs::read("transmission.bin").unwrap();
//! let mut scanner = FrameScanner::new(&data);
//! let mut replayer = MoveReplayer::new();
//! while let Some(command) = scanner.try_next().unwrap() {
//!     replayer.feed(command);
//! }
//! println!("{}", replayer.finish());
//! ```

#![warn(missing_docs)]

// Domain modules
pub mod hdlc; // HDLC frame codec
pub mod loader; // Transmission file I/O
pub mod replayer; // Delayed-debounce replay engine
pub mod scanner; // Frame scanning and command decoding
#[cfg(feature = "visualization")]
pub mod visualization; // Terminal grid rendering

/// Error types for transmission replay operations
#[derive(thiserror::Error, Debug)]
pub enum GridlinkError {
    /// The byte range did not contain a matching pair of flag sequences
    #[error("Incomplete frame: no matching pair of flag sequences")]
    IncompleteFrame,

    /// The frame was shorter than address, control and FCS combined
    #[error("Frame too short: expected at least address, control and FCS")]
    FrameTooShort,

    /// The frame check sequence did not match the frame contents
    #[error("Frame check sequence mismatch")]
    FcsMismatch,

    /// IO error from the filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for GridlinkError {
    /// Converts a String into `GridlinkError::Other`.
    fn from(msg: String) -> Self {
        GridlinkError::Other(msg)
    }
}

impl From<&str> for GridlinkError {
    /// Converts a string slice into `GridlinkError::Other`.
    fn from(msg: &str) -> Self {
        GridlinkError::Other(msg.to_string())
    }
}

/// Result type for replay operations
pub type Result<T> = std::result::Result<T, GridlinkError>;

// Public API exports
pub use hdlc::{Control, FrameType};
pub use loader::TransmissionLoader;
pub use replayer::{replay, DelayQueue, GridPosition, MoveReplayer};
pub use scanner::{Command, FrameScanner};
#[cfg(feature = "visualization")]
pub use visualization::render_grid;
