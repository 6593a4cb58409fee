//! Frame Scanning and Command Decoding
//!
//! Walks a raw transmission buffer, locates flag-bounded frames, hands
//! each byte range to the HDLC decoder and yields one movement command
//! per data frame. Supervisory frames never reach the consumer.

use crate::hdlc::{self, FrameType};
use crate::Result;

/// One decoded movement command.
///
/// Command bytes outside 1..=4 are carried as [`Command::Unrecognized`]:
/// they move nothing when applied but still occupy a slot in the delay
/// queue and still count towards triple-matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move one cell up (y - 1)
    Up,
    /// Move one cell down (y + 1)
    Down,
    /// Move one cell right (x + 1)
    Right,
    /// Move one cell left (x - 1)
    Left,
    /// Any other command byte; applying it is a no-op
    Unrecognized(u8),
}

impl Command {
    /// Decode a command from the first byte of a data-frame payload.
    pub fn from_payload_byte(byte: u8) -> Self {
        match byte {
            1 => Command::Up,
            2 => Command::Down,
            3 => Command::Right,
            4 => Command::Left,
            other => Command::Unrecognized(other),
        }
    }
}

/// Lazy scanner yielding the commands of a transmission buffer.
///
/// The scanner owns only its cursor and a reusable decode buffer; the
/// transmission bytes are borrowed. Each call to [`FrameScanner::try_next`]
/// materializes at most one command. The sequence is finite and not
/// restartable; scanning again means constructing a fresh scanner.
pub struct FrameScanner<'a> {
    data: &'a [u8],
    /// Start of the byte range that holds the next frame
    start: usize,
    /// Search position for the next closing flag
    cursor: usize,
    /// Decode output buffer, reused between frames
    payload: Vec<u8>,
}

impl<'a> FrameScanner<'a> {
    /// Create a scanner over a transmission buffer.
    ///
    /// The search starts one byte past the start of the buffer: the
    /// first byte is the boundary before the first payload-carrying
    /// frame, never a closing flag.
    pub fn new(data: &'a [u8]) -> Self {
        FrameScanner {
            data,
            start: 0,
            cursor: 1,
            payload: Vec::new(),
        }
    }

    /// Pull the next command, or `None` once the buffer is exhausted.
    ///
    /// Exhaustion is idempotent: once `Ok(None)` has been returned,
    /// every further call returns it again. A frame the decoder rejects
    /// is fatal and surfaces as `Err`; there is no resynchronization.
    pub fn try_next(&mut self) -> Result<Option<Command>> {
        while self.cursor < self.data.len() {
            if self.data[self.cursor] != hdlc::FLAG_SEQUENCE {
                self.cursor += 1;
                continue;
            }

            self.payload.clear();
            let control = hdlc::decode(&self.data[self.start..=self.cursor], &mut self.payload)?;

            // The closing flag's follower is the next frame's exclusive
            // start, so the search resumes one byte past it.
            self.start = self.cursor + 1;
            self.cursor += 2;

            match control.frame_type {
                FrameType::Data => {
                    if let Some(&byte) = self.payload.first() {
                        return Ok(Some(Command::from_payload_byte(byte)));
                    }
                    log::debug!("skipping data frame with empty payload");
                }
                FrameType::Acknowledge | FrameType::NegativeAcknowledge => {
                    log::debug!(
                        "skipping supervisory frame (seq {})",
                        control.sequence_no
                    );
                }
            }
        }
        Ok(None)
    }
}

impl Iterator for FrameScanner<'_> {
    type Item = Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transmission(command_bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, &byte) in command_bytes.iter().enumerate() {
            out.extend(hdlc::encode_data(i as u8, &[byte]));
        }
        out
    }

    fn collect(data: &[u8]) -> Vec<Command> {
        FrameScanner::new(data)
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_empty_buffer_yields_nothing() {
        let mut scanner = FrameScanner::new(&[]);
        assert_eq!(scanner.try_next().unwrap(), None);
        assert_eq!(scanner.try_next().unwrap(), None);
    }

    #[test]
    fn test_buffer_without_flags_yields_nothing() {
        assert!(collect(&[0x01, 0x02, 0x03, 0x04]).is_empty());
    }

    #[test]
    fn test_data_frames_decode_in_order() {
        let data = transmission(&[1, 2, 3, 4]);
        assert_eq!(
            collect(&data),
            vec![Command::Up, Command::Down, Command::Right, Command::Left]
        );
    }

    #[test]
    fn test_unknown_command_byte_is_carried() {
        let data = transmission(&[9]);
        assert_eq!(collect(&data), vec![Command::Unrecognized(9)]);
    }

    #[test]
    fn test_supervisory_frames_are_invisible() {
        let mut data = Vec::new();
        data.extend(hdlc::encode_data(0, &[1]));
        data.extend(hdlc::encode_ack(0));
        data.extend(hdlc::encode_data(1, &[3]));
        assert_eq!(collect(&data), vec![Command::Up, Command::Right]);
    }

    #[test]
    fn test_empty_data_payload_is_skipped() {
        let mut data = Vec::new();
        data.extend(hdlc::encode_data(0, &[]));
        data.extend(hdlc::encode_data(1, &[2]));
        assert_eq!(collect(&data), vec![Command::Down]);
    }

    #[test]
    fn test_trailing_unterminated_data_is_ignored() {
        let mut data = transmission(&[4]);
        data.extend([hdlc::FLAG_SEQUENCE, 0xFF, 0x10, 0x01]);
        assert_eq!(collect(&data), vec![Command::Left]);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let data = transmission(&[1]);
        let mut scanner = FrameScanner::new(&data);
        assert_eq!(scanner.try_next().unwrap(), Some(Command::Up));
        assert_eq!(scanner.try_next().unwrap(), None);
        assert_eq!(scanner.try_next().unwrap(), None);
    }

    #[test]
    fn test_corrupt_frame_is_fatal() {
        let mut data = transmission(&[1, 2]);
        // Flip the first frame's payload byte without touching framing
        data[3] ^= 0x02;
        let mut scanner = FrameScanner::new(&data);
        assert!(scanner.try_next().is_err());
    }
}
