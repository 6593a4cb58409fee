//! HDLC Frame Codec
//!
//! Byte-stuffed framing in the style of yahdlc:
//! - Frames are bounded by `FLAG_SEQUENCE` bytes
//! - Contents: address, control byte, payload, 16-bit FCS
//! - Flag and escape bytes inside a frame are escaped with `0x7D` and
//!   XOR `0x20`
//! - The FCS is CRC-16/X.25 over the unescaped contents, transmitted
//!   inverted and least-significant byte first
//!
//! `decode` extracts and validates one frame from a byte range;
//! `encode` builds a complete frame from a control field and payload.

pub mod fcs;

use crate::{GridlinkError, Result};

/// Flag byte marking frame boundaries in the raw stream.
pub const FLAG_SEQUENCE: u8 = 0x7E;

const CONTROL_ESCAPE: u8 = 0x7D;
const ESCAPE_XOR: u8 = 0x20;
const ALL_STATION_ADDR: u8 = 0xFF;

// Control byte layout: bit 0 distinguishes I-frames (data, bit clear)
// from S-frames. I-frames carry the send sequence number in bits 1-3
// and the poll bit in bit 4. S-frames carry the frame type in bits 2-3
// (0 = receive ready) and the receive sequence number in bits 5-7.
const S_OR_U_BIT: u8 = 0x01;
const POLL_BIT: u8 = 0x10;
const SEND_SEQ_SHIFT: u8 = 1;
const S_FRAME_TYPE_SHIFT: u8 = 2;
const RECV_SEQ_SHIFT: u8 = 5;
const RECEIVE_READY: u8 = 0;
const REJECT: u8 = 2;
const SEQ_MASK: u8 = 0x07;

/// Frame classification carried by the control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    /// Information frame carrying a payload
    Data,
    /// Receive-ready supervisory frame
    Acknowledge,
    /// Reject supervisory frame
    NegativeAcknowledge,
}

/// Decoded control field of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    /// Frame classification
    pub frame_type: FrameType,
    /// Send sequence number for data frames, receive sequence number
    /// for supervisory frames
    pub sequence_no: u8,
}

impl Control {
    /// Control field for a data frame with the given sequence number.
    pub fn data(sequence_no: u8) -> Self {
        Control {
            frame_type: FrameType::Data,
            sequence_no,
        }
    }

    /// Control field for an acknowledgement frame.
    pub fn ack(sequence_no: u8) -> Self {
        Control {
            frame_type: FrameType::Acknowledge,
            sequence_no,
        }
    }

    /// Control field for a negative acknowledgement frame.
    pub fn nack(sequence_no: u8) -> Self {
        Control {
            frame_type: FrameType::NegativeAcknowledge,
            sequence_no,
        }
    }

    fn from_byte(byte: u8) -> Self {
        if byte & S_OR_U_BIT == 0 {
            Control {
                frame_type: FrameType::Data,
                sequence_no: (byte >> SEND_SEQ_SHIFT) & SEQ_MASK,
            }
        } else {
            let frame_type = if (byte >> S_FRAME_TYPE_SHIFT) & 0x03 == RECEIVE_READY {
                FrameType::Acknowledge
            } else {
                FrameType::NegativeAcknowledge
            };
            Control {
                frame_type,
                sequence_no: byte >> RECV_SEQ_SHIFT,
            }
        }
    }

    fn to_byte(self) -> u8 {
        match self.frame_type {
            FrameType::Data => ((self.sequence_no & SEQ_MASK) << SEND_SEQ_SHIFT) | POLL_BIT,
            FrameType::Acknowledge => {
                ((self.sequence_no & SEQ_MASK) << RECV_SEQ_SHIFT) | S_OR_U_BIT
            }
            FrameType::NegativeAcknowledge => {
                ((self.sequence_no & SEQ_MASK) << RECV_SEQ_SHIFT)
                    | (REJECT << S_FRAME_TYPE_SHIFT)
                    | S_OR_U_BIT
            }
        }
    }
}

/// Decode one flag-bounded frame found inside `data`.
///
/// Bytes before the opening flag are ignored; a doubled flag counts as
/// link idle. On success the validated payload (FCS stripped) is
/// appended to `output` and the decoded control field is returned.
pub fn decode(data: &[u8], output: &mut Vec<u8>) -> Result<Control> {
    let mut raw: Vec<u8> = Vec::new();
    let mut in_frame = false;
    let mut closed = false;
    let mut escape = false;

    let mut iter = data.iter().peekable();
    while let Some(&byte) = iter.next() {
        if byte == FLAG_SEQUENCE {
            // A doubled flag is idle fill, both outside and inside a frame
            if matches!(iter.peek(), Some(&&FLAG_SEQUENCE)) {
                continue;
            }
            if in_frame {
                closed = true;
                break;
            }
            in_frame = true;
        } else if in_frame {
            if byte == CONTROL_ESCAPE {
                escape = true;
            } else if escape {
                escape = false;
                raw.push(byte ^ ESCAPE_XOR);
            } else {
                raw.push(byte);
            }
        }
    }

    if !(in_frame && closed) {
        return Err(GridlinkError::IncompleteFrame);
    }
    if raw.len() < 4 {
        return Err(GridlinkError::FrameTooShort);
    }

    let split = raw.len() - 2;
    let transmitted = u16::from_le_bytes([raw[split], raw[split + 1]]);
    if fcs::checksum(&raw[..split]) != transmitted {
        return Err(GridlinkError::FcsMismatch);
    }

    output.extend_from_slice(&raw[2..split]);
    Ok(Control::from_byte(raw[1]))
}

/// Build a complete frame from a control field and payload.
pub fn encode(control: Control, payload: &[u8]) -> Vec<u8> {
    let mut contents = Vec::with_capacity(payload.len() + 2);
    contents.push(ALL_STATION_ADDR);
    contents.push(control.to_byte());
    contents.extend_from_slice(payload);
    let fcs = fcs::checksum(&contents);

    let mut frame = Vec::with_capacity(contents.len() + 6);
    frame.push(FLAG_SEQUENCE);
    for &byte in &contents {
        push_escaped(&mut frame, byte);
    }
    push_escaped(&mut frame, (fcs & 0xFF) as u8);
    push_escaped(&mut frame, (fcs >> 8) as u8);
    frame.push(FLAG_SEQUENCE);
    frame
}

/// Build a data frame carrying `payload`.
pub fn encode_data(sequence_no: u8, payload: &[u8]) -> Vec<u8> {
    encode(Control::data(sequence_no), payload)
}

/// Build an acknowledgement frame.
pub fn encode_ack(sequence_no: u8) -> Vec<u8> {
    encode(Control::ack(sequence_no), &[])
}

fn push_escaped(frame: &mut Vec<u8>, byte: u8) {
    if byte == FLAG_SEQUENCE || byte == CONTROL_ESCAPE {
        frame.push(CONTROL_ESCAPE);
        frame.push(byte ^ ESCAPE_XOR);
    } else {
        frame.push(byte);
    }
}
