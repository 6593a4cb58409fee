//! Frame check sequence (CRC-16/X.25) helpers.
//!
//! The FCS is transmitted inverted and least-significant byte first. A
//! receiver that compares the checksum of the unescaped frame contents
//! against the transmitted value accepts exactly the frames whose raw
//! CRC, run over contents and FCS together, lands on the X.25 residue.

use crc::{Crc, CRC_16_IBM_SDLC};

/// CRC-16/X.25 as used for the HDLC frame check sequence.
const FCS16: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_SDLC);

/// Compute the FCS over unescaped address, control and payload bytes.
///
/// The result is already inverted and ready to be appended to the frame
/// least-significant byte first.
pub fn checksum(data: &[u8]) -> u16 {
    FCS16.checksum(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_check_value() {
        // CRC-16/IBM-SDLC check value for "123456789"
        assert_eq!(checksum(b"123456789"), 0x906E);
    }

    #[test]
    fn test_checksum_changes_with_input() {
        assert_ne!(checksum(&[0xFF, 0x10, 0x01]), checksum(&[0xFF, 0x10, 0x02]));
    }
}
