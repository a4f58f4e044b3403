//! FP1020A command frame structure and encoding/decoding

use bytes::Buf;
use std::fmt;

use crate::{
    checksum,
    command::Command,
    constants::{FRAME_MARKER, FRAME_SIZE, PAYLOAD_SIZE},
    error::{Error, Result},
};

/// Encode a raw opcode and its parameters into a wire frame
///
/// # Frame Structure
///
/// ```text
/// ┌────────┬────────┬────┬────┬────┬────┬──────────┬────────┐
/// │  0xF5  │  Cmd   │ P1 │ P2 │ P3 │ P4 │ Checksum │  0xF5  │
/// └────────┴────────┴────┴────┴────┴────┴──────────┴────────┘
/// ```
///
/// The checksum is the XOR of `Cmd` and `P1..P4`.
///
/// # Examples
///
/// ```
/// use fp1020a_core::encode;
///
/// let frame = encode(0x01, [0x00, 0x01, 0x01, 0x00]);
/// assert_eq!(frame, [0xF5, 0x01, 0x00, 0x01, 0x01, 0x00, 0x01, 0xF5]);
/// ```
pub fn encode(command: u8, params: [u8; 4]) -> [u8; FRAME_SIZE] {
    let payload = [command, params[0], params[1], params[2], params[3]];
    let checksum = checksum::calculate(&payload);

    [
        FRAME_MARKER,
        payload[0],
        payload[1],
        payload[2],
        payload[3],
        payload[4],
        checksum,
        FRAME_MARKER,
    ]
}

/// A command frame sent to the sensor
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Command code
    pub command: Command,

    /// Command parameters P1..P4
    pub params: [u8; 4],
}

impl Frame {
    /// Create a frame with all parameters zero
    pub fn new(command: Command) -> Self {
        Self {
            command,
            params: [0; 4],
        }
    }

    /// Create a frame with parameters
    pub fn with_params(command: Command, params: [u8; 4]) -> Self {
        Self { command, params }
    }

    /// Opcode followed by the four parameters
    pub fn payload(&self) -> [u8; PAYLOAD_SIZE] {
        [
            self.command.into(),
            self.params[0],
            self.params[1],
            self.params[2],
            self.params[3],
        ]
    }

    /// Calculate checksum for this frame
    pub fn checksum(&self) -> u8 {
        checksum::calculate(&self.payload())
    }

    /// Encode frame to bytes
    pub fn encode(&self) -> [u8; FRAME_SIZE] {
        encode(self.command.into(), self.params)
    }

    /// Decode frame from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Buffer is not exactly 8 bytes
    /// - Lead or trail marker is not 0xF5
    /// - Checksum verification fails
    /// - Command code is unknown
    ///
    /// # Examples
    ///
    /// ```
    /// use fp1020a_core::{Command, Frame};
    ///
    /// let original = Frame::with_params(Command::DeleteUser, [0x00, 0x07, 0x00, 0x00]);
    /// let decoded = Frame::decode(&original.encode()).unwrap();
    ///
    /// assert_eq!(original, decoded);
    /// ```
    pub fn decode(raw: &[u8]) -> Result<Self> {
        if raw.len() != FRAME_SIZE {
            return Err(Error::FrameSize {
                expected: FRAME_SIZE,
                actual: raw.len(),
            });
        }

        let mut buf = raw;

        let lead = buf.get_u8();
        if lead != FRAME_MARKER {
            return Err(Error::InvalidMarker {
                position: 0,
                value: lead,
            });
        }

        let command_raw = buf.get_u8();
        let mut params = [0u8; 4];
        buf.copy_to_slice(&mut params);
        let checksum_received = buf.get_u8();

        let trail = buf.get_u8();
        if trail != FRAME_MARKER {
            return Err(Error::InvalidMarker {
                position: FRAME_SIZE - 1,
                value: trail,
            });
        }

        let payload = &raw[1..1 + PAYLOAD_SIZE];
        if !checksum::verify(payload, checksum_received) {
            return Err(Error::ChecksumMismatch {
                expected: checksum::calculate(payload),
                received: checksum_received,
            });
        }

        let command = Command::try_from(command_raw)?;

        Ok(Self { command, params })
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("command", &self.command)
            .field("params", &hex::encode(self.params))
            .field("checksum", &format!("0x{:02X}", self.checksum()))
            .finish()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame[{}]({:02X?})", self.command, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_enroll_start() {
        let frame = encode(0x01, [0x00, 0x01, 0x01, 0x00]);
        assert_eq!(frame, [0xF5, 0x01, 0x00, 0x01, 0x01, 0x00, 0x01, 0xF5]);
    }

    #[test]
    fn test_frame_encode_matches_raw_encode() {
        let frame = Frame::with_params(Command::SetCompareLevel, [0x00, 0x05, 0x01, 0x00]);
        assert_eq!(frame.encode(), encode(0x28, [0x00, 0x05, 0x01, 0x00]));
        assert_eq!(frame.checksum(), 0x28 ^ 0x05 ^ 0x01);
    }

    #[test]
    fn test_frame_new_zero_params() {
        let frame = Frame::new(Command::DeleteAll);
        assert_eq!(frame.encode(), [0xF5, 0x05, 0, 0, 0, 0, 0x05, 0xF5]);
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        let mut raw = Frame::new(Command::AuthUser).encode();
        raw[6] ^= 0xFF;

        let result = Frame::decode(&raw);
        if let Err(Error::ChecksumMismatch { expected, received }) = result {
            assert_ne!(expected, received);
        } else {
            panic!("Expected ChecksumMismatch error");
        }
    }

    #[test]
    fn test_decode_bad_markers() {
        let mut raw = Frame::new(Command::UserAmount).encode();
        raw[0] = 0x00;
        assert!(matches!(
            Frame::decode(&raw),
            Err(Error::InvalidMarker { position: 0, value: 0x00 })
        ));

        let mut raw = Frame::new(Command::UserAmount).encode();
        raw[7] = 0xAA;
        assert!(matches!(
            Frame::decode(&raw),
            Err(Error::InvalidMarker { position: 7, value: 0xAA })
        ));
    }

    #[test]
    fn test_decode_wrong_size() {
        assert!(matches!(
            Frame::decode(&[0xF5, 0x01, 0xF5]),
            Err(Error::FrameSize { expected: 8, actual: 3 })
        ));
    }

    #[test]
    fn test_decode_unknown_command() {
        let raw = encode(0x7F, [0, 0, 0, 0]);
        assert!(matches!(Frame::decode(&raw), Err(Error::UnknownCommand(0x7F))));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every frame is marker-delimited, 8 bytes long and
            /// carries the XOR of its payload
            #[test]
            fn prop_frame_layout(command in any::<u8>(), params in any::<[u8; 4]>()) {
                let frame = encode(command, params);

                prop_assert_eq!(frame.len(), FRAME_SIZE);
                prop_assert_eq!(frame[0], FRAME_MARKER);
                prop_assert_eq!(frame[7], FRAME_MARKER);
                prop_assert_eq!(
                    frame[6],
                    command ^ params[0] ^ params[1] ^ params[2] ^ params[3]
                );
            }

            /// Property: folding payload and checksum together cancels out
            #[test]
            fn prop_checksum_self_inverse(command in any::<u8>(), params in any::<[u8; 4]>()) {
                let frame = encode(command, params);
                let folded = frame[1..7].iter().fold(0u8, |acc, &b| acc ^ b);

                prop_assert_eq!(folded, 0);
            }

            /// Property: flipping any payload bit is caught on decode
            #[test]
            fn prop_corruption_detected(
                params in any::<[u8; 4]>(),
                offset in 2usize..6,
                flip in 1u8..=255,
            ) {
                let mut raw = encode(Command::CompareUserId.into(), params);
                raw[offset] ^= flip;

                prop_assert!(Frame::decode(&raw).is_err());
            }
        }
    }
}
