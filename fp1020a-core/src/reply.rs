//! FP1020A reply structure
//!
//! Replies are five raw bytes with no markers or checksum:
//!
//! ```text
//! ┌──────┬───────────┬───────────┬──────┬──────┐
//! │  R0  │  R1 (hi)  │  R2 (lo)  │ ACK  │  R4  │
//! └──────┴───────────┴───────────┴──────┴──────┘
//! ```
//!
//! R1/R2 hold a big-endian 16-bit value (user ID or count) for the commands
//! that return one.

use byteorder::{BigEndian, ByteOrder};
use std::fmt;

use crate::{
    ack::AckCode,
    constants::{ACK_INDEX, REPLY_SIZE},
};

/// Reply received from the sensor
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Reply([u8; REPLY_SIZE]);

impl Reply {
    pub fn new(raw: [u8; REPLY_SIZE]) -> Self {
        Self(raw)
    }

    /// Raw status byte
    pub fn ack_byte(&self) -> u8 {
        self.0[ACK_INDEX]
    }

    /// Status byte as an acknowledgement code
    pub fn ack(&self) -> AckCode {
        AckCode::from(self.ack_byte())
    }

    /// Big-endian value carried in R1/R2
    ///
    /// # Examples
    ///
    /// ```
    /// use fp1020a_core::Reply;
    ///
    /// let reply = Reply::new([0x09, 0x01, 0x2C, 0x00, 0x00]);
    /// assert_eq!(reply.value(), 300);
    /// ```
    pub fn value(&self) -> u16 {
        BigEndian::read_u16(&self.0[1..3])
    }

    pub fn as_bytes(&self) -> &[u8; REPLY_SIZE] {
        &self.0
    }
}

impl From<[u8; REPLY_SIZE]> for Reply {
    fn from(raw: [u8; REPLY_SIZE]) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reply")
            .field("raw", &hex::encode(self.0))
            .field("ack", &self.ack())
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reply[{}](value={})", self.ack(), self.value())
    }
}
