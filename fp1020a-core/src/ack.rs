//! Acknowledgement codes reported in reply byte 3

use std::fmt;

/// Device-reported outcome of a command
///
/// Some commands reuse the ack byte for a value (a user level or a baud
/// rate); callers of those commands read the raw byte instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AckCode {
    Success,
    Fail,
    /// Fingerprint database is full
    Full,
    /// No such user
    NoUser,
    /// User ID already registered
    UserOccupied,
    /// Fingerprint already registered
    UserExist,
    /// No finger presented in time
    Timeout,
    /// No finger detected, try again
    TryAgain,
    /// Byte outside the documented set
    Unknown(u8),
}

impl AckCode {
    /// Check if this is a success response
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get ack name
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "ACK_SUCCESS",
            Self::Fail => "ACK_FAIL",
            Self::Full => "ACK_FULL",
            Self::NoUser => "ACK_NOUSER",
            Self::UserOccupied => "ACK_USER_OCCUPIED",
            Self::UserExist => "ACK_USER_EXIST",
            Self::Timeout => "ACK_TIMEOUT",
            Self::TryAgain => "ACK_TRY_AGAIN",
            Self::Unknown(_) => "ACK_UNKNOWN",
        }
    }
}

impl From<u8> for AckCode {
    fn from(value: u8) -> Self {
        match value {
            0x00 => Self::Success,
            0x01 => Self::Fail,
            0x04 => Self::Full,
            0x05 => Self::NoUser,
            0x06 => Self::UserOccupied,
            0x07 => Self::UserExist,
            0x08 => Self::Timeout,
            0x09 => Self::TryAgain,
            other => Self::Unknown(other),
        }
    }
}

impl From<AckCode> for u8 {
    fn from(ack: AckCode) -> u8 {
        match ack {
            AckCode::Success => 0x00,
            AckCode::Fail => 0x01,
            AckCode::Full => 0x04,
            AckCode::NoUser => 0x05,
            AckCode::UserOccupied => 0x06,
            AckCode::UserExist => 0x07,
            AckCode::Timeout => 0x08,
            AckCode::TryAgain => 0x09,
            AckCode::Unknown(value) => value,
        }
    }
}

impl fmt::Display for AckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), u8::from(*self))
    }
}
