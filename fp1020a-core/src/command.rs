//! FP1020A protocol command definitions

use std::fmt;

use fp1020a_types::EnrollStage;

use crate::error::{Error, Result};

/// Protocol command codes
///
/// All opcodes from the FP1020A datasheet. Hash and image transfers use
/// multi-packet exchanges that this driver does not implement; their codes
/// are listed so frames carrying them can still be named and decoded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    // Enrollment
    AddFinger1 = 0x01,
    AddFinger2 = 0x02,
    AddFinger3 = 0x03,

    // User database
    DeleteUser = 0x04,
    DeleteAll = 0x05,
    UserAmount = 0x09,
    GetUserLevel = 0x0A,

    // Matching
    CompareUserId = 0x0B,
    AuthUser = 0x0C,

    // Configuration
    SetBaudRate = 0x21,
    SetCompareLevel = 0x28,
    GetDspSerial = 0x2A,
    GetOnlineUsers = 0x2B,
    Sleep = 0x2C,
    AllowRepeat = 0x2D,
    SetAuthDelay = 0x2E,

    // Operation log
    GetOpRecord = 0x39,
    ClearOpRecord = 0x3A,

    // Image & hash transfer
    HashImage = 0x23,
    UploadImage = 0x24,
    GetHash = 0x31,
    AddHash = 0x41,
    CompareHashOne = 0x42,
    CompareHashAll = 0x43,
    CompareHashFinger = 0x44,

    GetAvailableUserId = 0x47,
}

impl Command {
    /// Check if the sensor answers this command
    ///
    /// Sleep is fire-and-forget: the sensor powers down without replying.
    pub fn expects_reply(self) -> bool {
        !matches!(self, Self::Sleep)
    }

    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::AddFinger1 => "CMD_ADD_FINGER_1",
            Self::AddFinger2 => "CMD_ADD_FINGER_2",
            Self::AddFinger3 => "CMD_ADD_FINGER_3",
            Self::DeleteUser => "CMD_DELETE_USER",
            Self::DeleteAll => "CMD_DELETE_ALL",
            Self::UserAmount => "CMD_USER_AMOUNT",
            Self::GetUserLevel => "CMD_GET_USER_LVL",
            Self::CompareUserId => "CMD_COMP_USER_ID",
            Self::AuthUser => "CMD_AUTH_USER",
            Self::SetBaudRate => "CMD_SET_BAUD_RATE",
            Self::SetCompareLevel => "CMD_SET_COMP_LEVEL",
            Self::GetDspSerial => "CMD_GET_DSP_SN",
            Self::GetOnlineUsers => "CMD_GET_ONLINE_USERS",
            Self::Sleep => "CMD_SLEEP",
            Self::AllowRepeat => "CMD_ALLOW_REPEAT",
            Self::SetAuthDelay => "CMD_SET_AUTH_DELAY",
            Self::GetOpRecord => "CMD_GET_OP_RECORD",
            Self::ClearOpRecord => "CMD_CLEAR_OP_RECORD",
            Self::HashImage => "CMD_HASH_IMG",
            Self::UploadImage => "CMD_UPLOAD_IMG",
            Self::GetHash => "CMD_GET_HASH",
            Self::AddHash => "CMD_ADD_HASH",
            Self::CompareHashOne => "CMD_COMP_HASH_ONE_USER",
            Self::CompareHashAll => "CMD_COMP_HASH_ALL",
            Self::CompareHashFinger => "CMD_COMP_HASH_FINGER",
            Self::GetAvailableUserId => "CMD_GET_AVAILABLE_USER_ID",
        }
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}

impl From<EnrollStage> for Command {
    fn from(stage: EnrollStage) -> Command {
        match stage {
            EnrollStage::First => Self::AddFinger1,
            EnrollStage::Intermediate => Self::AddFinger2,
            EnrollStage::Last => Self::AddFinger3,
        }
    }
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x01 => Ok(Self::AddFinger1),
            0x02 => Ok(Self::AddFinger2),
            0x03 => Ok(Self::AddFinger3),
            0x04 => Ok(Self::DeleteUser),
            0x05 => Ok(Self::DeleteAll),
            0x09 => Ok(Self::UserAmount),
            0x0A => Ok(Self::GetUserLevel),
            0x0B => Ok(Self::CompareUserId),
            0x0C => Ok(Self::AuthUser),
            0x21 => Ok(Self::SetBaudRate),
            0x23 => Ok(Self::HashImage),
            0x24 => Ok(Self::UploadImage),
            0x28 => Ok(Self::SetCompareLevel),
            0x2A => Ok(Self::GetDspSerial),
            0x2B => Ok(Self::GetOnlineUsers),
            0x2C => Ok(Self::Sleep),
            0x2D => Ok(Self::AllowRepeat),
            0x2E => Ok(Self::SetAuthDelay),
            0x31 => Ok(Self::GetHash),
            0x39 => Ok(Self::GetOpRecord),
            0x3A => Ok(Self::ClearOpRecord),
            0x41 => Ok(Self::AddHash),
            0x42 => Ok(Self::CompareHashOne),
            0x43 => Ok(Self::CompareHashAll),
            0x44 => Ok(Self::CompareHashFinger),
            0x47 => Ok(Self::GetAvailableUserId),
            _ => Err(Error::UnknownCommand(value)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_conversion() {
        assert_eq!(u8::from(Command::AuthUser), 0x0C);
        assert_eq!(Command::try_from(0x47).unwrap(), Command::GetAvailableUserId);
    }

    #[test]
    fn test_command_from_stage() {
        assert_eq!(Command::from(EnrollStage::First), Command::AddFinger1);
        assert_eq!(Command::from(EnrollStage::Intermediate), Command::AddFinger2);
        assert_eq!(Command::from(EnrollStage::Last), Command::AddFinger3);
    }

    #[test]
    fn test_command_expects_reply() {
        assert!(!Command::Sleep.expects_reply());
        assert!(Command::DeleteAll.expects_reply());
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::SetBaudRate.to_string(), "CMD_SET_BAUD_RATE(0x21)");
    }

    #[test]
    fn test_unknown_command() {
        let result = Command::try_from(0xFF);
        assert!(matches!(result, Err(Error::UnknownCommand(0xFF))));
    }
}
