//! User permission levels and match strictness

use std::fmt;

use crate::error::{Error, Result};

/// User permission level stored alongside each enrolled fingerprint
///
/// `Fail` is not a level the device stores; it marks a lookup or
/// identification that did not resolve to a user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UserLevel {
    Fail,
    Level1,
    Level2,
    Level3,
}

impl UserLevel {
    /// Signed code as documented by the vendor (`-1` for `Fail`)
    pub fn code(self) -> i8 {
        match self {
            Self::Fail => -1,
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }

    /// Byte sent on the wire when enrolling
    ///
    /// `Fail` has no wire form and yields `None`.
    pub fn to_wire(self) -> Option<u8> {
        match self {
            Self::Fail => None,
            Self::Level1 => Some(1),
            Self::Level2 => Some(2),
            Self::Level3 => Some(3),
        }
    }

    /// Check if this is a real permission level
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl TryFrom<u8> for UserLevel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Level1),
            2 => Ok(Self::Level2),
            3 => Ok(Self::Level3),
            _ => Err(Error::Parse(format!("Invalid user level: {}", value))),
        }
    }
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => write!(f, "FAIL"),
            level => write!(f, "LEVEL{}", level.code()),
        }
    }
}

/// Comparison strictness threshold (0 = loosest, 9 = strictest)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompareLevel(u8);

impl CompareLevel {
    /// Highest accepted strictness
    pub const MAX: u8 = 9;

    /// Factory setting
    pub const DEFAULT: CompareLevel = CompareLevel(5);

    /// Create a compare level, rejecting values above 9
    pub fn new(level: u8) -> Result<Self> {
        if level > Self::MAX {
            return Err(Error::Validation(format!(
                "Compare level {} out of range (0-{})",
                level,
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for CompareLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for CompareLevel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for CompareLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
