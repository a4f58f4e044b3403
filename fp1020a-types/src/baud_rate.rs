//! UART line speeds selectable on the sensor

use std::fmt;

/// Baud rate setting
///
/// The discriminants match the byte the sensor uses on the wire. `Unknown`
/// stands for a setting that could not be determined, e.g. when the sensor
/// never answered a baud rate change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum BaudRate {
    Unknown,
    B9600,
    #[default]
    B19200,
    B38400,
    B57600,
    B115200,
}

impl BaudRate {
    /// Signed code as documented by the vendor (`-1` for `Unknown`)
    pub fn code(self) -> i8 {
        match self {
            Self::Unknown => -1,
            Self::B9600 => 1,
            Self::B19200 => 2,
            Self::B38400 => 3,
            Self::B57600 => 4,
            Self::B115200 => 5,
        }
    }

    /// Byte sent on the wire; `Unknown` has no wire form
    pub fn to_wire(self) -> Option<u8> {
        match self {
            Self::Unknown => None,
            other => Some(other.code() as u8),
        }
    }

    /// Line speed in bits per second for configuring the host UART
    pub fn bits_per_second(self) -> Option<u32> {
        match self {
            Self::Unknown => None,
            Self::B9600 => Some(9_600),
            Self::B19200 => Some(19_200),
            Self::B38400 => Some(38_400),
            Self::B57600 => Some(57_600),
            Self::B115200 => Some(115_200),
        }
    }
}

impl From<u8> for BaudRate {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::B9600,
            2 => Self::B19200,
            3 => Self::B38400,
            4 => Self::B57600,
            5 => Self::B115200,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bits_per_second() {
            Some(bps) => write!(f, "{} bps", bps),
            None => write!(f, "unknown"),
        }
    }
}
