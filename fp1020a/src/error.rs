//! High-level error types

use fp1020a_core::AckCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] fp1020a_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] fp1020a_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] fp1020a_types::Error),

    /// Well-formed reply whose status byte reports something other than success
    #[error("Device reported {0}")]
    Device(AckCode),
}

impl Error {
    /// Check if no usable reply came back from the sensor
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Acknowledgement code reported by the sensor, if any
    pub fn ack(&self) -> Option<AckCode> {
        match self {
            Self::Device(ack) => Some(*ack),
            _ => None,
        }
    }
}
