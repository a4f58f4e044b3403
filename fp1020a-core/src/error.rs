//! Error types for fp1020a-core

/// Result type alias for fp1020a-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Frame has the wrong length
    #[error("Frame size mismatch: expected {expected} bytes, got {actual} bytes")]
    FrameSize {
        expected: usize,
        actual: usize,
    },

    /// Lead or trail marker is not 0xF5
    #[error("Invalid frame marker at byte {position}: 0x{value:02X}")]
    InvalidMarker {
        position: usize,
        value: u8,
    },

    /// Checksum verification failed
    #[error("Checksum mismatch: expected 0x{expected:02X}, received 0x{received:02X}")]
    ChecksumMismatch {
        expected: u8,
        received: u8,
    },

    /// Unknown command code
    #[error("Unknown command code: 0x{0:02X}")]
    UnknownCommand(u8),

    /// Reply awaited for a command the sensor never answers
    #[error("Command 0x{0:02X} has no reply")]
    NoReply(u8),
}
