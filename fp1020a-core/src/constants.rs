//! Protocol constants

/// Marker byte opening and closing every command frame
pub const FRAME_MARKER: u8 = 0xF5;

/// Encoded command frame size (marker, 5-byte payload, checksum, marker)
pub const FRAME_SIZE: usize = 8;

/// Command payload size (opcode plus four parameters)
pub const PAYLOAD_SIZE: usize = 5;

/// Reply size; replies carry no markers or checksum
pub const REPLY_SIZE: usize = 5;

/// Position of the acknowledgement byte inside a reply
pub const ACK_INDEX: usize = 3;

/// Default read timeout (seconds). Enrollment and identification wait for a
/// finger, so this is much longer than a plain UART round trip.
pub const DEFAULT_READ_TIMEOUT: u64 = 10;

/// Default connection timeout for network bridged transports (seconds)
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 5;

/// Third parameter of SetCompareLevel asking the sensor to store the value
pub const PERSIST_SETTING: u8 = 1;
