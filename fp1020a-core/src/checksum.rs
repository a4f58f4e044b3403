//! FP1020A checksum algorithm
//!
//! The checksum is the XOR of the five payload bytes (opcode and four
//! parameters). Markers are not covered.

use tracing::trace;

/// Calculate frame checksum
///
/// # Examples
///
/// ```
/// use fp1020a_core::checksum;
///
/// assert_eq!(checksum::calculate(&[0x01, 0x00, 0x01, 0x01, 0x00]), 0x01);
/// ```
pub fn calculate(payload: &[u8]) -> u8 {
    let checksum = payload.iter().fold(0u8, |acc, &b| acc ^ b);

    trace!(
        payload = %hex::encode(payload),
        checksum = %format!("0x{:02X}", checksum),
        "Calculated checksum"
    );

    checksum
}

/// Verify checksum
pub fn verify(payload: &[u8], expected: u8) -> bool {
    calculate(payload) == expected
}
