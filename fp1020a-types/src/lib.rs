//! Type definitions for fp1020a
//!
//! Plain values exchanged with the sensor: user permission levels, line
//! speeds, enrollment stages and identification results.

pub mod auth_result;
pub mod baud_rate;
pub mod enroll;
pub mod error;
pub mod level;

pub use auth_result::AuthResult;
pub use baud_rate::BaudRate;
pub use enroll::EnrollStage;
pub use error::{Error, Result};
pub use level::{CompareLevel, UserLevel};
