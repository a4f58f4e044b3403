//! # fp1020a
//!
//! Rust driver for Biovo FP1020A UART fingerprint sensor modules.
//!
//! ## Features
//!
//! - Typed protocol implementation (8-byte XOR-checked frames, 5-byte replies)
//! - Blocking API over any byte [`Transport`]
//! - Enrollment, deletion, 1:1 and 1:N matching, sensor configuration
//! - Distinct errors for "no reply" and "sensor said no"
//!
//! ## Quick Start
//!
//! ```no_run
//! use fp1020a::{Sensor, TcpTransport, UserLevel};
//!
//! fn main() -> fp1020a::Result<()> {
//!     // Sensor behind a serial-to-TCP bridge
//!     let mut transport = TcpTransport::new("192.168.4.1", 23);
//!     transport.connect()?;
//!
//!     let mut sensor = Sensor::new(transport);
//!
//!     // Enroll user 1 with three touches
//!     sensor.enroll_start(1, UserLevel::Level1)?;
//!     sensor.enroll_intermediate(1, UserLevel::Level1)?;
//!     sensor.enroll_end(1, UserLevel::Level1)?;
//!
//!     // Identify
//!     let auth = sensor.authenticate()?;
//!     println!("{}", auth);
//!
//!     Ok(())
//! }
//! ```

pub mod dispatcher;
pub mod error;
pub mod sensor;
pub mod shared;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use sensor::Sensor;
pub use shared::SharedSensor;

// Re-export protocol and transport types
pub use fp1020a_core::{AckCode, Command, Frame, Reply};
pub use fp1020a_transport::{TcpTransport, Transport};
pub use fp1020a_types::{AuthResult, BaudRate, CompareLevel, EnrollStage, UserLevel};
