//! Transport layer for the FP1020A protocol
//!
//! The sensor speaks over a half-duplex UART. The driver only needs two
//! blocking primitives from whatever carries those bytes: write a frame and
//! read a reply within a deadline.

pub mod error;
pub mod tcp;

pub use error::{Error, Result};
pub use tcp::TcpTransport;

use std::time::Duration;

/// Blocking byte channel to the sensor
///
/// The channel has no request correlation, so it must only ever be driven
/// by one caller at a time.
pub trait Transport: Send {
    /// Send raw bytes, returning how many were accepted
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Wait up to `timeout` for `buf.len()` bytes, returning how many arrived
    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Human-readable endpoint name for logs
    fn describe(&self) -> String;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        (**self).read(buf, timeout)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        (**self).read(buf, timeout)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
