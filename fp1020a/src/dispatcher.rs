//! Request/response exchange
//!
//! Every sensor command is one frame out and one fixed-size reply back. The
//! channel carries no correlation id, so a `Dispatcher` must never have two
//! exchanges in flight; `&mut self` on every call enforces that.

use std::time::Duration;

use fp1020a_core::{
    constants::DEFAULT_READ_TIMEOUT, encode, Command, Error as CoreError, Reply, FRAME_SIZE, REPLY_SIZE,
};
use fp1020a_transport::{Error as TransportError, Transport};
use tracing::{debug, trace};

use crate::error::Result;

/// Blocking exchange primitive over a [`Transport`]
pub struct Dispatcher<T> {
    transport: T,
    timeout: Duration,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT),
        }
    }

    /// Set reply timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Encode and write one command frame
    ///
    /// Fails with a transport error if the write errors or the channel
    /// accepts fewer than 8 bytes.
    pub fn send(&mut self, command: Command, params: [u8; 4]) -> Result<()> {
        let frame = encode(command.into(), params);

        trace!("Sending {}: {}", command, hex::encode(frame));

        let written = self.transport.write(&frame).inspect_err(|e| {
            debug!("Write of {} failed: {}", command, e);
        })?;

        if written < FRAME_SIZE {
            debug!("Short write of {}: {}/{} bytes", command, written, FRAME_SIZE);
            return Err(TransportError::ShortWrite {
                expected: FRAME_SIZE,
                written,
            }
            .into());
        }

        Ok(())
    }

    /// Wait for one 5-byte reply
    ///
    /// Anything shorter than a full reply is treated the same as no reply.
    pub fn recv(&mut self) -> Result<Reply> {
        let mut buf = [0u8; REPLY_SIZE];

        let n = self.transport.read(&mut buf, self.timeout).inspect_err(|e| {
            debug!("Reply read failed: {}", e);
        })?;

        if n < REPLY_SIZE {
            debug!("Short reply: {}", hex::encode(&buf[..n]));
            return Err(TransportError::ShortRead {
                expected: REPLY_SIZE,
                actual: n,
            }
            .into());
        }

        let reply = Reply::new(buf);
        trace!("Received: {:?}", reply);

        Ok(reply)
    }

    /// Send a command and wait for its reply
    ///
    /// Commands the sensor never answers are refused before anything is
    /// written; use [`Dispatcher::send`] for those.
    pub fn exchange(&mut self, command: Command, params: [u8; 4]) -> Result<Reply> {
        if !command.expects_reply() {
            return Err(CoreError::NoReply(command.into()).into());
        }

        self.send(command, params)?;
        self.recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockall::mock;
    use pretty_assertions::assert_eq;

    mock! {
        pub Link {}

        impl Transport for Link {
            fn write(&mut self, data: &[u8]) -> fp1020a_transport::Result<usize>;
            fn read(&mut self, buf: &mut [u8], timeout: Duration) -> fp1020a_transport::Result<usize>;
            fn describe(&self) -> String;
        }
    }

    #[test]
    fn test_exchange_writes_frame_and_reads_reply() {
        let mut link = MockLink::new();
        link.expect_write()
            .withf(|data: &[u8]| data == [0xF5, 0x09, 0x00, 0x00, 0x00, 0x00, 0x09, 0xF5])
            .times(1)
            .returning(|data| Ok(data.len()));
        link.expect_read()
            .times(1)
            .returning(|buf, _| {
                buf.copy_from_slice(&[0x09, 0x00, 0x02, 0x00, 0x00]);
                Ok(5)
            });

        let mut dispatcher = Dispatcher::new(link);
        let reply = dispatcher.exchange(Command::UserAmount, [0; 4]).unwrap();

        assert_eq!(reply.value(), 2);
    }

    #[test]
    fn test_recv_uses_configured_timeout() {
        let mut link = MockLink::new();
        link.expect_read()
            .withf(|_, timeout| *timeout == Duration::from_millis(250))
            .times(1)
            .returning(|buf, _| {
                buf.fill(0);
                Ok(buf.len())
            });

        let mut dispatcher = Dispatcher::new(link).with_timeout(Duration::from_millis(250));
        assert!(dispatcher.recv().is_ok());
    }

    #[test]
    fn test_default_timeout_is_ten_seconds() {
        let dispatcher = Dispatcher::new(MockLink::new());
        assert_eq!(dispatcher.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_zero_byte_write_is_transport_error() {
        let mut link = MockLink::new();
        link.expect_write().times(1).returning(|_| Ok(0));
        link.expect_read().never();

        let mut dispatcher = Dispatcher::new(link);
        let result = dispatcher.exchange(Command::DeleteAll, [0; 4]);

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::ShortWrite { expected: 8, written: 0 }))
        ));
    }

    #[test]
    fn test_write_error_skips_read() {
        let mut link = MockLink::new();
        link.expect_write()
            .times(1)
            .returning(|_| Err(TransportError::NotConnected));
        link.expect_read().never();

        let mut dispatcher = Dispatcher::new(link);
        let result = dispatcher.exchange(Command::AuthUser, [0; 4]);

        assert!(matches!(result, Err(Error::Transport(TransportError::NotConnected))));
    }

    #[test]
    fn test_short_reply_is_transport_error() {
        let mut link = MockLink::new();
        link.expect_write().returning(|data| Ok(data.len()));
        link.expect_read().times(1).returning(|buf, _| {
            buf[..3].copy_from_slice(&[0x0C, 0x00, 0x01]);
            Ok(3)
        });

        let mut dispatcher = Dispatcher::new(link);
        let result = dispatcher.exchange(Command::AuthUser, [0; 4]);

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::ShortRead { expected: 5, actual: 3 }))
        ));
    }

    #[test]
    fn test_exchange_refuses_unanswered_command() {
        let mut link = MockLink::new();
        link.expect_write().never();
        link.expect_read().never();

        let mut dispatcher = Dispatcher::new(link);
        let result = dispatcher.exchange(Command::Sleep, [0; 4]);

        assert!(matches!(result, Err(Error::Core(CoreError::NoReply(0x2C)))));
    }

    #[test]
    fn test_read_timeout_is_transport_error() {
        let mut link = MockLink::new();
        link.expect_write().returning(|data| Ok(data.len()));
        link.expect_read()
            .times(1)
            .returning(|_, _| Err(TransportError::ReadTimeout));

        let mut dispatcher = Dispatcher::new(link);
        let err = dispatcher.exchange(Command::UserAmount, [0; 4]).unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.ack(), None);
    }
}
