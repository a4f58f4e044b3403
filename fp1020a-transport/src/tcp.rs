//! TCP transport
//!
//! For sensors reached through a serial-to-network bridge (ser2net,
//! ESP-Link and the like) that forwards the raw UART byte stream.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

use fp1020a_core::constants::DEFAULT_CONNECT_TIMEOUT;
use tracing::{debug, trace, warn};

use crate::{error::*, Transport};

/// TCP transport for bridged FP1020A sensors
pub struct TcpTransport {
    addr: String,
    port: u16,
    socket_addr: Option<SocketAddr>,
    stream: Option<TcpStream>,
    connect_timeout: Duration,
    write_timeout: Option<Duration>,
}

impl TcpTransport {
    /// Create new TCP transport
    pub fn new(addr: impl Into<String>, port: u16) -> Self {
        Self {
            addr: addr.into(),
            port,
            socket_addr: None,
            stream: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            write_timeout: None,
        }
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set write timeout (writes block indefinitely by default)
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    /// Resolve address to SocketAddr
    fn resolve_addr(&mut self) -> Result<SocketAddr> {
        if let Some(addr) = self.socket_addr {
            return Ok(addr);
        }

        let addr_str = format!("{}:{}", self.addr, self.port);

        let addr = addr_str
            .to_socket_addrs()
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", addr_str, e)))?
            .next()
            .ok_or_else(|| Error::InvalidAddress(format!("No addresses found for {}", addr_str)))?;

        self.socket_addr = Some(addr);
        Ok(addr)
    }

    /// Connect to the bridge
    pub fn connect(&mut self) -> Result<()> {
        if self.is_connected() {
            return Err(Error::AlreadyConnected);
        }

        let addr = self.resolve_addr()?;

        debug!("Connecting to {}...", addr);

        let stream = TcpStream::connect_timeout(&addr, self.connect_timeout).map_err(|e| {
            if e.kind() == ErrorKind::TimedOut {
                Error::ConnectionTimeout
            } else {
                Error::Io(e)
            }
        })?;

        // Frames are tiny; do not let Nagle hold them back
        stream.set_nodelay(true)?;
        stream.set_write_timeout(self.write_timeout)?;

        debug!("Connected to {}", addr);

        self.stream = Some(stream);
        Ok(())
    }

    /// Close the connection
    pub fn disconnect(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.take() {
            debug!("Disconnecting from {}...", self.describe());
            let _ = stream.shutdown(Shutdown::Both);
        }

        self.socket_addr = None;
        Ok(())
    }

    /// Check if connected
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

impl Transport for TcpTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        trace!("Sending {} bytes: {}", data.len(), hex::encode(data));

        stream.write_all(data)?;
        stream.flush()?;

        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        let deadline = Instant::now() + timeout;
        let mut filled = 0;

        while filled < buf.len() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            stream.set_read_timeout(Some(remaining))?;

            match stream.read(&mut buf[filled..]) {
                Ok(0) => {
                    if filled == 0 {
                        warn!("Bridge closed the connection");
                        return Err(Error::ConnectionClosed);
                    }
                    break;
                }
                Ok(n) => filled += n,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!("Read error: {}", e);
                    return Err(Error::Io(e));
                }
            }
        }

        if filled == 0 {
            warn!("Read timeout after {:?}", timeout);
            return Err(Error::ReadTimeout);
        }

        trace!("Received {} bytes: {}", filled, hex::encode(&buf[..filled]));

        Ok(filled)
    }

    fn describe(&self) -> String {
        self.socket_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| format!("{}:{}", self.addr, self.port))
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        if self.is_connected() {
            warn!("TCP transport dropped while still connected");
        }
    }
}
