//! Process-wide shared sensor handle
//!
//! The wire protocol has no request ids, so the sensor is a single-owner
//! resource. When several threads need it, they go through one lock that is
//! held for the whole exchange.

use std::sync::Arc;

use fp1020a_transport::Transport;
use parking_lot::{Mutex, MutexGuard};

use crate::sensor::Sensor;

/// Cloneable handle serializing access to one [`Sensor`]
pub struct SharedSensor<T> {
    inner: Arc<Mutex<Sensor<T>>>,
}

impl<T: Transport> SharedSensor<T> {
    pub fn new(sensor: Sensor<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sensor)),
        }
    }

    /// Take exclusive access; blocks while another thread holds the sensor
    pub fn lock(&self) -> MutexGuard<'_, Sensor<T>> {
        self.inner.lock()
    }

    /// Run one or more operations while holding the lock
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fp1020a::{Sensor, SharedSensor, TcpTransport};
    ///
    /// # fn main() -> fp1020a::Result<()> {
    /// let mut transport = TcpTransport::new("192.168.4.1", 23);
    /// transport.connect()?;
    ///
    /// let shared = SharedSensor::new(Sensor::new(transport));
    /// let count = shared.with(|sensor| sensor.get_user_count())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with<R>(&self, f: impl FnOnce(&mut Sensor<T>) -> R) -> R {
        let mut sensor = self.inner.lock();
        f(&mut *sensor)
    }

    /// Recover the sensor once every other handle is gone
    pub fn try_unwrap(self) -> Result<Sensor<T>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<T> Clone for SharedSensor<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    use fp1020a_core::{Command, Frame};
    use fp1020a_transport::Result;

    /// Answers every frame with a user count and panics if a second frame
    /// arrives before the first reply was read
    #[derive(Default)]
    struct StrictSensor {
        awaiting_read: bool,
        exchanges: usize,
    }

    impl Transport for StrictSensor {
        fn write(&mut self, data: &[u8]) -> Result<usize> {
            let frame = Frame::decode(data).unwrap();
            assert_eq!(frame.command, Command::UserAmount);
            assert!(!self.awaiting_read, "interleaved exchange");
            self.awaiting_read = true;
            Ok(data.len())
        }

        fn read(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize> {
            thread::sleep(Duration::from_millis(1));
            assert!(self.awaiting_read, "read without a pending frame");
            self.awaiting_read = false;
            self.exchanges += 1;
            buf.copy_from_slice(&[0x09, 0x00, 0x2A, 0x00, 0x00]);
            Ok(buf.len())
        }

        fn describe(&self) -> String {
            "strict".to_string()
        }
    }

    #[test]
    fn test_threads_never_interleave_exchanges() {
        let shared = SharedSensor::new(Sensor::new(StrictSensor::default()));

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..10 {
                        let count = shared.with(|sensor| sensor.get_user_count()).unwrap();
                        assert_eq!(count, 42);
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }

        let sensor = shared.try_unwrap().ok().unwrap();
        assert_eq!(sensor.transport().exchanges, 40);
    }

    #[test]
    fn test_try_unwrap_with_live_clone() {
        let shared = SharedSensor::new(Sensor::new(StrictSensor::default()));
        let other = shared.clone();

        let shared = shared.try_unwrap().err().unwrap();
        drop(other);
        assert!(shared.try_unwrap().is_ok());
    }
}
