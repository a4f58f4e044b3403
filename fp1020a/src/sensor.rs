//! High-level sensor interface

use std::time::Duration;

use fp1020a_core::{constants::PERSIST_SETTING, AckCode, Command, Reply};
use fp1020a_transport::Transport;
use fp1020a_types::{AuthResult, BaudRate, CompareLevel, EnrollStage, UserLevel};
use tracing::{debug, info, warn};

use crate::dispatcher::Dispatcher;
use crate::error::{Error, Result};

/// FP1020A fingerprint sensor
///
/// Owns the transport for its whole lifetime. All operations block until the
/// sensor answers or the reply timeout (10 seconds by default) elapses.
///
/// # Examples
///
/// ```no_run
/// use fp1020a::{Sensor, TcpTransport};
///
/// fn main() -> fp1020a::Result<()> {
///     let mut transport = TcpTransport::new("192.168.4.1", 23);
///     transport.connect()?;
///
///     let mut sensor = Sensor::new(transport);
///     println!("{} users enrolled", sensor.get_user_count()?);
///
///     let auth = sensor.authenticate()?;
///     if auth.is_match() {
///         println!("Welcome, user {}", auth.user_id);
///     }
///     Ok(())
/// }
/// ```
pub struct Sensor<T> {
    dispatcher: Dispatcher<T>,
}

impl<T: Transport> Sensor<T> {
    /// Create a sensor over an already configured transport
    pub fn new(transport: T) -> Self {
        debug!("Using sensor at {}", transport.describe());
        Self {
            dispatcher: Dispatcher::new(transport),
        }
    }

    /// Set reply timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.dispatcher = self.dispatcher.with_timeout(timeout);
        self
    }

    pub fn transport(&self) -> &T {
        self.dispatcher.transport()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.dispatcher.transport_mut()
    }

    /// Give the transport back
    pub fn into_inner(self) -> T {
        self.dispatcher.into_inner()
    }

    /// Register one touch of a fingerprint
    ///
    /// A full enrollment is `First`, one to four `Intermediate`, then `Last`,
    /// all with the same user ID and level. Only the sensor checks that
    /// order; an out-of-order stage comes back as a device error and nothing
    /// is rolled back here.
    pub fn enroll(&mut self, stage: EnrollStage, user_id: u16, level: UserLevel) -> Result<()> {
        let level_byte = level.to_wire().ok_or_else(|| {
            fp1020a_types::Error::Validation(format!("Cannot enroll user {} with level {}", user_id, level))
        })?;

        debug!("Enroll {:?} touch for user {} ({})", stage, user_id, level);

        let [hi, lo] = user_id.to_be_bytes();
        let reply = self
            .dispatcher
            .exchange(Command::from(stage), [hi, lo, level_byte, 0])?;

        expect_success(reply)
    }

    /// First enrollment touch
    pub fn enroll_start(&mut self, user_id: u16, level: UserLevel) -> Result<()> {
        self.enroll(EnrollStage::First, user_id, level)
    }

    /// Second to fifth enrollment touch
    pub fn enroll_intermediate(&mut self, user_id: u16, level: UserLevel) -> Result<()> {
        self.enroll(EnrollStage::Intermediate, user_id, level)
    }

    /// Last enrollment touch
    pub fn enroll_end(&mut self, user_id: u16, level: UserLevel) -> Result<()> {
        self.enroll(EnrollStage::Last, user_id, level)
    }

    /// Delete one user
    pub fn remove_one(&mut self, user_id: u16) -> Result<()> {
        debug!("Removing user {}", user_id);

        let reply = self
            .dispatcher
            .exchange(Command::DeleteUser, user_params(user_id))?;

        expect_success(reply)
    }

    /// Delete every enrolled user
    pub fn remove_all(&mut self) -> Result<()> {
        warn!("Removing all users");

        let reply = self.dispatcher.exchange(Command::DeleteAll, [0; 4])?;

        expect_success(reply)
    }

    /// Number of enrolled users
    pub fn get_user_count(&mut self) -> Result<u16> {
        let reply = self.dispatcher.exchange(Command::UserAmount, [0; 4])?;
        let count = reply.value();

        debug!("User count: {}", count);
        Ok(count)
    }

    /// 1:1 match of the finger on the sensor against `user_id`
    ///
    /// A mismatch is reported as `Error::Device(AckCode::Fail)`.
    pub fn compare_one(&mut self, user_id: u16) -> Result<()> {
        debug!("Comparing finger with user {}", user_id);

        let reply = self
            .dispatcher
            .exchange(Command::CompareUserId, user_params(user_id))?;

        expect_success(reply)
    }

    /// 1:N match of the finger on the sensor against all users
    ///
    /// `NoUser` and `Timeout` from the sensor both mean nobody matched and
    /// yield [`AuthResult::failed`]. A missing reply is an error, never a
    /// failed match.
    pub fn authenticate(&mut self) -> Result<AuthResult> {
        let reply = self.dispatcher.exchange(Command::AuthUser, [0; 4])?;

        let result = match reply.ack() {
            AckCode::NoUser | AckCode::Timeout => AuthResult::failed(),
            _ => AuthResult::new(level_from(reply)?, reply.value()),
        };

        info!("Authentication: {}", result);
        Ok(result)
    }

    /// Permission level of an enrolled user
    ///
    /// Returns `UserLevel::Fail` when the sensor has no such user. A missing
    /// reply stays an error.
    pub fn try_get_user_level(&mut self, user_id: u16) -> Result<UserLevel> {
        let reply = self
            .dispatcher
            .exchange(Command::GetUserLevel, user_params(user_id))?;

        let level = match reply.ack() {
            AckCode::NoUser => UserLevel::Fail,
            _ => level_from(reply)?,
        };

        debug!("User {} level: {}", user_id, level);
        Ok(level)
    }

    /// Like [`Sensor::try_get_user_level`], folding every failure into
    /// `UserLevel::Fail`
    pub fn get_user_level(&mut self, user_id: u16) -> UserLevel {
        match self.try_get_user_level(user_id) {
            Ok(level) => level,
            Err(e) => {
                warn!("Level lookup for user {} failed: {}", user_id, e);
                UserLevel::Fail
            }
        }
    }

    /// Set and store the match strictness (0-9, factory default 5)
    ///
    /// Out-of-range levels are rejected before anything is sent.
    pub fn set_compare_level(&mut self, level: u8) -> Result<()> {
        let level = CompareLevel::new(level)?;

        debug!("Setting compare level to {}", level);

        let reply = self.dispatcher.exchange(
            Command::SetCompareLevel,
            [0, level.value(), PERSIST_SETTING, 0],
        )?;

        expect_success(reply)
    }

    /// Change the sensor line speed, returning the previous setting
    ///
    /// The host side of the transport must be switched to the new speed by
    /// the caller afterwards.
    pub fn try_set_baud_rate(&mut self, baud_rate: BaudRate) -> Result<BaudRate> {
        let code = baud_rate.to_wire().ok_or_else(|| {
            fp1020a_types::Error::Validation("Cannot switch to an unknown baud rate".into())
        })?;

        debug!("Setting baud rate to {}", baud_rate);

        let reply = self
            .dispatcher
            .exchange(Command::SetBaudRate, [0, 0, code, 0])?;

        Ok(BaudRate::from(reply.ack_byte()))
    }

    /// Like [`Sensor::try_set_baud_rate`], folding every failure into
    /// `BaudRate::Unknown`
    pub fn set_baud_rate(&mut self, baud_rate: BaudRate) -> BaudRate {
        match self.try_set_baud_rate(baud_rate) {
            Ok(previous) => previous,
            Err(e) => {
                warn!("Baud rate change to {} failed: {}", baud_rate, e);
                BaudRate::Unknown
            }
        }
    }

    /// First unused user ID in `begin..=end`
    ///
    /// A full range comes back as `Error::Device` with `NoUser` or `Fail`,
    /// distinct from the transport error of a missing reply.
    pub fn get_next_available_id(&mut self, begin: u16, end: u16) -> Result<u16> {
        let [begin_hi, begin_lo] = begin.to_be_bytes();
        let [end_hi, end_lo] = end.to_be_bytes();

        let reply = self.dispatcher.exchange(
            Command::GetAvailableUserId,
            [begin_hi, begin_lo, end_hi, end_lo],
        )?;

        match reply.ack() {
            ack @ (AckCode::NoUser | AckCode::Fail) => {
                debug!("No free user ID in {}..={}", begin, end);
                Err(Error::Device(ack))
            }
            _ => Ok(reply.value()),
        }
    }

    /// Put the sensor to sleep
    ///
    /// The sensor does not answer this command, so no reply is awaited and a
    /// failed write is only logged.
    pub fn sleep(&mut self) {
        debug!("Putting sensor to sleep");

        if let Err(e) = self.dispatcher.send(Command::Sleep, [0; 4]) {
            warn!("Failed to send sleep command: {}", e);
        }
    }
}

fn user_params(user_id: u16) -> [u8; 4] {
    let [hi, lo] = user_id.to_be_bytes();
    [hi, lo, 0, 0]
}

/// Level carried in the status byte of an authenticate or level reply
///
/// Device error codes surface as `Error::Device`; any other byte outside
/// 1..=3 is an unparseable level.
fn level_from(reply: Reply) -> Result<UserLevel> {
    UserLevel::try_from(reply.ack_byte()).map_err(|e| match reply.ack() {
        AckCode::Success | AckCode::Unknown(_) => Error::Types(e),
        ack => Error::Device(ack),
    })
}

fn expect_success(reply: Reply) -> Result<()> {
    match reply.ack() {
        AckCode::Success => Ok(()),
        ack => {
            debug!("Device answered {}", ack);
            Err(Error::Device(ack))
        }
    }
}
