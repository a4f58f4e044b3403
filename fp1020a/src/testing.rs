//! Scripted in-memory transport for driver tests

use std::collections::VecDeque;
use std::time::Duration;

use fp1020a_core::Frame;
use fp1020a_transport::{Error, Result, Transport};

/// Replays canned replies and records every frame written
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: VecDeque<Vec<u8>>,
    pub(crate) frames: Vec<Frame>,
    pub(crate) fail_writes: bool,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a reply; an empty one simulates a sensor that never answers
    pub(crate) fn reply(mut self, raw: &[u8]) -> Self {
        self.replies.push_back(raw.to_vec());
        self
    }

    pub(crate) fn silent(self) -> Self {
        self.reply(&[])
    }

    pub(crate) fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub(crate) fn last_frame(&self) -> Frame {
        *self.frames.last().expect("no frame written")
    }
}

impl Transport for ScriptedTransport {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        if self.fail_writes {
            return Err(Error::ConnectionClosed);
        }

        let frame = Frame::decode(data).expect("driver wrote an invalid frame");
        self.frames.push(frame);
        Ok(data.len())
    }

    fn read(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize> {
        match self.replies.pop_front() {
            Some(raw) if !raw.is_empty() => {
                let n = raw.len().min(buf.len());
                buf[..n].copy_from_slice(&raw[..n]);
                Ok(n)
            }
            _ => Err(Error::ReadTimeout),
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
