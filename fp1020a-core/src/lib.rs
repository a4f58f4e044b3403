//! # fp1020a-core
//!
//! Core protocol implementation for FP1020A fingerprint sensors.
//!
//! This crate provides the low-level protocol primitives:
//! - Frame structure and encoding/decoding
//! - XOR checksum calculation
//! - Command and acknowledgement code definitions
//! - Reply field decoding
//! - Protocol constants

pub mod ack;
pub mod checksum;
pub mod command;
pub mod constants;
pub mod error;
pub mod frame;
pub mod reply;

pub use ack::AckCode;
pub use command::Command;
pub use constants::{FRAME_SIZE, REPLY_SIZE};
pub use error::{Error, Result};
pub use frame::{encode, Frame};
pub use reply::Reply;
