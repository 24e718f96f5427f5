//! EthIO Serial Wire Protocol
//!
//! This crate provides types and utilities for the binary command protocol
//! spoken by EthIO pin-control firmware over its serial interface. The
//! protocol is deliberately minimal: there is no framing, no length prefix,
//! and no correlation identifier. Each message is an opcode byte followed by
//! fixed-width big-endian argument fields, and each query produces a reply of
//! a length known in advance from the opcode alone.
//!
//! # Protocol Overview
//!
//! Messages are either:
//!
//! - **Commands** (host → firmware): an `OP_*` opcode byte plus arguments
//! - **Replies** (firmware → host): raw fixed-length payloads, sent strictly
//!   in the order the queries that produced them were received
//!
//! Because replies carry no identifying bytes at all, matching a reply to its
//! query is entirely the host's responsibility; see the `ethio-driver` crate
//! for the ordered-queue machinery that does this.
//!
//! # Example
//!
//! ```rust,ignore
//! use ethio_protocol::{Command, decode_millis};
//!
//! // Build a command
//! let cmd = Command::Pulse { pin: 5, duration_ms: 300 };
//! let wire = cmd.encode();
//!
//! // Decode a 4-byte clock reply
//! let clock = decode_millis(&received)?;
//! ```

mod commands;
mod constants;
mod convert;
mod error;

pub use commands::*;
pub use constants::*;
pub use convert::*;
pub use error::*;
