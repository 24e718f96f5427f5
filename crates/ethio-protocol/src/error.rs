//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when working with the EthIO wire format.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// A reply buffer had the wrong length for its converter.
    #[error("bad reply length: expected {expected} bytes, got {actual}")]
    BadReplyLength {
        /// Length the opcode table announces.
        expected: usize,
        /// Length actually handed to the converter.
        actual: usize,
    },
}
