//! Driver error types.

use ethio_protocol::ProtocolError;
use thiserror::Error;

/// Errors that can occur when driving an EthIO device.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The device has not completed its readiness handshake, or a response
    /// value was accessed before the response resolved. Recoverable by
    /// polling again later.
    #[error("device not ready")]
    NotReady,

    /// Transport I/O failed.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// A reply could not be decoded.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}
