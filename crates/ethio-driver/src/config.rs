//! Serial link configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the serial link to an EthIO device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialConfig {
    /// Serial port path (e.g. `/dev/ttyUSB0` or `COM3`).
    pub path: String,
    /// Baud rate.
    pub baud_rate: u32,
    /// Read timeout in milliseconds. Bounds every transport read; reads
    /// return early with whatever bytes arrived.
    pub timeout_ms: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        SerialConfig {
            path: String::new(),
            baud_rate: 115_200,
            timeout_ms: 100,
        }
    }
}
