//! Serial port transport.

use std::io::{self, Read, Write};
use std::time::Duration;

use tracing::debug;

use crate::config::SerialConfig;
use crate::error::DriverError;
use crate::transport::Transport;

/// A [`Transport`] over a physical serial port.
///
/// Reads are bounded by the configured timeout per underlying read call; a
/// timeout is not an error, it just ends the read with whatever bytes were
/// collected so far.
pub struct SerialTransport {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialTransport {
    /// Open the serial port described by `config`.
    pub fn open(config: &SerialConfig) -> Result<Self, DriverError> {
        let port = serialport::new(config.path.as_str(), config.baud_rate)
            .timeout(Duration::from_millis(config.timeout_ms))
            .open()?;
        debug!(
            path = %config.path,
            baud = config.baud_rate,
            "opened serial port"
        );
        Ok(SerialTransport { port })
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.port.write_all(data)
    }

    fn read_up_to(&mut self, max: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; max];
        let mut filled = 0;
        while filled < max {
            match self.port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        buf.truncate(filled);
        Ok(buf)
    }

    fn read_until(&mut self, delimiter: u8) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.port.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    out.push(byte[0]);
                    if byte[0] == delimiter {
                        break;
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::TimedOut => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }
}
