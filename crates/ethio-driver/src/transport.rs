//! Byte-stream transport abstraction.

use std::io;

/// An ordered, reliable duplex byte stream to the device.
///
/// Reads are bounded: implementations must return within their configured
/// timeout with however many bytes arrived, possibly none. They must never
/// block indefinitely, since the driver's polling model relies on reads
/// returning early to hand control back to the caller.
pub trait Transport {
    /// Write all of `data` to the device.
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Read up to `max` bytes. Returns whatever arrived before the timeout,
    /// which may be fewer than `max` bytes or none at all.
    fn read_up_to(&mut self, max: usize) -> io::Result<Vec<u8>>;

    /// Read until `delimiter` is seen (inclusive) or the timeout elapses.
    /// The delimiter, when present, is the last byte of the returned buffer.
    fn read_until(&mut self, delimiter: u8) -> io::Result<Vec<u8>>;
}
