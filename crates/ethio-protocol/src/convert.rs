//! Reply converters.
//!
//! Replies on the wire are raw big-endian unsigned integers or a single
//! level byte. Converters always receive a complete reply buffer of the
//! length announced by the opcode table; partial accumulation is handled by
//! the driver, never here. Every converter checks the buffer length it was
//! handed and fails rather than guessing.

use crate::constants::*;
use crate::error::ProtocolError;

/// Interpret a reply buffer as a big-endian unsigned integer.
fn decode_uint(buf: &[u8]) -> u64 {
    buf.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Decode a `read_pin` reply into a logic level (zero = low, nonzero = high).
pub fn decode_pin_level(buf: &[u8]) -> Result<bool, ProtocolError> {
    if buf.len() != REPLY_LEN_READ_PIN {
        return Err(ProtocolError::BadReplyLength {
            expected: REPLY_LEN_READ_PIN,
            actual: buf.len(),
        });
    }
    Ok(decode_uint(buf) != 0)
}

/// Decode a clock reply into a millisecond count.
pub fn decode_millis(buf: &[u8]) -> Result<u32, ProtocolError> {
    if buf.len() != REPLY_LEN_CLOCK {
        return Err(ProtocolError::BadReplyLength {
            expected: REPLY_LEN_CLOCK,
            actual: buf.len(),
        });
    }
    Ok(decode_uint(buf) as u32)
}

/// Decode a schedule-size reply into an entry count.
pub fn decode_schedule_size(buf: &[u8]) -> Result<u8, ProtocolError> {
    if buf.len() != REPLY_LEN_SCHEDULE_SIZE {
        return Err(ProtocolError::BadReplyLength {
            expected: REPLY_LEN_SCHEDULE_SIZE,
            actual: buf.len(),
        });
    }
    Ok(decode_uint(buf) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pin_level() {
        assert_eq!(decode_pin_level(&[0x00]), Ok(false));
        assert_eq!(decode_pin_level(&[0x01]), Ok(true));
        assert_eq!(decode_pin_level(&[0xFF]), Ok(true));
    }

    #[test]
    fn test_decode_millis_big_endian() {
        assert_eq!(decode_millis(&[0x00, 0x00, 0x01, 0x2C]), Ok(300));
        assert_eq!(decode_millis(&[0xFF, 0xFF, 0xFF, 0xFF]), Ok(u32::MAX));
        assert_eq!(decode_millis(&[0x00, 0x00, 0x00, 0x00]), Ok(0));
    }

    #[test]
    fn test_decode_schedule_size() {
        assert_eq!(decode_schedule_size(&[42]), Ok(42));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(
            decode_millis(&[0x01, 0x02]),
            Err(ProtocolError::BadReplyLength {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(
            decode_pin_level(&[]),
            Err(ProtocolError::BadReplyLength {
                expected: 1,
                actual: 0
            })
        );
    }
}
