//! Protocol constants
//!
//! These constants define the opcodes, reply lengths, and other
//! protocol-specific values used in the EthIO serial protocol. Opcodes are
//! the 1-based position of each command in the firmware's fixed command
//! table.

// ============================================================================
// Opcodes (host → firmware)
// ============================================================================

/// Configure a pin as a digital output, initially low.
pub const CMD_CONFIG_OUTPUT: u8 = 1;
/// Configure a pin as a digital output with inverted logic, initially high.
pub const CMD_CONFIG_OUTPUT_INVERTED: u8 = 2;
/// Pulse an output pin for a duration in milliseconds.
pub const CMD_PULSE: u8 = 3;
/// Pulse an output pin in a timed train. Reserved; not implemented by the
/// firmware.
pub const CMD_PULSE_TRAIN: u8 = 4;
/// Pulse an output pin for a duration, starting after a delay.
pub const CMD_PULSE_AFTER: u8 = 5;
/// Configure a pin as a digital input with the internal pullup enabled.
pub const CMD_CONFIG_INPUT_PULLUP: u8 = 6;
/// Configure a pin as a floating digital input.
pub const CMD_CONFIG_INPUT_NOPULLUP: u8 = 7;
/// Read the current level of a pin.
pub const CMD_READ_PIN: u8 = 8;
/// Get the firmware millisecond clock.
pub const CMD_GET_CLOCK: u8 = 9;
/// Get the clock value captured at the last input event.
pub const CMD_GET_LAST_CLOCK: u8 = 10;
/// Get the number of entries in the firmware output schedule.
pub const CMD_GET_SCHEDULE_SIZE: u8 = 11;

// ============================================================================
// Reply lengths (firmware → host)
// ============================================================================

/// Reply length for `read_pin`: one level byte.
pub const REPLY_LEN_READ_PIN: usize = 1;
/// Reply length for `get_clock` and `get_last_clock`: a big-endian `u32`
/// millisecond count.
pub const REPLY_LEN_CLOCK: usize = 4;
/// Reply length for `get_schedule_size`: one count byte.
pub const REPLY_LEN_SCHEDULE_SIZE: usize = 1;

// ============================================================================
// Handshake
// ============================================================================

/// Byte that terminates the firmware's boot banner. The first occurrence of
/// this byte on the serial line marks the device ready for commands.
pub const READY_DELIMITER: u8 = b'\n';
