//! Commands that can be sent to EthIO firmware.

use crate::constants::*;

/// Commands that can be sent to the EthIO firmware.
///
/// Each command encodes to its opcode byte followed by fixed-width big-endian
/// argument fields. Opcode 4 (`CMD_PULSE_TRAIN`) is reserved and has no
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Configure a pin as a digital output.
    ConfigOutput {
        /// Pin number.
        pin: u8,
    },

    /// Configure a pin as a digital output with inverted logic.
    ConfigOutputInverted {
        /// Pin number.
        pin: u8,
    },

    /// Pulse an output pin.
    Pulse {
        /// Pin number.
        pin: u8,
        /// Pulse duration in milliseconds.
        duration_ms: u16,
    },

    /// Pulse an output pin, starting after a delay.
    PulseAfter {
        /// Pin number.
        pin: u8,
        /// Delay before the pulse starts, in milliseconds.
        delay_ms: u16,
        /// Pulse duration in milliseconds.
        duration_ms: u16,
    },

    /// Configure a pin as a digital input with the internal pullup.
    ConfigInputPullup {
        /// Pin number.
        pin: u8,
    },

    /// Configure a pin as a floating digital input.
    ConfigInputNopullup {
        /// Pin number.
        pin: u8,
    },

    /// Read the current level of a pin.
    ReadPin {
        /// Pin number.
        pin: u8,
    },

    /// Get the firmware millisecond clock.
    GetClock,

    /// Get the clock value captured at the last input event.
    GetLastClock,

    /// Get the number of entries in the firmware output schedule.
    GetScheduleSize,
}

impl Command {
    /// Get the opcode for this command.
    pub fn code(&self) -> u8 {
        match self {
            Command::ConfigOutput { .. } => CMD_CONFIG_OUTPUT,
            Command::ConfigOutputInverted { .. } => CMD_CONFIG_OUTPUT_INVERTED,
            Command::Pulse { .. } => CMD_PULSE,
            Command::PulseAfter { .. } => CMD_PULSE_AFTER,
            Command::ConfigInputPullup { .. } => CMD_CONFIG_INPUT_PULLUP,
            Command::ConfigInputNopullup { .. } => CMD_CONFIG_INPUT_NOPULLUP,
            Command::ReadPin { .. } => CMD_READ_PIN,
            Command::GetClock => CMD_GET_CLOCK,
            Command::GetLastClock => CMD_GET_LAST_CLOCK,
            Command::GetScheduleSize => CMD_GET_SCHEDULE_SIZE,
        }
    }

    /// Encode the command to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(6);
        buf.push(self.code());

        match self {
            Command::ConfigOutput { pin }
            | Command::ConfigOutputInverted { pin }
            | Command::ConfigInputPullup { pin }
            | Command::ConfigInputNopullup { pin }
            | Command::ReadPin { pin } => {
                buf.push(*pin);
            }

            Command::Pulse { pin, duration_ms } => {
                buf.push(*pin);
                buf.extend_from_slice(&duration_ms.to_be_bytes());
            }

            Command::PulseAfter {
                pin,
                delay_ms,
                duration_ms,
            } => {
                buf.push(*pin);
                buf.extend_from_slice(&delay_ms.to_be_bytes());
                buf.extend_from_slice(&duration_ms.to_be_bytes());
            }

            Command::GetClock | Command::GetLastClock | Command::GetScheduleSize => {}
        }

        buf
    }

    /// Length of the reply this command produces, or `None` for one-way
    /// commands.
    pub fn reply_len(&self) -> Option<usize> {
        match self {
            Command::ReadPin { .. } => Some(REPLY_LEN_READ_PIN),
            Command::GetClock | Command::GetLastClock => Some(REPLY_LEN_CLOCK),
            Command::GetScheduleSize => Some(REPLY_LEN_SCHEDULE_SIZE),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcodes_match_table_position() {
        // The opcode is the command's 1-based position in the firmware table.
        assert_eq!(Command::ConfigOutput { pin: 0 }.code(), 1);
        assert_eq!(Command::ConfigOutputInverted { pin: 0 }.code(), 2);
        assert_eq!(
            Command::Pulse {
                pin: 0,
                duration_ms: 0
            }
            .code(),
            3
        );
        assert_eq!(
            Command::PulseAfter {
                pin: 0,
                delay_ms: 0,
                duration_ms: 0
            }
            .code(),
            5
        );
        assert_eq!(Command::ConfigInputPullup { pin: 0 }.code(), 6);
        assert_eq!(Command::ConfigInputNopullup { pin: 0 }.code(), 7);
        assert_eq!(Command::ReadPin { pin: 0 }.code(), 8);
        assert_eq!(Command::GetClock.code(), 9);
        assert_eq!(Command::GetLastClock.code(), 10);
        assert_eq!(Command::GetScheduleSize.code(), 11);
    }

    #[test]
    fn test_encode_pulse() {
        let wire = Command::Pulse {
            pin: 5,
            duration_ms: 300,
        }
        .encode();
        assert_eq!(wire, vec![3, 0x05, 0x01, 0x2C]);
    }

    #[test]
    fn test_encode_pulse_after_field_order() {
        // Wire order is pin, delay, duration.
        let wire = Command::PulseAfter {
            pin: 7,
            delay_ms: 10,
            duration_ms: 0x0203,
        }
        .encode();
        assert_eq!(wire, vec![5, 0x07, 0x00, 0x0A, 0x02, 0x03]);
    }

    #[test]
    fn test_encode_single_pin_commands() {
        assert_eq!(Command::ConfigOutput { pin: 13 }.encode(), vec![1, 13]);
        assert_eq!(
            Command::ConfigOutputInverted { pin: 13 }.encode(),
            vec![2, 13]
        );
        assert_eq!(Command::ConfigInputPullup { pin: 2 }.encode(), vec![6, 2]);
        assert_eq!(Command::ConfigInputNopullup { pin: 2 }.encode(), vec![7, 2]);
        assert_eq!(Command::ReadPin { pin: 9 }.encode(), vec![8, 9]);
    }

    #[test]
    fn test_encode_no_argument_queries() {
        assert_eq!(Command::GetClock.encode(), vec![9]);
        assert_eq!(Command::GetLastClock.encode(), vec![10]);
        assert_eq!(Command::GetScheduleSize.encode(), vec![11]);
    }

    #[test]
    fn test_reply_lengths() {
        assert_eq!(Command::ReadPin { pin: 0 }.reply_len(), Some(1));
        assert_eq!(Command::GetClock.reply_len(), Some(4));
        assert_eq!(Command::GetLastClock.reply_len(), Some(4));
        assert_eq!(Command::GetScheduleSize.reply_len(), Some(1));
        assert_eq!(Command::ConfigOutput { pin: 0 }.reply_len(), None);
        assert_eq!(
            Command::Pulse {
                pin: 0,
                duration_ms: 1
            }
            .reply_len(),
            None
        );
    }
}
