//! Device session: readiness handshake, command issuance, reply queue.

use std::collections::{HashMap, VecDeque};

use bytes::BytesMut;
use ethio_protocol::{
    decode_millis, decode_pin_level, decode_schedule_size, Command, READY_DELIMITER,
    REPLY_LEN_CLOCK, REPLY_LEN_READ_PIN, REPLY_LEN_SCHEDULE_SIZE,
};
use tracing::{debug, trace};

use crate::error::DriverError;
use crate::response::{Converter, PendingResponse};
use crate::transport::Transport;

/// Identifier tying a [`PendingResponse`] to its place in the reply queue.
///
/// Tickets are never reused within a session, so a handle whose ticket has
/// vanished from the queue knows its reply is unrecoverable rather than
/// merely not yet sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Queue entry for one outstanding reply.
#[derive(Debug)]
struct PendingReply {
    ticket: Ticket,
    expected: usize,
    buf: BytesMut,
}

/// Outcome of a handle asking the session for its reply.
#[derive(Debug)]
pub(crate) enum Claim {
    /// Reply fully accumulated; here are the raw bytes.
    Complete(Vec<u8>),
    /// Still queued behind unresolved predecessors or missing bytes.
    Outstanding,
    /// No longer in the queue and never completed; the byte stream can no
    /// longer be correlated to this reply.
    Lost,
}

/// A session with one EthIO device over a [`Transport`].
///
/// The session owns the transport and the ordered queue of outstanding
/// replies. The queue always reflects query commands in the exact order
/// their bytes were written, which is the only thing keeping unframed,
/// unidentified reply bytes matched to the queries that produced them.
pub struct DeviceSession<T> {
    transport: T,
    ready: bool,
    banner: BytesMut,
    queue: VecDeque<PendingReply>,
    /// Raw bytes of replies that completed while draining the queue but have
    /// not yet been claimed by their handle.
    completed: HashMap<Ticket, Vec<u8>>,
    next_ticket: u64,
}

impl<T: Transport> DeviceSession<T> {
    /// Create a session over `transport`. The session starts not ready; the
    /// device becomes ready once its line-terminated boot banner arrives.
    pub fn new(transport: T) -> Self {
        DeviceSession {
            transport,
            ready: false,
            banner: BytesMut::new(),
            queue: VecDeque::new(),
            completed: HashMap::new(),
            next_ticket: 0,
        }
    }

    /// Check whether the device has completed its readiness handshake.
    ///
    /// Each check reads whatever banner bytes are currently available; once
    /// the line terminator has been seen the session is ready for good and
    /// later checks return without touching the transport.
    pub fn is_ready(&mut self) -> Result<bool, DriverError> {
        if self.ready {
            return Ok(true);
        }
        let chunk = self.transport.read_until(READY_DELIMITER)?;
        self.banner.extend_from_slice(&chunk);
        if self.banner.last() == Some(&READY_DELIMITER) {
            self.ready = true;
            debug!(banner = %self.banner(), "device ready");
        }
        Ok(self.ready)
    }

    /// The boot banner accumulated so far, lossily decoded as UTF-8.
    pub fn banner(&self) -> String {
        String::from_utf8_lossy(&self.banner).into_owned()
    }

    /// Number of replies still outstanding in the queue.
    pub fn outstanding(&self) -> usize {
        self.queue.len()
    }

    /// Configure `pin` as a digital output. With `invert`, the pin idles
    /// high and pulses drive it low.
    pub fn config_output(&mut self, pin: u8, invert: bool) -> Result<(), DriverError> {
        let command = if invert {
            Command::ConfigOutputInverted { pin }
        } else {
            Command::ConfigOutput { pin }
        };
        self.send(&command)
    }

    /// Configure `pin` as a digital input, optionally with the internal
    /// pullup.
    pub fn config_input(&mut self, pin: u8, pullup: bool) -> Result<(), DriverError> {
        let command = if pullup {
            Command::ConfigInputPullup { pin }
        } else {
            Command::ConfigInputNopullup { pin }
        };
        self.send(&command)
    }

    /// Pulse `pin` for `duration_ms` milliseconds.
    pub fn pulse(&mut self, pin: u8, duration_ms: u16) -> Result<(), DriverError> {
        self.send(&Command::Pulse { pin, duration_ms })
    }

    /// Pulse `pin` for `duration_ms` milliseconds, starting `delay_ms`
    /// milliseconds from now on the firmware's schedule.
    pub fn pulse_after(
        &mut self,
        pin: u8,
        delay_ms: u16,
        duration_ms: u16,
    ) -> Result<(), DriverError> {
        self.send(&Command::PulseAfter {
            pin,
            delay_ms,
            duration_ms,
        })
    }

    /// Query the current level of `pin`.
    pub fn read_pin(&mut self, pin: u8) -> Result<PendingResponse<bool>, DriverError> {
        self.send(&Command::ReadPin { pin })?;
        Ok(self.enqueue(REPLY_LEN_READ_PIN, decode_pin_level))
    }

    /// Query the firmware millisecond clock.
    pub fn get_clock(&mut self) -> Result<PendingResponse<u32>, DriverError> {
        self.send(&Command::GetClock)?;
        Ok(self.enqueue(REPLY_LEN_CLOCK, decode_millis))
    }

    /// Query the clock value captured at the last input event.
    pub fn get_last_clock(&mut self) -> Result<PendingResponse<u32>, DriverError> {
        self.send(&Command::GetLastClock)?;
        Ok(self.enqueue(REPLY_LEN_CLOCK, decode_millis))
    }

    /// Query the number of entries in the firmware output schedule.
    pub fn get_schedule_size(&mut self) -> Result<PendingResponse<u8>, DriverError> {
        self.send(&Command::GetScheduleSize)?;
        Ok(self.enqueue(REPLY_LEN_SCHEDULE_SIZE, decode_schedule_size))
    }

    /// Close the session: forget the handshake, drop the banner, and empty
    /// the reply queue. Outstanding responses are orphaned silently; their
    /// next poll after the device re-handshakes finds their ticket gone and
    /// marks them defunct. Already-completed replies keep their values.
    pub fn close(&mut self) {
        debug!(outstanding = self.queue.len(), "closing session");
        self.ready = false;
        self.banner.clear();
        self.queue.clear();
    }

    /// Encode and write one command, guarding on readiness.
    fn send(&mut self, command: &Command) -> Result<(), DriverError> {
        if !self.is_ready()? {
            return Err(DriverError::NotReady);
        }
        let wire = command.encode();
        trace!(?command, len = wire.len(), "writing command");
        self.transport.write_all(&wire)?;
        Ok(())
    }

    /// Append a reply slot at the queue tail and hand back its handle.
    fn enqueue<V>(&mut self, expected: usize, convert: Converter<V>) -> PendingResponse<V> {
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.queue.push_back(PendingReply {
            ticket,
            expected,
            buf: BytesMut::with_capacity(expected),
        });
        PendingResponse::new(ticket, convert)
    }

    /// Pull available bytes into the queue head and pop every head that
    /// completes, oldest first.
    ///
    /// Only the head may consume transport bytes: with no framing on the
    /// wire, stream position is the sole correlation between replies and
    /// queries, so a later reply must not read a single byte until every
    /// earlier one has all of its own.
    pub(crate) fn drain_replies(&mut self) -> Result<(), DriverError> {
        while let Some(head) = self.queue.front_mut() {
            let missing = head.expected - head.buf.len();
            if missing > 0 {
                let chunk = self.transport.read_up_to(missing)?;
                if !chunk.is_empty() {
                    trace!(
                        ticket = ?head.ticket,
                        got = chunk.len(),
                        have = head.buf.len() + chunk.len(),
                        want = head.expected,
                        "accumulated reply bytes"
                    );
                    head.buf.extend_from_slice(&chunk);
                }
            }
            if head.buf.len() < head.expected {
                break;
            }
            if let Some(done) = self.queue.pop_front() {
                self.completed.insert(done.ticket, done.buf.to_vec());
            }
        }
        Ok(())
    }

    /// Look up the fate of `ticket` on behalf of its handle, surrendering
    /// the raw bytes if its reply completed.
    pub(crate) fn claim(&mut self, ticket: Ticket) -> Claim {
        if let Some(raw) = self.completed.remove(&ticket) {
            return Claim::Complete(raw);
        }
        if self.queue.iter().any(|pending| pending.ticket == ticket) {
            Claim::Outstanding
        } else {
            Claim::Lost
        }
    }
}
