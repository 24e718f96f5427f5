//! Lazily-resolved reply handles.

use ethio_protocol::ProtocolError;

use crate::error::DriverError;
use crate::session::{Claim, DeviceSession, Ticket};
use crate::transport::Transport;

/// Converter from a complete reply buffer to a typed value.
pub(crate) type Converter<V> = fn(&[u8]) -> Result<V, ProtocolError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseState<V> {
    /// Reply bytes are still outstanding.
    Pending,
    /// Reply fully received and converted. Terminal.
    Resolved(V),
    /// The reply can no longer be correlated to the byte stream (the session
    /// dropped this handle's place in the queue, e.g. on close). Terminal.
    Defunct,
}

/// A handle for a query's reply, resolved lazily in send order.
///
/// Every query command on [`DeviceSession`] returns one of these. The handle
/// does not hold bytes or a reference to the session; it carries a queue
/// ticket and pulls its reply off the shared serial line only when
/// [`poll`](PendingResponse::poll) finds it at the head of the session's
/// reply queue. Polling is idempotent: a resolved or defunct handle answers
/// immediately without touching the transport.
#[derive(Debug)]
pub struct PendingResponse<V> {
    ticket: Ticket,
    convert: Converter<V>,
    state: ResponseState<V>,
}

impl<V> PendingResponse<V> {
    pub(crate) fn new(ticket: Ticket, convert: Converter<V>) -> Self {
        PendingResponse {
            ticket,
            convert,
            state: ResponseState::Pending,
        }
    }

    /// Drive resolution forward and report whether the reply has arrived.
    ///
    /// Replies resolve strictly in the order their queries were sent, so a
    /// poll first drains every earlier reply that has bytes waiting. A poll
    /// on a session that has not completed its readiness handshake, or whose
    /// queue no longer contains this handle, returns `Ok(false)`; in the
    /// latter case the handle becomes permanently defunct and every later
    /// poll answers `Ok(false)` without I/O.
    pub fn poll<T: Transport>(
        &mut self,
        session: &mut DeviceSession<T>,
    ) -> Result<bool, DriverError> {
        match self.state {
            ResponseState::Resolved(_) => return Ok(true),
            ResponseState::Defunct => return Ok(false),
            ResponseState::Pending => {}
        }

        if !session.is_ready()? {
            return Ok(false);
        }

        session.drain_replies()?;

        match session.claim(self.ticket) {
            Claim::Complete(raw) => {
                let value = (self.convert)(&raw)?;
                self.state = ResponseState::Resolved(value);
                Ok(true)
            }
            Claim::Outstanding => Ok(false),
            Claim::Lost => {
                self.state = ResponseState::Defunct;
                Ok(false)
            }
        }
    }

    /// Whether the reply has resolved.
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, ResponseState::Resolved(_))
    }

    /// Whether the reply is permanently unresolvable.
    pub fn is_defunct(&self) -> bool {
        matches!(self.state, ResponseState::Defunct)
    }
}

impl<V: Copy> PendingResponse<V> {
    /// Get the resolved value.
    ///
    /// Fails with [`DriverError::NotReady`] until a poll has returned
    /// `Ok(true)`.
    pub fn value(&self) -> Result<V, DriverError> {
        match self.state {
            ResponseState::Resolved(value) => Ok(value),
            _ => Err(DriverError::NotReady),
        }
    }
}
