//! EthIO Host Driver
//!
//! This crate drives EthIO pin-control firmware from the host side of a
//! serial link. The wire format (see the `ethio-protocol` crate) has no
//! framing and no correlation identifiers, so replies can only be matched to
//! the queries that produced them by send order. The driver keeps an ordered
//! queue of outstanding replies and resolves them strictly first-in
//! first-out: a query's reply bytes are only pulled off the serial line once
//! every earlier query has fully resolved.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ethio_driver::{DeviceSession, SerialConfig, SerialTransport};
//!
//! let transport = SerialTransport::open(&SerialConfig {
//!     path: "/dev/ttyUSB0".to_string(),
//!     ..SerialConfig::default()
//! })?;
//! let mut session = DeviceSession::new(transport);
//!
//! // Wait for the firmware boot banner.
//! while !session.is_ready()? {}
//!
//! session.config_input(2, true)?;
//! let mut level = session.read_pin(2)?;
//! while !level.poll(&mut session)? {}
//! println!("pin 2 is {}", level.value()?);
//! ```
//!
//! All progress is made synchronously inside the caller's own polling loop;
//! the driver spawns no threads and the underlying reads are bounded by the
//! transport's timeout.

mod config;
mod error;
mod response;
mod serial;
mod session;
mod transport;

pub use config::*;
pub use error::*;
pub use response::*;
pub use serial::*;
pub use session::*;
pub use transport::*;
