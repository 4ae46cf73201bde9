//! Protocol codec and driver for Vectronix laser rangefinders.
//!
//! The device speaks an ASCII framed protocol over a half-duplex serial
//! link: commands are 3-byte mnemonics wrapped in `>`..`\r`, ranging
//! responses are fixed 11-byte frames protected by an 8-bit modular
//! checksum. The codec itself ([`command`], [`frame`], [`response`]) is
//! pure and transport-agnostic; [`RangeFinder`] ties it to a blocking
//! byte transport.

pub mod command;
pub mod constants;
pub mod device;
pub mod error;
pub mod frame;
pub mod response;
pub mod transport;

pub use command::{Command, LpclModeLevel};
pub use device::RangeFinder;
pub use error::ProtocolError;
pub use response::{ParsedResponse, RangingStatus};
pub use transport::Transport;
