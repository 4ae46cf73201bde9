use std::io;
use thiserror::Error;

use crate::response::ParsedResponse;

/// The primary error type for the `vectronix-lib` crate.
///
/// Every failure is a distinct, per-call outcome returned to the immediate
/// caller; the codec performs no internal retries and no logging.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The device answered NACK in place of ACK: the previously sent
    /// command was not accepted. Recoverable, the caller may resend.
    #[error("command rejected by device (NACK received)")]
    CommandRejected,

    /// The assembled byte sequence does not match the fixed 11-byte,
    /// CR-terminated response shape. The stream is likely desynchronized.
    #[error("malformed response frame: {0}")]
    MalformedFrame(String),

    /// Frame shape is correct but the integrity check failed, indicating
    /// transmission corruption. The best-effort decode of the corrupted
    /// frame stays available for inspection, marked unreliable.
    #[error("checksum mismatch: calculated {calculated}, received {received}")]
    ChecksumMismatch {
        calculated: String,
        received: String,
        parsed: Box<ParsedResponse>,
    },

    /// Status reports a valid measurement but the range field is not
    /// decimal text. A protocol violation on the device side.
    #[error("malformed range payload: {0}")]
    MalformedPayload(String),

    /// Read/write failure or timeout from the external transport,
    /// propagated unchanged.
    #[error("transport failure: {0}")]
    Transport(#[from] io::Error),
}
