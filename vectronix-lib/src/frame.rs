use bytes::Bytes;

use crate::constants::{ACK, END, NACK, RANGING_RESPONSE_LEN};
use crate::error::ProtocolError;
use crate::transport::Transport;

/// Synchronization state of the frame reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    /// Skipping stray CR bytes and noise until a control byte arrives
    Seeking,
    /// ACK consumed, assembling the fixed-length response frame
    Collecting,
}

/// Read one complete 11-byte ranging response frame from the transport.
///
/// The transport is a raw byte stream with no message boundaries, so the
/// reader resynchronizes past stray CR bytes left by flushes, maps a NACK
/// control byte to [`ProtocolError::CommandRejected`] without consuming
/// anything further, and enforces the fixed frame shape before the decoder
/// ever sees the bytes. A frame is only ever accepted after an explicit
/// ACK; anything else in Seeking is synchronization noise.
///
/// Terminal either way: rejection and malformed frames end this read
/// attempt, retry policy belongs to the caller.
pub fn read_frame<T: Transport>(transport: &mut T) -> Result<Bytes, ProtocolError> {
    let mut state = ReaderState::Seeking;
    loop {
        match state {
            ReaderState::Seeking => {
                let mut byte = [0u8; 1];
                transport.read_exact(&mut byte)?;
                match byte[0] {
                    // line-noise / flush artifact, not frame content
                    END => {}
                    NACK => return Err(ProtocolError::CommandRejected),
                    ACK => state = ReaderState::Collecting,
                    // unsynchronized noise, keep seeking
                    _ => {}
                }
            }
            ReaderState::Collecting => {
                // ACK is a control byte, not frame content: the frame
                // proper is the fixed-length response that follows it.
                let mut frame = [0u8; RANGING_RESPONSE_LEN];
                transport.read_exact(&mut frame)?;
                return validate(frame);
            }
        }
    }
}

fn validate(frame: [u8; RANGING_RESPONSE_LEN]) -> Result<Bytes, ProtocolError> {
    if frame[RANGING_RESPONSE_LEN - 1] != END {
        return Err(ProtocolError::MalformedFrame(format!(
            "response not terminated by CR: {frame:02X?}"
        )));
    }
    Ok(Bytes::copy_from_slice(&frame))
}
