use bytes::Bytes;
use num_enum::{FromPrimitive, IntoPrimitive};
use strum_macros::Display;

use crate::constants::{
    CHECKSUM_OFFSET, CHECKSUM_SPAN, END, ERROR_PAYLOAD_END, ERROR_PAYLOAD_START,
    RANGING_RESPONSE_LEN,
};
use crate::error::ProtocolError;

/// Status byte of a ranging response frame, at offset 0.
///
/// Determines how the rest of the payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum RangingStatus {
    /// Measurement succeeded, the range digits are meaningful (`'v'`)
    Valid = b'v',
    /// Device-declared measurement error (`'R'`)
    Error = b'R',
    /// Unrecognized status byte, carried verbatim
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// Decoded ranging response.
///
/// Exactly one of `range_m` / `error` is populated, governed by `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    pub status: RangingStatus,
    /// Measured range in meters, present only for [`RangingStatus::Valid`].
    /// Transmitted as whole centimeters with no decimal point.
    pub range_m: Option<f64>,
    /// Opaque device error code (frame bytes 4..8), present for non-valid
    /// status. Device-specific, not interpreted here.
    pub error: Option<Bytes>,
    /// Outcome of the frame integrity check.
    pub checksum_valid: bool,
}

/// Compute the frame checksum over an 8-byte prefix: the modular byte sum,
/// rendered as exactly 2 uppercase hex characters (`"00"`..`"FF"`).
pub fn checksum(data: &[u8]) -> String {
    let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    format!("{sum:02X}")
}

/// Decode a raw ranging response frame into a [`ParsedResponse`].
///
/// Expects the 11-byte CR-terminated frame shape the reader produces; the
/// shape is re-checked here so a caller bypassing the reader can never get
/// a silently wrong parse. A checksum mismatch is reported as an error
/// that still carries the (unreliable) decoded fields for inspection.
pub fn decode(frame: &[u8]) -> Result<ParsedResponse, ProtocolError> {
    if frame.len() != RANGING_RESPONSE_LEN || frame[frame.len() - 1] != END {
        return Err(ProtocolError::MalformedFrame(format!(
            "expected {RANGING_RESPONSE_LEN} bytes ending in CR, got {} bytes: {frame:02X?}",
            frame.len()
        )));
    }

    let calculated = checksum(&frame[..CHECKSUM_SPAN]);
    let received =
        String::from_utf8_lossy(&frame[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2]).into_owned();
    let checksum_valid = calculated == received;

    let status = RangingStatus::from_primitive(frame[0]);
    let parsed = match status {
        RangingStatus::Valid => {
            let range_m = match parse_range_digits(&frame[1..CHECKSUM_SPAN]) {
                Ok(centimeters) => Some(f64::from(centimeters) / 100.0),
                Err(e) if checksum_valid => return Err(e),
                // under a bad checksum, unparseable digits must not mask
                // the mismatch itself
                Err(_) => None,
            };
            ParsedResponse {
                status,
                range_m,
                error: None,
                checksum_valid,
            }
        }
        // Error and unknown statuses both surface the error-code region
        // verbatim. Whether an unknown status shares the declared-error
        // layout is an unverified device assumption, preserved as-is.
        _ => ParsedResponse {
            status,
            range_m: None,
            error: Some(Bytes::copy_from_slice(
                &frame[ERROR_PAYLOAD_START..ERROR_PAYLOAD_END],
            )),
            checksum_valid,
        },
    };

    if !checksum_valid {
        return Err(ProtocolError::ChecksumMismatch {
            calculated,
            received,
            parsed: Box::new(parsed),
        });
    }
    Ok(parsed)
}

// 7 ASCII digits always fit a u32.
fn parse_range_digits(digits: &[u8]) -> Result<u32, ProtocolError> {
    if !digits.iter().all(|b| b.is_ascii_digit()) {
        return Err(ProtocolError::MalformedPayload(format!(
            "range field is not decimal text: {digits:02X?}"
        )));
    }
    Ok(digits
        .iter()
        .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0')))
}
