// Wire-format constants for the Vectronix rangefinder protocol

/// Start marker of an outbound command frame (`>`)
pub const START: u8 = 0x3E;

/// ACK control byte, same value as [`START`]: a response frame follows
pub const ACK: u8 = 0x3E;

/// NACK control byte (`!`): the previous command was rejected
pub const NACK: u8 = 0x21;

/// Frame terminator (`\r`)
pub const END: u8 = 0x0D;

/// Separator between mnemonic and parameter digits (`,`)
pub const COMMA: u8 = 0x2C;

/// Length of a command mnemonic in bytes
pub const MNEMONIC_LEN: usize = 3;

/// Fixed length of an inbound ranging response frame
pub const RANGING_RESPONSE_LEN: usize = 11;

/// Number of leading frame bytes covered by the checksum (status + range digits)
pub const CHECKSUM_SPAN: usize = 8;

/// Offset of the 2-character hex checksum field
pub const CHECKSUM_OFFSET: usize = 8;

/// Byte range of the opaque error-code region in error/unknown frames
pub const ERROR_PAYLOAD_START: usize = 4;
pub const ERROR_PAYLOAD_END: usize = 8;
