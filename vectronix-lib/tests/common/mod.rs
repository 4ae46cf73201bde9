//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use bytes::Bytes;
#[allow(unused_imports)]
pub use hex;
#[allow(unused_imports)]
pub use vectronix_lib::command::{Command, LpclModeLevel};
#[allow(unused_imports)]
pub use vectronix_lib::constants::*;
#[allow(unused_imports)]
pub use vectronix_lib::device::RangeFinder;
#[allow(unused_imports)]
pub use vectronix_lib::error::ProtocolError;
#[allow(unused_imports)]
pub use vectronix_lib::frame::read_frame;
#[allow(unused_imports)]
pub use vectronix_lib::response::{ParsedResponse, RangingStatus, checksum, decode};

use std::io::{self, Cursor, Read, Write};

/// Captured valid ranging response: status `v`, 1087.50 m, checksum `DB`
#[allow(dead_code)]
pub const VALID_RESPONSE: &[u8] = b"v0108750DB\r";

/// Captured error ranging response: status `R`, error code `E301`, checksum `BB`
#[allow(dead_code)]
pub const ERROR_RESPONSE: &[u8] = b"R000E301BB\r";

/// In-memory transport scripted with the bytes the device will send.
/// Records everything written to it and how far reads have advanced.
#[allow(dead_code)]
pub struct ScriptedTransport {
    rx: Cursor<Vec<u8>>,
    pub tx: Vec<u8>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new(device_bytes: &[u8]) -> Self {
        Self {
            rx: Cursor::new(device_bytes.to_vec()),
            tx: Vec::new(),
        }
    }

    /// Number of device bytes the codec has consumed so far.
    pub fn consumed(&self) -> usize {
        self.rx.position() as usize
    }
}

impl Read for ScriptedTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.rx.read(buf)
    }
}

impl Write for ScriptedTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
