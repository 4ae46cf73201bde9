use std::io::{self, Read, Write};

/// Byte-oriented transport the codec runs over.
///
/// Blocking and half-duplex: `read_exact` suspends the calling thread until
/// the requested bytes arrive or the transport fails. Timeouts and
/// cancellation are transport concerns and surface here as [`io::Error`],
/// which aborts any in-progress frame assembly.
pub trait Transport {
    /// Read exactly `buf.len()` bytes.
    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()>;

    /// Write the whole buffer.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;
}

/// Any blocking reader/writer pair is a transport. This covers `serialport`
/// handles as well as in-memory doubles used in tests.
impl<T: Read + Write> Transport for T {
    fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        Read::read_exact(self, buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        Write::write_all(self, buf)?;
        self.flush()
    }
}
