use tracing::{debug, info};

use crate::command::{Command, LpclModeLevel};
use crate::error::ProtocolError;
use crate::frame::read_frame;
use crate::response::{ParsedResponse, decode};
use crate::transport::Transport;

/// Driver for a Vectronix laser rangefinder on a byte-oriented transport.
///
/// The protocol is strictly half-duplex request/response, so every
/// operation runs one encode -> write -> read -> decode cycle to
/// completion against the single owned transport.
pub struct RangeFinder<T: Transport> {
    transport: T,
}

impl<T: Transport> RangeFinder<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Encode and send a single command frame.
    pub fn send(&mut self, command: Command) -> Result<(), ProtocolError> {
        let frame = command.encode();
        debug!("Sending {command}: {:02X?}", frame.as_ref());
        self.transport.write_all(&frame)?;
        Ok(())
    }

    /// Read and decode the next ranging response frame.
    pub fn read_response(&mut self) -> Result<ParsedResponse, ProtocolError> {
        let frame = read_frame(&mut self.transport)?;
        debug!("Received frame: {:02X?}", frame.as_ref());
        decode(&frame)
    }

    /// Trigger one distance measurement and decode the result.
    pub fn measure(&mut self) -> Result<ParsedResponse, ProtocolError> {
        self.send(Command::GetRange)?;
        let response = self.read_response()?;
        if let Some(range_m) = response.range_m {
            info!("Measured range: {range_m:.2} m");
        }
        Ok(response)
    }

    /// Send the LPCL mode command, optionally selecting a level.
    pub fn set_lpcl_mode(&mut self, level: Option<LpclModeLevel>) -> Result<(), ProtocolError> {
        self.send(Command::LpclMode(level))
    }

    /// Consume the driver and hand back the underlying transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}
