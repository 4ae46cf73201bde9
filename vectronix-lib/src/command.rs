use bytes::Bytes;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::Display;

use crate::constants::{COMMA, END, START};

/// LPCL operating-mode level, an ordinal parameter to [`Command::LpclMode`].
///
/// Always encodable as a single ASCII decimal digit (`'0'`..`'6'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Default, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum LpclModeLevel {
    #[default]
    Deactivate = 0,
    Level1 = 1,
    Level2 = 2,
    Level3 = 3,
    Level4 = 4,
    Level5 = 5,
    Level6 = 6,
}

impl LpclModeLevel {
    /// The ASCII digit carried on the wire for this level.
    pub fn as_ascii_digit(&self) -> u8 {
        b'0' + u8::from(*self)
    }
}

/// A command accepted by the rangefinder.
///
/// A closed set: every variant maps to a fixed 3-byte ASCII mnemonic, and
/// the only parameter the protocol knows rides on [`Command::LpclMode`] as
/// variant data. There is no way to construct a malformed mnemonic or a
/// parameter outside the device's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Command {
    /// Trigger a distance measurement (`Md1`)
    GetRange,
    /// Query software/hardware version information (`Iv1`)
    SoftwareHardwareInfo,
    /// Run the built-in self test (`Tb1`)
    SelfTest,
    /// Select an LPCL operating mode (`Tl1`), optionally with a level
    LpclMode(Option<LpclModeLevel>),
}

impl Command {
    /// The fixed 3-byte ASCII mnemonic for this command.
    pub fn mnemonic(&self) -> &'static [u8; 3] {
        match self {
            Command::GetRange => b"Md1",
            Command::SoftwareHardwareInfo => b"Iv1",
            Command::SelfTest => b"Tb1",
            Command::LpclMode(_) => b"Tl1",
        }
    }

    /// Build the outbound frame: `START | mnemonic | [COMMA | digit] | END`.
    ///
    /// When no LPCL level is supplied the comma and digit are omitted
    /// entirely, never zero-filled. Pure construction, total over the
    /// closed enums above.
    pub fn encode(&self) -> Bytes {
        let mut frame = Vec::with_capacity(7);
        frame.push(START);
        frame.extend_from_slice(self.mnemonic());
        if let Command::LpclMode(Some(level)) = self {
            frame.push(COMMA);
            frame.push(level.as_ascii_digit());
        }
        frame.push(END);
        Bytes::from(frame)
    }
}
