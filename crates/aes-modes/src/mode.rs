//! Mode selection by name.

use core::fmt;
use core::str::FromStr;

use aes_core::Error;

/// The supported modes of operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook.
    Ecb,
    /// Cipher block chaining.
    Cbc,
    /// Output feedback.
    Ofb,
    /// Counter.
    Ctr,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 4] = [Mode::Ecb, Mode::Cbc, Mode::Ofb, Mode::Ctr];

    /// Whether the mode takes an IV.
    pub fn needs_iv(self) -> bool {
        !matches!(self, Mode::Ecb)
    }

    /// Whether the mode pads and takes a chunk size rather than a segment size.
    pub fn is_block_mode(self) -> bool {
        matches!(self, Mode::Ecb | Mode::Cbc)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Ofb => "OFB",
            Mode::Ctr => "CTR",
        })
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ECB" => Ok(Mode::Ecb),
            "CBC" => Ok(Mode::Cbc),
            "OFB" => Ok(Mode::Ofb),
            "CTR" => Ok(Mode::Ctr),
            _ => Err(Error::InvalidParameter(
                "unsupported mode; expected ECB, CBC, OFB or CTR",
            )),
        }
    }
}
