//! Cipher configuration: the S-box pair and the round keys bound together.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::key::{expand_key, Aes128Key, RoundKeys};
use crate::sbox::SBoxTable;

/// Immutable tables an [`crate::Aes128`] instance runs on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherConfig {
    /// Forward and inverse S-box.
    pub sbox: SBoxTable,
    /// Round keys 0..=10.
    pub round_keys: RoundKeys,
}

impl CipherConfig {
    /// Binds an S-box to a set of round keys.
    pub fn new(sbox: SBoxTable, round_keys: RoundKeys) -> Self {
        Self { sbox, round_keys }
    }

    /// Canonical S-box plus the standard key schedule of `key`.
    pub fn from_key(key: &Aes128Key) -> Self {
        let sbox = SBoxTable::aes();
        let round_keys = expand_key(key, &sbox);
        Self { sbox, round_keys }
    }

    /// Serializes the configuration with `bincode`.
    pub fn to_bytes(&self) -> core::result::Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a configuration with `bincode` and re-validates the S-box.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Self = bincode::deserialize(bytes)
            .map_err(|e| Error::ConfigurationIncomplete(format!("decode configuration: {e}")))?;
        config.sbox.validate()?;
        Ok(config)
    }
}
