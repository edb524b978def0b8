//! Key material: the master key wrapper and the eleven round keys.

use serde::{Deserialize, Serialize};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};
use crate::sbox::SBoxTable;
use crate::state::State;

/// Number of round keys for AES-128 (initial key plus ten rounds).
pub const ROUND_KEY_COUNT: usize = 11;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Pre-expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

impl RoundKeys {
    /// Takes the first 176 bytes of `bytes` as rounds 0..=10.
    ///
    /// Anything past the eleventh round is ignored; less than that is an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let needed = ROUND_KEY_COUNT * BLOCK_SIZE;
        if bytes.len() < needed {
            return Err(Error::ConfigurationIncomplete(format!(
                "round keys need {needed} bytes ({ROUND_KEY_COUNT} rounds of {BLOCK_SIZE}), got {}",
                bytes.len()
            )));
        }
        let mut keys = [[0u8; BLOCK_SIZE]; ROUND_KEY_COUNT];
        for (key, chunk) in keys.iter_mut().zip(bytes.chunks_exact(BLOCK_SIZE)) {
            key.copy_from_slice(chunk);
        }
        Ok(Self(keys))
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Round key `round` reshaped column-major, ready for AddRoundKey.
    #[inline]
    pub fn matrix(&self, round: usize) -> State {
        State::from_block(self.get(round))
    }
}

fn sub_word(word: u32, sbox: &SBoxTable) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(|b| sbox.substitute(b)))
}

/// Expands a 128-bit key into 11 round keys using the given S-box.
pub fn expand_key(key: &Aes128Key, sbox: &SBoxTable) -> RoundKeys {
    let mut w = [0u32; 4 * ROUND_KEY_COUNT];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..w.len() {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(temp.rotate_left(8), sbox) ^ (u32::from(RCON[(i / 4) - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; BLOCK_SIZE]; ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}
