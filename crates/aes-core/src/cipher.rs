//! AES-128 block encryption and decryption over a configured S-box and key schedule.

use crate::block::{block_from_slice, Block};
use crate::config::CipherConfig;
use crate::error::Result;
use crate::key::ROUND_KEY_COUNT;
use crate::state::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, State,
};

const LAST_ROUND: usize = ROUND_KEY_COUNT - 1;

/// A 16-byte block primitive.
///
/// Modes of operation only ever see a cipher through this trait.
pub trait BlockCipher {
    /// Encrypts exactly one block; any other length is `InvalidBlockSize`.
    fn encrypt_block(&self, block: &[u8]) -> Result<Block>;

    /// Decrypts exactly one block; any other length is `InvalidBlockSize`.
    fn decrypt_block(&self, block: &[u8]) -> Result<Block>;
}

/// Encrypts a single 16-byte block.
pub fn encrypt_block(block: &Block, config: &CipherConfig) -> Block {
    let sbox = &config.sbox;
    let keys = &config.round_keys;
    let mut state = State::from_block(block);

    add_round_key(&mut state, &keys.matrix(0));

    for round in 1..LAST_ROUND {
        sub_bytes(&mut state, sbox);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &keys.matrix(round));
    }

    sub_bytes(&mut state, sbox);
    shift_rows(&mut state);
    add_round_key(&mut state, &keys.matrix(LAST_ROUND));

    state.to_block()
}

/// Decrypts a single 16-byte block.
pub fn decrypt_block(block: &Block, config: &CipherConfig) -> Block {
    let sbox = &config.sbox;
    let keys = &config.round_keys;
    let mut state = State::from_block(block);

    add_round_key(&mut state, &keys.matrix(LAST_ROUND));
    for round in (1..LAST_ROUND).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state, sbox);
        add_round_key(&mut state, &keys.matrix(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state, sbox);
    add_round_key(&mut state, &keys.matrix(0));

    state.to_block()
}

/// AES-128 bound to one configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes128 {
    config: CipherConfig,
}

impl Aes128 {
    /// Creates a cipher owning `config`.
    pub fn new(config: CipherConfig) -> Self {
        Self { config }
    }
}

impl BlockCipher for Aes128 {
    fn encrypt_block(&self, block: &[u8]) -> Result<Block> {
        Ok(encrypt_block(&block_from_slice(block)?, &self.config))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Block> {
        Ok(decrypt_block(&block_from_slice(block)?, &self.config))
    }
}
