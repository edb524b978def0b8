//! AES-128 block engine driven by caller-supplied tables.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) arithmetic and the four round transformations on a 4x4 state.
//! - S-box and round-key configuration, bundled in [`CipherConfig`].
//! - Single-block encryption and decryption behind the [`BlockCipher`] trait.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod config;
mod error;
pub mod gf;
mod key;
mod sbox;
pub mod state;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, Aes128, BlockCipher};
pub use crate::config::CipherConfig;
pub use crate::error::{Error, Result};
pub use crate::key::{expand_key, Aes128Key, RoundKeys, ROUND_KEY_COUNT};
pub use crate::sbox::{SBoxTable, Table16x16, AES_INV_SBOX, AES_SBOX};
