//! Confidentiality modes of operation over a 16-byte block cipher.
//!
//! - [`ecb`] and [`cbc`] zero-pad the message and walk it in [`ChunkSize`]
//!   chunks. Decryption strips every trailing zero byte, so a plaintext that
//!   itself ends in zeros does not round-trip exactly.
//! - [`ofb`] and [`ctr`] are stream modes: no padding, XOR applied in
//!   [`SegmentSize`] steps, and encryption equals decryption.
//!
//! Every function validates its inputs before producing output and returns
//! either the complete buffer or an [`Error`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chunk;
mod keystream;
mod mode;
mod padding;
mod params;

pub mod cbc;
pub mod ctr;
pub mod ecb;
pub mod ofb;

pub use aes_core::{BlockCipher, Error, Result};

pub use crate::mode::Mode;
pub use crate::padding::{strip_zero_padding, zero_pad_block};
pub use crate::params::{ChunkSize, CounterWidth, Iv, SegmentSize};
