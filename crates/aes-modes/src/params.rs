//! Typed parameters for the modes of operation.
//!
//! ECB/CBC take a [`ChunkSize`] and OFB/CTR a [`SegmentSize`]; the two are
//! different units and are kept as different types.

use core::num::NonZeroUsize;

use aes_core::{block_from_slice, Block, Error, Result, BLOCK_SIZE};

/// Message chunk size for ECB/CBC, at least one AES block.
///
/// Blocks inside a chunk are still processed 16 bytes at a time. Only the last
/// chunk of a message may end in a partial block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkSize(usize);

impl ChunkSize {
    /// One AES block per chunk.
    pub const BLOCK: Self = Self(BLOCK_SIZE);

    /// Validates a chunk size in bytes.
    pub fn new(bytes: usize) -> Result<Self> {
        if bytes < BLOCK_SIZE {
            return Err(Error::InvalidParameter(
                "chunk size must be at least the 16-byte block size",
            ));
        }
        Ok(Self(bytes))
    }

    /// Size in bytes.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self::BLOCK
    }
}

/// XOR segment size for OFB/CTR; any positive number of bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentSize(NonZeroUsize);

impl SegmentSize {
    /// Validates a segment size in bytes.
    pub fn new(bytes: usize) -> Result<Self> {
        NonZeroUsize::new(bytes)
            .map(Self)
            .ok_or(Error::InvalidParameter("segment size must be positive"))
    }

    /// Size in bytes.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for SegmentSize {
    fn default() -> Self {
        Self(NonZeroUsize::MIN.saturating_add(BLOCK_SIZE - 1))
    }
}

/// How much of a CTR counter block is treated as the counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CounterWidth {
    /// Bytes 8..16 count; bytes 0..8 are a fixed nonce.
    #[default]
    Low64,
    /// All 16 bytes form a single 128-bit counter.
    Full128,
}

impl CounterWidth {
    /// Counter width in bytes.
    pub fn bytes(self) -> usize {
        match self {
            Self::Low64 => 8,
            Self::Full128 => BLOCK_SIZE,
        }
    }

    /// Adds one to the big-endian counter, wrapping inside its width.
    pub fn increment(self, block: &mut Block) {
        for byte in block[BLOCK_SIZE - self.bytes()..].iter_mut().rev() {
            let (next, carry) = byte.overflowing_add(1);
            *byte = next;
            if !carry {
                break;
            }
        }
    }
}

impl TryFrom<usize> for CounterWidth {
    type Error = Error;

    fn try_from(bytes: usize) -> Result<Self> {
        match bytes {
            8 => Ok(Self::Low64),
            16 => Ok(Self::Full128),
            _ => Err(Error::InvalidParameter("counter width must be 8 or 16 bytes")),
        }
    }
}

/// A 16-byte initialization vector (nonce||counter for CTR).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iv(pub Block);

impl Iv {
    /// Copies an IV, rejecting anything that is not 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        block_from_slice(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidIvLength { got: bytes.len() })
    }

    /// A counter block holding `counter` as a 128-bit big-endian integer.
    pub fn from_counter(counter: u128) -> Self {
        Self(counter.to_be_bytes())
    }
}

impl TryFrom<&[u8]> for Iv {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}
