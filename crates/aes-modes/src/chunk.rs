//! Chunk walking shared by ECB and CBC.

use aes_core::{Block, Error, Result, BLOCK_SIZE};

use crate::padding::zero_pad_block;
use crate::params::ChunkSize;

/// Splits `message` into zero-padded AES blocks, chunk by chunk.
///
/// A partial block is accepted only at the very end of the message; one that
/// ends a non-final chunk is an `InternalConsistency` error. The whole message
/// is checked before any block is returned.
pub(crate) fn padded_blocks(message: &[u8], chunk: ChunkSize) -> Result<Vec<Block>> {
    let mut blocks = Vec::with_capacity(message.len().div_ceil(BLOCK_SIZE));
    for (index, piece) in message.chunks(chunk.get()).enumerate() {
        let chunk_start = index * chunk.get();
        let is_last_chunk = chunk_start + piece.len() == message.len();
        for (offset, part) in (chunk_start..).step_by(BLOCK_SIZE).zip(piece.chunks(BLOCK_SIZE)) {
            if part.len() < BLOCK_SIZE && !is_last_chunk {
                return Err(Error::InternalConsistency { offset });
            }
            blocks.push(zero_pad_block(part));
        }
    }
    Ok(blocks)
}

/// Rejects ciphertext that is not a whole number of blocks.
pub(crate) fn ensure_block_aligned(ciphertext: &[u8]) -> Result<()> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::MisalignedCiphertext {
            len: ciphertext.len(),
        });
    }
    Ok(())
}
