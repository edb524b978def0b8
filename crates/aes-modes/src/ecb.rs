//! Electronic codebook mode.

use aes_core::{BlockCipher, Result, BLOCK_SIZE};

use crate::chunk::{ensure_block_aligned, padded_blocks};
use crate::padding::strip_zero_padding;
use crate::params::ChunkSize;

/// Zero-pads `plaintext` and encrypts every block independently.
pub fn encrypt<C>(cipher: &C, plaintext: &[u8], chunk: ChunkSize) -> Result<Vec<u8>>
where
    C: BlockCipher + ?Sized,
{
    let blocks = padded_blocks(plaintext, chunk)?;
    let mut out = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
    for block in &blocks {
        out.extend_from_slice(&cipher.encrypt_block(block)?);
    }
    Ok(out)
}

/// Decrypts every block and strips trailing zero bytes.
///
/// Decryption is block-granular, so `chunk` does not change the result.
pub fn decrypt<C>(cipher: &C, ciphertext: &[u8], _chunk: ChunkSize) -> Result<Vec<u8>>
where
    C: BlockCipher + ?Sized,
{
    ensure_block_aligned(ciphertext)?;
    let mut out = Vec::with_capacity(ciphertext.len());
    for block in ciphertext.chunks_exact(BLOCK_SIZE) {
        out.extend_from_slice(&cipher.decrypt_block(block)?);
    }
    strip_zero_padding(&mut out);
    Ok(out)
}
