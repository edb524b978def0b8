//! Zero padding for the block modes.
//!
//! Zero padding is not self-delimiting: removing it also removes any zero
//! bytes the plaintext itself ended with.

use aes_core::{Block, BLOCK_SIZE};

/// Copies up to 16 bytes into a block, filling the rest with zeros.
pub fn zero_pad_block(part: &[u8]) -> Block {
    debug_assert!(part.len() <= BLOCK_SIZE);
    let mut block = [0u8; BLOCK_SIZE];
    block[..part.len()].copy_from_slice(part);
    block
}

/// Drops every trailing zero byte.
pub fn strip_zero_padding(data: &mut Vec<u8>) {
    let kept = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    data.truncate(kept);
}
