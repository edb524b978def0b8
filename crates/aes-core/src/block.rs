//! Block representation helpers.

use crate::error::{Error, Result};

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Copies a slice into a block, rejecting anything that is not exactly 16 bytes.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockSize { got: bytes.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_self_inverse() {
        let mut a = [0x5au8; 16];
        let b: Block = core::array::from_fn(|i| i as u8);
        xor_in_place(&mut a, &b);
        assert_eq!(a[1], 0x5b);
        xor_in_place(&mut a, &b);
        assert_eq!(a, [0x5au8; 16]);
    }

    #[test]
    fn block_from_slice_checks_length() {
        assert!(block_from_slice(&[0u8; 16]).is_ok());
        assert_eq!(
            block_from_slice(&[0u8; 15]),
            Err(Error::InvalidBlockSize { got: 15 })
        );
        assert_eq!(
            block_from_slice(&[0u8; 17]),
            Err(Error::InvalidBlockSize { got: 17 })
        );
    }
}
