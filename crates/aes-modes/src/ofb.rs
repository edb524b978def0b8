//! Output feedback mode.

use aes_core::{Block, BlockCipher, Result};

use crate::keystream::{apply_keystream, KeystreamGenerator};
use crate::params::{Iv, SegmentSize};

struct OfbKeystream<'a, C: ?Sized> {
    cipher: &'a C,
    register: Block,
}

impl<C: BlockCipher + ?Sized> KeystreamGenerator for OfbKeystream<'_, C> {
    fn next_block(&mut self) -> Result<Block> {
        self.register = self.cipher.encrypt_block(&self.register)?;
        Ok(self.register)
    }
}

/// XORs `data` with the OFB keystream started from `iv`. No padding.
pub fn encrypt<C>(cipher: &C, data: &[u8], segment: SegmentSize, iv: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + ?Sized,
{
    let Iv(register) = Iv::from_slice(iv)?;
    apply_keystream(data, segment, &mut OfbKeystream { cipher, register })
}

/// Same transform as [`encrypt`].
pub fn decrypt<C>(cipher: &C, data: &[u8], segment: SegmentSize, iv: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + ?Sized,
{
    encrypt(cipher, data, segment, iv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_core::{Aes128, Aes128Key, CipherConfig, Error};

    const IV: [u8; 16] = [0x5c; 16];

    fn cipher() -> Aes128 {
        Aes128::new(CipherConfig::from_key(&Aes128Key::from([0x44; 16])))
    }

    #[test]
    fn output_has_input_length() {
        let ct = encrypt(&cipher(), &[1u8; 21], SegmentSize::default(), &IV).expect("encrypt");
        assert_eq!(ct.len(), 21);
    }

    #[test]
    fn keystream_is_iterated_encryption_of_iv() {
        let cipher = cipher();
        let ks = encrypt(&cipher, &[0u8; 32], SegmentSize::default(), &IV).expect("encrypt");
        let first = cipher.encrypt_block(&IV).expect("block");
        let second = cipher.encrypt_block(&first).expect("block");
        assert_eq!(ks[..16], first);
        assert_eq!(ks[16..], second);
    }

    #[test]
    fn rejects_short_iv() {
        assert_eq!(
            encrypt(&cipher(), b"data", SegmentSize::default(), &IV[..15]),
            Err(Error::InvalidIvLength { got: 15 })
        );
    }
}
