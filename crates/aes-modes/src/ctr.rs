//! Counter mode.

use aes_core::{Block, BlockCipher, Result};

use crate::keystream::{apply_keystream, KeystreamGenerator};
use crate::params::{CounterWidth, Iv, SegmentSize};

struct CtrKeystream<'a, C: ?Sized> {
    cipher: &'a C,
    counter: Block,
    width: CounterWidth,
}

impl<C: BlockCipher + ?Sized> KeystreamGenerator for CtrKeystream<'_, C> {
    fn next_block(&mut self) -> Result<Block> {
        let block = self.cipher.encrypt_block(&self.counter)?;
        self.width.increment(&mut self.counter);
        Ok(block)
    }
}

/// XORs `data` with `E(counter), E(counter + 1), ...` starting at `iv`. No padding.
///
/// The counter is the trailing `width` bytes of the block, big-endian, and
/// wraps to zero on overflow.
pub fn encrypt<C>(
    cipher: &C,
    data: &[u8],
    segment: SegmentSize,
    iv: &[u8],
    width: CounterWidth,
) -> Result<Vec<u8>>
where
    C: BlockCipher + ?Sized,
{
    let Iv(counter) = Iv::from_slice(iv)?;
    let mut keystream = CtrKeystream {
        cipher,
        counter,
        width,
    };
    apply_keystream(data, segment, &mut keystream)
}

/// Same transform as [`encrypt`].
pub fn decrypt<C>(
    cipher: &C,
    data: &[u8],
    segment: SegmentSize,
    iv: &[u8],
    width: CounterWidth,
) -> Result<Vec<u8>>
where
    C: BlockCipher + ?Sized,
{
    encrypt(cipher, data, segment, iv, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_core::{Aes128, Aes128Key, CipherConfig, Error};

    fn cipher() -> Aes128 {
        Aes128::new(CipherConfig::from_key(&Aes128Key::from([0x55; 16])))
    }

    #[test]
    fn low64_counter_wraps_and_keeps_nonce() {
        let cipher = cipher();
        let mut iv = [0xabu8; 16];
        iv[8..].copy_from_slice(&[0xff; 8]);
        let ks = encrypt(&cipher, &[0u8; 32], SegmentSize::default(), &iv, CounterWidth::Low64)
            .expect("encrypt");

        let mut wrapped = [0xabu8; 16];
        wrapped[8..].copy_from_slice(&[0x00; 8]);
        assert_eq!(ks[..16], cipher.encrypt_block(&iv).expect("block"));
        assert_eq!(ks[16..], cipher.encrypt_block(&wrapped).expect("block"));
    }

    #[test]
    fn full128_counter_wraps_to_zero() {
        let cipher = cipher();
        let iv = [0xffu8; 16];
        let ks = encrypt(&cipher, &[0u8; 32], SegmentSize::default(), &iv, CounterWidth::Full128)
            .expect("encrypt");
        assert_eq!(ks[16..], cipher.encrypt_block(&[0u8; 16]).expect("block"));
    }

    #[test]
    fn widths_differ_only_on_low_word_overflow() {
        let cipher = cipher();
        let iv = Iv::from_counter(u64::MAX as u128).0;
        let data = [0u8; 32];
        let low = encrypt(&cipher, &data, SegmentSize::default(), &iv, CounterWidth::Low64)
            .expect("encrypt");
        let full = encrypt(&cipher, &data, SegmentSize::default(), &iv, CounterWidth::Full128)
            .expect("encrypt");
        assert_eq!(low[..16], full[..16]);
        assert_ne!(low[16..], full[16..]);
    }

    #[test]
    fn rejects_long_iv() {
        assert_eq!(
            encrypt(&cipher(), b"data", SegmentSize::default(), &[0u8; 20], CounterWidth::Low64),
            Err(Error::InvalidIvLength { got: 20 })
        );
    }
}
