//! Cipher block chaining mode.

use aes_core::{xor_in_place, BlockCipher, Result, BLOCK_SIZE};

use crate::chunk::{ensure_block_aligned, padded_blocks};
use crate::padding::strip_zero_padding;
use crate::params::{ChunkSize, Iv};

/// Encrypts with `c[i] = E(p[i] ^ c[i-1])`, starting the chain at `iv`.
pub fn encrypt<C>(cipher: &C, plaintext: &[u8], chunk: ChunkSize, iv: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + ?Sized,
{
    let Iv(mut prev) = Iv::from_slice(iv)?;
    let blocks = padded_blocks(plaintext, chunk)?;
    let mut out = Vec::with_capacity(blocks.len() * BLOCK_SIZE);
    for mut block in blocks {
        xor_in_place(&mut block, &prev);
        prev = cipher.encrypt_block(&block)?;
        out.extend_from_slice(&prev);
    }
    Ok(out)
}

/// Decrypts with `p[i] = D(c[i]) ^ c[i-1]` and strips trailing zero bytes.
///
/// Decryption is block-granular, so `chunk` does not change the result.
pub fn decrypt<C>(cipher: &C, ciphertext: &[u8], _chunk: ChunkSize, iv: &[u8]) -> Result<Vec<u8>>
where
    C: BlockCipher + ?Sized,
{
    let Iv(mut prev) = Iv::from_slice(iv)?;
    ensure_block_aligned(ciphertext)?;
    let mut out = Vec::with_capacity(ciphertext.len());
    for block in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut plain = cipher.decrypt_block(block)?;
        xor_in_place(&mut plain, &prev);
        out.extend_from_slice(&plain);
        prev.copy_from_slice(block);
    }
    strip_zero_padding(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_core::{expand_key, Aes128, Aes128Key, CipherConfig, Error, SBoxTable, AES_SBOX};

    const IV: [u8; 16] = [0x10; 16];

    fn cipher() -> Aes128 {
        Aes128::new(CipherConfig::from_key(&Aes128Key::from([0x33; 16])))
    }

    #[test]
    fn chaining_hides_repeated_blocks() {
        let ct = encrypt(&cipher(), &[0x41; 32], ChunkSize::BLOCK, &IV).expect("encrypt");
        assert_ne!(ct[..16], ct[16..]);
    }

    #[test]
    fn first_block_is_ecb_of_plaintext_xor_iv() {
        let cipher = cipher();
        let ct = encrypt(&cipher, &[0u8; 16], ChunkSize::BLOCK, &IV).expect("encrypt");
        assert_eq!(ct, cipher.encrypt_block(&IV).expect("block"));
    }

    #[test]
    fn round_trip_with_odd_length() {
        let message = b"cipher block chaining over an odd-length message";
        let ct = encrypt(&cipher(), message, ChunkSize::new(64).expect("chunk"), &IV)
            .expect("encrypt");
        assert_eq!(ct.len(), message.len().div_ceil(16) * 16);
        let pt = decrypt(&cipher(), &ct, ChunkSize::BLOCK, &IV).expect("decrypt");
        assert_eq!(pt, message);
    }

    #[test]
    fn iv_length_is_checked_in_both_directions() {
        assert_eq!(
            encrypt(&cipher(), b"x", ChunkSize::BLOCK, &[0u8; 8]),
            Err(Error::InvalidIvLength { got: 8 })
        );
        assert_eq!(
            decrypt(&cipher(), &[0u8; 16], ChunkSize::BLOCK, &[0u8; 17]),
            Err(Error::InvalidIvLength { got: 17 })
        );
    }

    #[test]
    fn misaligned_ciphertext_is_rejected() {
        assert_eq!(
            decrypt(&cipher(), &[0u8; 31], ChunkSize::BLOCK, &IV),
            Err(Error::MisalignedCiphertext { len: 31 })
        );
    }

    #[test]
    fn round_trip_over_a_non_canonical_sbox() {
        let mut rotated = AES_SBOX;
        rotated.rotate_left(1);
        let sbox = SBoxTable::from_forward(rotated).expect("still a bijection");
        let round_keys = expand_key(&Aes128Key::from([0x33; 16]), &sbox);
        let custom = Aes128::new(CipherConfig::new(sbox, round_keys));

        let message = b"tables are configuration, not constants";
        let ct = encrypt(&custom, message, ChunkSize::BLOCK, &IV).expect("encrypt");
        let canonical = encrypt(&cipher(), message, ChunkSize::BLOCK, &IV).expect("encrypt");
        assert_ne!(ct, canonical);
        let pt = decrypt(&custom, &ct, ChunkSize::BLOCK, &IV).expect("decrypt");
        assert_eq!(pt, message);
    }
}
