//! Encrypts a message with every mode under the FIPS-197 example key and decrypts it again.

use aes_core::{Aes128, Aes128Key, CipherConfig};
use aes_modes::{cbc, ctr, ecb, ofb, ChunkSize, CounterWidth, Mode, Result, SegmentSize};

fn main() -> Result<()> {
    let key_bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
    let key = Aes128Key::from(key_bytes);
    let cipher = Aes128::new(CipherConfig::from_key(&key));
    let iv = [0x24u8; 16];
    let message = b"modes of operation turn one block into a whole message";

    let chunk = ChunkSize::new(32)?;
    let segment = SegmentSize::new(5)?;
    let width = CounterWidth::Low64;

    for mode in Mode::ALL {
        let (ciphertext, decrypted) = match mode {
            Mode::Ecb => {
                let ct = ecb::encrypt(&cipher, message, chunk)?;
                let pt = ecb::decrypt(&cipher, &ct, chunk)?;
                (ct, pt)
            }
            Mode::Cbc => {
                let ct = cbc::encrypt(&cipher, message, chunk, &iv)?;
                let pt = cbc::decrypt(&cipher, &ct, chunk, &iv)?;
                (ct, pt)
            }
            Mode::Ofb => {
                let ct = ofb::encrypt(&cipher, message, segment, &iv)?;
                let pt = ofb::decrypt(&cipher, &ct, segment, &iv)?;
                (ct, pt)
            }
            Mode::Ctr => {
                let ct = ctr::encrypt(&cipher, message, segment, &iv, width)?;
                let pt = ctr::decrypt(&cipher, &ct, segment, &iv, width)?;
                (ct, pt)
            }
        };
        assert_eq!(decrypted, message);
        println!("{mode}: {} ciphertext bytes, round trip ok", ciphertext.len());
    }

    Ok(())
}
