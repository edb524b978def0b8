//! Segment-wise keystream application shared by OFB and CTR.

use aes_core::{Block, Result, BLOCK_SIZE};

use crate::params::SegmentSize;

/// Produces successive 16-byte keystream blocks.
pub(crate) trait KeystreamGenerator {
    fn next_block(&mut self) -> Result<Block>;
}

/// XORs `data` with the keystream, `segment` bytes per step.
///
/// A step never crosses a keystream block or the end of the data, so the
/// output does not depend on the segment size, only the XOR granularity does.
pub(crate) fn apply_keystream<K>(
    data: &[u8],
    segment: SegmentSize,
    keystream: &mut K,
) -> Result<Vec<u8>>
where
    K: KeystreamGenerator,
{
    let mut out = Vec::with_capacity(data.len());
    let mut block = [0u8; BLOCK_SIZE];
    let mut used = BLOCK_SIZE;
    let mut pos = 0;

    while pos < data.len() {
        if used == BLOCK_SIZE {
            block = keystream.next_block()?;
            used = 0;
        }
        let n = segment.get().min(data.len() - pos).min(BLOCK_SIZE - used);
        out.extend(
            data[pos..pos + n]
                .iter()
                .zip(&block[used..used + n])
                .map(|(d, k)| d ^ k),
        );
        used += n;
        pos += n;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        next: u8,
        calls: usize,
    }

    impl KeystreamGenerator for Counting {
        fn next_block(&mut self) -> Result<Block> {
            self.calls += 1;
            let block = [self.next; BLOCK_SIZE];
            self.next += 1;
            Ok(block)
        }
    }

    #[test]
    fn requests_one_block_per_sixteen_bytes() {
        let mut ks = Counting { next: 1, calls: 0 };
        let out = apply_keystream(&[0u8; 33], SegmentSize::new(5).expect("segment"), &mut ks)
            .expect("apply");
        assert_eq!(ks.calls, 3);
        assert_eq!(&out[..16], &[1u8; 16]);
        assert_eq!(&out[16..32], &[2u8; 16]);
        assert_eq!(out[32], 3);
    }

    #[test]
    fn empty_input_consumes_no_keystream() {
        let mut ks = Counting { next: 1, calls: 0 };
        let out = apply_keystream(&[], SegmentSize::default(), &mut ks).expect("apply");
        assert!(out.is_empty());
        assert_eq!(ks.calls, 0);
    }
}
