//! Text formats for key material and data: whitespace-separated hex byte tokens.

use std::fs;
use std::path::Path;

use aes_core::{RoundKeys, SBoxTable, Table16x16, BLOCK_SIZE, ROUND_KEY_COUNT};
use anyhow::{bail, Context, Result};

/// Parses tokens such as `2b 7E 1 ff`; each token is one byte of 1-2 hex digits.
pub fn parse_hex_tokens(text: &str) -> Result<Vec<u8>> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            if token.len() > 2 {
                bail!("token {i} ({token:?}) is longer than one byte");
            }
            u8::from_str_radix(token, 16).with_context(|| format!("token {i} ({token:?}) is not hex"))
        })
        .collect()
}

/// Formats bytes as upper-case hex tokens separated by single spaces.
pub fn format_hex_tokens(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads 16 lines of 32 hex characters each; whitespace inside a line is ignored.
pub fn parse_table(text: &str) -> Result<Table16x16> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 16 {
        bail!("S-box needs 16 lines, found {}", lines.len());
    }
    let mut table = [[0u8; 16]; 16];
    for (row, (dst, line)) in table.iter_mut().zip(&lines).enumerate() {
        let compact: String = line.split_whitespace().collect();
        if compact.len() != 32 {
            bail!("invalid S-box line at row {row}: {line:?}");
        }
        hex::decode_to_slice(&compact, dst).with_context(|| format!("S-box row {row}"))?;
    }
    Ok(table)
}

/// Builds the S-box pair from whichever tables were supplied.
///
/// With both tables they must be mutual inverses; with one, the other is
/// derived; with neither, the AES S-box is used.
pub fn parse_sbox_pair(forward: Option<&str>, inverse: Option<&str>) -> Result<SBoxTable> {
    let sbox = match (forward, inverse) {
        (Some(fwd), Some(inv)) => SBoxTable::new(
            parse_table(fwd).context("forward S-box")?,
            parse_table(inv).context("inverse S-box")?,
        )?,
        (Some(fwd), None) => SBoxTable::from_forward(parse_table(fwd).context("forward S-box")?)?,
        (None, Some(inv)) => SBoxTable::from_inverse(parse_table(inv).context("inverse S-box")?)?,
        (None, None) => SBoxTable::aes(),
    };
    Ok(sbox)
}

/// Reads at least 11 lines of 16 hex tokens; lines past the eleventh are ignored.
pub fn parse_round_keys(text: &str) -> Result<RoundKeys> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < ROUND_KEY_COUNT {
        bail!(
            "expected at least {ROUND_KEY_COUNT} round-key lines but found {}",
            lines.len()
        );
    }
    let mut bytes = Vec::with_capacity(ROUND_KEY_COUNT * BLOCK_SIZE);
    for (round, line) in lines.iter().take(ROUND_KEY_COUNT).enumerate() {
        let key = parse_hex_tokens(line).with_context(|| format!("round key {round}"))?;
        if key.len() != BLOCK_SIZE {
            bail!("line {round} has {} bytes, expected {BLOCK_SIZE}", key.len());
        }
        bytes.extend(key);
    }
    Ok(RoundKeys::from_bytes(&bytes)?)
}

/// One line of hex tokens per round key.
pub fn format_round_keys(keys: &RoundKeys) -> String {
    keys.0
        .iter()
        .map(|k| format_hex_tokens(k))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads a file of hex tokens.
pub fn read_hex_file(path: &Path) -> Result<Vec<u8>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_hex_tokens(&text).with_context(|| format!("parse {}", path.display()))
}

/// Writes bytes as hex tokens.
pub fn write_hex_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, format_hex_tokens(bytes)).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_core::{expand_key, Aes128Key, AES_INV_SBOX, AES_SBOX};

    #[test]
    fn parses_mixed_tokens() {
        let bytes = parse_hex_tokens(" 2b 7E\n1\tff ").expect("valid tokens");
        assert_eq!(bytes, vec![0x2b, 0x7e, 0x01, 0xff]);
        assert!(parse_hex_tokens("").expect("empty").is_empty());
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!(parse_hex_tokens("zz").is_err());
        assert!(parse_hex_tokens("1ff").is_err());
    }

    #[test]
    fn formats_upper_case_tokens() {
        assert_eq!(format_hex_tokens(&[0x0a, 0xbc, 0x00]), "0A BC 00");
        assert_eq!(format_hex_tokens(&[]), "");
    }

    fn table_text(table: &Table16x16) -> String {
        table.iter().map(|row| format_hex_tokens(row) + "\n").collect()
    }

    #[test]
    fn parses_canonical_sbox_text() {
        let text = table_text(&AES_SBOX);
        assert_eq!(parse_table(&text).expect("valid table"), AES_SBOX);
        assert_eq!(
            parse_sbox_pair(Some(&text), None).expect("valid S-box"),
            SBoxTable::aes()
        );
    }

    #[test]
    fn loads_forward_and_inverse_files() {
        let forward = table_text(&AES_SBOX);
        let inverse = table_text(&AES_INV_SBOX);
        let both = parse_sbox_pair(Some(&forward), Some(&inverse)).expect("matching pair");
        assert_eq!(both, SBoxTable::aes());
        let inverse_only = parse_sbox_pair(None, Some(&inverse)).expect("inverse table");
        assert_eq!(inverse_only, SBoxTable::aes());
        assert_eq!(parse_sbox_pair(None, None).expect("default"), SBoxTable::aes());
    }

    #[test]
    fn rejects_mismatched_pair() {
        let forward = table_text(&AES_SBOX);
        assert!(parse_sbox_pair(Some(&forward), Some(&forward)).is_err());
    }

    #[test]
    fn rejects_short_sbox() {
        let text = "63 7c\n".repeat(16);
        assert!(parse_table(&text).is_err());
        assert!(parse_table("").is_err());
    }

    #[test]
    fn round_key_text_round_trips() {
        let keys = expand_key(&Aes128Key::from([3u8; 16]), &SBoxTable::aes());
        let text = format_round_keys(&keys);
        assert_eq!(text.lines().count(), 11);
        assert_eq!(parse_round_keys(&text).expect("valid round keys"), keys);
    }

    #[test]
    fn round_keys_need_eleven_full_lines() {
        let keys = expand_key(&Aes128Key::from([3u8; 16]), &SBoxTable::aes());
        let text = format_round_keys(&keys);
        let ten: Vec<&str> = text.lines().take(10).collect();
        assert!(parse_round_keys(&ten.join("\n")).is_err());

        let short_line = text.replacen("\n", " 00\n", 1);
        assert!(parse_round_keys(&short_line).is_err());
    }
}
