//! Substitution tables.
//!
//! The engine never derives its S-box; it consumes whatever table the caller
//! configures. [`SBoxTable::aes`] provides the FIPS-197 table for the common case.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 16x16 byte table indexed by `(high nibble, low nibble)`.
pub type Table16x16 = [[u8; 16]; 16];

/// The FIPS-197 forward S-box.
#[rustfmt::skip]
pub const AES_SBOX: Table16x16 = [
    [0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76],
    [0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0],
    [0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15],
    [0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75],
    [0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84],
    [0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf],
    [0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8],
    [0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2],
    [0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73],
    [0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb],
    [0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79],
    [0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08],
    [0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a],
    [0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e],
    [0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf],
    [0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16],
];

/// Inverse of [`AES_SBOX`].
pub const AES_INV_SBOX: Table16x16 = invert(&AES_SBOX);

#[inline]
const fn lookup(table: &Table16x16, byte: u8) -> u8 {
    table[(byte >> 4) as usize][(byte & 0x0f) as usize]
}

/// Builds the inverse table assuming `table` is a bijection.
const fn invert(table: &Table16x16) -> Table16x16 {
    let mut inverse = [[0u8; 16]; 16];
    let mut row = 0;
    while row < 16 {
        let mut col = 0;
        while col < 16 {
            let value = table[row][col];
            inverse[(value >> 4) as usize][(value & 0x0f) as usize] = ((row << 4) | col) as u8;
            col += 1;
        }
        row += 1;
    }
    inverse
}

/// Forward and inverse substitution tables, checked to be mutually inverse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SBoxTable {
    forward: Table16x16,
    inverse: Table16x16,
}

impl SBoxTable {
    /// The canonical AES S-box.
    pub const fn aes() -> Self {
        Self {
            forward: AES_SBOX,
            inverse: AES_INV_SBOX,
        }
    }

    /// Wraps an explicitly supplied pair of tables.
    pub fn new(forward: Table16x16, inverse: Table16x16) -> Result<Self> {
        let table = Self { forward, inverse };
        table.validate()?;
        Ok(table)
    }

    /// Derives the inverse from a forward table, rejecting non-bijections.
    pub fn from_forward(forward: Table16x16) -> Result<Self> {
        let mut seen = [false; 256];
        for value in forward.iter().flatten() {
            if core::mem::replace(&mut seen[*value as usize], true) {
                return Err(Error::ConfigurationIncomplete(format!(
                    "S-box is not a bijection: {value:#04x} appears twice"
                )));
            }
        }
        Ok(Self {
            inverse: invert(&forward),
            forward,
        })
    }

    /// Derives the forward table from an inverse table, rejecting non-bijections.
    pub fn from_inverse(inverse: Table16x16) -> Result<Self> {
        let Self { forward, inverse } = Self::from_forward(inverse)?;
        Ok(Self {
            forward: inverse,
            inverse: forward,
        })
    }

    /// Builds a table from 256 bytes laid out row by row.
    pub fn from_forward_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 256 {
            return Err(Error::ConfigurationIncomplete(format!(
                "S-box needs 256 bytes, got {}",
                bytes.len()
            )));
        }
        let mut forward = [[0u8; 16]; 16];
        for (row, chunk) in forward.iter_mut().zip(bytes.chunks_exact(16)) {
            row.copy_from_slice(chunk);
        }
        Self::from_forward(forward)
    }

    /// Checks `inverse[forward[x]] == x` for every byte.
    pub fn validate(&self) -> Result<()> {
        for x in 0..=255u8 {
            let y = lookup(&self.forward, x);
            if lookup(&self.inverse, y) != x {
                return Err(Error::ConfigurationIncomplete(format!(
                    "inverse S-box maps {y:#04x} to {:#04x}, expected {x:#04x}",
                    lookup(&self.inverse, y)
                )));
            }
        }
        Ok(())
    }

    /// Forward substitution.
    #[inline]
    pub fn substitute(&self, byte: u8) -> u8 {
        lookup(&self.forward, byte)
    }

    /// Inverse substitution.
    #[inline]
    pub fn inv_substitute(&self, byte: u8) -> u8 {
        lookup(&self.inverse, byte)
    }
}
