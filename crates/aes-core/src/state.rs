//! The 4x4 state matrix and the AES round transformations.
//!
//! Flat byte `i` of a block lives at `state[i % 4][i / 4]`. Round keys use the
//! same layout, so [`add_round_key`] is a plain element-wise XOR.

use crate::block::{Block, BLOCK_SIZE};
use crate::gf::gmul;
use crate::sbox::SBoxTable;

/// MixColumns coefficients, one row per output byte.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// InvMixColumns coefficients.
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// AES state indexed as `state.0[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [[u8; 4]; 4]);

impl State {
    /// Loads a block column by column.
    pub fn from_block(block: &Block) -> Self {
        let mut state = [[0u8; 4]; 4];
        for (i, byte) in block.iter().enumerate() {
            state[i % 4][i / 4] = *byte;
        }
        Self(state)
    }

    /// Unloads the state back into a flat block.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.0[i % 4][i / 4];
        }
        block
    }
}

/// Applies SubBytes in place.
#[inline]
pub fn sub_bytes(state: &mut State, sbox: &SBoxTable) {
    for byte in state.0.iter_mut().flatten() {
        *byte = sbox.substitute(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State, sbox: &SBoxTable) {
    for byte in state.0.iter_mut().flatten() {
        *byte = sbox.inv_substitute(*byte);
    }
}

/// Rotates row `i` left by `i` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (i, row) in state.0.iter_mut().enumerate() {
        row.rotate_left(i);
    }
}

/// Rotates row `i` right by `i` positions.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for (i, row) in state.0.iter_mut().enumerate() {
        row.rotate_right(i);
    }
}

fn multiply_columns(state: &mut State, matrix: &[[u8; 4]; 4]) {
    let input = state.0;
    for col in 0..4 {
        for (row, coefficients) in matrix.iter().enumerate() {
            state.0[row][col] = coefficients
                .iter()
                .enumerate()
                .fold(0, |acc, (k, &c)| acc ^ gmul(input[k][col], c));
        }
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    multiply_columns(state, &MIX);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    multiply_columns(state, &INV_MIX);
}

/// XORs a round-key matrix into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    for (s, k) in state.0.iter_mut().flatten().zip(round_key.0.iter().flatten()) {
        *s ^= *k;
    }
}
