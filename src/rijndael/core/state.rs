use super::field::add;
use crate::rijndael::schedule::Word;

/// Block size in 32-bit words.
pub const NB: usize = 4;

/// A 16-byte cipher block.
pub type Block = [u8; 16];

/// 4x4 state matrix stored column-major: byte `k` of a block sits at row `k % 4`,
/// column `k / 4`, so loading and serializing a block are plain copies.
pub(crate) type State = [u8; 16];

/// Flat index of `(row, col)` in a column-major state.
#[inline(always)]
pub(crate) const fn idx(row: usize, col: usize) -> usize {
    col * NB + row
}

/// AddRoundKey. Word `c` of the round key is XOR'd into column `c` of the state.
/// Used for both encryption and decryption.
#[inline(always)]
pub(crate) fn add_round_key(state: &mut State, round_key: &[Word; NB]) {
    for (col, word) in round_key.iter().enumerate() {
        for (row, &k) in word.iter().enumerate() {
            let i = idx(row, col);
            state[i] = add(state[i], k);
        }
    }
}
