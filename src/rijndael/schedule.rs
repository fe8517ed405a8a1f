//! AES key schedule (FIPS-197 section 5.2).

use std::fmt;

use log::debug;
use zeroize::Zeroize;

use crate::rijndael::core::NB;
use crate::rijndael::core::sbox::substitute;
use crate::rijndael::error::Result;
use crate::rijndael::key::{Key, KeySize};

/// Four bytes; the unit of key schedule computation.
pub type Word = [u8; 4];

/// Round constants. `RCON[j]` is the first byte of the constant word XOR'd in at
/// `i = Nk * (j + 1)`; the other three bytes are zero.
pub const RCON: [u8; 14] = [
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1B, 0x36, 0x6C, 0xD8, 0xAB, 0x4D,
];

/// Expanded round keys: `Nr + 1` groups of four words. Group `r` is consumed by round `r`,
/// word `c` of a group feeding column `c` of the state.
///
/// Only produced by [`expand_key`] / [`key_expansion`], so the number of groups always matches
/// [`KeySchedule::size`]. Wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct KeySchedule {
    size: KeySize,
    rounds: Vec<[Word; NB]>,
}

impl KeySchedule {
    /// AES variant this schedule was expanded for.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Total number of words, `Nb * (Nr + 1)`.
    pub fn len(&self) -> usize {
        self.rounds.len() * NB
    }

    /// Always false; a schedule holds at least 44 words.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Flat view of every word, `w[0..Nb * (Nr + 1)]` in FIPS-197 notation.
    pub fn words(&self) -> &[Word] {
        self.rounds.as_flattened()
    }

    /// Round key for round `round` (0..=Nr). Panics if `round > Nr`.
    pub fn round_key(&self, round: usize) -> &[Word; NB] {
        &self.rounds[round]
    }

    /// All round keys, initial whitening key first.
    pub fn rounds(&self) -> &[[Word; NB]] {
        &self.rounds
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("size", &self.size)
            .field("words", &self.len())
            .finish_non_exhaustive()
    }
}

impl Drop for KeySchedule {
    fn drop(&mut self) {
        self.rounds.zeroize();
    }
}

/// Validates `key` and expands it. This is the only fallible step of the cipher: any length
/// other than 16, 24, or 32 bytes returns [InvalidKeyLength](crate::Error::InvalidKeyLength).
pub fn key_expansion(key: &[u8]) -> Result<KeySchedule> {
    let key = Key::try_from_slice(key)?;
    Ok(expand_key(&key))
}

/// AES key schedule. Returns 11, 13, or 15 round keys (44, 52, or 60 words) for AES-128,
/// AES-192, and AES-256, respectively. The first round key is the initial whitening key.
pub fn expand_key(key: &Key) -> KeySchedule {
    let size = key.size();
    let key = key.as_bytes();

    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key
    // Nr   The number of rounds. 10, 12, and 14 for AES-128, AES-192, and AES-256, respectively
    // w    The result of the key schedule, an array of words that form round keys
    // Nw   The total number of words generated by the key schedule (including initial key)
    let nk = size.nk();
    let nr = size.nr();
    let nw = size.schedule_len();

    let mut w: Vec<Word> = Vec::with_capacity(nw);

    // first nk words of w are the key itself
    for chunk in key.chunks_exact(4) {
        w.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..nw {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp));
            temp[0] ^= RCON[i / nk - 1];
        } else if nk > 6 && i % nk == 4 {
            // AES-256 only
            temp = sub_word(temp);
        }
        // w[i] = w[i - Nk] ⊕ temp
        w.push(xor_words(&w[i - nk], &temp));
    }

    let rounds: Vec<[Word; NB]> = w
        .chunks_exact(NB)
        .map(|c| [c[0], c[1], c[2], c[3]])
        .collect();
    w.zeroize();

    debug_assert_eq!(rounds.len(), nr + 1);
    debug!("expanded {size:?} key into {} round keys ({nw} words)", rounds.len());

    KeySchedule { size, rounds }
}

/// Cyclic left rotation by one byte: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline(always)]
pub(crate) fn rot_word(w: Word) -> Word {
    [w[1], w[2], w[3], w[0]]
}

/// Forward S-box applied to each byte of the word.
#[inline(always)]
pub(crate) fn sub_word(w: Word) -> Word {
    w.map(substitute)
}

#[inline(always)]
pub(crate) fn xor_words(a: &Word, b: &Word) -> Word {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}
