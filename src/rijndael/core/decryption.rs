use super::field::xtime;
use super::sbox::inverse_substitute;
use super::state::{Block, NB, State, add_round_key, idx};
use crate::rijndael::schedule::KeySchedule;

/// Core AES decryption function. Decrypts one 16-byte block, consuming round-key groups
/// from `Nr` down to 0.
#[inline]
pub fn decrypt_block(ciphertext: &Block, schedule: &KeySchedule) -> Block {
    let round_keys = schedule.rounds();
    let nr = schedule.size().nr();
    assert_eq!(
        round_keys.len(),
        nr + 1,
        "key schedule holds {} round keys, {:?} requires {}",
        round_keys.len(),
        schedule.size(),
        nr + 1
    );

    let mut state: State = *ciphertext;

    add_round_key(&mut state, &round_keys[nr]);

    for round_key in round_keys[1..nr].iter().rev() {
        shift_rows_inv(&mut state);
        sub_bytes_inv(&mut state);
        add_round_key(&mut state, round_key);
        mix_columns_inv(&mut state);
    }

    shift_rows_inv(&mut state);
    sub_bytes_inv(&mut state);
    add_round_key(&mut state, &round_keys[0]);

    state
}

/// Inverse SubBytes step. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut State) {
    for byte in state {
        *byte = inverse_substitute(*byte);
    }
}

/// Inverse ShiftRows step. Row `r` rotates right by `r` positions.
/// [
///     01 02 03 04   ---->   01 02 03 04
///     06 07 08 05   ---->   05 06 07 08
///     11 12 09 10   ---->   09 10 11 12
///     16 13 14 15   ---->   13 14 15 16
/// ]
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut State) {
    let s = *state;
    for row in 1..4 {
        for col in 0..NB {
            state[idx(row, col)] = s[idx(row, (col + NB - row) % NB)];
        }
    }
}

/// Inverse MixColumns step. Each column is multiplied by the inverse of the MixColumns matrix.
/// [ b0 ]      [ 14  11  13  09 ]  [ d0 ]
/// | b1 |  =   | 09  14  11  13 |  | d1 |
/// | b2 |      | 13  09  14  11 |  | d2 |
/// [ b3 ]      [ 11  13  09  14 ]  [ d3 ]
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut State) {
    // optimisation technique from https://crypto.stackexchange.com/a/71206
    for col in 0..NB {
        let i = idx(0, col);
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        let x = xtime(a ^ b ^ c ^ d); /* 2a + 2b + 2c + 2d */
        let y = xtime(x ^ a ^ c); /* 6a + 4b + 6c + 4d */
        let z = xtime(x ^ b ^ d); /* 4a + 6b + 4c + 6d */
        state[i] = xtime(y ^ a ^ b) ^ b ^ c ^ d; /* 14a + 11b + 13c + 09d */
        state[i + 1] = xtime(z ^ b ^ c) ^ c ^ d ^ a; /* 09a + 14b + 11c + 13d */
        state[i + 2] = xtime(y ^ c ^ d) ^ d ^ a ^ b; /* 13a + 09b + 14c + 11d */
        state[i + 3] = xtime(z ^ d ^ a) ^ a ^ b ^ c; /* 11a + 13b + 09c + 14d */
    }
}
