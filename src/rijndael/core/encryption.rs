use super::field::xtime;
use super::sbox::substitute;
use super::state::{Block, NB, State, add_round_key, idx};
use crate::rijndael::schedule::KeySchedule;

/// Core AES encryption function. Encrypts one 16-byte block with an expanded key schedule.
///
/// Round `r` consumes round-key group `r`: group 0 whitens the input, groups
/// `1..Nr` feed the full rounds and group `Nr` the final round, which skips MixColumns.
#[inline]
pub fn encrypt_block(plaintext: &Block, schedule: &KeySchedule) -> Block {
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

    // state is column-major, same as the block
    let mut state: State = *plaintext;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..nr] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[nr]);

    state
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut State) {
    for byte in state {
        *byte = substitute(*byte);
    }
}

/// ShiftRows step. Row `r` rotates left by `r` positions; row 0 is unchanged.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut State) {
    let s = *state;
    for row in 1..4 {
        for col in 0..NB {
            state[idx(row, col)] = s[idx(row, (col + row) % NB)];
        }
    }
}

/// MixColumns step. Each column is multiplied by a constant matrix using Galois field multiplication.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub(crate) fn mix_columns(state: &mut State) {
    // optimisation by https://crypto.stackexchange.com/a/71206
    for col in 0..NB {
        let i = idx(0, col);
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = xtime(a ^ b) ^ b ^ c ^ d; /* 2a + 3b + c + d */
        state[i + 1] = xtime(b ^ c) ^ c ^ d ^ a; /* 2b + 3c + d + a */
        state[i + 2] = xtime(c ^ d) ^ d ^ a ^ b; /* 2c + 3d + a + b */
        state[i + 3] = xtime(d ^ a) ^ a ^ b ^ c; /* 2d + 3a + b + c */
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rijndael::core::field::multiply;
    use crate::rijndael::error::Result;
    use crate::rijndael::key::Key;
    use crate::rijndael::schedule::expand_key;

    // straight matrix product, kept as a reference for the xtime shortcut
    fn mix_columns_reference(state: &mut State) {
        const M: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];
        let s = *state;
        for col in 0..NB {
            for row in 0..4 {
                state[idx(row, col)] = (0..4).fold(0u8, |acc, k| {
                    acc ^ multiply(M[row][k], s[idx(k, col)])
                });
            }
        }
    }

    #[test]
    fn test_sub_bytes() {
        // FIPS-197 appendix B, start of round 1 (rows written out as columns)
        let mut state: State = [
            // col 0
            0x19, 0x3d, 0xe3, 0xbe,
            // col 1
            0xa0, 0xf4, 0xe2, 0x2b,
            // col 2
            0x9a, 0xc6, 0x8d, 0x2a,
            // col 3
            0xe9, 0xf8, 0x48, 0x08,
        ];

        sub_bytes(&mut state);

        assert_eq!(
            state,
            [
                // col 0
                0xd4, 0x27, 0x11, 0xae,
                // col 1
                0xe0, 0xbf, 0x98, 0xf1,
                // col 2
                0xb8, 0xb4, 0x5d, 0xe5,
                // col 3
                0x1e, 0x41, 0x52, 0x30,
            ]
        );
    }

    #[test]
    fn test_shift_rows() {
        // FIPS-197 appendix B, round 1 after SubBytes
        let mut state: State = [
            // col 0
            0xd4, 0x27, 0x11, 0xae,
            // col 1
            0xe0, 0xbf, 0x98, 0xf1,
            // col 2
            0xb8, 0xb4, 0x5d, 0xe5,
            // col 3
            0x1e, 0x41, 0x52, 0x30,
        ];

        shift_rows(&mut state);

        assert_eq!(
            state,
            [
                // col 0
                0xd4, 0xbf, 0x5d, 0x30,
                // col 1
                0xe0, 0xb4, 0x52, 0xae,
                // col 2
                0xb8, 0x41, 0x11, 0xf1,
                // col 3
                0x1e, 0x27, 0x98, 0xe5,
            ]
        );
    }

    #[test]
    fn test_mix_columns() {
        // test cases from https://en.wikipedia.org/wiki/Rijndael_MixColumns
        let mut test1: State = [
            // col 0
            0x63, 0x47, 0xa2, 0xf0,
            // col 1
            0xf2, 0x0a, 0x22, 0x5c,
            // col 2
            0x01, 0x01, 0x01, 0x01,
            // col 3
            0xc6, 0xc6, 0xc6, 0xc6,
        ];

        let mut test2: State = [
            // col 0
            0xd4, 0xbf, 0x5d, 0x30,
            // col 1
            0xc6, 0xc6, 0xc6, 0xc6,
            // col 2
            0xd4, 0xd4, 0xd4, 0xd5,
            // col 3
            0x2d, 0x26, 0x31, 0x4c,
        ];

        mix_columns(&mut test1);
        mix_columns(&mut test2);

        assert_eq!(
            test1,
            [
                // col 0
                0x5d, 0xe0, 0x70, 0xbb,
                // col 1
                0x9f, 0xdc, 0x58, 0x9d,
                // col 2
                0x01, 0x01, 0x01, 0x01,
                // col 3
                0xc6, 0xc6, 0xc6, 0xc6,
            ],
            "mix columns test case 1 does not match"
        );

        assert_eq!(
            test2,
            [
                // col 0
                0x04, 0x66, 0x81, 0xe5,
                // col 1
                0xc6, 0xc6, 0xc6, 0xc6,
                // col 2
                0xd5, 0xd5, 0xd7, 0xd6,
                // col 3
                0x4d, 0x7e, 0xbd, 0xf8,
            ],
            "mix columns test case 2 does not match"
        );
    }

    #[test]
    fn test_mix_columns_matches_matrix_product() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let state: State = rand::Rng::random(&mut rng);
            let mut fast = state;
            let mut reference = state;
            mix_columns(&mut fast);
            mix_columns_reference(&mut reference);
            assert_eq!(fast, reference);
        }
    }

    #[test]
    fn test_encrypt_block_128() -> Result<()> {
        // FIPS-197 appendix B
        let key = Key::try_from_slice(&[
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, //
            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c, //
        ])?;

        let plaintext: Block = [
            // col 0
            0x32, 0x43, 0xf6, 0xa8,
            // col 1
            0x88, 0x5a, 0x30, 0x8d,
            // col 2
            0x31, 0x31, 0x98, 0xa2,
            // col 3
            0xe0, 0x37, 0x07, 0x34,
        ];

        let expected: Block = [
            // col 0
            0x39, 0x25, 0x84, 0x1d,
            // col 1
            0x02, 0xdc, 0x09, 0xfb,
            // col 2
            0xdc, 0x11, 0x85, 0x97,
            // col 3
            0x19, 0x6a, 0x0b, 0x32,
        ];

        let actual = encrypt_block(&plaintext, &expand_key(&key));

        assert_eq!(actual, expected, "incorrect AES-128 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_192() -> Result<()> {
        // test case from:
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core192.pdf
        let key = Key::try_from_slice(&[
            0x8E, 0x73, 0xB0, 0xF7, 0xDA, 0x0E, 0x64, 0x52, //
            0xC8, 0x10, 0xF3, 0x2B, 0x80, 0x90, 0x79, 0xE5, //
            0x62, 0xF8, 0xEA, 0xD2, 0x52, 0x2C, 0x6B, 0x7B, //
        ])?;

        let plaintext: Block = [
            0x6B, 0xC1, 0xBE, 0xE2, 0x2E, 0x40, 0x9F, 0x96, //
            0xE9, 0x3D, 0x7E, 0x11, 0x73, 0x93, 0x17, 0x2A, //
        ];

        let expected: Block = [
            0xBD, 0x33, 0x4F, 0x1D, 0x6E, 0x45, 0xF2, 0x5F, //
            0xF7, 0x12, 0xA2, 0x14, 0x57, 0x1F, 0xA5, 0xCC, //
        ];

        let actual = encrypt_block(&plaintext, &expand_key(&key));

        assert_eq!(actual, expected, "incorrect AES-192 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_256() -> Result<()> {
        // test case from:
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core256.pdf
        let key = Key::try_from_slice(&[
            0x60, 0x3D, 0xEB, 0x10, 0x15, 0xCA, 0x71, 0xBE, //
            0x2B, 0x73, 0xAE, 0xF0, 0x85, 0x7D, 0x77, 0x81, //
            0x1F, 0x35, 0x2C, 0x07, 0x3B, 0x61, 0x08, 0xD7, //
            0x2D, 0x98, 0x10, 0xA3, 0x09, 0x14, 0xDF, 0xF4, //
        ])?;

        let plaintext: Block = [
            0x6B, 0xC1, 0xBE, 0xE2, 0x2E, 0x40, 0x9F, 0x96, //
            0xE9, 0x3D, 0x7E, 0x11, 0x73, 0x93, 0x17, 0x2A, //
        ];

        let expected: Block = [
            0xF3, 0xEE, 0xD1, 0xBD, 0xB5, 0xD2, 0xA0, 0x3C, //
            0x06, 0x4B, 0x5A, 0x7E, 0x3D, 0xB1, 0x81, 0xF8, //
        ];

        let actual = encrypt_block(&plaintext, &expand_key(&key));

        assert_eq!(actual, expected, "incorrect AES-256 encryption of block");
        Ok(())
    }
}
