//! Forward and inverse substitution boxes, derived at compile time from GF(2^8) inversion
//! followed by the AES affine transform.

use super::field;

/// Constant added by the forward affine transform.
const AFFINE_CONSTANT: u8 = 0x63;

/// Forward S-box. `SBOX[x] = affine(inverse(x))`.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse S-box. `INV_SBOX[SBOX[x]] == x` for all x.
pub const INV_SBOX: [u8; 256] = build_inv_sbox();

/// SubBytes applied to a single byte.
#[inline(always)]
pub const fn substitute(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// InvSubBytes applied to a single byte.
#[inline(always)]
pub const fn inverse_substitute(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

/// The AES affine map over GF(2): each output bit is
/// b_i ^ b_(i+4) ^ b_(i+5) ^ b_(i+6) ^ b_(i+7) ^ c_i (indices mod 8),
/// which is the same as XORing four left rotations of the byte.
const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

const fn build_sbox() -> [u8; 256] {
    let mut sbox = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        sbox[x] = affine(field::inverse(x as u8));
        x += 1;
    }
    sbox
}

// inverse permutation of the forward table
const fn build_inv_sbox() -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        inv[SBOX[x] as usize] = x as u8;
        x += 1;
    }
    inv
}
