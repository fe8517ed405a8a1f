//! Byte arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1 (0x11B).
//!
//! Bytes are polynomials of degree <= 7 over GF(2). Addition is XOR; multiplication is
//! carry-less with reduction by 0x1B whenever the top bit is shifted out. Two
//! multipliers are provided: [`multiply`] (shift and reduce) and
//! [`multiply_with_tables`] (log/antilog lookup). They agree on every input pair.

/// Low byte of the reduction polynomial (the x^8 term is implicit).
pub const REDUCTION: u8 = 0x1B;

/// Generator of the multiplicative group used to build the log tables.
pub const GENERATOR: u8 = 0x03;

/// `EXP[i] = GENERATOR^i` for i in 0..255.
pub(crate) const EXP: [u8; 255] = build_exp();

/// `LOG[a]` is the discrete log of `a` base [`GENERATOR`]. `LOG[0]` is unused.
pub(crate) const LOG: [u8; 256] = build_log();

/// Addition in GF(2^8).
#[inline(always)]
pub const fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplication by x (0x02). Branch-free.
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub const fn xtime(a: u8) -> u8 {
    (a << 1) ^ (REDUCTION & (0u8).wrapping_sub((a >> 7) & 1))
}

/// Shift-and-reduce multiplication.
pub const fn multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Table-driven multiplication: `a * b = EXP[(LOG[a] + LOG[b]) mod 255]`.
#[inline]
pub const fn multiply_with_tables(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let log_sum = LOG[a as usize] as usize + LOG[b as usize] as usize;
    EXP[log_sum % 255]
}

/// Multiplicative inverse. Zero has no inverse and maps to zero.
#[inline]
pub const fn inverse(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    EXP[(255 - LOG[a as usize] as usize) % 255]
}

const fn build_exp() -> [u8; 255] {
    let mut exp = [0u8; 255];
    let mut x = 1u8;
    let mut i = 0;
    while i < 255 {
        exp[i] = x;
        x = multiply(x, GENERATOR);
        i += 1;
    }
    exp
}

const fn build_log() -> [u8; 256] {
    let mut log = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        log[EXP[i] as usize] = i as u8;
        i += 1;
    }
    log
}
