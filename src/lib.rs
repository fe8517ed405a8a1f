//! Rijndael (AES) block primitive built from first principles.
//!
//! - [`field`]: GF(2^8) addition and multiplication modulo x^8 + x^4 + x^3 + x + 1.
//! - [`sbox`]: forward and inverse S-boxes derived from field inversion and the affine map.
//! - [`key_expansion`] / [`expand_key`]: the key schedule for 128, 192 and 256-bit keys.
//! - [`encrypt_block`] / [`decrypt_block`]: the round engine on one 16-byte block.
//!
//! [`Cipher`] bundles an expanded schedule with the block functions. Padding, chunking of
//! longer messages and modes of operation are not part of this crate.
//!
//! ```
//! # fn main() -> rijndael::Result<()> {
//! let schedule = rijndael::key_expansion(&[0u8; 24])?;
//! let block = [0x42u8; 16];
//! let ct = rijndael::encrypt_block(&block, &schedule);
//! assert_eq!(rijndael::decrypt_block(&ct, &schedule), block);
//! # Ok(())
//! # }
//! ```

mod rijndael;

pub use rijndael::{
    Block, Cipher, Error, Key, KeySchedule, KeySize, RCON, Result, Word, decrypt_block,
    encrypt_block, expand_key, field, key_expansion, sbox,
};
