//! Core AES implementation: GF(2^8) arithmetic, the S-boxes, and encryption and decryption of
//! a single 16-byte block. Exports encrypt_block and decrypt_block.

pub mod field;
pub mod sbox;
pub(crate) mod state;
mod decryption;
mod encryption;

pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use state::{Block, NB};
