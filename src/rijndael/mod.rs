pub(crate) mod core;
mod cipher;
mod error;
mod key;
mod schedule;

pub use cipher::Cipher;
pub use self::core::{Block, decrypt_block, encrypt_block, field, sbox};
pub use error::{Error, Result};
pub use key::{Key, KeySize};
pub use schedule::{KeySchedule, RCON, Word, expand_key, key_expansion};
