use crate::rijndael::core::{Block, decrypt_block, encrypt_block};
use crate::rijndael::error::Result;
use crate::rijndael::key::{Key, KeySize};
use crate::rijndael::schedule::{KeySchedule, expand_key};

/// Single-block AES cipher. Instantiated with an AES [Key], which is expanded into round keys
/// and stored in the instance.
///
/// A `Cipher` is immutable after construction and can be shared across threads; every call
/// works on its own stack-local state. Splitting messages into blocks, padding, and modes of
/// operation are left to the caller.
///
/// ## Examples
/// ```
/// # fn main() -> rijndael::Result<()> {
/// use rijndael::Cipher;
///
/// let cipher = Cipher::try_from_slice(&[0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
///                                       0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c])?;
/// let plaintext = [0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d,
///                  0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34];
///
/// let ciphertext = cipher.encrypt_block(&plaintext);
/// assert_eq!(ciphertext, [0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb,
///                         0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a, 0x0b, 0x32]);
/// assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);
///
/// // a 20-byte key never produces a cipher
/// assert!(Cipher::try_from_slice(&[0u8; 20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Cipher {
    round_keys: KeySchedule,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Validates raw key bytes and expands them. Fails with
    /// [InvalidKeyLength](crate::Error::InvalidKeyLength) unless given 16, 24, or 32 bytes.
    pub fn try_from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Key::try_from_slice(key)?))
    }

    /// AES variant in use.
    pub fn key_size(&self) -> KeySize {
        self.round_keys.size()
    }

    /// Getter for internal round keys.
    pub fn round_keys(&self) -> &KeySchedule {
        &self.round_keys
    }

    /// Encrypts one 16-byte block.
    pub fn encrypt_block(&self, plaintext: &Block) -> Block {
        encrypt_block(plaintext, &self.round_keys)
    }

    /// Decrypts one 16-byte block.
    pub fn decrypt_block(&self, ciphertext: &Block) -> Block {
        decrypt_block(ciphertext, &self.round_keys)
    }
}

impl From<&Key> for Cipher {
    fn from(key: &Key) -> Self {
        Self::new(key)
    }
}
