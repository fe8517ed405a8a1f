//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits, and the
//! [`KeySize`] variant that fixes the word count and number of rounds.

use std::fmt;

use log::debug;
use zeroize::Zeroize;

use crate::rijndael::core::NB;
use crate::rijndael::error::{Error, Result};

/// AES variant, determined entirely by key length.
///
/// | variant   | key bytes | `Nk` | `Nr` | schedule words |
/// |-----------|-----------|------|------|----------------|
/// | `Bits128` | 16        | 4    | 10   | 44             |
/// | `Bits192` | 24        | 6    | 12   | 52             |
/// | `Bits256` | 32        | 8    | 14   | 60             |
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Maps a key length in bytes to its variant. Anything other than 16, 24, or 32 is an
    /// [InvalidKeyLength](crate::Error::InvalidKeyLength) error.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Bits128),
            24 => Ok(Self::Bits192),
            32 => Ok(Self::Bits256),
            _ => {
                debug!("rejected AES key of {len} bytes");
                Err(Error::InvalidKeyLength { len })
            }
        }
    }

    /// Number of 32-bit words in the key (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Bits128 => 4,
            Self::Bits192 => 6,
            Self::Bits256 => 8,
        }
    }

    /// Number of rounds (`Nr = Nk + 6`).
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Number of words produced by the key schedule, `Nb * (Nr + 1)`.
    pub const fn schedule_len(self) -> usize {
        NB * (self.nr() + 1)
    }
}

#[derive(Clone, PartialEq, Eq)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key, built from a slice of bytes that is 16, 24, or 32 bytes long.
/// Key bytes are wiped when the key is dropped and never appear in `Debug` output.
///
/// ## Examples
/// ```
/// # fn main() -> rijndael::Result<()> {
/// use rijndael::{Key, KeySize};
///
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_128 = Key::try_from_slice(&key_bytes[..16])?;
/// let my_key_256 = Key::try_from_slice(&key_bytes)?;
///
/// assert_eq!(my_key_128.size(), KeySize::Bits128);
/// assert_eq!(my_key_256.as_bytes(), &key_bytes[..]);
///
/// // anything other than 16, 24, or 32 bytes is rejected
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = match KeySize::from_key_len(bytes.len())? {
            KeySize::Bits128 => {
                let mut k = [0u8; 16];
                k.copy_from_slice(bytes);
                KeyBytes::K128(k)
            }
            KeySize::Bits192 => {
                let mut k = [0u8; 24];
                k.copy_from_slice(bytes);
                KeyBytes::K192(k)
            }
            KeySize::Bits256 => {
                let mut k = [0u8; 32];
                k.copy_from_slice(bytes);
                KeyBytes::K256(k)
            }
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// AES variant selected by this key's length.
    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        match &mut self.bytes {
            KeyBytes::K128(k) => k.zeroize(),
            KeyBytes::K192(k) => k.zeroize(),
            KeyBytes::K256(k) => k.zeroize(),
        }
    }
}
