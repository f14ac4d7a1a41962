// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use keystone_core::CryptoError;

/// Stream ciphers available through [`Cipher`](crate::Cipher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherAlgorithm {
    /// RC4 (1 to 256 byte key)
    Rc4,
    /// Salsa20/20 (16 or 32 byte key, 8 byte IV)
    Salsa20,
}

impl CipherAlgorithm {
    /// Every supported cipher, in identifier order.
    pub const ALL: [CipherAlgorithm; 2] = [CipherAlgorithm::Rc4, CipherAlgorithm::Salsa20];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            CipherAlgorithm::Rc4 => "rc4",
            CipherAlgorithm::Salsa20 => "salsa20",
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or(CryptoError::InvalidAlgorithm)
    }
}

impl TryFrom<u8> for CipherAlgorithm {
    type Error = CryptoError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(CryptoError::InvalidAlgorithm)
    }
}

impl From<CipherAlgorithm> for u8 {
    fn from(alg: CipherAlgorithm) -> u8 {
        alg as u8
    }
}

/// Construction/reset parameters, one variant per algorithm.
#[derive(Clone, Copy)]
pub enum CipherParams<'a> {
    /// RC4 key
    Rc4 {
        /// 1 to 256 bytes
        key: &'a [u8],
    },
    /// Salsa20 key and IV
    Salsa20 {
        /// 16 or 32 bytes
        key: &'a [u8],
        /// 8 bytes
        iv: &'a [u8],
    },
}

impl CipherParams<'_> {
    /// Algorithm these parameters configure.
    pub fn algorithm(&self) -> CipherAlgorithm {
        match self {
            CipherParams::Rc4 { .. } => CipherAlgorithm::Rc4,
            CipherParams::Salsa20 { .. } => CipherAlgorithm::Salsa20,
        }
    }
}

impl fmt::Debug for CipherParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherParams::Rc4 { key } => f
                .debug_struct("Rc4")
                .field("key_len", &key.len())
                .finish(),
            CipherParams::Salsa20 { key, iv } => f
                .debug_struct("Salsa20")
                .field("key_len", &key.len())
                .field("iv_len", &iv.len())
                .finish(),
        }
    }
}
