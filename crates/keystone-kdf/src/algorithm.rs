// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use keystone_core::CryptoError;

use crate::pbkdf2::Pbkdf2Params;

/// Key derivation functions available through [`Kdf`](crate::Kdf).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KdfAlgorithm {
    /// PBKDF2 with an HMAC pseudo-random function
    Pbkdf2,
}

impl KdfAlgorithm {
    /// Every supported KDF, in identifier order.
    pub const ALL: [KdfAlgorithm; 1] = [KdfAlgorithm::Pbkdf2];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            KdfAlgorithm::Pbkdf2 => "pbkdf2",
        }
    }
}

impl fmt::Display for KdfAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KdfAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or(CryptoError::InvalidAlgorithm)
    }
}

impl TryFrom<u8> for KdfAlgorithm {
    type Error = CryptoError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(CryptoError::InvalidAlgorithm)
    }
}

impl From<KdfAlgorithm> for u8 {
    fn from(alg: KdfAlgorithm) -> u8 {
        alg as u8
    }
}

/// Construction/reset parameters, one variant per KDF.
#[derive(Debug, Clone, Copy)]
pub enum KdfParams<'a> {
    /// PBKDF2 inputs
    Pbkdf2(Pbkdf2Params<'a>),
}

impl KdfParams<'_> {
    /// KDF these parameters configure.
    pub fn algorithm(&self) -> KdfAlgorithm {
        match self {
            KdfParams::Pbkdf2(_) => KdfAlgorithm::Pbkdf2,
        }
    }
}

impl<'a> From<Pbkdf2Params<'a>> for KdfParams<'a> {
    fn from(params: Pbkdf2Params<'a>) -> Self {
        KdfParams::Pbkdf2(params)
    }
}
