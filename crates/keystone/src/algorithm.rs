// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use keystone_cipher::CipherAlgorithm;
use keystone_core::CryptoError;
use keystone_digest::DigestAlgorithm;
use keystone_kdf::KdfAlgorithm;

/// Primitive family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Message digests
    Digest,
    /// Stream ciphers
    Cipher,
    /// Key derivation functions
    Kdf,
}

/// Any algorithm in the catalogue, tagged with its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// A digest
    Digest(DigestAlgorithm),
    /// A stream cipher
    Cipher(CipherAlgorithm),
    /// A key derivation function
    Kdf(KdfAlgorithm),
}

impl Algorithm {
    /// Family this algorithm belongs to.
    pub const fn family(self) -> Family {
        match self {
            Algorithm::Digest(_) => Family::Digest,
            Algorithm::Cipher(_) => Family::Cipher,
            Algorithm::Kdf(_) => Family::Kdf,
        }
    }

    /// Lowercase name; unique across families.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Digest(alg) => alg.name(),
            Algorithm::Cipher(alg) => alg.name(),
            Algorithm::Kdf(alg) => alg.name(),
        }
    }

    /// Every algorithm, digests first, then ciphers, then KDFs.
    pub fn all() -> impl Iterator<Item = Algorithm> {
        DigestAlgorithm::ALL
            .into_iter()
            .map(Algorithm::Digest)
            .chain(CipherAlgorithm::ALL.into_iter().map(Algorithm::Cipher))
            .chain(KdfAlgorithm::ALL.into_iter().map(Algorithm::Kdf))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(alg) = s.parse::<DigestAlgorithm>() {
            return Ok(Algorithm::Digest(alg));
        }
        if let Ok(alg) = s.parse::<CipherAlgorithm>() {
            return Ok(Algorithm::Cipher(alg));
        }

        s.parse::<KdfAlgorithm>().map(Algorithm::Kdf)
    }
}

impl From<DigestAlgorithm> for Algorithm {
    fn from(alg: DigestAlgorithm) -> Self {
        Algorithm::Digest(alg)
    }
}

impl From<CipherAlgorithm> for Algorithm {
    fn from(alg: CipherAlgorithm) -> Self {
        Algorithm::Cipher(alg)
    }
}

impl From<KdfAlgorithm> for Algorithm {
    fn from(alg: KdfAlgorithm) -> Self {
        Algorithm::Kdf(alg)
    }
}
