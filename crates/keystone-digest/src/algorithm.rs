// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use keystone_core::CryptoError;

use crate::md5::{MD5_BLOCK_LEN, MD5_OUTPUT_LEN};
use crate::sha1::{SHA1_BLOCK_LEN, SHA1_OUTPUT_LEN};
use crate::sha256::{SHA224_OUTPUT_LEN, SHA256_BLOCK_LEN, SHA256_OUTPUT_LEN};
use crate::sha512::{SHA384_OUTPUT_LEN, SHA512_BLOCK_LEN, SHA512_OUTPUT_LEN};

/// Digest algorithms available through [`Digest`](crate::Digest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// MD5 (RFC 1321)
    Md5,
    /// SHA-1 (RFC 3174)
    Sha1,
    /// SHA-224 (RFC 6234)
    Sha224,
    /// SHA-256 (RFC 6234)
    Sha256,
    /// SHA-384 (RFC 6234)
    Sha384,
    /// SHA-512 (RFC 6234)
    Sha512,
}

impl DigestAlgorithm {
    /// Every supported digest, in identifier order.
    pub const ALL: [DigestAlgorithm; 6] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => MD5_OUTPUT_LEN,
            DigestAlgorithm::Sha1 => SHA1_OUTPUT_LEN,
            DigestAlgorithm::Sha224 => SHA224_OUTPUT_LEN,
            DigestAlgorithm::Sha256 => SHA256_OUTPUT_LEN,
            DigestAlgorithm::Sha384 => SHA384_OUTPUT_LEN,
            DigestAlgorithm::Sha512 => SHA512_OUTPUT_LEN,
        }
    }

    /// Compression block length in bytes.
    pub const fn block_size(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => MD5_BLOCK_LEN,
            DigestAlgorithm::Sha1 => SHA1_BLOCK_LEN,
            DigestAlgorithm::Sha224 | DigestAlgorithm::Sha256 => SHA256_BLOCK_LEN,
            DigestAlgorithm::Sha384 | DigestAlgorithm::Sha512 => SHA512_BLOCK_LEN,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CryptoError;

    /// Parses a name case-insensitively; `-` separators are accepted
    /// (`"SHA-256"` and `"sha256"` are the same algorithm).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buf = [0u8; 8];
        let mut len = 0;

        for byte in s.bytes().filter(|b| *b != b'-') {
            if len == buf.len() {
                return Err(CryptoError::InvalidAlgorithm);
            }
            buf[len] = byte.to_ascii_lowercase();
            len += 1;
        }

        Self::ALL
            .into_iter()
            .find(|alg| alg.name().as_bytes() == &buf[..len])
            .ok_or(CryptoError::InvalidAlgorithm)
    }
}

impl TryFrom<u8> for DigestAlgorithm {
    type Error = CryptoError;

    /// Maps the numeric identifier (position in [`DigestAlgorithm::ALL`]).
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(CryptoError::InvalidAlgorithm)
    }
}

impl From<DigestAlgorithm> for u8 {
    fn from(alg: DigestAlgorithm) -> u8 {
        alg as u8
    }
}
