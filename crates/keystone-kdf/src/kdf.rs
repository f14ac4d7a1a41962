// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm-agnostic key derivation handle.

use tracing::debug;

use keystone_core::Result;

use crate::algorithm::{KdfAlgorithm, KdfParams};
use crate::pbkdf2::Pbkdf2;

enum KdfBackend {
    Pbkdf2(Pbkdf2),
}

/// Key derivation over a runtime-selected algorithm.
///
/// # Example
///
/// ```
/// use keystone_kdf::{DigestAlgorithm, Kdf, KdfParams, Pbkdf2Params};
///
/// let params = KdfParams::Pbkdf2(Pbkdf2Params {
///     prf: DigestAlgorithm::Sha1,
///     password: b"password",
///     salt: b"salt",
///     iterations: 2,
/// });
///
/// let mut kdf = Kdf::new(params).unwrap();
/// let mut key = [0u8; 20];
/// assert_eq!(kdf.update(&mut key), Ok(20));
/// assert_eq!(key[..4], [0xea, 0x6c, 0x01, 0x4d]);
/// ```
pub struct Kdf {
    backend: KdfBackend,
}

impl Kdf {
    /// Creates a KDF context from typed parameters.
    pub fn new(params: KdfParams<'_>) -> Result<Self> {
        let backend = match params {
            KdfParams::Pbkdf2(p) => KdfBackend::Pbkdf2(Pbkdf2::new(p)?),
        };

        debug!(algorithm = %params.algorithm(), "kdf context created");

        Ok(Self { backend })
    }

    /// Algorithm selected at construction.
    pub fn algorithm(&self) -> KdfAlgorithm {
        match &self.backend {
            KdfBackend::Pbkdf2(_) => KdfAlgorithm::Pbkdf2,
        }
    }

    /// Restarts derivation with new parameters for the same algorithm.
    ///
    /// The PRF chosen at construction cannot change; build a new [`Kdf`] to
    /// derive with another digest. A rejected reset leaves the context
    /// deriving from its previous inputs.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidAlgorithm`](keystone_core::CryptoError::InvalidAlgorithm)
    /// if the parameters select another PRF, plus whatever the backend's reset
    /// reports.
    pub fn reset(&mut self, params: KdfParams<'_>) -> Result<()> {
        match (&mut self.backend, params) {
            (KdfBackend::Pbkdf2(kdf), KdfParams::Pbkdf2(p)) => kdf.reset(p),
        }
    }

    /// Writes the next derived bytes into `out` and returns the count, which
    /// is short only when the derivation source runs out partway.
    pub fn update(&mut self, out: &mut [u8]) -> Result<usize> {
        match &mut self.backend {
            KdfBackend::Pbkdf2(kdf) => kdf.update(out),
        }
    }

    /// Completes the lifecycle; derivation functions emit nothing here.
    pub fn finish(&mut self) -> Result<usize> {
        match &mut self.backend {
            KdfBackend::Pbkdf2(kdf) => kdf.finish(),
        }
    }
}

impl core::fmt::Debug for Kdf {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.backend {
            KdfBackend::Pbkdf2(kdf) => f.debug_tuple("Kdf").field(kdf).finish(),
        }
    }
}
