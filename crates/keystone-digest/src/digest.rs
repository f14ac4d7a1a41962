// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm-agnostic digest handle.
//!
//! [`Digest`] owns exactly one concrete engine, chosen at construction, and
//! forwards every lifecycle call to it.

use tracing::{debug, trace, warn};
use zeroize::Zeroize;

use keystone_core::{CryptoError, Result};

use crate::algorithm::DigestAlgorithm;
use crate::md5::Md5;
use crate::sha1::Sha1;
use crate::sha256::Sha256Engine;
use crate::sha512::Sha512Engine;

/// Concrete engine behind a [`Digest`].
#[derive(Clone)]
enum DigestBackend {
    Md5(Md5),
    Sha1(Sha1),
    Sha256(Sha256Engine),
    Sha512(Sha512Engine),
}

/// Incremental message digest over a runtime-selected algorithm.
///
/// # Example
///
/// ```
/// use keystone_digest::{Digest, DigestAlgorithm};
///
/// let mut digest = Digest::new(DigestAlgorithm::Sha256);
/// digest.update(b"ab");
/// digest.update(b"c");
///
/// let mut out = [0u8; 32];
/// assert_eq!(digest.finish(&mut out), Ok(32));
/// assert_eq!(out[..4], [0xba, 0x78, 0x16, 0xbf]);
/// ```
#[derive(Clone)]
pub struct Digest {
    algorithm: DigestAlgorithm,
    backend: DigestBackend,
}

impl Digest {
    /// Creates a context for `algorithm` in its initial state.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        let backend = match algorithm {
            DigestAlgorithm::Md5 => DigestBackend::Md5(Md5::default()),
            DigestAlgorithm::Sha1 => DigestBackend::Sha1(Sha1::default()),
            DigestAlgorithm::Sha224 => DigestBackend::Sha256(Sha256Engine::sha224()),
            DigestAlgorithm::Sha256 => DigestBackend::Sha256(Sha256Engine::sha256()),
            DigestAlgorithm::Sha384 => DigestBackend::Sha512(Sha512Engine::sha384()),
            DigestAlgorithm::Sha512 => DigestBackend::Sha512(Sha512Engine::sha512()),
        };

        debug!(%algorithm, "digest context created");

        Self { algorithm, backend }
    }

    /// Algorithm selected at construction.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Digest length in bytes.
    pub fn output_size(&self) -> usize {
        self.algorithm.output_size()
    }

    /// Compression block length in bytes.
    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    /// Discards all absorbed input.
    pub fn reset(&mut self) {
        trace!(algorithm = %self.algorithm, "digest reset");

        match &mut self.backend {
            DigestBackend::Md5(engine) => engine.reset(),
            DigestBackend::Sha1(engine) => engine.reset(),
            DigestBackend::Sha256(engine) => engine.reset(),
            DigestBackend::Sha512(engine) => engine.reset(),
        }
    }

    /// Absorbs `data`. Empty input is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.backend {
            DigestBackend::Md5(engine) => engine.update(data),
            DigestBackend::Sha1(engine) => engine.update(data),
            DigestBackend::Sha256(engine) => engine.update(data),
            DigestBackend::Sha512(engine) => engine.update(data),
        }
    }

    /// Writes the digest to the front of `out` and returns its length.
    ///
    /// The context is left finalized, not reset: absorbing more data or
    /// finishing again without [`reset`](Self::reset) yields an unspecified
    /// (but memory-safe) value.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::BufferTooSmall`] if `out` cannot hold
    /// [`output_size`](Self::output_size) bytes; the context is unchanged.
    pub fn finish(&mut self, out: &mut [u8]) -> Result<usize> {
        let result = match &mut self.backend {
            DigestBackend::Md5(engine) => engine.finish(out),
            DigestBackend::Sha1(engine) => engine.finish(out),
            DigestBackend::Sha256(engine) => engine.finish(out),
            DigestBackend::Sha512(engine) => engine.finish(out),
        };

        if let Err(CryptoError::BufferTooSmall) = result {
            warn!(
                algorithm = %self.algorithm,
                needed = self.output_size(),
                got = out.len(),
                "digest output buffer too small"
            );
        }

        result
    }
}

impl Zeroize for Digest {
    /// Wipes the chaining value and buffered input. The context must be
    /// [`reset`](Digest::reset) before reuse.
    fn zeroize(&mut self) {
        match &mut self.backend {
            DigestBackend::Md5(engine) => engine.zeroize(),
            DigestBackend::Sha1(engine) => engine.zeroize(),
            DigestBackend::Sha256(engine) => engine.zeroize(),
            DigestBackend::Sha512(engine) => engine.zeroize(),
        }
    }
}

impl core::fmt::Debug for Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Digest")
            .field("algorithm", &self.algorithm)
            .field("state", &"[protected]")
            .finish()
    }
}
