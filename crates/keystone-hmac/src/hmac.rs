// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use keystone_core::{CryptoError, Result};
use keystone_digest::{Digest, DigestAlgorithm, MAX_BLOCK_LEN, MAX_OUTPUT_LEN};

/// Inner padding byte
pub const IPAD_BYTE: u8 = 0x36;

/// Outer padding byte
pub const OPAD_BYTE: u8 = 0x5c;

/// Incremental HMAC.
///
/// Lifecycle: [`new`](Self::new) / [`reset`](Self::reset) with a key, any
/// number of [`update`](Self::update) calls, then exactly one
/// [`finish`](Self::finish). Finishing consumes the inner digest, so a second
/// `finish` (or an `update` after it) is refused with
/// [`CryptoError::AlreadyFinished`] until the next `reset`.
///
/// Only the first `block_size()` bytes of each pad and the first
/// `output_size()` bytes of the scratch buffer are in use.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Hmac {
    // Fields drop in declaration order: buffers, then outer, then inner.
    scratch: [u8; MAX_OUTPUT_LEN],
    ipad: [u8; MAX_BLOCK_LEN],
    opad: [u8; MAX_BLOCK_LEN],
    outer: Digest,
    inner: Digest,
    finished: bool,
}

impl Hmac {
    /// Creates an HMAC keyed with `key` (any length, including empty).
    pub fn new(algorithm: DigestAlgorithm, key: &[u8]) -> Result<Self> {
        let mut hmac = Self {
            scratch: [0u8; MAX_OUTPUT_LEN],
            ipad: [0u8; MAX_BLOCK_LEN],
            opad: [0u8; MAX_BLOCK_LEN],
            outer: Digest::new(algorithm),
            inner: Digest::new(algorithm),
            finished: false,
        };
        hmac.reset(key)?;

        debug!(%algorithm, key_len = key.len(), "hmac context created");

        Ok(hmac)
    }

    /// Underlying digest algorithm.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.inner.algorithm()
    }

    /// MAC length in bytes.
    pub fn output_size(&self) -> usize {
        self.inner.output_size()
    }

    /// Block length of the underlying digest.
    pub fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    /// Re-keys: derives fresh pads and primes the inner digest with `ipad`.
    ///
    /// Keys longer than the block size are first replaced by their digest.
    pub fn reset(&mut self, key: &[u8]) -> Result<()> {
        let block_size = self.block_size();

        self.ipad.zeroize();
        self.opad.zeroize();
        self.scratch.zeroize();

        if key.len() > block_size {
            self.inner.reset();
            self.inner.update(key);
            self.inner.finish(&mut self.ipad[..block_size])?;
        } else {
            self.ipad[..key.len()].copy_from_slice(key);
        }

        self.opad[..block_size].copy_from_slice(&self.ipad[..block_size]);

        for (i, o) in self.ipad[..block_size]
            .iter_mut()
            .zip(self.opad[..block_size].iter_mut())
        {
            *i ^= IPAD_BYTE;
            *o ^= OPAD_BYTE;
        }

        self.inner.reset();
        self.outer.reset();
        self.inner.update(&self.ipad[..block_size]);
        self.finished = false;

        Ok(())
    }

    /// Absorbs message bytes.
    ///
    /// # Errors
    ///
    /// [`CryptoError::AlreadyFinished`] after [`finish`](Self::finish).
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finished {
            warn!(algorithm = %self.algorithm(), "hmac update after finish");
            return Err(CryptoError::AlreadyFinished);
        }

        self.inner.update(data);

        Ok(())
    }

    /// Writes the MAC to the front of `out` and returns its length.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::BufferTooSmall`] if `out` is shorter than
    ///   [`output_size`](Self::output_size); the context stays usable.
    /// - [`CryptoError::AlreadyFinished`] on a second call without `reset`.
    pub fn finish(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.finished {
            warn!(algorithm = %self.algorithm(), "hmac finished twice");
            return Err(CryptoError::AlreadyFinished);
        }

        let output_size = self.output_size();
        let block_size = self.block_size();

        if out.len() < output_size {
            warn!(
                algorithm = %self.algorithm(),
                needed = output_size,
                got = out.len(),
                "hmac output buffer too small"
            );
            return Err(CryptoError::BufferTooSmall);
        }

        self.finished = true;

        // H(K ^ opad || H(K ^ ipad || message))
        self.inner.finish(&mut self.scratch[..output_size])?;
        self.outer.update(&self.opad[..block_size]);
        self.outer.update(&self.scratch[..output_size]);
        let written = self.outer.finish(out)?;

        self.scratch.zeroize();

        Ok(written)
    }
}

impl core::fmt::Debug for Hmac {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hmac")
            .field("algorithm", &self.algorithm())
            .field("finished", &self.finished)
            .field("state", &"[protected]")
            .finish()
    }
}
