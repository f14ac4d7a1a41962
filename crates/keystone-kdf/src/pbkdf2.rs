// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use keystone_core::{CryptoError, Result};
use keystone_digest::{DigestAlgorithm, MAX_OUTPUT_LEN};
use keystone_hmac::Hmac;

/// PBKDF2 inputs.
#[derive(Clone, Copy)]
pub struct Pbkdf2Params<'a> {
    /// Digest used by the HMAC pseudo-random function
    pub prf: DigestAlgorithm,
    /// Password (HMAC key)
    pub password: &'a [u8],
    /// Salt
    pub salt: &'a [u8],
    /// Iteration count, at least 1
    pub iterations: u32,
}

impl core::fmt::Debug for Pbkdf2Params<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pbkdf2Params")
            .field("prf", &self.prf)
            .field("password_len", &self.password.len())
            .field("salt_len", &self.salt.len())
            .field("iterations", &self.iterations)
            .finish()
    }
}

/// Incremental PBKDF2-HMAC.
///
/// Output is produced one HMAC-sized block `T_i` at a time; `index` tracks how
/// much of the current block has been handed out. `index == output_size`
/// means the next byte requires deriving `T_{i+1}`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Pbkdf2 {
    block: [u8; MAX_OUTPUT_LEN],
    scratch: [u8; MAX_OUTPUT_LEN],
    password: Vec<u8>,
    salt: Vec<u8>,
    hmac: Hmac,
    iterations: u32,
    counter: u32,
    index: usize,
}

/// Allocates a replacement for `current` when it cannot hold `len` bytes.
///
/// Nothing is modified here, so a failure leaves the caller's state intact.
fn stage_buffer(current: &Vec<u8>, len: usize) -> Result<Option<Vec<u8>>> {
    if current.capacity() >= len {
        return Ok(None);
    }

    let mut fresh = Vec::new();
    fresh
        .try_reserve_exact(len)
        .map_err(|_| CryptoError::OutOfMemory)?;

    Ok(Some(fresh))
}

/// Wipes `dst`, swaps in the staged allocation if any, then copies `src`.
/// Infallible: capacity was secured by [`stage_buffer`].
fn commit_buffer(dst: &mut Vec<u8>, staged: Option<Vec<u8>>, src: &[u8]) {
    dst.zeroize();
    if let Some(fresh) = staged {
        *dst = fresh;
    }
    dst.extend_from_slice(src);
}

fn check_iterations(iterations: u32) -> Result<()> {
    if iterations == 0 {
        warn!("pbkdf2 iteration count must be at least 1");
        return Err(CryptoError::InvalidArgument);
    }

    Ok(())
}

impl Pbkdf2 {
    /// Creates a derivation context.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidArgument`] if `iterations == 0`
    /// - [`CryptoError::OutOfMemory`] if the password or salt copy fails
    pub fn new(params: Pbkdf2Params<'_>) -> Result<Self> {
        check_iterations(params.iterations)?;

        let hmac = Hmac::new(params.prf, params.password)?;
        let mut kdf = Self {
            block: [0u8; MAX_OUTPUT_LEN],
            scratch: [0u8; MAX_OUTPUT_LEN],
            password: Vec::new(),
            salt: Vec::new(),
            hmac,
            iterations: params.iterations,
            counter: 0,
            index: 0,
        };
        kdf.reset(params)?;

        debug!(?params, "pbkdf2 context created");

        Ok(kdf)
    }

    /// Digest behind the HMAC.
    pub fn prf(&self) -> DigestAlgorithm {
        self.hmac.algorithm()
    }

    /// Size of one derived block.
    pub fn block_size(&self) -> usize {
        self.hmac.output_size()
    }

    /// Iteration count in effect.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Index of the last derived block (0 before the first one).
    pub fn block_counter(&self) -> u32 {
        self.counter
    }

    /// Restarts derivation with new inputs.
    ///
    /// Buffers holding the password and salt are reused when large enough and
    /// never shrink.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidAlgorithm`] if `params.prf` differs from
    ///   [`prf`](Self::prf); the PRF is fixed at construction
    /// - [`CryptoError::InvalidArgument`] if `iterations == 0`
    /// - [`CryptoError::OutOfMemory`] if the password or salt buffer cannot
    ///   grow
    ///
    /// On any of these the context keeps deriving from its previous inputs.
    pub fn reset(&mut self, params: Pbkdf2Params<'_>) -> Result<()> {
        self.reset_reserving(params, params.password.len(), params.salt.len())
    }

    fn reset_reserving(
        &mut self,
        params: Pbkdf2Params<'_>,
        password_len: usize,
        salt_len: usize,
    ) -> Result<()> {
        if params.prf != self.prf() {
            warn!(
                expected = %self.prf(),
                got = %params.prf,
                "pbkdf2 reset with a different prf"
            );
            return Err(CryptoError::InvalidAlgorithm);
        }

        check_iterations(params.iterations)?;

        let (password, salt) = stage_buffer(&self.password, password_len)
            .and_then(|password| stage_buffer(&self.salt, salt_len).map(|salt| (password, salt)))
            .inspect_err(|_| warn!(password_len, salt_len, "pbkdf2 reset could not allocate"))?;

        // Fail closed until the new key is in place.
        self.counter = u32::MAX;
        self.index = self.block_size();

        commit_buffer(&mut self.password, password, params.password);
        commit_buffer(&mut self.salt, salt, params.salt);

        self.hmac.reset(&self.password)?;
        self.iterations = params.iterations;
        self.counter = 0;
        self.block.zeroize();
        self.scratch.zeroize();

        Ok(())
    }

    /// Fills `out` with the next derived bytes and returns how many were
    /// written.
    ///
    /// The count equals `out.len()` unless the block counter runs out
    /// partway, in which case only the bytes before that point are written
    /// and counted.
    ///
    /// # Errors
    ///
    /// [`CryptoError::SourceExhausted`] when not a single byte can be
    /// produced because 2^32 - 1 blocks have already been derived. Every
    /// further request fails the same way until [`reset`](Self::reset).
    pub fn update(&mut self, out: &mut [u8]) -> Result<usize> {
        let block_size = self.block_size();
        let mut written = 0;

        while written < out.len() {
            if self.index == block_size {
                match self.derive_block() {
                    Ok(()) => {}
                    Err(CryptoError::SourceExhausted) if written > 0 => break,
                    Err(e) => return Err(e),
                }
            }

            let take = (block_size - self.index).min(out.len() - written);
            out[written..written + take]
                .copy_from_slice(&self.block[self.index..self.index + take]);

            self.index += take;
            written += take;
        }

        Ok(written)
    }

    /// No-op; all work happens in [`update`](Self::update).
    pub fn finish(&mut self) -> Result<usize> {
        Ok(0)
    }

    /// T_i = U_1 ^ U_2 ^ ... ^ U_c
    fn derive_block(&mut self) -> Result<()> {
        // Saturates at u32::MAX so an exhausted context keeps failing.
        let Some(next) = self.counter.checked_add(1) else {
            warn!(prf = %self.prf(), "pbkdf2 block counter exhausted");
            return Err(CryptoError::SourceExhausted);
        };
        self.counter = next;

        let block_size = self.block_size();
        self.block.zeroize();

        for round in 0..self.iterations {
            self.hmac.reset(&self.password)?;

            if round == 0 {
                self.hmac.update(&self.salt)?;
                self.hmac.update(&self.counter.to_be_bytes())?;
            } else {
                self.hmac.update(&self.scratch[..block_size])?;
            }

            self.hmac.finish(&mut self.scratch[..block_size])?;

            for (b, s) in self.block[..block_size]
                .iter_mut()
                .zip(self.scratch[..block_size].iter())
            {
                *b ^= s;
            }
        }

        self.scratch.zeroize();
        self.index = 0;

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set_block_counter(&mut self, counter: u32) {
        self.counter = counter;
    }

    #[cfg(test)]
    pub(crate) fn reset_with_reservation(
        &mut self,
        params: Pbkdf2Params<'_>,
        password_len: usize,
    ) -> Result<()> {
        self.reset_reserving(params, password_len, params.salt.len())
    }

    #[cfg(test)]
    pub(crate) fn buffer_capacities(&self) -> (usize, usize) {
        (self.password.capacity(), self.salt.capacity())
    }
}

impl core::fmt::Debug for Pbkdf2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pbkdf2")
            .field("prf", &self.prf())
            .field("iterations", &self.iterations)
            .field("state", &"[protected]")
            .finish()
    }
}
