// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keystream consumption shared by the stream ciphers.

use zeroize::{Zeroize, ZeroizeOnDrop};

use keystone_core::{CryptoError, Result};

/// A source of keystream that can be XORed over data, in any chunking.
///
/// Feeding a message in several calls produces exactly the bytes one call
/// over the whole message would.
pub trait Keystream {
    /// XORs the next `data.len()` keystream bytes into `data`.
    fn apply_keystream(&mut self, data: &mut [u8]);

    /// Writes `input XOR keystream` to the front of `output`.
    ///
    /// Returns the number of bytes produced (`input.len()`).
    ///
    /// # Errors
    ///
    /// [`CryptoError::BufferTooSmall`] if `output` is shorter than `input`;
    /// no keystream is consumed in that case.
    fn apply_keystream_to(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        if output.len() < input.len() {
            return Err(CryptoError::BufferTooSmall);
        }

        let output = &mut output[..input.len()];
        output.copy_from_slice(input);
        self.apply_keystream(output);

        Ok(input.len())
    }
}

/// Primitive that emits one fixed-size keystream block per call.
pub trait KeystreamCore<const BLOCK_LEN: usize>: Zeroize {
    /// Writes the next block and advances the internal position.
    fn generate(&mut self, block: &mut [u8; BLOCK_LEN]);
}

/// Buffers the output of a [`KeystreamCore`] and hands it out byte by byte.
///
/// Invariant: `index <= BLOCK_LEN`; `index == BLOCK_LEN` means the next byte
/// requires a fresh block.
pub struct BlockKeystream<C, const BLOCK_LEN: usize>
where
    C: KeystreamCore<BLOCK_LEN>,
{
    core: C,
    block: [u8; BLOCK_LEN],
    index: usize,
}

impl<C, const BLOCK_LEN: usize> BlockKeystream<C, BLOCK_LEN>
where
    C: KeystreamCore<BLOCK_LEN>,
{
    /// Wraps a freshly keyed core. No block is generated until needed.
    pub fn new(core: C) -> Self {
        Self {
            core,
            block: [0u8; BLOCK_LEN],
            index: BLOCK_LEN,
        }
    }

    /// Drops any buffered keystream so the next byte comes from a new block.
    pub(crate) fn discard_block(&mut self) {
        self.block.zeroize();
        self.index = BLOCK_LEN;
    }

    pub(crate) fn core(&self) -> &C {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    /// Position inside the current keystream block.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<C, const BLOCK_LEN: usize> Keystream for BlockKeystream<C, BLOCK_LEN>
where
    C: KeystreamCore<BLOCK_LEN>,
{
    fn apply_keystream(&mut self, data: &mut [u8]) {
        let mut data = data;

        while !data.is_empty() {
            if self.index == BLOCK_LEN {
                self.core.generate(&mut self.block);
                self.index = 0;
            }

            let take = core::cmp::min(BLOCK_LEN - self.index, data.len());
            let (head, tail) = core::mem::take(&mut data).split_at_mut(take);

            for (byte, key) in head.iter_mut().zip(&self.block[self.index..]) {
                *byte ^= key;
            }

            self.index += take;
            data = tail;
        }
    }
}

impl<C, const BLOCK_LEN: usize> Zeroize for BlockKeystream<C, BLOCK_LEN>
where
    C: KeystreamCore<BLOCK_LEN>,
{
    fn zeroize(&mut self) {
        self.core.zeroize();
        self.block.zeroize();
        self.index = BLOCK_LEN;
    }
}

impl<C, const BLOCK_LEN: usize> Drop for BlockKeystream<C, BLOCK_LEN>
where
    C: KeystreamCore<BLOCK_LEN>,
{
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C, const BLOCK_LEN: usize> ZeroizeOnDrop for BlockKeystream<C, BLOCK_LEN> where
    C: KeystreamCore<BLOCK_LEN>
{
}
