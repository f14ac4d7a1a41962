// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Merkle-Damgard streaming engine shared by every digest.
//!
//! The engine owns the block buffer, the bit-length counter and the padding
//! logic. Everything algorithm-specific (initial state, compression, output
//! serialization) lives behind [`BlockCompression`].

use zeroize::{Zeroize, ZeroizeOnDrop};

use keystone_core::{CryptoError, Result};

use crate::counter::{ByteOrder, CounterWord, LengthCounter};

/// `0x80` followed by zeros, long enough for the largest padding run
/// (one full 128-byte block).
pub(crate) const PADDING: [u8; 128] = {
    let mut padding = [0u8; 128];
    padding[0] = 0x80;
    padding
};

/// Algorithm-specific half of a digest: state, compression and output.
pub trait BlockCompression<const BLOCK_LEN: usize>: Zeroize {
    /// Word type of the two-word bit-length counter.
    type Counter: CounterWord;

    /// Byte order of the length field appended by padding.
    const LENGTH_ORDER: ByteOrder;

    /// Restores the initial chaining value.
    fn reset(&mut self);

    /// Mixes one full block into the chaining value.
    fn compress(&mut self, block: &[u8; BLOCK_LEN]);

    /// Declared digest length in bytes.
    fn output_len(&self) -> usize;

    /// Serializes the chaining value into `out` (exactly `output_len` bytes).
    fn write_digest(&self, out: &mut [u8]);
}

/// Incremental digest over any [`BlockCompression`].
///
/// Invariant: `buffer_len < BLOCK_LEN` between calls.
pub struct DigestEngine<C, const BLOCK_LEN: usize>
where
    C: BlockCompression<BLOCK_LEN>,
{
    core: C,
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    counter: LengthCounter<C::Counter>,
}

impl<C, const BLOCK_LEN: usize> DigestEngine<C, BLOCK_LEN>
where
    C: BlockCompression<BLOCK_LEN>,
{
    /// Wraps `core` (already holding its initial state).
    pub fn new(core: C) -> Self {
        Self {
            core,
            buffer: [0u8; BLOCK_LEN],
            buffer_len: 0,
            counter: LengthCounter::default(),
        }
    }

    /// Returns the engine to its freshly-created state.
    pub fn reset(&mut self) {
        self.core.reset();
        self.buffer.zeroize();
        self.buffer_len = 0;
        self.counter = LengthCounter::default();
    }

    /// Appends `data` to the message.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.counter.add_bytes(data.len());

        let mut data = data;

        // Top off a partially filled block
        if self.buffer_len > 0 {
            let take = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_LEN {
                return;
            }

            self.core.compress(&self.buffer);
            self.buffer_len = 0;
        }

        // Full blocks straight from the input
        while let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() {
            self.core.compress(block);
            data = rest;
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffer_len = data.len();
        }
    }

    /// Pads the message, writes the digest into `out` and returns its length.
    ///
    /// The engine is not reset; call [`reset`](Self::reset) before hashing a
    /// new message. Bytes of `out` past the digest length are left untouched.
    ///
    /// # Errors
    ///
    /// [`CryptoError::BufferTooSmall`] if `out` is shorter than the digest.
    pub fn finish(&mut self, out: &mut [u8]) -> Result<usize> {
        let output_len = self.core.output_len();

        if out.len() < output_len {
            return Err(CryptoError::BufferTooSmall);
        }

        let field_len = LengthCounter::<C::Counter>::FIELD_LEN;
        let mut length_field = [0u8; 16];
        self.counter.encode(C::LENGTH_ORDER, &mut length_field);

        let boundary = BLOCK_LEN - field_len;
        let pad_len = if self.buffer_len < boundary {
            boundary - self.buffer_len
        } else {
            BLOCK_LEN + boundary - self.buffer_len
        };

        self.update(&PADDING[..pad_len]);
        self.update(&length_field[..field_len]);
        debug_assert_eq!(self.buffer_len, 0);

        self.core.write_digest(&mut out[..output_len]);
        length_field.zeroize();

        Ok(output_len)
    }

    /// Declared digest length in bytes.
    pub fn output_len(&self) -> usize {
        self.core.output_len()
    }

    /// Compression block length in bytes.
    pub const fn block_len(&self) -> usize {
        BLOCK_LEN
    }

    /// Bytes currently held in the block buffer.
    pub fn buffered_len(&self) -> usize {
        self.buffer_len
    }

    /// Message length consumed so far, in bits.
    pub fn bit_counter(&self) -> &LengthCounter<C::Counter> {
        &self.counter
    }

    #[cfg(test)]
    pub(crate) fn set_bit_counter(&mut self, counter: LengthCounter<C::Counter>) {
        self.counter = counter;
    }
}

impl<C, const BLOCK_LEN: usize> Default for DigestEngine<C, BLOCK_LEN>
where
    C: BlockCompression<BLOCK_LEN> + Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C, const BLOCK_LEN: usize> Clone for DigestEngine<C, BLOCK_LEN>
where
    C: BlockCompression<BLOCK_LEN> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            buffer: self.buffer,
            buffer_len: self.buffer_len,
            counter: self.counter,
        }
    }
}

impl<C, const BLOCK_LEN: usize> Zeroize for DigestEngine<C, BLOCK_LEN>
where
    C: BlockCompression<BLOCK_LEN>,
{
    fn zeroize(&mut self) {
        self.core.zeroize();
        self.buffer.zeroize();
        self.buffer_len.zeroize();
        self.counter.zeroize();
    }
}

impl<C, const BLOCK_LEN: usize> Drop for DigestEngine<C, BLOCK_LEN>
where
    C: BlockCompression<BLOCK_LEN>,
{
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C, const BLOCK_LEN: usize> ZeroizeOnDrop for DigestEngine<C, BLOCK_LEN> where
    C: BlockCompression<BLOCK_LEN>
{
}

impl<C, const BLOCK_LEN: usize> core::fmt::Debug for DigestEngine<C, BLOCK_LEN>
where
    C: BlockCompression<BLOCK_LEN>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DigestEngine")
            .field("block_len", &BLOCK_LEN)
            .field("output_len", &self.core.output_len())
            .field("state", &"[protected]")
            .finish()
    }
}
