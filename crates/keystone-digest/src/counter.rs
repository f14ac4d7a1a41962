// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Two-word message length counter.
//!
//! The counter tracks the number of message *bits* as a `(low, high)` pair of
//! machine words. `u32` words give the 64-bit length field of MD5, SHA-1 and
//! SHA-256; `u64` words give the 128-bit field of SHA-512.

use zeroize::Zeroize;

/// Byte order of the length field and of the state words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first (MD5)
    Little,
    /// Most significant byte first (SHA family)
    Big,
}

/// Word type usable as one half of a [`LengthCounter`].
pub trait CounterWord: Copy + Default + PartialOrd + Zeroize {
    /// Width of the word in bytes
    const BYTES: usize;

    /// Low `BYTES * 8` bits of `value`.
    fn truncate(value: u128) -> Self;

    /// Wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Writes the word into `out` (exactly `BYTES` long) in `order`.
    fn write(self, order: ByteOrder, out: &mut [u8]);
}

macro_rules! impl_counter_word {
    ($type:ty) => {
        impl CounterWord for $type {
            const BYTES: usize = core::mem::size_of::<$type>();

            #[inline(always)]
            fn truncate(value: u128) -> Self {
                value as $type
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$type>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn write(self, order: ByteOrder, out: &mut [u8]) {
                match order {
                    ByteOrder::Little => out.copy_from_slice(&self.to_le_bytes()),
                    ByteOrder::Big => out.copy_from_slice(&self.to_be_bytes()),
                }
            }
        }
    };
}

impl_counter_word!(u32);
impl_counter_word!(u64);

/// Total message length in bits, split over two words.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct LengthCounter<W: CounterWord> {
    low: W,
    high: W,
}

impl<W: CounterWord> LengthCounter<W> {
    /// Size in bytes of the encoded length field.
    pub const FIELD_LEN: usize = 2 * W::BYTES;

    /// Builds a counter from raw words.
    pub fn from_words(low: W, high: W) -> Self {
        Self { low, high }
    }

    /// Low word.
    pub fn low(&self) -> W {
        self.low
    }

    /// High word.
    pub fn high(&self) -> W {
        self.high
    }

    /// Advances the counter by `len` bytes.
    ///
    /// The high word receives the bits of `len * 8` that do not fit in the
    /// low word, plus one carry when the low word wraps.
    pub fn add_bytes(&mut self, len: usize) {
        let bits = (len as u128) << 3;
        let shift = 8 * W::BYTES as u32;

        let old_low = self.low;
        self.low = self.low.wrapping_add(W::truncate(bits));
        self.high = self.high.wrapping_add(W::truncate(bits >> shift));

        if self.low < old_low {
            self.high = self.high.wrapping_add(W::truncate(1));
        }
    }

    /// Encodes the counter as the Merkle-Damgard length field.
    ///
    /// Little-endian puts the low word first; big-endian puts the high word
    /// first, so the field always reads as one double-width integer.
    pub fn encode(&self, order: ByteOrder, out: &mut [u8]) {
        let (first, second) = out[..Self::FIELD_LEN].split_at_mut(W::BYTES);

        match order {
            ByteOrder::Little => {
                self.low.write(order, first);
                self.high.write(order, second);
            }
            ByteOrder::Big => {
                self.high.write(order, first);
                self.low.write(order, second);
            }
        }
    }
}
