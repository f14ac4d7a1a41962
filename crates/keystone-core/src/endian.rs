// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Word/byte conversions for block transforms.
//!
//! Loads walk `bytes` in word-sized chunks and stop at whichever side runs
//! out first. Stores also accept a trailing partial chunk, which is how
//! truncated digests (SHA-224, SHA-384) serialize their state.

/// Generates a `{type}_slice_from_{order}` / `{type}_slice_to_{order}` pair.
macro_rules! impl_slice_conversions {
    ($type:ty, $size:expr, $from_bytes:ident, $to_bytes:ident, $fn_from:ident, $fn_to:ident) => {
        #[doc = concat!("Loads `", stringify!($type), "` words from bytes (`", stringify!($from_bytes), "`).")]
        #[inline(always)]
        pub fn $fn_from(dst: &mut [$type], bytes: &[u8]) {
            for (word, chunk) in dst.iter_mut().zip(bytes.chunks_exact($size)) {
                let mut tmp = [0u8; $size];
                tmp.copy_from_slice(chunk);
                *word = <$type>::$from_bytes(tmp);
            }
        }

        #[doc = concat!("Stores `", stringify!($type), "` words into bytes (`", stringify!($to_bytes), "`).")]
        #[inline(always)]
        pub fn $fn_to(src: &[$type], bytes: &mut [u8]) {
            for (word, chunk) in src.iter().zip(bytes.chunks_mut($size)) {
                let len = chunk.len();
                chunk.copy_from_slice(&word.$to_bytes()[..len]);
            }
        }
    };
}

impl_slice_conversions!(u32, 4, from_le_bytes, to_le_bytes, u32_slice_from_le, u32_slice_to_le);
impl_slice_conversions!(u32, 4, from_be_bytes, to_be_bytes, u32_slice_from_be, u32_slice_to_be);
impl_slice_conversions!(u64, 8, from_be_bytes, to_be_bytes, u64_slice_from_be, u64_slice_to_be);
