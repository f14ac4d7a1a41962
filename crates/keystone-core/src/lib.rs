// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared building blocks for the keystone primitives.
//!
//! - [`CryptoError`]: the single error type every lifecycle call returns
//! - word/byte conversions in both byte orders, used by the block transforms
//! - `hex_to_bytes` (feature `test-utils`) for known-answer tests

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(test)]
mod tests;

mod endian;
mod error;

#[cfg(feature = "test-utils")]
mod hex;

pub use endian::{
    u32_slice_from_be, u32_slice_from_le, u32_slice_to_be, u32_slice_to_le, u64_slice_from_be,
    u64_slice_to_be,
};
pub use error::{CryptoError, Result};

#[cfg(feature = "test-utils")]
pub use hex::{bytes_to_hex, hex_to_bytes};
