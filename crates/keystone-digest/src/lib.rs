// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Incremental message digests: MD5, SHA-1, SHA-224/256, SHA-384/512.
//!
//! Every algorithm runs on the same Merkle-Damgard [`DigestEngine`]: block
//! buffering, two-word bit-length accounting and padding are written once and
//! parameterized by a per-algorithm [`BlockCompression`]. [`Digest`] selects
//! one of them at runtime.
//!
//! All state is zeroized on drop.
//!
//! References:
//! - RFC 1321: The MD5 Message-Digest Algorithm
//!   <https://datatracker.ietf.org/doc/html/rfc1321>
//! - RFC 3174: US Secure Hash Algorithm 1 (SHA1)
//!   <https://datatracker.ietf.org/doc/html/rfc3174>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod counter;
mod digest;
mod engine;
mod md5;
mod sha1;
mod sha256;
mod sha512;

pub use algorithm::DigestAlgorithm;
pub use counter::{ByteOrder, CounterWord, LengthCounter};
pub use digest::Digest;
pub use engine::{BlockCompression, DigestEngine};
pub use md5::{MD5_BLOCK_LEN, MD5_OUTPUT_LEN, Md5, Md5Core};
pub use sha1::{SHA1_BLOCK_LEN, SHA1_OUTPUT_LEN, Sha1, Sha1Core};
pub use sha256::{
    SHA224_OUTPUT_LEN, SHA256_BLOCK_LEN, SHA256_OUTPUT_LEN, Sha256Core, Sha256Engine,
    Sha256Variant,
};
pub use sha512::{
    SHA384_OUTPUT_LEN, SHA512_BLOCK_LEN, SHA512_OUTPUT_LEN, Sha512Core, Sha512Engine,
    Sha512Variant,
};

/// Largest digest length of any supported algorithm.
pub const MAX_OUTPUT_LEN: usize = SHA512_OUTPUT_LEN;

/// Largest block length of any supported algorithm.
pub const MAX_BLOCK_LEN: usize = SHA512_BLOCK_LEN;
