// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Password-based key derivation.
//!
//! [`Pbkdf2`] implements PBKDF2 (RFC 8018, section 5.2) over any
//! [`DigestAlgorithm`] through [`keystone_hmac::Hmac`]. Derived bytes are
//! produced incrementally: asking for `n1` then `n2` bytes yields the same
//! stream as asking for `n1 + n2` at once.
//!
//! [`Kdf`] is the runtime-selected handle over the supported derivation
//! functions.
//!
//! References:
//! - RFC 8018: PKCS #5: Password-Based Cryptography Specification Version 2.1
//!   <https://datatracker.ietf.org/doc/html/rfc8018>
//! - RFC 6070: PKCS #5: PBKDF2 Test Vectors
//!   <https://datatracker.ietf.org/doc/html/rfc6070>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod kdf;
mod pbkdf2;

pub use algorithm::{KdfAlgorithm, KdfParams};
pub use kdf::Kdf;
pub use keystone_digest::DigestAlgorithm;
pub use pbkdf2::{Pbkdf2, Pbkdf2Params};
