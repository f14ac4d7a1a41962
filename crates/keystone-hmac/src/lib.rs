// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104 over any [`DigestAlgorithm`].
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//!   HMAC-SHA-384, and HMAC-SHA-512
//!   <https://datatracker.ietf.org/doc/html/rfc4231>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod hmac;

pub use hmac::{Hmac, IPAD_BYTE, OPAD_BYTE};
pub use keystone_digest::DigestAlgorithm;
