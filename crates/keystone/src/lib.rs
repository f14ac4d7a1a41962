// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cryptographic primitives with one lifecycle: create, reset, update, finish.
//!
//! | Family | Handle | Algorithms |
//! |--------|--------|------------|
//! | Digest | [`Digest`] | MD5, SHA-1, SHA-224, SHA-256, SHA-384, SHA-512 |
//! | Cipher | [`Cipher`] | RC4, Salsa20 |
//! | MAC    | [`Hmac`]   | HMAC over any digest |
//! | KDF    | [`Kdf`]    | PBKDF2-HMAC over any digest |
//!
//! Every handle accepts input in arbitrary chunks and produces the same bytes
//! as a single call would. Contexts wipe their state when dropped.
//!
//! # Quick Start
//!
//! ```rust
//! use keystone::{DigestAlgorithm, oneshot};
//!
//! let mut out = [0u8; 32];
//! let written = oneshot::digest(DigestAlgorithm::Sha256, b"abc", &mut out)?;
//! assert_eq!(written, 32);
//! assert_eq!(out[..4], [0xba, 0x78, 0x16, 0xbf]);
//! # Ok::<(), keystone::CryptoError>(())
//! ```
//!
//! Incremental use goes through the handles directly:
//!
//! ```rust
//! use keystone::{DigestAlgorithm, Hmac};
//!
//! let mut mac = Hmac::new(DigestAlgorithm::Sha256, b"key")?;
//! mac.update(b"The quick brown fox ")?;
//! mac.update(b"jumps over the lazy dog")?;
//!
//! let mut tag = [0u8; 32];
//! mac.finish(&mut tag)?;
//! assert_eq!(tag[..4], [0xf7, 0xbc, 0x83, 0xf4]);
//! # Ok::<(), keystone::CryptoError>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): [`digest_reader`] and [`hmac_reader`] over any
//!   `std::io::Read`, plus [`StreamError`].
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

pub mod oneshot;

mod algorithm;

#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod stream;

pub use keystone_cipher as cipher;
pub use keystone_digest as digest;
pub use keystone_hmac as hmac;
pub use keystone_kdf as kdf;

pub use algorithm::{Algorithm, Family};
pub use keystone_cipher::{Cipher, CipherAlgorithm, CipherParams};
pub use keystone_core::{CryptoError, Result};
pub use keystone_digest::{Digest, DigestAlgorithm};
pub use keystone_hmac::Hmac;
pub use keystone_kdf::{Kdf, KdfAlgorithm, KdfParams, Pbkdf2Params};

#[cfg(feature = "std")]
pub use error::StreamError;
#[cfg(feature = "std")]
pub use stream::{READ_CHUNK_LEN, digest_reader, hmac_reader};
