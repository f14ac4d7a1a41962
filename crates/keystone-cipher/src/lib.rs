// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stream ciphers: RC4 and Salsa20.
//!
//! Both implement [`Keystream`]: output for a message is independent of how
//! it is split across calls. [`Cipher`] selects one at runtime from typed
//! [`CipherParams`].
//!
//! All key-dependent state is zeroized on drop.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod cipher;
mod keystream;
mod rc4;
mod salsa20;

pub use algorithm::{CipherAlgorithm, CipherParams};
pub use cipher::Cipher;
pub use keystream::{BlockKeystream, Keystream, KeystreamCore};
pub use rc4::{RC4_MAX_KEY_LEN, RC4_MIN_KEY_LEN, Rc4};
pub use salsa20::{SALSA20_BLOCK_LEN, SALSA20_IV_LEN, SALSA20_KEY_LENS, Salsa20, Salsa20Core};
