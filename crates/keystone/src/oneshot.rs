// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Single-call wrappers: create, update once, finish, drop.
//!
//! Each returns the number of bytes written to its output.

use keystone_cipher::{Cipher, CipherParams};
use keystone_core::Result;
use keystone_digest::{Digest, DigestAlgorithm};
use keystone_hmac::Hmac;
use keystone_kdf::{Kdf, KdfParams};

/// Digest of `data`, written to the front of `out`.
///
/// # Errors
///
/// [`CryptoError::BufferTooSmall`](crate::CryptoError::BufferTooSmall) if
/// `out` is shorter than the algorithm's output size.
pub fn digest(algorithm: DigestAlgorithm, data: &[u8], out: &mut [u8]) -> Result<usize> {
    let mut ctx = Digest::new(algorithm);
    ctx.update(data);
    ctx.finish(out)
}

/// HMAC of `data` under `key`, written to the front of `out`.
pub fn hmac(algorithm: DigestAlgorithm, key: &[u8], data: &[u8], out: &mut [u8]) -> Result<usize> {
    let mut ctx = Hmac::new(algorithm, key)?;
    ctx.update(data)?;
    ctx.finish(out)
}

/// Encrypts (or decrypts) `input` into `output` from the start of the
/// keystream.
pub fn cipher(params: CipherParams<'_>, input: &[u8], output: &mut [u8]) -> Result<usize> {
    let mut ctx = Cipher::new(params)?;
    let written = ctx.update(input, output)?;

    Ok(written + ctx.finish()?)
}

/// Fills `out` with derived key material.
///
/// The returned count is short only if the derivation source runs out.
pub fn kdf(params: KdfParams<'_>, out: &mut [u8]) -> Result<usize> {
    let mut ctx = Kdf::new(params)?;
    let written = ctx.update(out)?;

    Ok(written + ctx.finish()?)
}
