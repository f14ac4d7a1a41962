// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors returned by digest, cipher, HMAC and KDF lifecycle calls.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// An argument carries a value the operation does not accept
    #[error("invalid argument")]
    InvalidArgument,

    /// Unknown algorithm, or parameters that belong to a different algorithm
    #[error("invalid or mismatched algorithm")]
    InvalidAlgorithm,

    /// Key length outside the algorithm's accepted domain
    #[error("invalid key size")]
    InvalidKeySize,

    /// IV length outside the algorithm's accepted domain
    #[error("invalid IV size")]
    InvalidIvSize,

    /// An owned buffer could not be grown
    #[error("out of memory")]
    OutOfMemory,

    /// The PBKDF2 block counter wrapped; no further output can be derived
    #[error("key derivation source exhausted")]
    SourceExhausted,

    /// The caller-provided output buffer is shorter than required
    #[error("output buffer too small")]
    BufferTooSmall,

    /// `finish` already consumed this context; `reset` it first
    #[error("context already finished")]
    AlreadyFinished,
}

/// Result alias used across the keystone crates.
pub type Result<T> = core::result::Result<T, CryptoError>;
