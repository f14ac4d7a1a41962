// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use keystone_core::CryptoError;

/// Failure of a reader-driven helper.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The primitive rejected an operation
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The reader failed
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}
