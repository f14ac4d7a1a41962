// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Algorithm-agnostic stream cipher handle.

use tracing::{debug, warn};

use keystone_core::{CryptoError, Result};

use crate::algorithm::{CipherAlgorithm, CipherParams};
use crate::keystream::Keystream;
use crate::rc4::Rc4;
use crate::salsa20::Salsa20;

/// Concrete cipher behind a [`Cipher`].
enum CipherBackend {
    Rc4(Rc4),
    Salsa20(Salsa20),
}

/// Stream cipher over a runtime-selected algorithm.
///
/// Encryption and decryption are the same operation.
///
/// # Example
///
/// ```
/// use keystone_cipher::{Cipher, CipherParams};
///
/// let params = CipherParams::Rc4 { key: b"Key" };
///
/// let mut cipher = Cipher::new(params).unwrap();
/// let mut ct = [0u8; 9];
/// assert_eq!(cipher.update(b"Plaintext", &mut ct), Ok(9));
/// assert_eq!(ct, [0xbb, 0xf3, 0x16, 0xe8, 0xd9, 0x40, 0xaf, 0x0a, 0xd3]);
///
/// cipher.reset(params).unwrap();
/// cipher.apply_keystream(&mut ct);
/// assert_eq!(&ct, b"Plaintext");
/// ```
pub struct Cipher {
    backend: CipherBackend,
}

impl Cipher {
    /// Creates a keyed cipher.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKeySize`] / [`CryptoError::InvalidIvSize`] when
    /// the parameters fall outside the algorithm's domain.
    pub fn new(params: CipherParams<'_>) -> Result<Self> {
        let backend = match params {
            CipherParams::Rc4 { key } => CipherBackend::Rc4(Rc4::new(key)?),
            CipherParams::Salsa20 { key, iv } => {
                CipherBackend::Salsa20(Salsa20::with_key_iv(key, iv)?)
            }
        };

        debug!(algorithm = %params.algorithm(), ?params, "cipher context created");

        Ok(Self { backend })
    }

    /// Algorithm selected at construction.
    pub fn algorithm(&self) -> CipherAlgorithm {
        match &self.backend {
            CipherBackend::Rc4(_) => CipherAlgorithm::Rc4,
            CipherBackend::Salsa20(_) => CipherAlgorithm::Salsa20,
        }
    }

    /// Re-keys the cipher and rewinds its keystream.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidAlgorithm`] if `params` belong to another
    /// algorithm, or a key/IV size error. The context is unchanged on error.
    pub fn reset(&mut self, params: CipherParams<'_>) -> Result<()> {
        let current = self.algorithm();

        match (&mut self.backend, params) {
            (CipherBackend::Rc4(rc4), CipherParams::Rc4 { key }) => rc4.reset(key),
            (CipherBackend::Salsa20(salsa), CipherParams::Salsa20 { key, iv }) => {
                salsa.reset(key, iv)
            }
            _ => {
                warn!(
                    expected = %current,
                    got = %params.algorithm(),
                    "cipher reset with parameters for another algorithm"
                );
                Err(CryptoError::InvalidAlgorithm)
            }
        }
    }

    /// Writes `input XOR keystream` to `output` and returns the byte count.
    ///
    /// # Errors
    ///
    /// [`CryptoError::BufferTooSmall`] if `output` is shorter than `input`.
    pub fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let result = match &mut self.backend {
            CipherBackend::Rc4(rc4) => rc4.apply_keystream_to(input, output),
            CipherBackend::Salsa20(salsa) => salsa.apply_keystream_to(input, output),
        };

        if result.is_err() {
            warn!(
                algorithm = %self.algorithm(),
                needed = input.len(),
                got = output.len(),
                "cipher output buffer too small"
            );
        }

        result
    }

    /// In-place form of [`update`](Self::update).
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        match &mut self.backend {
            CipherBackend::Rc4(rc4) => rc4.apply_keystream(data),
            CipherBackend::Salsa20(salsa) => salsa.apply_keystream(data),
        }
    }

    /// Stream ciphers have nothing to flush; always produces zero bytes.
    pub fn finish(&mut self) -> Result<usize> {
        Ok(0)
    }
}

impl Keystream for Cipher {
    fn apply_keystream(&mut self, data: &mut [u8]) {
        Cipher::apply_keystream(self, data);
    }
}

impl core::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cipher")
            .field("algorithm", &self.algorithm())
            .field("state", &"[protected]")
            .finish()
    }
}
