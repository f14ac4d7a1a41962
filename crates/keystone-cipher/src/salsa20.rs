// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20/20 stream cipher (Bernstein, "Salsa20 specification")
//!
//! 16-word state: constants in words 0, 5, 10, 15; key in 1-4 and 11-14;
//! IV in 6-7; 64-bit block counter in 8-9.

use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use keystone_core::{CryptoError, Result, u32_slice_from_le, u32_slice_to_le};

use crate::keystream::{BlockKeystream, KeystreamCore};

/// Salsa20 keystream block length in bytes
pub const SALSA20_BLOCK_LEN: usize = 64;

/// Salsa20 IV length in bytes
pub const SALSA20_IV_LEN: usize = 8;

/// Accepted Salsa20 key lengths in bytes
pub const SALSA20_KEY_LENS: [usize; 2] = [16, 32];

/// "expand 32-byte k"
const SIGMA: &[u8; 16] = b"expand 32-byte k";

/// "expand 16-byte k"
const TAU: &[u8; 16] = b"expand 16-byte k";

#[inline(always)]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

/// Salsa20 input matrix.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Salsa20Core {
    state: [u32; 16],
}

impl Salsa20Core {
    /// Builds the input matrix for `key` (16 or 32 bytes) and an 8-byte `iv`.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        let mut core = Self { state: [0u32; 16] };
        core.rekey(key, iv)?;

        Ok(core)
    }

    /// Loads a new key and IV and rewinds the block counter.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKeySize`] or [`CryptoError::InvalidIvSize`];
    /// the current state is left untouched on error.
    pub fn rekey(&mut self, key: &[u8], iv: &[u8]) -> Result<()> {
        let (constants, key_hi) = match key.len() {
            32 => (SIGMA, &key[16..]),
            16 => (TAU, key),
            len => {
                warn!(key_len = len, "rejected Salsa20 key size");
                return Err(CryptoError::InvalidKeySize);
            }
        };

        if iv.len() != SALSA20_IV_LEN {
            warn!(iv_len = iv.len(), "rejected Salsa20 IV size");
            return Err(CryptoError::InvalidIvSize);
        }

        let s = &mut self.state;
        u32_slice_from_le(&mut s[1..5], &key[..16]);
        u32_slice_from_le(&mut s[11..15], key_hi);
        u32_slice_from_le(&mut s[6..8], iv);
        s[8] = 0;
        s[9] = 0;

        let mut words = [0u32; 4];
        u32_slice_from_le(&mut words, constants);
        s[0] = words[0];
        s[5] = words[1];
        s[10] = words[2];
        s[15] = words[3];

        Ok(())
    }

    /// Index of the next keystream block.
    pub fn counter(&self) -> u64 {
        (u64::from(self.state[9]) << 32) | u64::from(self.state[8])
    }

    #[cfg(test)]
    pub(crate) fn set_counter(&mut self, counter: u64) {
        self.state[8] = counter as u32;
        self.state[9] = (counter >> 32) as u32;
    }
}

impl KeystreamCore<SALSA20_BLOCK_LEN> for Salsa20Core {
    fn generate(&mut self, block: &mut [u8; SALSA20_BLOCK_LEN]) {
        let mut x = self.state;

        for _ in 0..10 {
            // Column round
            quarter_round(&mut x, 0, 4, 8, 12);
            quarter_round(&mut x, 5, 9, 13, 1);
            quarter_round(&mut x, 10, 14, 2, 6);
            quarter_round(&mut x, 15, 3, 7, 11);

            // Row round
            quarter_round(&mut x, 0, 1, 2, 3);
            quarter_round(&mut x, 5, 6, 7, 4);
            quarter_round(&mut x, 10, 11, 8, 9);
            quarter_round(&mut x, 15, 12, 13, 14);
        }

        for (word, input) in x.iter_mut().zip(self.state.iter()) {
            *word = word.wrapping_add(*input);
        }

        u32_slice_to_le(&x, block);
        x.zeroize();

        self.state[8] = self.state[8].wrapping_add(1);
        if self.state[8] == 0 {
            self.state[9] = self.state[9].wrapping_add(1);
        }
    }
}

/// Incremental Salsa20 encryption/decryption.
pub type Salsa20 = BlockKeystream<Salsa20Core, SALSA20_BLOCK_LEN>;

impl Salsa20 {
    /// Keyed context positioned at the start of the keystream.
    pub fn with_key_iv(key: &[u8], iv: &[u8]) -> Result<Self> {
        Ok(Self::new(Salsa20Core::new(key, iv)?))
    }

    /// Re-keys in place and rewinds to the start of the keystream.
    ///
    /// On error the context keeps its previous key and position.
    pub fn reset(&mut self, key: &[u8], iv: &[u8]) -> Result<()> {
        self.core_mut().rekey(key, iv)?;
        self.discard_block();

        Ok(())
    }

    /// Index of the next keystream block to be generated.
    pub fn block_counter(&self) -> u64 {
        self.core().counter()
    }
}

impl core::fmt::Debug for Salsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Salsa20 {{ [protected] }}")
    }
}
