// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RC4 permutation-table stream cipher.

use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use keystone_core::{CryptoError, Result};

use crate::keystream::Keystream;

/// Shortest accepted RC4 key in bytes
pub const RC4_MIN_KEY_LEN: usize = 1;

/// Longest accepted RC4 key in bytes
pub const RC4_MAX_KEY_LEN: usize = 256;

/// RC4 state: a permutation of all byte values plus two cursors.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Rc4 {
    state: [u8; 256],
    x: u8,
    y: u8,
}

impl Rc4 {
    /// Runs the key schedule for `key` (1 to 256 bytes).
    pub fn new(key: &[u8]) -> Result<Self> {
        let mut rc4 = Self {
            state: [0u8; 256],
            x: 0,
            y: 0,
        };
        rc4.reset(key)?;

        Ok(rc4)
    }

    /// Re-keys in place.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKeySize`] if `key` is empty or longer than 256
    /// bytes. The previous keystream position is kept untouched.
    pub fn reset(&mut self, key: &[u8]) -> Result<()> {
        if !(RC4_MIN_KEY_LEN..=RC4_MAX_KEY_LEN).contains(&key.len()) {
            warn!(key_len = key.len(), "rejected RC4 key size");
            return Err(CryptoError::InvalidKeySize);
        }

        for (i, slot) in self.state.iter_mut().enumerate() {
            *slot = i as u8;
        }

        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(key[i % key.len()]).wrapping_add(self.state[i]);
            self.state.swap(i, j as usize);
        }

        self.x = 0;
        self.y = 0;

        Ok(())
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        self.x = self.x.wrapping_add(1);
        self.y = self.y.wrapping_add(self.state[self.x as usize]);
        self.state.swap(self.x as usize, self.y as usize);

        let idx = self.state[self.x as usize].wrapping_add(self.state[self.y as usize]);
        self.state[idx as usize]
    }
}

impl Keystream for Rc4 {
    fn apply_keystream(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.next_byte();
        }
    }
}

impl core::fmt::Debug for Rc4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Rc4 {{ [protected] }}")
    }
}
