// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 compression per RFC 3174 Section 6.1

use zeroize::Zeroize;

use keystone_core::{u32_slice_from_be, u32_slice_to_be};

use crate::counter::ByteOrder;
use crate::engine::{BlockCompression, DigestEngine};

/// SHA-1 block length in bytes
pub const SHA1_BLOCK_LEN: usize = 64;

/// SHA-1 digest length in bytes
pub const SHA1_OUTPUT_LEN: usize = 20;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// SHA-1 chaining state.
#[derive(Clone, Zeroize)]
pub struct Sha1Core {
    state: [u32; 5],
}

impl Default for Sha1Core {
    fn default() -> Self {
        Self { state: H0 }
    }
}

impl BlockCompression<SHA1_BLOCK_LEN> for Sha1Core {
    type Counter = u32;

    const LENGTH_ORDER: ByteOrder = ByteOrder::Big;

    fn reset(&mut self) {
        self.state = H0;
    }

    fn compress(&mut self, block: &[u8; SHA1_BLOCK_LEN]) {
        let mut w = [0u32; 80];
        u32_slice_from_be(&mut w[..16], block);

        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.state;

        for (t, wt) in w.iter().enumerate() {
            let (f, k) = match t / 20 {
                0 => (d ^ (b & (c ^ d)), 0x5a827999),
                1 => (b ^ c ^ d, 0x6ed9eba1),
                2 => ((b & c) | (d & (b | c)), 0x8f1bbcdc),
                _ => (b ^ c ^ d, 0xca62c1d6),
            };

            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*wt);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);
        self.state[4] = self.state[4].wrapping_add(e);

        w.zeroize();
    }

    fn output_len(&self) -> usize {
        SHA1_OUTPUT_LEN
    }

    fn write_digest(&self, out: &mut [u8]) {
        u32_slice_to_be(&self.state, out);
    }
}

/// Incremental SHA-1.
pub type Sha1 = DigestEngine<Sha1Core, SHA1_BLOCK_LEN>;
