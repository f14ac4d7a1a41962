// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MD5 compression per RFC 1321 Section 3.4

use zeroize::Zeroize;

use keystone_core::{u32_slice_from_le, u32_slice_to_le};

use crate::counter::ByteOrder;
use crate::engine::{BlockCompression, DigestEngine};

/// MD5 block length in bytes
pub const MD5_BLOCK_LEN: usize = 64;

/// MD5 digest length in bytes
pub const MD5_OUTPUT_LEN: usize = 16;

/// Initial chaining value per RFC 1321 Section 3.3
const H0: [u32; 4] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476];

/// T[i] = floor(2^32 * abs(sin(i + 1)))
const T: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Per-round left rotations
const S: [u32; 64] = [
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, //
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, //
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, //
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

/// MD5 chaining state.
#[derive(Clone, Zeroize)]
pub struct Md5Core {
    state: [u32; 4],
}

impl Default for Md5Core {
    fn default() -> Self {
        Self { state: H0 }
    }
}

impl BlockCompression<MD5_BLOCK_LEN> for Md5Core {
    type Counter = u32;

    const LENGTH_ORDER: ByteOrder = ByteOrder::Little;

    fn reset(&mut self) {
        self.state = H0;
    }

    fn compress(&mut self, block: &[u8; MD5_BLOCK_LEN]) {
        let mut x = [0u32; 16];
        u32_slice_from_le(&mut x, block);

        let [mut a, mut b, mut c, mut d] = self.state;

        for i in 0..64 {
            let (f, g) = match i / 16 {
                0 => (d ^ (b & (c ^ d)), i),
                1 => (c ^ (d & (b ^ c)), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };

            let rotated = a
                .wrapping_add(f)
                .wrapping_add(T[i])
                .wrapping_add(x[g])
                .rotate_left(S[i]);

            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(rotated);
        }

        self.state[0] = self.state[0].wrapping_add(a);
        self.state[1] = self.state[1].wrapping_add(b);
        self.state[2] = self.state[2].wrapping_add(c);
        self.state[3] = self.state[3].wrapping_add(d);

        x.zeroize();
    }

    fn output_len(&self) -> usize {
        MD5_OUTPUT_LEN
    }

    fn write_digest(&self, out: &mut [u8]) {
        u32_slice_to_le(&self.state, out);
    }
}

/// Incremental MD5.
pub type Md5 = DigestEngine<Md5Core, MD5_BLOCK_LEN>;
