// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-224 / SHA-256 per RFC 6234 Section 6.2
//!
//! Both variants share one state layout and compression function; they differ
//! only in H(0) and in how many state bytes `finish` emits.

use zeroize::Zeroize;

use keystone_core::{u32_slice_from_be, u32_slice_to_be};

use crate::counter::ByteOrder;
use crate::engine::{BlockCompression, DigestEngine};

/// SHA-224/256 block length in bytes
pub const SHA256_BLOCK_LEN: usize = 64;

/// SHA-224 digest length in bytes
pub const SHA224_OUTPUT_LEN: usize = 28;

/// SHA-256 digest length in bytes
pub const SHA256_OUTPUT_LEN: usize = 32;

/// SHA-256 constants K per RFC 6234 Section 5.1
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// SHA-256 H(0) per RFC 6234 Section 6.2.1
const H0_SHA256: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-224 H(0) per RFC 6234 Section 6.1
const H0_SHA224: [u32; 8] = [
    0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939, 0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
];

/// Which member of the 32-bit SHA-2 family a core computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Variant {
    /// 28-byte output
    Sha224,
    /// 32-byte output
    Sha256,
}

impl Sha256Variant {
    fn initial_state(self) -> [u32; 8] {
        match self {
            Sha256Variant::Sha224 => H0_SHA224,
            Sha256Variant::Sha256 => H0_SHA256,
        }
    }

    fn output_len(self) -> usize {
        match self {
            Sha256Variant::Sha224 => SHA224_OUTPUT_LEN,
            Sha256Variant::Sha256 => SHA256_OUTPUT_LEN,
        }
    }
}

#[inline(always)]
const fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
const fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
const fn bsig0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
const fn bsig1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
const fn ssig0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
const fn ssig1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// SHA-224/256 chaining state.
#[derive(Clone, Zeroize)]
pub struct Sha256Core {
    h: [u32; 8],
    #[zeroize(skip)]
    variant: Sha256Variant,
}

impl Sha256Core {
    /// Creates a core holding the H(0) of `variant`.
    pub fn new(variant: Sha256Variant) -> Self {
        Self {
            h: variant.initial_state(),
            variant,
        }
    }

    /// Variant selected at construction.
    pub fn variant(&self) -> Sha256Variant {
        self.variant
    }
}

impl BlockCompression<SHA256_BLOCK_LEN> for Sha256Core {
    type Counter = u32;

    const LENGTH_ORDER: ByteOrder = ByteOrder::Big;

    fn reset(&mut self) {
        self.h = self.variant.initial_state();
    }

    fn compress(&mut self, block: &[u8; SHA256_BLOCK_LEN]) {
        // Message schedule per RFC 6234 Section 6.2.2 step 1
        let mut w = [0u32; 64];
        u32_slice_from_be(&mut w[..16], block);

        for t in 16..64 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.h;

        for (k, wt) in K256.iter().zip(w.iter()) {
            let t1 = h
                .wrapping_add(bsig1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(*k)
                .wrapping_add(*wt);
            let t2 = bsig0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (word, value) in self.h.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *word = word.wrapping_add(value);
        }

        w.zeroize();
    }

    fn output_len(&self) -> usize {
        self.variant.output_len()
    }

    fn write_digest(&self, out: &mut [u8]) {
        u32_slice_to_be(&self.h, out);
    }
}

/// Incremental SHA-224 or SHA-256, selected at construction.
pub type Sha256Engine = DigestEngine<Sha256Core, SHA256_BLOCK_LEN>;

impl Sha256Engine {
    /// SHA-224 context.
    pub fn sha224() -> Self {
        Self::new(Sha256Core::new(Sha256Variant::Sha224))
    }

    /// SHA-256 context.
    pub fn sha256() -> Self {
        Self::new(Sha256Core::new(Sha256Variant::Sha256))
    }
}
