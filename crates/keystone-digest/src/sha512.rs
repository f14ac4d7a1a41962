// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-384 / SHA-512 per RFC 6234 Section 6.4

use zeroize::Zeroize;

use keystone_core::{u64_slice_from_be, u64_slice_to_be};

use crate::counter::ByteOrder;
use crate::engine::{BlockCompression, DigestEngine};

/// SHA-384/512 block length in bytes
pub const SHA512_BLOCK_LEN: usize = 128;

/// SHA-384 digest length in bytes
pub const SHA384_OUTPUT_LEN: usize = 48;

/// SHA-512 digest length in bytes
pub const SHA512_OUTPUT_LEN: usize = 64;

/// SHA-512 constants K per RFC 6234 Section 5.2
const K512: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

/// SHA-512 H(0) per RFC 6234 Section 6.3
const H0_SHA512: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

/// SHA-384 H(0) per RFC 6234 Section 6.3
const H0_SHA384: [u64; 8] = [
    0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
    0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
];

/// Which member of the 64-bit SHA-2 family a core computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha512Variant {
    /// 48-byte output
    Sha384,
    /// 64-byte output
    Sha512,
}

impl Sha512Variant {
    fn initial_state(self) -> [u64; 8] {
        match self {
            Sha512Variant::Sha384 => H0_SHA384,
            Sha512Variant::Sha512 => H0_SHA512,
        }
    }

    fn output_len(self) -> usize {
        match self {
            Sha512Variant::Sha384 => SHA384_OUTPUT_LEN,
            Sha512Variant::Sha512 => SHA512_OUTPUT_LEN,
        }
    }
}

#[inline(always)]
const fn ch(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
const fn maj(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
const fn bsig0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
const fn bsig1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
const fn ssig0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
const fn ssig1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

/// SHA-384/512 chaining state.
#[derive(Clone, Zeroize)]
pub struct Sha512Core {
    h: [u64; 8],
    #[zeroize(skip)]
    variant: Sha512Variant,
}

impl Sha512Core {
    /// Creates a core holding the H(0) of `variant`.
    pub fn new(variant: Sha512Variant) -> Self {
        Self {
            h: variant.initial_state(),
            variant,
        }
    }

    /// Variant selected at construction.
    pub fn variant(&self) -> Sha512Variant {
        self.variant
    }
}

impl BlockCompression<SHA512_BLOCK_LEN> for Sha512Core {
    type Counter = u64;

    const LENGTH_ORDER: ByteOrder = ByteOrder::Big;

    fn reset(&mut self) {
        self.h = self.variant.initial_state();
    }

    fn compress(&mut self, block: &[u8; SHA512_BLOCK_LEN]) {
        let mut w = [0u64; 80];
        u64_slice_from_be(&mut w[..16], block);

        for t in 16..80 {
            w[t] = ssig1(w[t - 2])
                .wrapping_add(w[t - 7])
                .wrapping_add(ssig0(w[t - 15]))
                .wrapping_add(w[t - 16]);
        }

        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.h;

        for (k, wt) in K512.iter().zip(w.iter()) {
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
        u64_slice_to_be(&self.h, out);
    }
}

/// Incremental SHA-384 or SHA-512, selected at construction.
pub type Sha512Engine = DigestEngine<Sha512Core, SHA512_BLOCK_LEN>;

impl Sha512Engine {
    /// SHA-384 context.
    pub fn sha384() -> Self {
        Self::new(Sha512Core::new(Sha512Variant::Sha384))
    }

    /// SHA-512 context.
    pub fn sha512() -> Self {
        Self::new(Sha512Core::new(Sha512Variant::Sha512))
    }
}
