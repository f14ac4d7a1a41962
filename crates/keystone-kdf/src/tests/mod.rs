// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod algorithm;
mod pbkdf2;

use crate::{DigestAlgorithm, Pbkdf2, Pbkdf2Params};

pub(crate) fn derive(
    prf: DigestAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    len: usize,
) -> Vec<u8> {
    let mut kdf = Pbkdf2::new(Pbkdf2Params {
        prf,
        password,
        salt,
        iterations,
    })
    .expect("Failed to create PBKDF2");

    let mut out = vec![0u8; len];
    assert_eq!(kdf.update(&mut out), Ok(len));
    assert_eq!(kdf.finish(), Ok(0));

    out
}
