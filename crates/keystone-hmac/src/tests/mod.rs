// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod properties;

use crate::{DigestAlgorithm, Hmac};

pub(crate) fn mac_of(algorithm: DigestAlgorithm, key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hmac = Hmac::new(algorithm, key).expect("Failed to create HMAC");
    hmac.update(data).expect("Failed to update HMAC");

    let mut out = vec![0u8; algorithm.output_size()];
    let written = hmac.finish(&mut out).expect("Failed to finish HMAC");
    assert_eq!(written, algorithm.output_size());

    out
}
