// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod known_answers;

use crate::{Digest, DigestAlgorithm};

/// Standard message suite shared by every known-answer table.
pub(crate) const MESSAGES: [&[u8]; 5] = [
    b"",
    b"a",
    b"abc",
    b"message digest",
    b"abcdefghijklmnopqrstuvwxyz",
];

/// One-shot digest through the dispatch handle.
pub(crate) fn digest_of(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    let mut digest = Digest::new(algorithm);
    digest.update(data);

    let mut out = vec![0u8; algorithm.output_size()];
    let written = digest.finish(&mut out).expect("Failed to finish digest");
    assert_eq!(written, algorithm.output_size());

    out
}
