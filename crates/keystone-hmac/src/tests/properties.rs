// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use keystone_digest::Digest;

use super::mac_of;
use crate::{DigestAlgorithm, Hmac};

fn algorithm_strategy() -> impl Strategy<Value = DigestAlgorithm> {
    prop::sample::select(DigestAlgorithm::ALL.to_vec())
}

fn digest_of(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    let mut digest = Digest::new(algorithm);
    digest.update(data);

    let mut out = vec![0u8; algorithm.output_size()];
    digest.finish(&mut out).expect("Failed to finish digest");
    out
}

proptest! {
    #[test]
    fn prop_long_key_equals_its_digest(
        algorithm in algorithm_strategy(),
        extra in 1usize..200,
        seed in any::<u8>(),
        data in prop::collection::vec(any::<u8>(), 0..200),
    ) {
        let key: Vec<u8> = (0..algorithm.block_size() + extra)
            .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
            .collect();
        let folded = digest_of(algorithm, &key);

        prop_assert_eq!(mac_of(algorithm, &key, &data), mac_of(algorithm, &folded, &data));
    }

    #[test]
    fn prop_chunking_is_invisible(
        algorithm in algorithm_strategy(),
        key in prop::collection::vec(any::<u8>(), 0..300),
        data in prop::collection::vec(any::<u8>(), 0..400),
        cut in any::<usize>(),
    ) {
        let cut = cut % (data.len() + 1);

        let mut hmac = Hmac::new(algorithm, &key).expect("Failed to create HMAC");
        hmac.update(&data[..cut]).expect("Failed to update HMAC");
        hmac.update(&data[cut..]).expect("Failed to update HMAC");

        let mut out = vec![0u8; algorithm.output_size()];
        hmac.finish(&mut out).expect("Failed to finish HMAC");

        prop_assert_eq!(out, mac_of(algorithm, &key, &data));
    }
}
