// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keystone_core::CryptoError;

use crate::KdfAlgorithm;

#[test]
fn test_names_round_trip() {
    for alg in KdfAlgorithm::ALL {
        assert_eq!(alg.name().parse::<KdfAlgorithm>(), Ok(alg));
        assert_eq!(alg.to_string(), alg.name());
    }

    assert_eq!("PBKDF2".parse::<KdfAlgorithm>(), Ok(KdfAlgorithm::Pbkdf2));
    assert_eq!(
        "scrypt".parse::<KdfAlgorithm>(),
        Err(CryptoError::InvalidAlgorithm)
    );
}

#[test]
fn test_numeric_ids() {
    assert_eq!(KdfAlgorithm::try_from(0u8), Ok(KdfAlgorithm::Pbkdf2));
    assert_eq!(u8::from(KdfAlgorithm::Pbkdf2), 0);
    assert_eq!(KdfAlgorithm::try_from(1u8), Err(CryptoError::InvalidAlgorithm));
}
