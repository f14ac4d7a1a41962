// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keystone_core::CryptoError;

use super::derive;
use crate::{DigestAlgorithm, Pbkdf2, Pbkdf2Params};

fn params<'a>(password: &'a [u8], salt: &'a [u8], iterations: u32) -> Pbkdf2Params<'a> {
    Pbkdf2Params {
        prf: DigestAlgorithm::Sha1,
        password,
        salt,
        iterations,
    }
}

#[test]
fn test_zero_iterations_rejected() {
    let result = Pbkdf2::new(params(b"password", b"salt", 0));
    assert!(matches!(result, Err(CryptoError::InvalidArgument)));

    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 1)).expect("Failed to create PBKDF2");
    assert_eq!(
        kdf.reset(params(b"password", b"salt", 0)),
        Err(CryptoError::InvalidArgument)
    );
}

#[test]
fn test_reset_with_other_prf_rejected() {
    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 1)).expect("Failed to create PBKDF2");

    let other = Pbkdf2Params {
        prf: DigestAlgorithm::Sha256,
        ..params(b"password", b"salt", 1)
    };
    assert_eq!(kdf.reset(other), Err(CryptoError::InvalidAlgorithm));
    assert_eq!(kdf.prf(), DigestAlgorithm::Sha1);
}

#[test]
fn test_accessors() {
    let kdf = Pbkdf2::new(Pbkdf2Params {
        prf: DigestAlgorithm::Sha512,
        password: b"pw",
        salt: b"salt",
        iterations: 7,
    })
    .expect("Failed to create PBKDF2");

    assert_eq!(kdf.prf(), DigestAlgorithm::Sha512);
    assert_eq!(kdf.block_size(), 64);
    assert_eq!(kdf.iterations(), 7);
    assert_eq!(kdf.block_counter(), 0);
}

#[test]
fn test_empty_request_derives_nothing() {
    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 1)).expect("Failed to create PBKDF2");

    assert_eq!(kdf.update(&mut []), Ok(0));
    assert_eq!(kdf.block_counter(), 0);
}

#[test]
fn test_counter_tracks_blocks() {
    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 1)).expect("Failed to create PBKDF2");

    let mut out = [0u8; 20];
    kdf.update(&mut out).expect("Failed to derive");
    assert_eq!(kdf.block_counter(), 1);

    kdf.update(&mut out[..1]).expect("Failed to derive");
    assert_eq!(kdf.block_counter(), 2);
}

#[test]
fn test_reset_rewinds_output() {
    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 2)).expect("Failed to create PBKDF2");

    let mut first = [0u8; 50];
    kdf.update(&mut first).expect("Failed to derive");

    kdf.reset(params(b"password", b"salt", 2))
        .expect("Failed to reset PBKDF2");

    let mut second = [0u8; 50];
    kdf.update(&mut second).expect("Failed to derive");

    assert_eq!(first, second);
    assert_eq!(first.to_vec(), derive(DigestAlgorithm::Sha1, b"password", b"salt", 2, 50));
}

#[test]
fn test_reset_to_shorter_inputs_uses_new_lengths() {
    let mut kdf = Pbkdf2::new(params(
        b"a considerably longer password than the next one",
        b"a considerably longer salt than the next one",
        1,
    ))
    .expect("Failed to create PBKDF2");
    let (password_cap, salt_cap) = kdf.buffer_capacities();

    kdf.reset(params(b"password", b"salt", 1))
        .expect("Failed to reset PBKDF2");

    let mut out = [0u8; 20];
    kdf.update(&mut out).expect("Failed to derive");
    assert_eq!(out.to_vec(), derive(DigestAlgorithm::Sha1, b"password", b"salt", 1, 20));

    // Buffers never shrink
    let (new_password_cap, new_salt_cap) = kdf.buffer_capacities();
    assert!(new_password_cap >= password_cap);
    assert!(new_salt_cap >= salt_cap);
}

#[test]
fn test_reset_to_longer_inputs_grows() {
    let mut kdf = Pbkdf2::new(params(b"pw", b"s", 1)).expect("Failed to create PBKDF2");

    kdf.reset(params(b"passwordPASSWORDpassword", b"saltSALTsaltSALTsaltSALTsaltSALTsalt", 1))
        .expect("Failed to reset PBKDF2");

    let mut out = [0u8; 25];
    kdf.update(&mut out).expect("Failed to derive");
    assert_eq!(
        out.to_vec(),
        derive(
            DigestAlgorithm::Sha1,
            b"passwordPASSWORDpassword",
            b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
            1,
            25
        )
    );
}

#[test]
fn test_counter_exhaustion_saturates() {
    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 1)).expect("Failed to create PBKDF2");
    kdf.set_block_counter(u32::MAX - 1);

    // Block 2^32 - 1 is the last one available
    let mut out = [0u8; 20];
    assert_eq!(kdf.update(&mut out), Ok(20));
    assert_eq!(kdf.block_counter(), u32::MAX);

    assert_eq!(kdf.update(&mut out[..1]), Err(CryptoError::SourceExhausted));
    assert_eq!(kdf.block_counter(), u32::MAX);
    assert_eq!(kdf.update(&mut out[..1]), Err(CryptoError::SourceExhausted));
}

#[test]
fn test_exhaustion_mid_request_reports_partial_count() {
    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 1)).expect("Failed to create PBKDF2");
    kdf.set_block_counter(u32::MAX - 1);

    // Only the last available block fits; the short count is returned
    let mut out = [0u8; 30];
    assert_eq!(kdf.update(&mut out), Ok(20));

    let mut expected = Pbkdf2::new(params(b"password", b"salt", 1))
        .expect("Failed to create PBKDF2");
    expected.set_block_counter(u32::MAX - 1);
    let mut head = [0u8; 20];
    expected.update(&mut head).expect("Failed to derive");

    assert_eq!(out[..20], head);
    assert_eq!(out[20..], [0u8; 10]);

    // Nothing left: the next request fails outright
    assert_eq!(kdf.update(&mut out), Err(CryptoError::SourceExhausted));
}

#[test]
fn test_failed_allocation_keeps_previous_inputs() {
    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 2)).expect("Failed to create PBKDF2");

    let mut head = [0u8; 10];
    kdf.update(&mut head).expect("Failed to derive");

    assert_eq!(
        kdf.reset_with_reservation(params(b"other password", b"other salt", 2), usize::MAX),
        Err(CryptoError::OutOfMemory)
    );

    // Derivation continues from the old password, salt and position
    let mut tail = [0u8; 30];
    assert_eq!(kdf.update(&mut tail), Ok(30));

    let expected = derive(DigestAlgorithm::Sha1, b"password", b"salt", 2, 40);
    assert_eq!(head[..], expected[..10]);
    assert_eq!(tail[..], expected[10..]);
}

#[test]
fn test_grown_buffers_hold_new_inputs() {
    let mut kdf = Pbkdf2::new(params(b"", b"", 1)).expect("Failed to create PBKDF2");
    assert_eq!(kdf.buffer_capacities(), (0, 0));

    kdf.reset(params(b"password", b"salt", 1))
        .expect("Failed to reset PBKDF2");
    let (password_cap, salt_cap) = kdf.buffer_capacities();
    assert!(password_cap >= 8);
    assert!(salt_cap >= 4);

    let mut out = [0u8; 20];
    kdf.update(&mut out).expect("Failed to derive");
    assert_eq!(out.to_vec(), derive(DigestAlgorithm::Sha1, b"password", b"salt", 1, 20));
}

#[test]
fn test_reset_clears_exhaustion() {
    let mut kdf = Pbkdf2::new(params(b"password", b"salt", 1)).expect("Failed to create PBKDF2");
    kdf.set_block_counter(u32::MAX);

    let mut out = [0u8; 20];
    assert_eq!(kdf.update(&mut out), Err(CryptoError::SourceExhausted));

    kdf.reset(params(b"password", b"salt", 1))
        .expect("Failed to reset PBKDF2");
    assert_eq!(kdf.update(&mut out), Ok(20));
    assert_eq!(out.to_vec(), derive(DigestAlgorithm::Sha1, b"password", b"salt", 1, 20));
}

#[test]
fn test_debug_hides_password() {
    let kdf = Pbkdf2::new(params(b"hunter2", b"salt", 1)).expect("Failed to create PBKDF2");
    let rendered = format!("{:?} {:?}", kdf, params(b"hunter2", b"salt", 1));

    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("[protected]"));
    assert!(rendered.contains("password_len: 7"));
}
