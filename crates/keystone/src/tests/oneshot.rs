// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keystone_core::hex_to_bytes;

use crate::oneshot;
use crate::{
    Cipher, CipherParams, CryptoError, Digest, DigestAlgorithm, Hmac, KdfParams, Pbkdf2Params,
};

#[test]
fn test_digest_matches_handle() {
    for algorithm in DigestAlgorithm::ALL {
        let mut expected = [0u8; 64];
        let mut ctx = Digest::new(algorithm);
        ctx.update(b"The quick brown fox jumps over the lazy dog");
        ctx.finish(&mut expected).expect("Failed to finish digest");

        let mut out = [0u8; 64];
        let written = oneshot::digest(
            algorithm,
            b"The quick brown fox jumps over the lazy dog",
            &mut out,
        )
        .expect("Failed to digest");

        assert_eq!(written, algorithm.output_size());
        assert_eq!(out, expected, "{}", algorithm);
    }
}

#[test]
fn test_digest_known_answer() {
    let mut out = [0u8; 16];
    oneshot::digest(DigestAlgorithm::Md5, b"", &mut out).expect("Failed to digest");

    assert_eq!(out.to_vec(), hex_to_bytes("d41d8cd98f00b204e9800998ecf8427e"));
}

#[test]
fn test_digest_short_output() {
    let mut out = [0u8; 19];
    assert_eq!(
        oneshot::digest(DigestAlgorithm::Sha1, b"abc", &mut out),
        Err(CryptoError::BufferTooSmall)
    );
}

#[test]
fn test_hmac_matches_handle() {
    let mut out = [0u8; 32];
    let written = oneshot::hmac(
        DigestAlgorithm::Sha256,
        b"key",
        b"The quick brown fox jumps over the lazy dog",
        &mut out,
    )
    .expect("Failed to compute HMAC");

    assert_eq!(written, 32);
    assert_eq!(
        out.to_vec(),
        hex_to_bytes("f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8")
    );

    let mut ctx = Hmac::new(DigestAlgorithm::Sha256, b"key").expect("Failed to create HMAC");
    ctx.update(b"The quick brown fox jumps over the lazy dog")
        .expect("Failed to update HMAC");
    let mut expected = [0u8; 32];
    ctx.finish(&mut expected).expect("Failed to finish HMAC");

    assert_eq!(out, expected);
}

#[test]
fn test_cipher_round_trip() {
    let key = [0x42u8; 32];
    let iv = [0x24u8; 8];
    let params = CipherParams::Salsa20 { key: &key, iv: &iv };

    let plaintext = b"attack at dawn, bring snacks";
    let mut ciphertext = [0u8; 28];
    assert_eq!(oneshot::cipher(params, plaintext, &mut ciphertext), Ok(28));
    assert_ne!(&ciphertext, plaintext);

    let mut recovered = [0u8; 28];
    assert_eq!(oneshot::cipher(params, &ciphertext, &mut recovered), Ok(28));
    assert_eq!(&recovered, plaintext);
}

#[test]
fn test_cipher_matches_handle() {
    let params = CipherParams::Rc4 { key: b"Key" };

    let mut out = [0u8; 9];
    oneshot::cipher(params, b"Plaintext", &mut out).expect("Failed to encrypt");

    let mut ctx = Cipher::new(params).expect("Failed to create cipher");
    let mut expected = [0u8; 9];
    ctx.update(b"Plaintext", &mut expected)
        .expect("Failed to encrypt");

    assert_eq!(out, expected);
    assert_eq!(out.to_vec(), hex_to_bytes("bbf316e8d940af0ad3"));
}

#[test]
fn test_cipher_rejects_bad_key() {
    let params = CipherParams::Salsa20 {
        key: &[0u8; 24],
        iv: &[0u8; 8],
    };

    let mut out = [0u8; 4];
    assert_eq!(
        oneshot::cipher(params, b"data", &mut out),
        Err(CryptoError::InvalidKeySize)
    );
}

#[test]
fn test_kdf_known_answer() {
    let params = KdfParams::Pbkdf2(Pbkdf2Params {
        prf: DigestAlgorithm::Sha1,
        password: b"password",
        salt: b"salt",
        iterations: 1,
    });

    let mut out = [0u8; 20];
    assert_eq!(oneshot::kdf(params, &mut out), Ok(20));
    assert_eq!(
        out.to_vec(),
        hex_to_bytes("0c60c80f961f0e71f3a9b524af6012062fe037a6")
    );
}

#[test]
fn test_kdf_rejects_zero_iterations() {
    let params = KdfParams::Pbkdf2(Pbkdf2Params {
        prf: DigestAlgorithm::Sha256,
        password: b"password",
        salt: b"salt",
        iterations: 0,
    });

    let mut out = [0u8; 32];
    assert_eq!(
        oneshot::kdf(params, &mut out),
        Err(CryptoError::InvalidArgument)
    );
}
