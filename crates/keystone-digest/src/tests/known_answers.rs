// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Known-answer vectors over the standard message suite
// ("", "a", "abc", "message digest", "a..z").
//
// References:
// [1] RFC 1321 Appendix A.5 (MD5 test suite)
// [2] RFC 3174 Section 7.3 (SHA-1 test driver)
// [3] FIPS 180-4 examples / NIST CAVP (SHA-224, SHA-256, SHA-384, SHA-512)

use keystone_core::hex_to_bytes;

use super::{MESSAGES, digest_of};
use crate::DigestAlgorithm;

fn check_suite(algorithm: DigestAlgorithm, expected: [&str; 5]) {
    for (msg, hex) in MESSAGES.iter().zip(expected) {
        let digest = digest_of(algorithm, msg);
        assert_eq!(
            digest,
            hex_to_bytes(hex),
            "{} mismatch for {:?}",
            algorithm,
            String::from_utf8_lossy(msg)
        );
    }
}

#[test]
fn test_md5_suite() {
    check_suite(
        DigestAlgorithm::Md5,
        [
            "d41d8cd98f00b204e9800998ecf8427e",
            "0cc175b9c0f1b6a831c399e269772661",
            "900150983cd24fb0d6963f7d28e17f72",
            "f96b697d7cb7938d525a2f31aaf161d0",
            "c3fcd3d76192e4007dfb496cca67e13b",
        ],
    );
}

#[test]
fn test_sha1_suite() {
    check_suite(
        DigestAlgorithm::Sha1,
        [
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            "86f7e437faa5a7fce15d1ddcb9eaeaea377667b8",
            "a9993e364706816aba3e25717850c26c9cd0d89d",
            "c12252ceda8be8994d5fa0290a47231c1d16aae3",
            "32d10c7b8cf96570ca04ce37f2a19d84240d3a89",
        ],
    );
}

#[test]
fn test_sha224_suite() {
    check_suite(
        DigestAlgorithm::Sha224,
        [
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f",
            "abd37534c7d9a2efb9465de931cd7055ffdb8879563ae98078d6d6d5",
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
            "2cb21c83ae2f004de7e81c3c7019cbcb65b71ab656b22d6d0c39b8eb",
            "45a5f72c39c5cff2522eb3429799e49e5f44b356ef926bcf390dccc2",
        ],
    );
}

#[test]
fn test_sha256_suite() {
    check_suite(
        DigestAlgorithm::Sha256,
        [
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            "f7846f55cf23e14eebeab5b4e1550cad5b509e3348fbc4efa3a1413d393cb650",
            "71c480df93d6ae2f1efad1447c66c9525e316218cf51fc8d9ed832f2daf18b73",
        ],
    );
}

#[test]
fn test_sha384_suite() {
    check_suite(
        DigestAlgorithm::Sha384,
        [
            "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b",
            "54a59b9f22b0b80880d8427e548b7c23abd873486e1f035dce9cd697e85175033caa88e6d57bc35efae0b5afd3145f31",
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
            "473ed35167ec1f5d8e550368a3db39be54639f828868e9454c239fc8b52e3c61dbd0d8b4de1390c256dcbb5d5fd99cd5",
            "feb67349df3db6f5924815d6c3dc133f091809213731fe5c7b5f4999e463479ff2877f5f2936fa63bb43784b12f3ebb4",
        ],
    );
}

#[test]
fn test_sha512_suite() {
    check_suite(
        DigestAlgorithm::Sha512,
        [
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
            "1f40fc92da241694750979ee6cf582f2d5d7d28e18335de05abc54d0560e0f5302860c652bf08d560252aa5e74210546f369fbbbce8c12cfc7957b2652fe9a75",
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            "107dbf389d9e9f71a3a95f6c055b9251bc5268c2be16d6c13492ea45b0199f3309e16455ab1e96118e8a905d5597b72038ddb372a89826046de66687bb420e7c",
            "4dbff86cc2ca1bae1e16468a05cb9881c97f1753bce3619034898faa1aabe429955a1bf8ec483d7421fe3c1646613a59ed5441fb0f321389f77f48a879c7b1f1",
        ],
    );
}

// Two-block messages: the padding spills into a second block.

#[test]
fn test_two_block_messages() {
    let msg448 = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    let msg896 = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
    let msg_digits = b"12345678901234567890123456789012345678901234567890123456789012345678901234567890";

    let cases: [(DigestAlgorithm, &[u8], &str); 6] = [
        (
            DigestAlgorithm::Md5,
            msg_digits,
            "57edf4a22be3c955ac49da2e2107b67a",
        ),
        (
            DigestAlgorithm::Sha1,
            msg448,
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        ),
        (
            DigestAlgorithm::Sha224,
            msg448,
            "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
        ),
        (
            DigestAlgorithm::Sha256,
            msg448,
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        ),
        (
            DigestAlgorithm::Sha384,
            msg896,
            "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712fcc7c71a557e2db966c3e9fa91746039",
        ),
        (
            DigestAlgorithm::Sha512,
            msg896,
            "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
        ),
    ];

    for (algorithm, msg, hex) in cases {
        assert_eq!(
            digest_of(algorithm, msg),
            hex_to_bytes(hex),
            "{} two-block mismatch",
            algorithm
        );
    }
}
