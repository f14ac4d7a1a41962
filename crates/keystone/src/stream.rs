// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Helpers that feed a [`Read`] source into a context chunk by chunk.

use std::io::{ErrorKind, Read};

use tracing::{trace, warn};
use zeroize::Zeroize;

use keystone_core::CryptoError;
use keystone_digest::{Digest, DigestAlgorithm};
use keystone_hmac::Hmac;

use crate::error::StreamError;

/// Bytes requested from the reader per `read` call.
pub const READ_CHUNK_LEN: usize = 8192;

/// Reads `reader` to its end, handing every chunk to `sink`.
///
/// Interrupted reads are retried. The chunk buffer is wiped before returning.
fn pump<R, F>(reader: &mut R, mut sink: F) -> Result<u64, StreamError>
where
    R: Read + ?Sized,
    F: FnMut(&[u8]) -> Result<(), CryptoError>,
{
    let mut chunk = [0u8; READ_CHUNK_LEN];
    let mut total = 0u64;

    let result = loop {
        match reader.read(&mut chunk) {
            Ok(0) => break Ok(total),
            Ok(n) => {
                if let Err(e) = sink(&chunk[..n]) {
                    break Err(StreamError::from(e));
                }
                total += n as u64;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!(error = %e, consumed = total, "reader failed");
                break Err(StreamError::from(e));
            }
        }
    };

    chunk.zeroize();

    result
}

/// Digest of everything `reader` yields, written to the front of `out`.
///
/// Returns the number of digest bytes written.
pub fn digest_reader<R: Read + ?Sized>(
    algorithm: DigestAlgorithm,
    reader: &mut R,
    out: &mut [u8],
) -> Result<usize, StreamError> {
    let mut ctx = Digest::new(algorithm);
    let consumed = pump(reader, |chunk| {
        ctx.update(chunk);
        Ok(())
    })?;

    trace!(%algorithm, consumed, "digest_reader reached end of input");

    Ok(ctx.finish(out)?)
}

/// HMAC under `key` of everything `reader` yields, written to the front of
/// `out`.
pub fn hmac_reader<R: Read + ?Sized>(
    algorithm: DigestAlgorithm,
    key: &[u8],
    reader: &mut R,
    out: &mut [u8],
) -> Result<usize, StreamError> {
    let mut ctx = Hmac::new(algorithm, key)?;
    let consumed = pump(reader, |chunk| ctx.update(chunk))?;

    trace!(%algorithm, consumed, "hmac_reader reached end of input");

    Ok(ctx.finish(out)?)
}
