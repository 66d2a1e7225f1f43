// Copyright (C) Microsoft Corporation. All rights reserved.

//! Key derivation.
//!
//! - [`kdf`]: derivation from a high-entropy secret (`"KDF2(SHA-1)"`,
//!   `"HKDF(SHA-256)"`, ...)
//! - [`pbkdf`]: password hashing with a fixed iteration count
//! - [`pbkdf_timed`]: password hashing that picks the iteration count to fill
//!   a time budget and reports it, so the result can be reproduced with
//!   [`pbkdf`]

use std::time::Duration;

use super::*;

/// Output of [`pbkdf_timed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PbkdfTimed {
    /// Iteration count the library settled on.
    pub iterations: usize,
    pub key: Vec<u8>,
}

fn ensure_key_length(key_length: usize) -> Result<(), BotanError> {
    if key_length == 0 {
        Err(BotanError::malformed("requested key length is zero"))?;
    }
    Ok(())
}

/// Derives `key_length` bytes from `secret`, `salt` and `label`.
#[allow(unsafe_code)]
pub fn kdf(
    algo: &str,
    secret: &[u8],
    key_length: usize,
    salt: &[u8],
    label: &[u8],
) -> Result<Vec<u8>, BotanError> {
    let algo = c_name("KDF algorithm", algo)?;
    ensure_key_length(key_length)?;

    let mut key = vec![0u8; key_length];
    call("botan_kdf", || {
        // SAFETY: every pointer/length pair describes a valid slice.
        unsafe {
            ffi::botan_kdf(
                algo.as_ptr(),
                key.as_mut_ptr(),
                key.len(),
                secret.as_ptr(),
                secret.len(),
                salt.as_ptr(),
                salt.len(),
                label.as_ptr(),
                label.len(),
            )
        }
    })?;
    Ok(key)
}

/// Derives `key_length` bytes from `password` with `iterations` rounds.
#[allow(unsafe_code)]
pub fn pbkdf(
    algo: &str,
    password: &str,
    key_length: usize,
    iterations: usize,
    salt: &[u8],
) -> Result<Vec<u8>, BotanError> {
    let algo = c_name("PBKDF algorithm", algo)?;
    let password = c_string("password", password)?;
    ensure_key_length(key_length)?;
    if iterations == 0 {
        Err(BotanError::malformed("iteration count is zero"))?;
    }

    let mut key = vec![0u8; key_length];
    call("botan_pbkdf", || {
        // SAFETY: every pointer/length pair describes a valid slice and the
        // strings are NUL-terminated.
        unsafe {
            ffi::botan_pbkdf(
                algo.as_ptr(),
                key.as_mut_ptr(),
                key.len(),
                password.as_ptr(),
                salt.as_ptr(),
                salt.len(),
                iterations,
            )
        }
    })?;
    Ok(key)
}

/// Derives `key_length` bytes from `password`, running for about `duration`.
#[allow(unsafe_code)]
pub fn pbkdf_timed(
    algo: &str,
    password: &str,
    key_length: usize,
    duration: Duration,
    salt: &[u8],
) -> Result<PbkdfTimed, BotanError> {
    let algo = c_name("PBKDF algorithm", algo)?;
    let password = c_string("password", password)?;
    ensure_key_length(key_length)?;

    let milliseconds = usize::try_from(duration.as_millis())
        .map_err(|_| BotanError::malformed("time budget is too large"))?;
    let mut key = vec![0u8; key_length];
    let mut iterations = 0usize;
    call("botan_pbkdf_timed", || {
        // SAFETY: every pointer/length pair describes a valid slice, the
        // strings are NUL-terminated and `iterations` is a valid out-pointer.
        unsafe {
            ffi::botan_pbkdf_timed(
                algo.as_ptr(),
                key.as_mut_ptr(),
                key.len(),
                password.as_ptr(),
                salt.as_ptr(),
                salt.len(),
                milliseconds,
                &mut iterations,
            )
        }
    })?;

    tracing::debug!(iterations, milliseconds, "timed pbkdf finished");
    Ok(PbkdfTimed { iterations, key })
}
