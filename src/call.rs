// Copyright (C) Microsoft Corporation. All rights reserved.

//! Native call protocol.
//!
//! Fixed calls return only a status. Variable-length calls write into a
//! caller buffer and exchange its size through an in/out length cell: when the
//! buffer is too small the library fails and reports the size it needs, and
//! the call is repeated with a buffer of exactly that size.

use std::ffi::c_int;

use super::*;

/// Runs a fixed-result native call.
///
/// Returns the non-negative status; any out-parameters written by `f` are
/// already in place.
pub fn call<F>(function: &'static str, f: F) -> Result<c_int, BotanError>
where
    F: FnOnce() -> c_int,
{
    check(function, f())
}

/// Runs a variable-length output call and returns exactly the reported bytes.
///
/// `f` receives the buffer and the length cell, which holds the buffer
/// capacity on entry. A failure that reports a length within the capacity,
/// or a success that reports a length beyond it, is a `ProtocolViolation`
/// and no buffer contents are returned. So is a reported length that cannot
/// be allocated; `guess` itself comes from the caller and is allocated as is.
pub fn call_with_buffer<F>(function: &'static str, guess: usize, mut f: F) -> Result<Vec<u8>, BotanError>
where
    F: FnMut(*mut u8, *mut usize) -> c_int,
{
    let mut capacity = guess;
    let mut buffer = vec![0u8; capacity];

    loop {
        let mut reported = capacity;
        let code = f(buffer.as_mut_ptr(), &mut reported);

        match classify(code) {
            Outcome::Success(_) if reported <= capacity => {
                buffer.truncate(reported);
                return Ok(buffer);
            }
            Outcome::Failure(_) if reported > capacity => {
                tracing::debug!(function, capacity, reported, "growing output buffer");
                if buffer.try_reserve_exact(reported - buffer.len()).is_err() {
                    tracing::error!(function, code, capacity, reported, "cannot allocate reported length");
                    return Err(BotanError::ProtocolViolation {
                        function,
                        code,
                        capacity,
                        reported,
                    });
                }
                buffer.resize(reported, 0);
                capacity = reported;
            }
            _ => {
                tracing::error!(
                    function,
                    code,
                    capacity,
                    reported,
                    "reported length is inconsistent with status"
                );
                return Err(BotanError::ProtocolViolation {
                    function,
                    code,
                    capacity,
                    reported,
                });
            }
        }
    }
}

/// Runs a variable-length call whose output is NUL-terminated text.
///
/// The reported bytes are cut at the first NUL and decoded lossily.
pub fn call_with_string<F>(function: &'static str, guess: usize, f: F) -> Result<String, BotanError>
where
    F: FnMut(*mut u8, *mut usize) -> c_int,
{
    let bytes = call_with_buffer(function, guess, f)?;
    Ok(text_until_nul(&bytes))
}

pub(crate) fn text_until_nul(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
