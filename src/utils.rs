// Copyright (C) Microsoft Corporation. All rights reserved.

use std::ffi::CString;

use chrono::DateTime;
use chrono::NaiveDateTime;
use chrono::Utc;

use super::*;

/// Lowercase hex encoding.
pub fn hex_encode(data: impl AsRef<[u8]>) -> String {
    hex::encode(data)
}

/// Decodes hex text, either case.
pub fn hex_decode(text: &str) -> Result<Vec<u8>, BotanError> {
    hex::decode(text).map_err(|err| BotanError::malformed(format!("invalid hex: {err}")))
}

/// Converts a string argument for a native call.
#[cfg_attr(not(botan_linked), allow(dead_code))]
pub(crate) fn c_string(what: &str, value: &str) -> Result<CString, BotanError> {
    CString::new(value).map_err(|_| BotanError::malformed(format!("{what} contains a NUL byte")))
}

/// Like [`c_string`] but also rejects an empty value.
#[cfg_attr(not(botan_linked), allow(dead_code))]
pub(crate) fn c_name(what: &str, value: &str) -> Result<CString, BotanError> {
    if value.is_empty() {
        Err(BotanError::malformed(format!("{what} is empty")))?;
    }
    c_string(what, value)
}

/// Parses the certificate time text produced by Botan.
///
/// Accepts `YYMMDDhhmmssZ` (UTCTime) and `YYYYMMDDhhmmssZ` (GeneralizedTime).
pub fn parse_x509_time(text: &str) -> Result<DateTime<Utc>, BotanError> {
    let format = match text.len() {
        13 => "%y%m%d%H%M%SZ",
        15 => "%Y%m%d%H%M%SZ",
        _ => Err(BotanError::malformed(format!(
            "unexpected certificate time format {text:?}"
        )))?,
    };

    NaiveDateTime::parse_from_str(text, format)
        .map(|time| time.and_utc())
        .map_err(|err| BotanError::malformed(format!("invalid certificate time {text:?}: {err}")))
}

/// Compares two byte strings in constant time.
///
/// Inputs of different lengths compare unequal without a native call.
#[cfg(botan_linked)]
#[allow(unsafe_code)]
pub fn constant_time_eq(x: &[u8], y: &[u8]) -> Result<bool, BotanError> {
    if x.len() != y.len() {
        return Ok(false);
    }

    // SAFETY: both slices are valid for `x.len()` bytes.
    let code = unsafe { ffi::botan_constant_time_compare(x.as_ptr(), y.as_ptr(), x.len()) };
    let outcome = BooleanCodes::CONSTANT_TIME_COMPARE.interpret("botan_constant_time_compare", code)?;
    Ok(outcome.is_valid())
}
