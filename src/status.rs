// Copyright (C) Microsoft Corporation. All rights reserved.

//! Native status codes and their classification.
//!
//! Botan reports every result through a C `int`. Non-negative values are
//! successes, negative values are failures, except at the few call sites where
//! a specific code carries a boolean answer. Those call sites select an
//! explicit [`BooleanCodes`] table instead of relying on a global rule.

use std::ffi::c_int;
use std::fmt;

use super::*;

pub const BOTAN_FFI_SUCCESS: c_int = 0;
pub const BOTAN_FFI_INVALID_VERIFIER: c_int = 1;
pub const BOTAN_FFI_ERROR_INVALID_INPUT: c_int = -1;
pub const BOTAN_FFI_ERROR_BAD_MAC: c_int = -2;
pub const BOTAN_FFI_ERROR_INSUFFICIENT_BUFFER_SPACE: c_int = -10;
pub const BOTAN_FFI_ERROR_STRING_CONVERSION_ERROR: c_int = -11;
pub const BOTAN_FFI_ERROR_EXCEPTION_THROWN: c_int = -20;
pub const BOTAN_FFI_ERROR_OUT_OF_MEMORY: c_int = -21;
pub const BOTAN_FFI_ERROR_SYSTEM_ERROR: c_int = -22;
pub const BOTAN_FFI_ERROR_INTERNAL_ERROR: c_int = -23;
pub const BOTAN_FFI_ERROR_BAD_FLAG: c_int = -30;
pub const BOTAN_FFI_ERROR_NULL_POINTER: c_int = -31;
pub const BOTAN_FFI_ERROR_BAD_PARAMETER: c_int = -32;
pub const BOTAN_FFI_ERROR_KEY_NOT_SET: c_int = -33;
pub const BOTAN_FFI_ERROR_INVALID_KEY_LENGTH: c_int = -34;
pub const BOTAN_FFI_ERROR_INVALID_OBJECT_STATE: c_int = -35;
pub const BOTAN_FFI_ERROR_NOT_IMPLEMENTED: c_int = -40;
pub const BOTAN_FFI_ERROR_INVALID_OBJECT: c_int = -50;
pub const BOTAN_FFI_ERROR_UNKNOWN_ERROR: c_int = -100;

/// Symbolic name of a Botan status code, or `"unrecognized status"`.
pub fn status_name(code: c_int) -> &'static str {
    match code {
        BOTAN_FFI_SUCCESS => "BOTAN_FFI_SUCCESS",
        BOTAN_FFI_INVALID_VERIFIER => "BOTAN_FFI_INVALID_VERIFIER",
        BOTAN_FFI_ERROR_INVALID_INPUT => "BOTAN_FFI_ERROR_INVALID_INPUT",
        BOTAN_FFI_ERROR_BAD_MAC => "BOTAN_FFI_ERROR_BAD_MAC",
        BOTAN_FFI_ERROR_INSUFFICIENT_BUFFER_SPACE => "BOTAN_FFI_ERROR_INSUFFICIENT_BUFFER_SPACE",
        BOTAN_FFI_ERROR_STRING_CONVERSION_ERROR => "BOTAN_FFI_ERROR_STRING_CONVERSION_ERROR",
        BOTAN_FFI_ERROR_EXCEPTION_THROWN => "BOTAN_FFI_ERROR_EXCEPTION_THROWN",
        BOTAN_FFI_ERROR_OUT_OF_MEMORY => "BOTAN_FFI_ERROR_OUT_OF_MEMORY",
        BOTAN_FFI_ERROR_SYSTEM_ERROR => "BOTAN_FFI_ERROR_SYSTEM_ERROR",
        BOTAN_FFI_ERROR_INTERNAL_ERROR => "BOTAN_FFI_ERROR_INTERNAL_ERROR",
        BOTAN_FFI_ERROR_BAD_FLAG => "BOTAN_FFI_ERROR_BAD_FLAG",
        BOTAN_FFI_ERROR_NULL_POINTER => "BOTAN_FFI_ERROR_NULL_POINTER",
        BOTAN_FFI_ERROR_BAD_PARAMETER => "BOTAN_FFI_ERROR_BAD_PARAMETER",
        BOTAN_FFI_ERROR_KEY_NOT_SET => "BOTAN_FFI_ERROR_KEY_NOT_SET",
        BOTAN_FFI_ERROR_INVALID_KEY_LENGTH => "BOTAN_FFI_ERROR_INVALID_KEY_LENGTH",
        BOTAN_FFI_ERROR_INVALID_OBJECT_STATE => "BOTAN_FFI_ERROR_INVALID_OBJECT_STATE",
        BOTAN_FFI_ERROR_NOT_IMPLEMENTED => "BOTAN_FFI_ERROR_NOT_IMPLEMENTED",
        BOTAN_FFI_ERROR_INVALID_OBJECT => "BOTAN_FFI_ERROR_INVALID_OBJECT",
        BOTAN_FFI_ERROR_UNKNOWN_ERROR => "BOTAN_FFI_ERROR_UNKNOWN_ERROR",
        _ => "unrecognized status",
    }
}

/// Success/failure split of a raw status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success(c_int),
    Failure(c_int),
}

/// Classifies a raw status code. Total over every `c_int`.
pub fn classify(code: c_int) -> Outcome {
    if code < 0 {
        Outcome::Failure(code)
    } else {
        Outcome::Success(code)
    }
}

/// Maps a fixed call's status to `Ok(status)` or `NativeCallFailed`.
pub(crate) fn check(function: &'static str, code: c_int) -> Result<c_int, BotanError> {
    match classify(code) {
        Outcome::Success(code) => Ok(code),
        Outcome::Failure(code) => {
            tracing::error!(function, code, status = status_name(code), "native call failed");
            Err(BotanError::NativeCallFailed { function, code })
        }
    }
}

/// A boolean answer returned by the library, distinct from a call failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Valid,
    Invalid,
}

impl VerificationOutcome {
    pub fn is_valid(self) -> bool {
        self == VerificationOutcome::Valid
    }
}

impl From<VerificationOutcome> for bool {
    fn from(outcome: VerificationOutcome) -> Self {
        outcome.is_valid()
    }
}

/// Version of the linked Botan library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LibraryVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl LibraryVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Botan 2.2.0 reported a bad signature from `botan_pk_op_verify_finish` as
/// `BOTAN_FFI_ERROR_INVALID_INPUT` instead of `BOTAN_FFI_INVALID_VERIFIER`.
const VERIFY_AS_INVALID_INPUT: LibraryVersion = LibraryVersion::new(2, 2, 0);

/// Per-call-site table of the two codes that carry a boolean answer.
///
/// Every code other than `valid` and `invalid` is a genuine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanCodes {
    pub valid: c_int,
    pub invalid: c_int,
}

impl BooleanCodes {
    /// `botan_privkey_check_key` / `botan_pubkey_check_key`.
    pub const CHECK_KEY: Self = Self::new(BOTAN_FFI_SUCCESS, BOTAN_FFI_ERROR_INVALID_INPUT);
    /// `botan_x509_cert_hostname_match`.
    pub const HOSTNAME_MATCH: Self = Self::new(BOTAN_FFI_SUCCESS, BOTAN_FFI_ERROR_INVALID_INPUT);
    /// `botan_constant_time_compare`.
    pub const CONSTANT_TIME_COMPARE: Self =
        Self::new(BOTAN_FFI_SUCCESS, BOTAN_FFI_ERROR_INVALID_INPUT);
    /// `botan_x509_cert_allowed_usage`.
    pub const ALLOWED_USAGE: Self = Self::new(BOTAN_FFI_SUCCESS, BOTAN_FFI_INVALID_VERIFIER);

    pub const fn new(valid: c_int, invalid: c_int) -> Self {
        Self { valid, invalid }
    }

    /// Table for `botan_pk_op_verify_finish` on the given library version.
    ///
    /// This is the only place in the crate that branches on the library version.
    pub fn verify_finish(version: LibraryVersion) -> Self {
        if version == VERIFY_AS_INVALID_INPUT {
            Self::new(BOTAN_FFI_SUCCESS, BOTAN_FFI_ERROR_INVALID_INPUT)
        } else {
            Self::new(BOTAN_FFI_SUCCESS, BOTAN_FFI_INVALID_VERIFIER)
        }
    }

    /// Interprets `code` against this table.
    pub fn interpret(
        &self,
        function: &'static str,
        code: c_int,
    ) -> Result<VerificationOutcome, BotanError> {
        if code == self.valid {
            Ok(VerificationOutcome::Valid)
        } else if code == self.invalid {
            Ok(VerificationOutcome::Invalid)
        } else {
            tracing::error!(function, code, status = status_name(code), "unexpected boolean status");
            Err(BotanError::NativeCallFailed { function, code })
        }
    }
}
