// Copyright (C) Microsoft Corporation. All rights reserved.

//! Safe Rust bindings for the Botan cryptographic library.
//!
//! The crate wraps Botan's C interface (`botan/ffi.h`) and exposes hashes,
//! MACs, key derivation, random number generation, asymmetric keys,
//! signing/verification and X.509 certificate parsing as owned Rust objects.
//!
//! Everything is assembled from three protocol pieces:
//!
//! - [`NativeHandle`]: owns one opaque native object and destroys it exactly once
//! - [`call_with_buffer`] / [`call_with_string`]: the probe/grow/retry protocol
//!   for outputs whose size is only known to the library
//! - [`StreamingOperation`]: the create/update/finish lifecycle used by
//!   signing and verification
//!
//! # Linking
//!
//! The build script looks for Botan through `pkg-config` (`botan-3`, then
//! `botan-2`) or through the `BOTAN_LIB_DIR`/`BOTAN_LIB_NAME` environment
//! variables. When no library is found only the protocol core is compiled and
//! the domain objects are absent.

use std::ffi::c_int;

use thiserror::Error;

mod call;
mod defaults;
mod handle;
mod status;
mod stream;
mod utils;

pub use call::*;
pub use defaults::*;
pub use handle::*;
pub use status::*;
pub use stream::*;
pub use utils::*;

cfg_if::cfg_if! {
    if #[cfg(botan_linked)] {
        mod ffi;
        mod hash;
        mod kdf;
        mod mac;
        mod pk;
        mod rng;
        mod version;
        mod x509;

        pub use hash::*;
        pub use kdf::*;
        pub use mac::*;
        pub use pk::*;
        pub use rng::*;
        pub use version::*;
        pub use x509::*;
    }
}

/// Why a native creation call did not produce a live handle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationFailure {
    /// The creation call returned a negative status.
    #[error("status {0} ({name})", name = status_label(.0))]
    Status(c_int),
    /// The creation call reported success but left the handle null.
    #[error("null handle")]
    NullHandle,
}

/// Error type for every operation in this crate.
///
/// Boolean answers such as "signature does not verify" are never reported
/// through this type; see [`VerificationOutcome`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotanError {
    /// A native creation call failed; no object was constructed.
    #[error("{function} could not create a native object: {reason}")]
    CreationFailed {
        function: &'static str,
        reason: CreationFailure,
    },

    /// A native call returned a negative status that has no boolean meaning
    /// at its call site.
    #[error("{function} failed with status {code} ({name})", name = status_label(.code))]
    NativeCallFailed { function: &'static str, code: c_int },

    /// The library's reported output length contradicted its status.
    #[error(
        "{function} returned status {code} with reported length {reported} for a buffer of {capacity} bytes"
    )]
    ProtocolViolation {
        function: &'static str,
        code: c_int,
        capacity: usize,
        reported: usize,
    },

    /// The handle was already released or the operation already finished.
    #[error("{function} called on a released handle or finished operation")]
    InvalidHandleState { function: &'static str },

    /// Input rejected before any native call was made.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
}

fn status_label(code: &c_int) -> &'static str {
    status_name(*code)
}

impl BotanError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        BotanError::MalformedInput {
            reason: reason.into(),
        }
    }
}
