// Copyright (C) Microsoft Corporation. All rights reserved.

//! Public key cryptography.
//!
//! Private and public keys are distinct types, so passing a public key where
//! a private key is required is rejected at compile time. Signing and
//! verification are streaming operations that borrow their key for their
//! whole lifetime.

mod private_key;
mod public_key;
mod sign;
mod verify;

pub use private_key::*;
pub use public_key::*;
pub use sign::*;
pub use verify::*;

use super::*;

/// Padding to use for `algo` when the caller gave none.
fn resolve_padding(algo: &str, padding: Option<&str>) -> Result<std::ffi::CString, BotanError> {
    let padding = match padding {
        Some(padding) => padding,
        None => default_emsa(algo).ok_or_else(|| {
            BotanError::malformed(format!("no default padding for algorithm {algo}"))
        })?,
    };
    c_name("padding", padding)
}

#[cfg(test)]
mod tests;
