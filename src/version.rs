// Copyright (C) Microsoft Corporation. All rights reserved.

use std::ffi::c_int;
use std::ffi::CStr;
use std::sync::OnceLock;

use super::*;

impl LibraryVersion {
    /// Version of the Botan library this process is linked against.
    #[allow(unsafe_code)]
    pub fn current() -> Self {
        static CURRENT: OnceLock<LibraryVersion> = OnceLock::new();

        *CURRENT.get_or_init(|| {
            // SAFETY: the version getters take no arguments and have no
            // preconditions.
            let version = unsafe {
                LibraryVersion::new(
                    ffi::botan_version_major(),
                    ffi::botan_version_minor(),
                    ffi::botan_version_patch(),
                )
            };
            let build = build_version();
            tracing::debug!(%version, build, "linked botan version");
            if build != "unknown" && !build.starts_with(&format!("{}.{}", version.major, version.minor)) {
                tracing::warn!(%version, build, "linked botan differs from the build-time version");
            }
            version
        })
    }
}

/// Botan version reported by pkg-config at build time, or `"unknown"` when
/// the library location was given through `BOTAN_LIB_DIR`.
pub fn build_version() -> &'static str {
    env!("BOTAN_SAFE_BUILD_VERSION")
}

/// Free-form version string of the linked library.
#[allow(unsafe_code)]
pub fn version_string() -> String {
    // SAFETY: Botan returns a pointer to a static NUL-terminated string.
    unsafe {
        let text = ffi::botan_version_string();
        if text.is_null() {
            return String::new();
        }
        CStr::from_ptr(text).to_string_lossy().into_owned()
    }
}

/// Version of the C interface, e.g. `20191214` for Botan 3.x.
#[allow(unsafe_code)]
pub fn ffi_api_version() -> u32 {
    // SAFETY: no preconditions.
    unsafe { ffi::botan_ffi_api_version() }
}

/// Botan's description of a status code.
#[allow(unsafe_code)]
pub fn error_description(code: c_int) -> String {
    // SAFETY: Botan returns a pointer to a static NUL-terminated string.
    unsafe {
        let text = ffi::botan_error_description(code);
        if text.is_null() {
            return status_name(code).to_owned();
        }
        CStr::from_ptr(text).to_string_lossy().into_owned()
    }
}
