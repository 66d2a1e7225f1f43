// Copyright (C) Microsoft Corporation. All rights reserved.

//! X.509 certificate parsing.

use std::ffi::c_int;
use std::ffi::c_uint;
use std::fmt;
use std::path::Path;

use bitflags::bitflags;
use chrono::DateTime;
use chrono::Utc;

use super::*;

const CERT_DESTRUCTOR: Destructor<ffi::botan_x509_cert_struct> =
    Destructor::new("botan_x509_cert_destroy", ffi::botan_x509_cert_destroy);

/// Guess for the certificate time getters; Botan reports at most 15 chars
/// plus the terminator.
const TIME_GUESS: usize = 16;

bitflags! {
    /// Key usage bits as numbered by Botan's `Key_Constraints`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyUsage: c_uint {
        const DIGITAL_SIGNATURE = 32768;
        const NON_REPUDIATION = 16384;
        const KEY_ENCIPHERMENT = 8192;
        const DATA_ENCIPHERMENT = 4096;
        const KEY_AGREEMENT = 2048;
        const KEY_CERT_SIGN = 1024;
        const CRL_SIGN = 512;
        const ENCIPHER_ONLY = 256;
        const DECIPHER_ONLY = 128;
    }
}

/// A parsed X.509 certificate.
#[derive(Debug)]
pub struct Certificate {
    handle: NativeHandle<ffi::botan_x509_cert_struct>,
}

impl Certificate {
    /// Parses a certificate in DER or PEM form.
    #[allow(unsafe_code)]
    pub fn load(data: &[u8]) -> Result<Self, BotanError> {
        if data.is_empty() {
            Err(BotanError::malformed("certificate data is empty"))?;
        }
        // SAFETY: the created object is a certificate destroyed by
        // `botan_x509_cert_destroy`; `data` is a valid slice.
        let handle = unsafe {
            NativeHandle::acquire("botan_x509_cert_load", CERT_DESTRUCTOR, |out| {
                ffi::botan_x509_cert_load(out, data.as_ptr(), data.len())
            })?
        };
        Ok(Self { handle })
    }

    /// Reads and parses a certificate file.
    #[allow(unsafe_code)]
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, BotanError> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| BotanError::malformed(format!("path {path:?} is not valid UTF-8")))?;
        let filename = c_name("certificate path", path_str)?;
        // SAFETY: the created object is a certificate destroyed by
        // `botan_x509_cert_destroy`; `filename` is NUL-terminated.
        let handle = unsafe {
            NativeHandle::acquire("botan_x509_cert_load_file", CERT_DESTRUCTOR, |out| {
                ffi::botan_x509_cert_load_file(out, filename.as_ptr())
            })?
        };
        Ok(Self { handle })
    }

    fn bytes_field(
        &self,
        function: &'static str,
        guess: usize,
        mut getter: impl FnMut(*mut ffi::botan_x509_cert_struct, *mut u8, *mut usize) -> c_int,
    ) -> Result<Vec<u8>, BotanError> {
        self.handle.with_handle(function, |raw| {
            call_with_buffer(function, guess, |buf, len| getter(raw, buf, len))
        })?
    }

    fn text_field(
        &self,
        function: &'static str,
        guess: usize,
        mut getter: impl FnMut(*mut ffi::botan_x509_cert_struct, *mut u8, *mut usize) -> c_int,
    ) -> Result<String, BotanError> {
        self.handle.with_handle(function, |raw| {
            call_with_string(function, guess, |buf, len| getter(raw, buf, len))
        })?
    }

    /// Start of the validity period as printed by Botan, e.g. `240101000000Z`.
    #[allow(unsafe_code)]
    pub fn time_starts(&self) -> Result<String, BotanError> {
        self.text_field("botan_x509_cert_get_time_starts", TIME_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_time_starts(raw, buf.cast(), len) }
        })
    }

    /// End of the validity period as printed by Botan.
    #[allow(unsafe_code)]
    pub fn time_expires(&self) -> Result<String, BotanError> {
        self.text_field("botan_x509_cert_get_time_expires", TIME_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_time_expires(raw, buf.cast(), len) }
        })
    }

    pub fn not_before(&self) -> Result<DateTime<Utc>, BotanError> {
        parse_x509_time(&self.time_starts()?)
    }

    pub fn not_after(&self) -> Result<DateTime<Utc>, BotanError> {
        parse_x509_time(&self.time_expires()?)
    }

    /// Human readable dump of the certificate.
    #[allow(unsafe_code)]
    pub fn to_text(&self) -> Result<String, BotanError> {
        self.text_field("botan_x509_cert_to_string", DEFAULT_BUFFER_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_to_string(raw, buf.cast(), len) }
        })
    }

    /// Colon separated uppercase hex digest of the encoded certificate.
    #[allow(unsafe_code)]
    pub fn fingerprint(&self, hash_algo: &str) -> Result<String, BotanError> {
        let guess = Hash::new(hash_algo)?.output_length() * 3;
        let hash_name = c_name("hash algorithm", hash_algo)?;
        self.text_field("botan_x509_cert_get_fingerprint", guess, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_fingerprint(raw, hash_name.as_ptr(), buf, len) }
        })
    }

    #[allow(unsafe_code)]
    pub fn serial_number(&self) -> Result<Vec<u8>, BotanError> {
        self.bytes_field("botan_x509_cert_get_serial_number", DEFAULT_BUFFER_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_serial_number(raw, buf, len) }
        })
    }

    #[allow(unsafe_code)]
    pub fn authority_key_id(&self) -> Result<Vec<u8>, BotanError> {
        self.bytes_field("botan_x509_cert_get_authority_key_id", DEFAULT_BUFFER_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_authority_key_id(raw, buf, len) }
        })
    }

    #[allow(unsafe_code)]
    pub fn subject_key_id(&self) -> Result<Vec<u8>, BotanError> {
        self.bytes_field("botan_x509_cert_get_subject_key_id", DEFAULT_BUFFER_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_subject_key_id(raw, buf, len) }
        })
    }

    #[allow(unsafe_code)]
    pub fn public_key_bits(&self) -> Result<Vec<u8>, BotanError> {
        self.bytes_field("botan_x509_cert_get_public_key_bits", DEFAULT_BUFFER_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_public_key_bits(raw, buf, len) }
        })
    }

    /// The subject public key as a standalone key object.
    #[allow(unsafe_code)]
    pub fn public_key(&self) -> Result<PublicKey, BotanError> {
        let handle = self.handle.with_handle("botan_x509_cert_get_public_key", |raw| {
            // SAFETY: the created object is a public key destroyed by
            // `botan_pubkey_destroy`.
            unsafe {
                NativeHandle::acquire("botan_x509_cert_get_public_key", PUBKEY_DESTRUCTOR, |out| {
                    ffi::botan_x509_cert_get_public_key(raw, out)
                })
            }
        })??;
        Ok(PublicKey::from_handle(handle))
    }

    /// Value `index` of subject DN attribute `key` (`"Name"`, `"Organization"`, ...).
    #[allow(unsafe_code)]
    pub fn subject_info(&self, key: &str, index: usize) -> Result<String, BotanError> {
        let key = c_name("DN attribute", key)?;
        self.text_field("botan_x509_cert_get_subject_dn", DEFAULT_BUFFER_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_subject_dn(raw, key.as_ptr(), index, buf, len) }
        })
    }

    /// Value `index` of issuer DN attribute `key`.
    #[allow(unsafe_code)]
    pub fn issuer_info(&self, key: &str, index: usize) -> Result<String, BotanError> {
        let key = c_name("DN attribute", key)?;
        self.text_field("botan_x509_cert_get_issuer_dn", DEFAULT_BUFFER_GUESS, |raw, buf, len| {
            // SAFETY: `buf` holds `*len` writable bytes.
            unsafe { ffi::botan_x509_cert_get_issuer_dn(raw, key.as_ptr(), index, buf, len) }
        })
    }

    /// Whether the key usage extension permits every bit in `usage`.
    #[allow(unsafe_code)]
    pub fn allowed_usage(&self, usage: KeyUsage) -> Result<VerificationOutcome, BotanError> {
        let code = self.handle.with_handle("botan_x509_cert_allowed_usage", |raw| {
            // SAFETY: `raw` is a live certificate.
            unsafe { ffi::botan_x509_cert_allowed_usage(raw, usage.bits()) }
        })?;
        BooleanCodes::ALLOWED_USAGE.interpret("botan_x509_cert_allowed_usage", code)
    }

    /// Whether the certificate names `hostname`.
    #[allow(unsafe_code)]
    pub fn matches_hostname(&self, hostname: &str) -> Result<VerificationOutcome, BotanError> {
        let hostname = c_name("hostname", hostname)?;
        let code = self.handle.with_handle("botan_x509_cert_hostname_match", |raw| {
            // SAFETY: `raw` is live and `hostname` is NUL-terminated.
            unsafe { ffi::botan_x509_cert_hostname_match(raw, hostname.as_ptr()) }
        })?;
        BooleanCodes::HOSTNAME_MATCH.interpret("botan_x509_cert_hostname_match", code)
    }

    pub fn close(&mut self) -> Result<(), BotanError> {
        self.handle.close()
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_text().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests;
