// Copyright (C) Microsoft Corporation. All rights reserved.

use super::*;

pub(crate) const PUBKEY_DESTRUCTOR: Destructor<ffi::botan_pubkey_struct> =
    Destructor::new("botan_pubkey_destroy", ffi::botan_pubkey_destroy);

/// An asymmetric public key.
#[derive(Debug)]
pub struct PublicKey {
    handle: NativeHandle<ffi::botan_pubkey_struct>,
}

impl PublicKey {
    pub(crate) fn from_handle(handle: NativeHandle<ffi::botan_pubkey_struct>) -> Self {
        Self { handle }
    }

    /// Loads a SubjectPublicKeyInfo in DER or PEM form.
    #[allow(unsafe_code)]
    pub fn load(data: &[u8]) -> Result<Self, BotanError> {
        if data.is_empty() {
            Err(BotanError::malformed("public key data is empty"))?;
        }
        // SAFETY: the created object is a public key destroyed by
        // `botan_pubkey_destroy`; `data` is a valid slice.
        let handle = unsafe {
            NativeHandle::acquire("botan_pubkey_load", PUBKEY_DESTRUCTOR, |out| {
                ffi::botan_pubkey_load(out, data.as_ptr(), data.len())
            })?
        };
        Ok(Self { handle })
    }

    #[allow(unsafe_code)]
    fn export(&self, flags: u32) -> Result<Vec<u8>, BotanError> {
        self.handle.with_handle("botan_pubkey_export", |raw| {
            call_with_buffer("botan_pubkey_export", DEFAULT_BUFFER_GUESS, |buf, len| {
                // SAFETY: `buf` holds `*len` writable bytes.
                unsafe { ffi::botan_pubkey_export(raw, buf, len, flags) }
            })
        })?
    }

    /// SubjectPublicKeyInfo DER encoding.
    pub fn export_der(&self) -> Result<Vec<u8>, BotanError> {
        self.export(ffi::BOTAN_PUBKEY_EXPORT_FLAG_DER)
    }

    pub fn export_pem(&self) -> Result<String, BotanError> {
        let pem = self.export(ffi::BOTAN_PUBKEY_EXPORT_FLAG_PEM)?;
        Ok(text_until_nul(&pem))
    }

    #[allow(unsafe_code)]
    pub fn algo_name(&self) -> Result<String, BotanError> {
        self.handle.with_handle("botan_pubkey_algo_name", |raw| {
            call_with_string("botan_pubkey_algo_name", 32, |buf, len| {
                // SAFETY: `buf` holds `*len` writable bytes.
                unsafe { ffi::botan_pubkey_algo_name(raw, buf.cast(), len) }
            })
        })?
    }

    /// Estimated security level in bits.
    #[allow(unsafe_code)]
    pub fn estimated_strength(&self) -> Result<usize, BotanError> {
        let mut strength = 0usize;
        let code = self.handle.with_handle("botan_pubkey_estimated_strength", |raw| {
            // SAFETY: `raw` is a live key and the out-pointer is valid.
            unsafe { ffi::botan_pubkey_estimated_strength(raw, &mut strength) }
        })?;
        check("botan_pubkey_estimated_strength", code)?;
        Ok(strength)
    }

    /// Hash of the encoded key under `hash_algo`.
    #[allow(unsafe_code)]
    pub fn fingerprint(&self, hash_algo: &str) -> Result<Vec<u8>, BotanError> {
        let hash_name = c_name("hash algorithm", hash_algo)?;
        self.handle.with_handle("botan_pubkey_fingerprint", |raw| {
            call_with_buffer("botan_pubkey_fingerprint", 64, |buf, len| {
                // SAFETY: `buf` holds `*len` writable bytes.
                unsafe { ffi::botan_pubkey_fingerprint(raw, hash_name.as_ptr(), buf, len) }
            })
        })?
    }

    #[allow(unsafe_code)]
    pub fn check_key(&self, rng: &mut Rng, expensive: bool) -> Result<VerificationOutcome, BotanError> {
        let flags = if expensive {
            ffi::BOTAN_CHECK_KEY_EXPENSIVE_TESTS
        } else {
            0
        };
        let code = self.handle.with_handle("botan_pubkey_check_key", |raw| {
            rng.handle().with_handle("botan_pubkey_check_key", |rng_raw| {
                // SAFETY: both handles are live.
                unsafe { ffi::botan_pubkey_check_key(raw, rng_raw, flags) }
            })
        })??;
        BooleanCodes::CHECK_KEY.interpret("botan_pubkey_check_key", code)
    }

    /// Verifies `signature` over `data` in one step.
    pub fn verify(
        &self,
        data: &[u8],
        signature: &[u8],
        padding: Option<&str>,
    ) -> Result<VerificationOutcome, BotanError> {
        let mut op = Verify::new(self, padding)?;
        op.update(data)?;
        op.check_signature(signature)
    }

    pub fn close(&mut self) -> Result<(), BotanError> {
        self.handle.close()
    }

    pub(crate) fn handle(&self) -> &NativeHandle<ffi::botan_pubkey_struct> {
        &self.handle
    }
}
