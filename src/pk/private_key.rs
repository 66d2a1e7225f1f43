// Copyright (C) Microsoft Corporation. All rights reserved.

use std::ptr;

use super::*;

const PRIVKEY_DESTRUCTOR: Destructor<ffi::botan_privkey_struct> =
    Destructor::new("botan_privkey_destroy", ffi::botan_privkey_destroy);

/// An asymmetric private key.
#[derive(Debug)]
pub struct PrivateKey {
    handle: NativeHandle<ffi::botan_privkey_struct>,
}

impl PrivateKey {
    /// Generates a new key.
    ///
    /// `params` is algorithm specific: a bit length for RSA (`"2048"`), a
    /// curve for ECDSA (`"secp256r1"`), `None` where there is nothing to pick.
    #[allow(unsafe_code)]
    pub fn generate(algo: &str, params: Option<&str>, rng: &mut Rng) -> Result<Self, BotanError> {
        let algo = c_name("key algorithm", algo)?;
        let params = params.map(|p| c_string("key parameters", p)).transpose()?;
        let params_ptr = params.as_ref().map_or(ptr::null(), |p| p.as_ptr());

        let handle = rng.handle().with_handle("botan_privkey_create", |rng_raw| {
            // SAFETY: the created object is a private key destroyed by
            // `botan_privkey_destroy`; the strings outlive the call.
            unsafe {
                NativeHandle::acquire("botan_privkey_create", PRIVKEY_DESTRUCTOR, |out| {
                    ffi::botan_privkey_create(out, algo.as_ptr(), params_ptr, rng_raw)
                })
            }
        })??;
        Ok(Self { handle })
    }

    /// Loads a PKCS #8 key in DER or PEM form, optionally encrypted.
    #[allow(unsafe_code)]
    pub fn load(data: &[u8], password: Option<&str>) -> Result<Self, BotanError> {
        if data.is_empty() {
            Err(BotanError::malformed("private key data is empty"))?;
        }
        let password = password.map(|p| c_string("password", p)).transpose()?;
        let password_ptr = password.as_ref().map_or(ptr::null(), |p| p.as_ptr());
        let rng = Rng::new()?;

        let handle = rng.handle().with_handle("botan_privkey_load", |rng_raw| {
            // SAFETY: the created object is a private key destroyed by
            // `botan_privkey_destroy`; `data` is a valid slice.
            unsafe {
                NativeHandle::acquire("botan_privkey_load", PRIVKEY_DESTRUCTOR, |out| {
                    ffi::botan_privkey_load(out, rng_raw, data.as_ptr(), data.len(), password_ptr)
                })
            }
        })??;
        Ok(Self { handle })
    }

    #[allow(unsafe_code)]
    fn export(&self, flags: u32) -> Result<Vec<u8>, BotanError> {
        self.handle.with_handle("botan_privkey_export", |raw| {
            call_with_buffer("botan_privkey_export", DEFAULT_BUFFER_GUESS, |buf, len| {
                // SAFETY: `buf` holds `*len` writable bytes.
                unsafe { ffi::botan_privkey_export(raw, buf, len, flags) }
            })
        })?
    }

    /// PKCS #8 DER encoding.
    pub fn export_der(&self) -> Result<Vec<u8>, BotanError> {
        self.export(ffi::BOTAN_PRIVKEY_EXPORT_FLAG_DER)
    }

    /// PKCS #8 PEM encoding.
    pub fn export_pem(&self) -> Result<String, BotanError> {
        let pem = self.export(ffi::BOTAN_PRIVKEY_EXPORT_FLAG_PEM)?;
        Ok(text_until_nul(&pem))
    }

    #[allow(unsafe_code)]
    pub fn algo_name(&self) -> Result<String, BotanError> {
        self.handle.with_handle("botan_privkey_algo_name", |raw| {
            call_with_string("botan_privkey_algo_name", 32, |buf, len| {
                // SAFETY: `buf` holds `*len` writable bytes.
                unsafe { ffi::botan_privkey_algo_name(raw, buf.cast(), len) }
            })
        })?
    }

    /// Extracts the matching public key.
    #[allow(unsafe_code)]
    pub fn public_key(&self) -> Result<PublicKey, BotanError> {
        let handle = self.handle.with_handle("botan_privkey_export_pubkey", |raw| {
            // SAFETY: the created object is a public key destroyed by
            // `botan_pubkey_destroy`.
            unsafe {
                NativeHandle::acquire("botan_privkey_export_pubkey", PUBKEY_DESTRUCTOR, |out| {
                    ffi::botan_privkey_export_pubkey(out, raw)
                })
            }
        })??;
        Ok(PublicKey::from_handle(handle))
    }

    /// Runs the key's self-consistency tests.
    #[allow(unsafe_code)]
    pub fn check_key(&self, rng: &mut Rng, expensive: bool) -> Result<VerificationOutcome, BotanError> {
        let flags = if expensive {
            ffi::BOTAN_CHECK_KEY_EXPENSIVE_TESTS
        } else {
            0
        };
        let code = self.handle.with_handle("botan_privkey_check_key", |raw| {
            rng.handle().with_handle("botan_privkey_check_key", |rng_raw| {
                // SAFETY: both handles are live.
                unsafe { ffi::botan_privkey_check_key(raw, rng_raw, flags) }
            })
        })??;
        BooleanCodes::CHECK_KEY.interpret("botan_privkey_check_key", code)
    }

    /// Signs `data` in one step.
    pub fn sign(&self, data: &[u8], padding: Option<&str>, rng: &mut Rng) -> Result<Vec<u8>, BotanError> {
        let mut op = Sign::new(self, padding)?;
        op.update(data)?;
        op.finish(rng)
    }

    pub fn close(&mut self) -> Result<(), BotanError> {
        self.handle.close()
    }

    pub(crate) fn handle(&self) -> &NativeHandle<ffi::botan_privkey_struct> {
        &self.handle
    }
}
