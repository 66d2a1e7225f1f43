// Copyright (C) Microsoft Corporation. All rights reserved.

//! Message authentication codes.

use super::*;

const MAC_DESTRUCTOR: Destructor<ffi::botan_mac_struct> =
    Destructor::new("botan_mac_destroy", ffi::botan_mac_destroy);

/// A MAC instance such as `"HMAC(SHA-256)"` or `"CMAC(AES-128)"`.
///
/// A key must be set with [`Mac::set_key`] before data is fed.
#[derive(Debug)]
pub struct Mac {
    handle: NativeHandle<ffi::botan_mac_struct>,
    output_length: usize,
}

impl Mac {
    #[allow(unsafe_code)]
    pub fn new(algo: &str) -> Result<Self, BotanError> {
        let name = c_name("MAC algorithm", algo)?;
        // SAFETY: the created object is a MAC destroyed by `botan_mac_destroy`.
        let handle = unsafe {
            NativeHandle::acquire("botan_mac_init", MAC_DESTRUCTOR, |out| {
                ffi::botan_mac_init(out, name.as_ptr(), 0)
            })?
        };

        let mut output_length = 0usize;
        let code = handle.with_handle("botan_mac_output_length", |raw| {
            // SAFETY: `raw` is a live MAC and the out-pointer is valid.
            unsafe { ffi::botan_mac_output_length(raw, &mut output_length) }
        })?;
        check("botan_mac_output_length", code)?;

        Ok(Self {
            handle,
            output_length,
        })
    }

    pub fn output_length(&self) -> usize {
        self.output_length
    }

    #[allow(unsafe_code)]
    pub fn name(&self) -> Result<String, BotanError> {
        self.handle.with_handle("botan_mac_name", |raw| {
            call_with_string("botan_mac_name", 32, |buf, len| {
                // SAFETY: `buf` holds `*len` writable bytes.
                unsafe { ffi::botan_mac_name(raw, buf.cast(), len) }
            })
        })?
    }

    #[allow(unsafe_code)]
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), BotanError> {
        let code = self.handle.with_handle("botan_mac_set_key", |raw| {
            // SAFETY: `key` is a valid slice.
            unsafe { ffi::botan_mac_set_key(raw, key.as_ptr(), key.len()) }
        })?;
        check("botan_mac_set_key", code)?;
        Ok(())
    }

    #[allow(unsafe_code)]
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, BotanError> {
        let code = self.handle.with_handle("botan_mac_update", |raw| {
            // SAFETY: `data` is a valid slice.
            unsafe { ffi::botan_mac_update(raw, data.as_ptr(), data.len()) }
        })?;
        check("botan_mac_update", code)?;
        Ok(self)
    }

    /// Returns the tag over everything fed since the last finish.
    ///
    /// The key is retained.
    #[allow(unsafe_code)]
    pub fn finish(&mut self) -> Result<Vec<u8>, BotanError> {
        let mut tag = vec![0u8; self.output_length];
        let code = self.handle.with_handle("botan_mac_final", |raw| {
            // SAFETY: `tag` holds exactly `output_length` bytes.
            unsafe { ffi::botan_mac_final(raw, tag.as_mut_ptr()) }
        })?;
        check("botan_mac_final", code)?;
        Ok(tag)
    }

    /// Resets the object, including the key.
    #[allow(unsafe_code)]
    pub fn clear(&mut self) -> Result<(), BotanError> {
        let code = self.handle.with_handle("botan_mac_clear", |raw| {
            // SAFETY: `raw` is a live MAC.
            unsafe { ffi::botan_mac_clear(raw) }
        })?;
        check("botan_mac_clear", code)?;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), BotanError> {
        self.handle.close()
    }
}

#[cfg(test)]
mod tests;
