// Copyright (C) Microsoft Corporation. All rights reserved.

//! Cryptographic hash functions.
//!
//! [`Hash`] wraps a Botan hash object selected by name (`"SHA-256"`,
//! `"SHA-3(512)"`, `"BLAKE2b(256)"`, ...). Data is fed incrementally with
//! [`Hash::update`]; [`Hash::finish`] returns the digest and resets the
//! object so it can be reused for a new message.

use super::*;

const HASH_DESTRUCTOR: Destructor<ffi::botan_hash_struct> =
    Destructor::new("botan_hash_destroy", ffi::botan_hash_destroy);

/// A hash function instance.
#[derive(Debug)]
pub struct Hash {
    handle: NativeHandle<ffi::botan_hash_struct>,
    output_length: usize,
}

impl Hash {
    /// Creates a hash object for `algo`.
    ///
    /// # Errors
    ///
    /// * `MalformedInput` - `algo` is empty or contains a NUL byte
    /// * `CreationFailed` - Botan does not know the algorithm
    #[allow(unsafe_code)]
    pub fn new(algo: &str) -> Result<Self, BotanError> {
        let name = c_name("hash algorithm", algo)?;
        // SAFETY: the created object is a hash destroyed by `botan_hash_destroy`.
        let handle = unsafe {
            NativeHandle::acquire("botan_hash_init", HASH_DESTRUCTOR, |out| {
                ffi::botan_hash_init(out, name.as_ptr(), 0)
            })?
        };
        Self::from_handle(handle)
    }

    #[allow(unsafe_code)]
    fn from_handle(handle: NativeHandle<ffi::botan_hash_struct>) -> Result<Self, BotanError> {
        let mut output_length = 0usize;
        let code = handle.with_handle("botan_hash_output_length", |raw| {
            // SAFETY: `raw` is a live hash and the out-pointer is valid.
            unsafe { ffi::botan_hash_output_length(raw, &mut output_length) }
        })?;
        check("botan_hash_output_length", code)?;
        Ok(Self {
            handle,
            output_length,
        })
    }

    /// One-shot digest of `data`.
    pub fn digest(algo: &str, data: &[u8]) -> Result<Vec<u8>, BotanError> {
        let mut hash = Self::new(algo)?;
        hash.update(data)?;
        hash.finish()
    }

    /// Digest size in bytes.
    pub fn output_length(&self) -> usize {
        self.output_length
    }

    /// Internal block size in bytes.
    #[allow(unsafe_code)]
    pub fn block_size(&self) -> Result<usize, BotanError> {
        let mut block_size = 0usize;
        let code = self.handle.with_handle("botan_hash_block_size", |raw| {
            // SAFETY: `raw` is a live hash and the out-pointer is valid.
            unsafe { ffi::botan_hash_block_size(raw, &mut block_size) }
        })?;
        check("botan_hash_block_size", code)?;
        Ok(block_size)
    }

    /// Botan's canonical name of the algorithm.
    #[allow(unsafe_code)]
    pub fn name(&self) -> Result<String, BotanError> {
        self.handle.with_handle("botan_hash_name", |raw| {
            call_with_string("botan_hash_name", 32, |buf, len| {
                // SAFETY: `buf` holds `*len` writable bytes.
                unsafe { ffi::botan_hash_name(raw, buf.cast(), len) }
            })
        })?
    }

    #[allow(unsafe_code)]
    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, BotanError> {
        let code = self.handle.with_handle("botan_hash_update", |raw| {
            // SAFETY: `data` is a valid slice.
            unsafe { ffi::botan_hash_update(raw, data.as_ptr(), data.len()) }
        })?;
        check("botan_hash_update", code)?;
        Ok(self)
    }

    /// Returns the digest of everything fed so far and resets the state.
    #[allow(unsafe_code)]
    pub fn finish(&mut self) -> Result<Vec<u8>, BotanError> {
        let mut digest = vec![0u8; self.output_length];
        let code = self.handle.with_handle("botan_hash_final", |raw| {
            // SAFETY: `digest` holds exactly `output_length` bytes.
            unsafe { ffi::botan_hash_final(raw, digest.as_mut_ptr()) }
        })?;
        check("botan_hash_final", code)?;
        Ok(digest)
    }

    /// Discards any data fed so far.
    #[allow(unsafe_code)]
    pub fn clear(&mut self) -> Result<(), BotanError> {
        let code = self.handle.with_handle("botan_hash_clear", |raw| {
            // SAFETY: `raw` is a live hash.
            unsafe { ffi::botan_hash_clear(raw) }
        })?;
        check("botan_hash_clear", code)?;
        Ok(())
    }

    /// Creates an independent copy including the data fed so far.
    #[allow(unsafe_code)]
    pub fn try_clone(&self) -> Result<Self, BotanError> {
        let copy = self.handle.with_handle("botan_hash_copy_state", |source| {
            // SAFETY: the copy is a new hash destroyed by `botan_hash_destroy`.
            unsafe {
                NativeHandle::acquire("botan_hash_copy_state", HASH_DESTRUCTOR, |out| {
                    ffi::botan_hash_copy_state(out, source)
                })
            }
        })??;
        Ok(Self {
            handle: copy,
            output_length: self.output_length,
        })
    }

    pub fn close(&mut self) -> Result<(), BotanError> {
        self.handle.close()
    }
}

#[cfg(test)]
mod tests;
