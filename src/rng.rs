// Copyright (C) Microsoft Corporation. All rights reserved.

//! Random number generation.

use super::*;

const RNG_DESTRUCTOR: Destructor<ffi::botan_rng_struct> =
    Destructor::new("botan_rng_destroy", ffi::botan_rng_destroy);

/// Random generator types understood by `botan_rng_init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngKind {
    /// The operating system generator.
    #[default]
    System,
    /// A userspace generator seeded from the system.
    User,
    /// A userspace generator with internal locking.
    UserThreadsafe,
}

impl RngKind {
    fn name(self) -> &'static str {
        match self {
            RngKind::System => DEFAULT_RNG,
            RngKind::User => "user",
            RngKind::UserThreadsafe => "user-threadsafe",
        }
    }
}

/// A Botan random number generator.
#[derive(Debug)]
pub struct Rng {
    handle: NativeHandle<ffi::botan_rng_struct>,
}

impl Rng {
    /// Creates the system generator.
    pub fn new() -> Result<Self, BotanError> {
        Self::with_kind(RngKind::System)
    }

    #[allow(unsafe_code)]
    pub fn with_kind(kind: RngKind) -> Result<Self, BotanError> {
        let name = c_string("rng type", kind.name())?;
        // SAFETY: the created object is an RNG destroyed by `botan_rng_destroy`.
        let handle = unsafe {
            NativeHandle::acquire("botan_rng_init", RNG_DESTRUCTOR, |out| {
                ffi::botan_rng_init(out, name.as_ptr())
            })?
        };
        Ok(Self { handle })
    }

    /// Fills `buf` with random bytes.
    #[allow(unsafe_code)]
    pub fn rand_bytes(&mut self, buf: &mut [u8]) -> Result<(), BotanError> {
        let code = self.handle.with_handle("botan_rng_get", |raw| {
            // SAFETY: `buf` is valid for `buf.len()` writable bytes.
            unsafe { ffi::botan_rng_get(raw, buf.as_mut_ptr(), buf.len()) }
        })?;
        check("botan_rng_get", code)?;
        Ok(())
    }

    pub fn rand_vec(&mut self, len: usize) -> Result<Vec<u8>, BotanError> {
        let mut buf = vec![0u8; len];
        self.rand_bytes(&mut buf)?;
        Ok(buf)
    }

    /// Reseeds from the system source with `bits` of entropy.
    #[allow(unsafe_code)]
    pub fn reseed(&mut self, bits: usize) -> Result<(), BotanError> {
        let code = self.handle.with_handle("botan_rng_reseed", |raw| {
            // SAFETY: `raw` is a live RNG.
            unsafe { ffi::botan_rng_reseed(raw, bits) }
        })?;
        check("botan_rng_reseed", code)?;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), BotanError> {
        self.handle.close()
    }

    pub(crate) fn handle(&self) -> &NativeHandle<ffi::botan_rng_struct> {
        &self.handle
    }
}
