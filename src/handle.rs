// Copyright (C) Microsoft Corporation. All rights reserved.

//! Ownership of opaque native objects.

use std::ffi::c_int;
use std::fmt;
use std::ptr;
use std::ptr::NonNull;

use super::*;

/// A native destroy function together with its name.
pub struct Destructor<T> {
    name: &'static str,
    func: unsafe extern "C" fn(*mut T) -> c_int,
}

impl<T> Destructor<T> {
    pub const fn new(name: &'static str, func: unsafe extern "C" fn(*mut T) -> c_int) -> Self {
        Self { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Destructor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Destructor<T> {}

impl<T> fmt::Debug for Destructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destructor").field("name", &self.name).finish()
    }
}

/// Exclusive owner of one native object.
///
/// The destructor runs at most once: on the first [`NativeHandle::close`] or
/// on drop, whichever comes first. The pointer is only handed out through
/// [`NativeHandle::with_handle`], so it cannot outlive the borrow of its owner.
///
/// `NativeHandle` is `Send` but not `Sync`.
pub struct NativeHandle<T> {
    raw: Option<NonNull<T>>,
    destructor: Destructor<T>,
}

impl<T> NativeHandle<T> {
    /// Runs a creation call and takes ownership of the object it produces.
    ///
    /// `create` receives the out-parameter the native constructor writes.
    /// A negative status or a null pointer yields `CreationFailed`; creation
    /// is never retried.
    ///
    /// # Safety
    ///
    /// `destructor` must be the destroy function matching the object `create`
    /// produces, and that object must not be owned by anything else.
    #[allow(unsafe_code)]
    pub unsafe fn acquire<F>(
        function: &'static str,
        destructor: Destructor<T>,
        create: F,
    ) -> Result<Self, BotanError>
    where
        F: FnOnce(*mut *mut T) -> c_int,
    {
        let mut raw: *mut T = ptr::null_mut();
        let code = create(&mut raw);

        if let Outcome::Failure(code) = classify(code) {
            tracing::error!(function, code, status = status_name(code), "creation failed");
            Err(BotanError::CreationFailed {
                function,
                reason: CreationFailure::Status(code),
            })?;
        }

        let Some(raw) = NonNull::new(raw) else {
            tracing::error!(function, "creation returned a null handle");
            return Err(BotanError::CreationFailed {
                function,
                reason: CreationFailure::NullHandle,
            });
        };

        tracing::trace!(function, handle = ?raw, "acquired native handle");
        Ok(Self {
            raw: Some(raw),
            destructor,
        })
    }

    /// Gives `body` the live pointer for the duration of the call.
    ///
    /// Fails with `InvalidHandleState` once the handle has been released.
    pub fn with_handle<R>(
        &self,
        function: &'static str,
        body: impl FnOnce(*mut T) -> R,
    ) -> Result<R, BotanError> {
        match self.raw {
            Some(raw) => Ok(body(raw.as_ptr())),
            None => {
                tracing::error!(function, "use of released handle");
                Err(BotanError::InvalidHandleState { function })
            }
        }
    }

    /// Releases the native object now.
    ///
    /// Later calls are no-ops. If the destroy function reports a failure the
    /// handle is still considered released and `NativeCallFailed` is returned.
    #[allow(unsafe_code)]
    pub fn close(&mut self) -> Result<(), BotanError> {
        let Some(raw) = self.raw.take() else {
            return Ok(());
        };

        // SAFETY: `raw` came from a successful creation call paired with this
        // destructor and was taken out of `self`, so it is destroyed once.
        let code = unsafe { (self.destructor.func)(raw.as_ptr()) };
        tracing::trace!(destructor = self.destructor.name, code, "released native handle");

        check(self.destructor.name, code).map(|_| ())
    }

    pub fn is_released(&self) -> bool {
        self.raw.is_none()
    }
}

impl<T> Drop for NativeHandle<T> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!(error = %err, "native destroy failed during drop");
        }
    }
}

impl<T> fmt::Debug for NativeHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeHandle")
            .field("raw", &self.raw)
            .field("destructor", &self.destructor.name)
            .finish()
    }
}

// SAFETY: the handle exclusively owns its object and Botan objects carry no
// thread affinity. The handle is deliberately not `Sync`.
#[allow(unsafe_code)]
unsafe impl<T> Send for NativeHandle<T> {}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests;
