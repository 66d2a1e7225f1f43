// Copyright (C) Microsoft Corporation. All rights reserved.

//! Create/update/finish lifecycle shared by signing and verification.

use std::ffi::c_int;
use std::marker::PhantomData;

use super::*;

/// Lifecycle state of a [`StreamingOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    /// Created; zero or more chunks fed.
    Accumulating,
    /// A finish call was attempted. Terminal.
    Finished,
}

/// Native functions backing one kind of streaming operation.
pub trait StreamingKind {
    type Raw;

    const CREATE_FN: &'static str;
    const UPDATE_FN: &'static str;
    const DESTRUCTOR: Destructor<Self::Raw>;

    /// Feeds `len` bytes at `data` into the native accumulator.
    ///
    /// # Safety
    ///
    /// `raw` must be a live object of this kind and `data` must point to
    /// `len` readable bytes.
    #[allow(unsafe_code)]
    unsafe fn update(raw: *mut Self::Raw, data: *const u8, len: usize) -> c_int;
}

/// A native streaming operation.
///
/// Chunks passed to [`update`](Self::update) are concatenated in call order.
/// After a finish call every further update or finish fails with
/// `InvalidHandleState` without reaching the library.
pub struct StreamingOperation<K: StreamingKind> {
    handle: NativeHandle<K::Raw>,
    state: OperationState,
    _kind: PhantomData<K>,
}

impl<K: StreamingKind> StreamingOperation<K> {
    /// Creates the operation through `K::CREATE_FN`.
    ///
    /// # Safety
    ///
    /// `create` must produce an object destroyed by `K::DESTRUCTOR`.
    #[allow(unsafe_code)]
    pub unsafe fn create<F>(create: F) -> Result<Self, BotanError>
    where
        F: FnOnce(*mut *mut K::Raw) -> c_int,
    {
        // SAFETY: forwarded from the caller's contract.
        let handle = unsafe { NativeHandle::acquire(K::CREATE_FN, K::DESTRUCTOR, create)? };
        Ok(Self {
            handle,
            state: OperationState::Accumulating,
            _kind: PhantomData,
        })
    }

    pub fn state(&self) -> OperationState {
        self.state
    }

    fn ensure_accumulating(&self, function: &'static str) -> Result<(), BotanError> {
        if self.state == OperationState::Finished {
            tracing::error!(function, "operation already finished");
            Err(BotanError::InvalidHandleState { function })?;
        }
        Ok(())
    }

    #[allow(unsafe_code)]
    pub fn update(&mut self, chunk: &[u8]) -> Result<(), BotanError> {
        self.ensure_accumulating(K::UPDATE_FN)?;
        let code = self.handle.with_handle(K::UPDATE_FN, |raw| {
            // SAFETY: `raw` is live for the duration of the closure and
            // `chunk` is a valid slice.
            unsafe { K::update(raw, chunk.as_ptr(), chunk.len()) }
        })?;
        check(K::UPDATE_FN, code)?;
        Ok(())
    }

    /// Finishes with a variable-length output.
    pub fn finish_with_buffer<F>(
        &mut self,
        function: &'static str,
        guess: usize,
        mut f: F,
    ) -> Result<Vec<u8>, BotanError>
    where
        F: FnMut(*mut K::Raw, *mut u8, *mut usize) -> c_int,
    {
        self.ensure_accumulating(function)?;
        self.state = OperationState::Finished;
        self.handle.with_handle(function, |raw| {
            call_with_buffer(function, guess, |buf, len| f(raw, buf, len))
        })?
    }

    /// Finishes with a boolean answer read through `codes`.
    pub fn finish_boolean<F>(
        &mut self,
        function: &'static str,
        codes: BooleanCodes,
        f: F,
    ) -> Result<VerificationOutcome, BotanError>
    where
        F: FnOnce(*mut K::Raw) -> c_int,
    {
        self.ensure_accumulating(function)?;
        self.state = OperationState::Finished;
        let code = self.handle.with_handle(function, f)?;
        codes.interpret(function, code)
    }

    /// Gives `body` the live pointer, for calls outside the update/finish path.
    #[cfg_attr(not(botan_linked), allow(dead_code))]
    pub(crate) fn with_handle<R>(
        &self,
        function: &'static str,
        body: impl FnOnce(*mut K::Raw) -> R,
    ) -> Result<R, BotanError> {
        self.handle.with_handle(function, body)
    }

    /// Releases the native operation now. Idempotent.
    pub fn close(&mut self) -> Result<(), BotanError> {
        self.handle.close()
    }
}
