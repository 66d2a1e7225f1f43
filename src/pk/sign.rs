// Copyright (C) Microsoft Corporation. All rights reserved.

use std::ffi::c_int;
use std::marker::PhantomData;

use super::*;

/// Native functions of a signing operation.
pub(crate) struct SignKind;

impl StreamingKind for SignKind {
    type Raw = ffi::botan_pk_op_sign_struct;

    const CREATE_FN: &'static str = "botan_pk_op_sign_create";
    const UPDATE_FN: &'static str = "botan_pk_op_sign_update";
    const DESTRUCTOR: Destructor<Self::Raw> =
        Destructor::new("botan_pk_op_sign_destroy", ffi::botan_pk_op_sign_destroy);

    #[allow(unsafe_code)]
    unsafe fn update(raw: *mut Self::Raw, data: *const u8, len: usize) -> c_int {
        // SAFETY: forwarded from the trait contract.
        unsafe { ffi::botan_pk_op_sign_update(raw, data, len) }
    }
}

/// A streaming signature over data fed with [`Sign::update`].
///
/// The operation borrows its key, which therefore outlives it.
pub struct Sign<'k> {
    op: StreamingOperation<SignKind>,
    _key: PhantomData<&'k PrivateKey>,
}

impl<'k> Sign<'k> {
    /// Starts a signature with `padding`, or the key algorithm's default.
    #[allow(unsafe_code)]
    pub fn new(key: &'k PrivateKey, padding: Option<&str>) -> Result<Self, BotanError> {
        let padding = resolve_padding(&key.algo_name()?, padding)?;

        let op = key.handle().with_handle(SignKind::CREATE_FN, |key_raw| {
            // SAFETY: the created object is a signing operation destroyed by
            // `botan_pk_op_sign_destroy`; the key outlives it through `'k`.
            unsafe {
                StreamingOperation::<SignKind>::create(|out| {
                    ffi::botan_pk_op_sign_create(out, key_raw, padding.as_ptr(), 0)
                })
            }
        })??;

        Ok(Self {
            op,
            _key: PhantomData,
        })
    }

    pub fn update(&mut self, data: &[u8]) -> Result<&mut Self, BotanError> {
        self.op.update(data)?;
        Ok(self)
    }

    /// Upper bound of the signature size in bytes.
    #[allow(unsafe_code)]
    pub fn output_length(&self) -> Result<usize, BotanError> {
        let mut length = 0usize;
        let code = self.op.with_handle("botan_pk_op_sign_output_length", |raw| {
            // SAFETY: `raw` is a live operation and the out-pointer is valid.
            unsafe { ffi::botan_pk_op_sign_output_length(raw, &mut length) }
        })?;
        check("botan_pk_op_sign_output_length", code)?;
        Ok(length)
    }

    /// Produces the signature over all fed data. Only one finish is allowed.
    #[allow(unsafe_code)]
    pub fn finish(&mut self, rng: &mut Rng) -> Result<Vec<u8>, BotanError> {
        rng.handle().with_handle("botan_pk_op_sign_finish", |rng_raw| {
            self.op.finish_with_buffer(
                "botan_pk_op_sign_finish",
                DEFAULT_BUFFER_GUESS,
                |raw, buf, len| {
                    // SAFETY: both handles are live and `buf` holds `*len`
                    // writable bytes.
                    unsafe { ffi::botan_pk_op_sign_finish(raw, rng_raw, buf, len) }
                },
            )
        })?
    }

    pub fn state(&self) -> OperationState {
        self.op.state()
    }

    pub fn close(&mut self) -> Result<(), BotanError> {
        self.op.close()
    }
}
