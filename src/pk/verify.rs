// Copyright (C) Microsoft Corporation. All rights reserved.

use std::ffi::c_int;
use std::marker::PhantomData;

use super::*;

/// Native functions of a verification operation.
pub(crate) struct VerifyKind;

impl StreamingKind for VerifyKind {
    type Raw = ffi::botan_pk_op_verify_struct;

    const CREATE_FN: &'static str = "botan_pk_op_verify_create";
    const UPDATE_FN: &'static str = "botan_pk_op_verify_update";
    const DESTRUCTOR: Destructor<Self::Raw> =
        Destructor::new("botan_pk_op_verify_destroy", ffi::botan_pk_op_verify_destroy);

    #[allow(unsafe_code)]
    unsafe fn update(raw: *mut Self::Raw, data: *const u8, len: usize) -> c_int {
        // SAFETY: forwarded from the trait contract.
        unsafe { ffi::botan_pk_op_verify_update(raw, data, len) }
    }
}

/// A streaming signature check over data fed with [`Verify::update`].
pub struct Verify<'k> {
    op: StreamingOperation<VerifyKind>,
    _key: PhantomData<&'k PublicKey>,
}

impl<'k> Verify<'k> {
    #[allow(unsafe_code)]
    pub fn new(key: &'k PublicKey, padding: Option<&str>) -> Result<Self, BotanError> {
        let padding = resolve_padding(&key.algo_name()?, padding)?;

        let op = key.handle().with_handle(VerifyKind::CREATE_FN, |key_raw| {
            // SAFETY: the created object is a verification operation destroyed
            // by `botan_pk_op_verify_destroy`; the key outlives it through `'k`.
            unsafe {
                StreamingOperation::<VerifyKind>::create(|out| {
                    ffi::botan_pk_op_verify_create(out, key_raw, padding.as_ptr(), 0)
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

    /// Checks `signature` against all fed data. Only one check is allowed.
    ///
    /// A signature that does not verify is `Ok(Invalid)`, not an error.
    #[allow(unsafe_code)]
    pub fn check_signature(&mut self, signature: &[u8]) -> Result<VerificationOutcome, BotanError> {
        if signature.is_empty() {
            Err(BotanError::malformed("signature is empty"))?;
        }

        let codes = BooleanCodes::verify_finish(LibraryVersion::current());
        self.op
            .finish_boolean("botan_pk_op_verify_finish", codes, |raw| {
                // SAFETY: `raw` is live and `signature` is a valid slice.
                unsafe { ffi::botan_pk_op_verify_finish(raw, signature.as_ptr(), signature.len()) }
            })
    }

    pub fn state(&self) -> OperationState {
        self.op.state()
    }

    pub fn close(&mut self) -> Result<(), BotanError> {
        self.op.close()
    }
}
