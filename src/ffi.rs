// Copyright (C) Microsoft Corporation. All rights reserved.

//! Declarations from `botan/ffi.h`.

#![allow(non_camel_case_types)]

use std::ffi::c_char;
use std::ffi::c_int;
use std::ffi::c_uint;

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque!(
    botan_rng_struct,
    botan_hash_struct,
    botan_mac_struct,
    botan_privkey_struct,
    botan_pubkey_struct,
    botan_pk_op_sign_struct,
    botan_pk_op_verify_struct,
    botan_x509_cert_struct,
);

pub type botan_rng_t = *mut botan_rng_struct;
pub type botan_hash_t = *mut botan_hash_struct;
pub type botan_mac_t = *mut botan_mac_struct;
pub type botan_privkey_t = *mut botan_privkey_struct;
pub type botan_pubkey_t = *mut botan_pubkey_struct;
pub type botan_pk_op_sign_t = *mut botan_pk_op_sign_struct;
pub type botan_pk_op_verify_t = *mut botan_pk_op_verify_struct;
pub type botan_x509_cert_t = *mut botan_x509_cert_struct;

pub const BOTAN_PRIVKEY_EXPORT_FLAG_DER: u32 = 0;
pub const BOTAN_PRIVKEY_EXPORT_FLAG_PEM: u32 = 1;
pub const BOTAN_PUBKEY_EXPORT_FLAG_DER: u32 = 0;
pub const BOTAN_PUBKEY_EXPORT_FLAG_PEM: u32 = 1;
pub const BOTAN_CHECK_KEY_EXPENSIVE_TESTS: u32 = 1;

extern "C" {
    pub fn botan_error_description(err: c_int) -> *const c_char;
    pub fn botan_ffi_api_version() -> u32;
    pub fn botan_version_string() -> *const c_char;
    pub fn botan_version_major() -> u32;
    pub fn botan_version_minor() -> u32;
    pub fn botan_version_patch() -> u32;

    pub fn botan_constant_time_compare(x: *const u8, y: *const u8, len: usize) -> c_int;

    pub fn botan_rng_init(rng: *mut botan_rng_t, rng_type: *const c_char) -> c_int;
    pub fn botan_rng_get(rng: botan_rng_t, out: *mut u8, out_len: usize) -> c_int;
    pub fn botan_rng_reseed(rng: botan_rng_t, bits: usize) -> c_int;
    pub fn botan_rng_destroy(rng: botan_rng_t) -> c_int;

    pub fn botan_hash_init(hash: *mut botan_hash_t, hash_name: *const c_char, flags: u32) -> c_int;
    pub fn botan_hash_copy_state(dest: *mut botan_hash_t, source: botan_hash_t) -> c_int;
    pub fn botan_hash_output_length(hash: botan_hash_t, output_length: *mut usize) -> c_int;
    pub fn botan_hash_block_size(hash: botan_hash_t, block_size: *mut usize) -> c_int;
    pub fn botan_hash_update(hash: botan_hash_t, input: *const u8, input_len: usize) -> c_int;
    pub fn botan_hash_final(hash: botan_hash_t, out: *mut u8) -> c_int;
    pub fn botan_hash_clear(hash: botan_hash_t) -> c_int;
    pub fn botan_hash_name(hash: botan_hash_t, name: *mut c_char, name_len: *mut usize) -> c_int;
    pub fn botan_hash_destroy(hash: botan_hash_t) -> c_int;

    pub fn botan_mac_init(mac: *mut botan_mac_t, mac_name: *const c_char, flags: u32) -> c_int;
    pub fn botan_mac_output_length(mac: botan_mac_t, output_length: *mut usize) -> c_int;
    pub fn botan_mac_set_key(mac: botan_mac_t, key: *const u8, key_len: usize) -> c_int;
    pub fn botan_mac_update(mac: botan_mac_t, buf: *const u8, len: usize) -> c_int;
    pub fn botan_mac_final(mac: botan_mac_t, out: *mut u8) -> c_int;
    pub fn botan_mac_clear(mac: botan_mac_t) -> c_int;
    pub fn botan_mac_name(mac: botan_mac_t, name: *mut c_char, name_len: *mut usize) -> c_int;
    pub fn botan_mac_destroy(mac: botan_mac_t) -> c_int;

    pub fn botan_pbkdf(
        pbkdf_algo: *const c_char,
        out: *mut u8,
        out_len: usize,
        passphrase: *const c_char,
        salt: *const u8,
        salt_len: usize,
        iterations: usize,
    ) -> c_int;
    pub fn botan_pbkdf_timed(
        pbkdf_algo: *const c_char,
        out: *mut u8,
        out_len: usize,
        passphrase: *const c_char,
        salt: *const u8,
        salt_len: usize,
        milliseconds_to_run: usize,
        out_iterations_used: *mut usize,
    ) -> c_int;
    pub fn botan_kdf(
        kdf_algo: *const c_char,
        out: *mut u8,
        out_len: usize,
        secret: *const u8,
        secret_len: usize,
        salt: *const u8,
        salt_len: usize,
        label: *const u8,
        label_len: usize,
    ) -> c_int;

    pub fn botan_privkey_create(
        key: *mut botan_privkey_t,
        algo_name: *const c_char,
        algo_params: *const c_char,
        rng: botan_rng_t,
    ) -> c_int;
    pub fn botan_privkey_load(
        key: *mut botan_privkey_t,
        rng: botan_rng_t,
        bits: *const u8,
        len: usize,
        password: *const c_char,
    ) -> c_int;
    pub fn botan_privkey_export(
        key: botan_privkey_t,
        out: *mut u8,
        out_len: *mut usize,
        flags: u32,
    ) -> c_int;
    pub fn botan_privkey_export_pubkey(out: *mut botan_pubkey_t, key: botan_privkey_t) -> c_int;
    pub fn botan_privkey_algo_name(
        key: botan_privkey_t,
        out: *mut c_char,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_privkey_check_key(key: botan_privkey_t, rng: botan_rng_t, flags: u32) -> c_int;
    pub fn botan_privkey_destroy(key: botan_privkey_t) -> c_int;

    pub fn botan_pubkey_load(key: *mut botan_pubkey_t, bits: *const u8, len: usize) -> c_int;
    pub fn botan_pubkey_export(
        key: botan_pubkey_t,
        out: *mut u8,
        out_len: *mut usize,
        flags: u32,
    ) -> c_int;
    pub fn botan_pubkey_algo_name(
        key: botan_pubkey_t,
        out: *mut c_char,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_pubkey_check_key(key: botan_pubkey_t, rng: botan_rng_t, flags: u32) -> c_int;
    pub fn botan_pubkey_estimated_strength(key: botan_pubkey_t, estimate: *mut usize) -> c_int;
    pub fn botan_pubkey_fingerprint(
        key: botan_pubkey_t,
        hash: *const c_char,
        out: *mut u8,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_pubkey_destroy(key: botan_pubkey_t) -> c_int;

    pub fn botan_pk_op_sign_create(
        op: *mut botan_pk_op_sign_t,
        key: botan_privkey_t,
        hash_and_padding: *const c_char,
        flags: u32,
    ) -> c_int;
    pub fn botan_pk_op_sign_output_length(op: botan_pk_op_sign_t, olen: *mut usize) -> c_int;
    pub fn botan_pk_op_sign_update(op: botan_pk_op_sign_t, input: *const u8, input_len: usize) -> c_int;
    pub fn botan_pk_op_sign_finish(
        op: botan_pk_op_sign_t,
        rng: botan_rng_t,
        sig: *mut u8,
        sig_len: *mut usize,
    ) -> c_int;
    pub fn botan_pk_op_sign_destroy(op: botan_pk_op_sign_t) -> c_int;

    pub fn botan_pk_op_verify_create(
        op: *mut botan_pk_op_verify_t,
        key: botan_pubkey_t,
        hash_and_padding: *const c_char,
        flags: u32,
    ) -> c_int;
    pub fn botan_pk_op_verify_update(op: botan_pk_op_verify_t, input: *const u8, input_len: usize) -> c_int;
    pub fn botan_pk_op_verify_finish(op: botan_pk_op_verify_t, sig: *const u8, sig_len: usize) -> c_int;
    pub fn botan_pk_op_verify_destroy(op: botan_pk_op_verify_t) -> c_int;

    pub fn botan_x509_cert_load(cert: *mut botan_x509_cert_t, data: *const u8, len: usize) -> c_int;
    pub fn botan_x509_cert_load_file(cert: *mut botan_x509_cert_t, filename: *const c_char) -> c_int;
    pub fn botan_x509_cert_destroy(cert: botan_x509_cert_t) -> c_int;
    pub fn botan_x509_cert_get_time_starts(
        cert: botan_x509_cert_t,
        out: *mut c_char,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_get_time_expires(
        cert: botan_x509_cert_t,
        out: *mut c_char,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_to_string(
        cert: botan_x509_cert_t,
        out: *mut c_char,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_get_fingerprint(
        cert: botan_x509_cert_t,
        hash: *const c_char,
        out: *mut u8,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_get_serial_number(
        cert: botan_x509_cert_t,
        out: *mut u8,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_get_authority_key_id(
        cert: botan_x509_cert_t,
        out: *mut u8,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_get_subject_key_id(
        cert: botan_x509_cert_t,
        out: *mut u8,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_get_public_key_bits(
        cert: botan_x509_cert_t,
        out: *mut u8,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_get_public_key(cert: botan_x509_cert_t, key: *mut botan_pubkey_t) -> c_int;
    pub fn botan_x509_cert_get_issuer_dn(
        cert: botan_x509_cert_t,
        key: *const c_char,
        index: usize,
        out: *mut u8,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_get_subject_dn(
        cert: botan_x509_cert_t,
        key: *const c_char,
        index: usize,
        out: *mut u8,
        out_len: *mut usize,
    ) -> c_int;
    pub fn botan_x509_cert_allowed_usage(cert: botan_x509_cert_t, key_usage: c_uint) -> c_int;
    pub fn botan_x509_cert_hostname_match(cert: botan_x509_cert_t, hostname: *const c_char) -> c_int;
}
