// Copyright (C) Microsoft Corporation. All rights reserved.

use test_log::test;

use super::*;

fn hmac_sha256(key: &[u8]) -> Mac {
    let mut mac = Mac::new("HMAC(SHA-256)").expect("init hmac");
    mac.set_key(key).expect("set key");
    mac
}

#[test]
fn test_hmac_sha256_rfc4231_case1() {
    let mut mac = hmac_sha256(&[0x0b; 20]);
    mac.update(b"Hi There").expect("update");
    assert_eq!(
        hex::encode(mac.finish().expect("finish")),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

#[test]
fn test_hmac_sha256_rfc4231_case2_chunked() {
    let mut mac = hmac_sha256(b"Jefe");
    assert_eq!(mac.output_length(), 32);
    mac.update(b"what do ya ")
        .expect("update part1")
        .update(b"want for nothing?")
        .expect("update part2");
    assert_eq!(
        hex::encode(mac.finish().expect("finish")),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn test_hmac_update_order_matters() {
    let mut mac = hmac_sha256(b"key");
    mac.update(b"ab").expect("update ab");
    mac.update(b"cd").expect("update cd");
    let forward = mac.finish().expect("finish");

    mac.update(b"cd").expect("update cd");
    mac.update(b"ab").expect("update ab");
    let reversed = mac.finish().expect("finish");

    assert_eq!(
        hex::encode(&forward),
        "2a31ec0ee8d878c9eece9fb0df79b3b90b2256240163aa5ee50d176d3d1121f8"
    );
    assert_eq!(
        hex::encode(&reversed),
        "99ea4d28ab7ae2788cc5a83f64552fce99a74e9a2ca822137a76897a7216a7a8"
    );
    assert_ne!(forward, reversed);
}

#[test]
fn test_mac_name() {
    let mac = Mac::new("HMAC(SHA-256)").expect("init hmac");
    assert_eq!(mac.name().expect("name"), "HMAC(SHA-256)");
}

#[test]
fn test_mac_without_key_fails() {
    let mut mac = Mac::new("HMAC(SHA-256)").expect("init hmac");
    assert!(matches!(
        mac.update(b"data"),
        Err(BotanError::NativeCallFailed { .. })
    ));
}

#[test]
fn test_mac_unknown_algorithm() {
    assert!(matches!(
        Mac::new("HMAC(NOT-A-HASH)"),
        Err(BotanError::CreationFailed { .. })
    ));
}
