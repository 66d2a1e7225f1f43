// Copyright (C) Microsoft Corporation. All rights reserved.


use test_log::test;
use testvectors::*;

use super::*;

#[test]
fn test_hash_known_answers() {
    for vector in HASH_TEST_VECTORS {
        let digest = Hash::digest(vector.algo, vector.msg).expect("digest");
        assert_eq!(hex::encode(digest), vector.md, "{}", vector.algo);
    }
}

#[test]
fn test_sha256_hash_init_update_finish() {
    const DATA: [u8; 1024] = [1u8; 1024];

    let mut hash = Hash::new("SHA-256").expect("init sha256");
    assert_eq!(hash.output_length(), 32);
    hash.update(&DATA[..100]).expect("update part1");
    hash.update(&DATA[100..]).expect("update part2");
    let digest = hash.finish().expect("finish sha256");

    assert_eq!(
        hex::encode(digest),
        "5a648d8015900d89664e00e125df179636301a2d8fa191c1aa2bd9358ea53a69"
    );
}

#[test]
fn test_hash_finish_resets_state() {
    let mut hash = Hash::new("SHA-1").expect("init sha1");
    hash.update(b"abc").expect("update");
    let first = hash.finish().expect("finish");
    hash.update(b"abc").expect("update");
    let second = hash.finish().expect("finish");
    assert_eq!(first, second);
}

#[test]
fn test_hash_clear_discards_input() {
    let mut hash = Hash::new("SHA-256").expect("init");
    hash.update(b"junk").expect("update");
    hash.clear().expect("clear");
    hash.update(b"abc").expect("update");
    assert_eq!(
        hex::encode(hash.finish().expect("finish")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_hash_try_clone_is_independent() {
    let mut hash = Hash::new("SHA-256").expect("init");
    hash.update(b"ab").expect("update");
    let mut copy = hash.try_clone().expect("copy state");

    copy.update(b"c").expect("update copy");
    hash.update(b"x").expect("update original");

    assert_eq!(
        hex::encode(copy.finish().expect("finish copy")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_ne!(
        hash.finish().expect("finish original"),
        Hash::digest("SHA-256", b"abc").expect("digest")
    );
}

#[test]
fn test_hash_name_and_block_size() {
    let hash = Hash::new("SHA-256").expect("init");
    assert_eq!(hash.name().expect("name"), "SHA-256");
    assert_eq!(hash.block_size().expect("block size"), 64);
}

#[test]
fn test_hash_unknown_algorithm() {
    let result = Hash::new("NOT-A-HASH");
    assert!(matches!(
        result,
        Err(BotanError::CreationFailed {
            function: "botan_hash_init",
            ..
        })
    ));
}

#[test]
fn test_hash_malformed_name() {
    assert!(matches!(
        Hash::new(""),
        Err(BotanError::MalformedInput { .. })
    ));
    assert!(matches!(
        Hash::new("SHA-256\0"),
        Err(BotanError::MalformedInput { .. })
    ));
}

#[test]
fn test_hash_use_after_close() {
    let mut hash = Hash::new("SHA-256").expect("init");
    hash.close().expect("close");
    hash.close().expect("close again");
    assert!(matches!(
        hash.update(b"abc"),
        Err(BotanError::InvalidHandleState { .. })
    ));
}
