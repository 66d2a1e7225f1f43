// Copyright (C) Microsoft Corporation. All rights reserved.

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use test_log::test;

use super::*;

struct FakeResource {
    releases: Arc<AtomicUsize>,
    destroy_status: c_int,
}

extern "C" fn fake_destroy(raw: *mut FakeResource) -> c_int {
    // SAFETY: `raw` was produced by `Box::into_raw` in `fake_create`.
    let resource = unsafe { Box::from_raw(raw) };
    resource.releases.fetch_add(1, Ordering::SeqCst);
    resource.destroy_status
}

const FAKE_DESTRUCTOR: Destructor<FakeResource> = Destructor::new("fake_destroy", fake_destroy);

fn fake_create(releases: &Arc<AtomicUsize>, destroy_status: c_int) -> NativeHandle<FakeResource> {
    let resource = Box::new(FakeResource {
        releases: Arc::clone(releases),
        destroy_status,
    });
    // SAFETY: the out-parameter is a valid pointer supplied by `acquire`.
    unsafe {
        NativeHandle::acquire("fake_create", FAKE_DESTRUCTOR, |out| {
            out.write(Box::into_raw(resource));
            0
        })
    }
    .expect("fake creation")
}

#[test]
fn test_handle_released_once_on_drop() {
    let releases = Arc::new(AtomicUsize::new(0));
    {
        let handle = fake_create(&releases, 0);
        assert!(!handle.is_released());
        assert_eq!(releases.load(Ordering::SeqCst), 0);
    }
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn test_handle_repeated_close_releases_once() {
    let releases = Arc::new(AtomicUsize::new(0));
    let mut handle = fake_create(&releases, 0);

    handle.close().expect("first close");
    handle.close().expect("second close");
    handle.close().expect("third close");
    assert!(handle.is_released());
    drop(handle);

    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn test_handle_use_after_close_is_rejected() {
    let releases = Arc::new(AtomicUsize::new(0));
    let mut handle = fake_create(&releases, 0);

    let seen = handle
        .with_handle("fake_use", |raw| !raw.is_null())
        .expect("live handle");
    assert!(seen);

    handle.close().expect("close");
    let mut called = false;
    let result = handle.with_handle("fake_use", |_| called = true);
    assert_eq!(
        result,
        Err(BotanError::InvalidHandleState {
            function: "fake_use"
        })
    );
    assert!(!called);
}

#[test]
fn test_handle_failed_destroy_still_released() {
    let releases = Arc::new(AtomicUsize::new(0));
    let mut handle = fake_create(&releases, -23);

    assert_eq!(
        handle.close(),
        Err(BotanError::NativeCallFailed {
            function: "fake_destroy",
            code: -23,
        })
    );
    assert!(handle.is_released());
    assert_eq!(handle.close(), Ok(()));
    drop(handle);
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}

#[test]
fn test_creation_negative_status() {
    // SAFETY: the closure never writes through the out-parameter.
    let result = unsafe { NativeHandle::acquire("fake_create", FAKE_DESTRUCTOR, |_| -20) };
    assert_eq!(
        result.err(),
        Some(BotanError::CreationFailed {
            function: "fake_create",
            reason: CreationFailure::Status(-20),
        })
    );
}

#[test]
fn test_creation_null_handle() {
    // SAFETY: the closure never writes through the out-parameter.
    let result = unsafe { NativeHandle::acquire("fake_create", FAKE_DESTRUCTOR, |_| 0) };
    assert_eq!(
        result.err(),
        Some(BotanError::CreationFailed {
            function: "fake_create",
            reason: CreationFailure::NullHandle,
        })
    );
}

#[test]
fn test_handle_moves_across_threads() {
    let releases = Arc::new(AtomicUsize::new(0));
    let handle = fake_create(&releases, 0);

    std::thread::spawn(move || drop(handle))
        .join()
        .expect("thread join");
    assert_eq!(releases.load(Ordering::SeqCst), 1);
}
