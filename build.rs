// Copyright (C) Microsoft Corporation. All rights reserved.

use std::env;
use std::process::Command;

/// pkg-config module names, newest first.
const BOTAN_MODULES: [&str; 2] = ["botan-3", "botan-2"];

fn pkg_config(module: &str, arg: &str) -> Option<String> {
    let result = Command::new("pkg-config").arg(module).arg(arg).output();
    let output = match result {
        Ok(output) => output,
        Err(_) => return None,
    };

    if !output.status.success() {
        // fall back
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

fn botan_lib_flags(module: &str) -> Option<Vec<String>> {
    pkg_config(module, "--libs").map(|flags| {
        flags
            .split_whitespace()
            .map(|flag| flag.to_owned())
            .collect()
    })
}

fn emit_linked(version: &str) {
    println!("cargo:rustc-cfg=botan_linked");
    println!("cargo:rustc-env=BOTAN_SAFE_BUILD_VERSION={}", version);
}

fn main() {
    println!("cargo:rustc-check-cfg=cfg(botan_linked)");
    println!("cargo:rerun-if-env-changed=BOTAN_LIB_DIR");
    println!("cargo:rerun-if-env-changed=BOTAN_LIB_NAME");
    println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");
    println!("cargo:rerun-if-changed=build.rs");

    // Explicit override wins over pkg-config.
    if let Ok(lib_dir) = env::var("BOTAN_LIB_DIR") {
        let lib_name = env::var("BOTAN_LIB_NAME").unwrap_or_else(|_| "botan-3".to_owned());
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:rustc-link-lib={}", lib_name);
        emit_linked("unknown");
        return;
    }

    for module in BOTAN_MODULES {
        let Some(lib_flags) = botan_lib_flags(module) else {
            continue;
        };
        let version = pkg_config(module, "--modversion").unwrap_or_default();
        println!("botan module {} version {}", module, version);
        println!("lib_flags: {:?}", lib_flags);

        for flag in &lib_flags {
            if let Some(dir) = flag.strip_prefix("-L") {
                println!("cargo:rustc-link-search=native={}", dir);
            } else if let Some(lib) = flag.strip_prefix("-l") {
                println!("cargo:rustc-link-lib={}", lib);
            }
        }

        emit_linked(&version);
        return;
    }

    println!(
        "cargo:warning=Botan library not found via pkg-config (botan-3, botan-2) or BOTAN_LIB_DIR; \
         only the FFI protocol core is built"
    );
}
