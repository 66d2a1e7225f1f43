// Copyright (C) Microsoft Corporation. All rights reserved.

//! Default parameters used when a caller does not choose one.

/// Initial capacity offered to variable-length output calls.
pub const DEFAULT_BUFFER_GUESS: usize = 4096;

/// Salt length, in bytes, recommended for password-based key derivation.
pub const DEFAULT_KDF_SALT_LENGTH: usize = 16;

/// Random number generator type passed to `botan_rng_init`.
pub const DEFAULT_RNG: &str = "system";

/// Default signature padding for a key algorithm name, if one is known.
pub fn default_emsa(algo: &str) -> Option<&'static str> {
    match algo {
        "RSA" => Some("EMSA4(SHA-256)"),
        "DSA" | "ECDSA" | "ECGDSA" | "ECKCDSA" => Some("EMSA1(SHA-256)"),
        "GOST-34.10" => Some("EMSA1(GOST-R-34.11-94)"),
        "Ed25519" => Some("Pure"),
        "SM2" => Some("SM3"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_emsa_known_algorithms() {
        assert_eq!(default_emsa("RSA"), Some("EMSA4(SHA-256)"));
        assert_eq!(default_emsa("ECDSA"), Some("EMSA1(SHA-256)"));
        assert_eq!(default_emsa("DSA"), Some("EMSA1(SHA-256)"));
        assert_eq!(default_emsa("Ed25519"), Some("Pure"));
    }

    #[test]
    fn test_default_emsa_unknown_algorithm() {
        assert_eq!(default_emsa("Curve25519"), None);
        assert_eq!(default_emsa(""), None);
    }
}
