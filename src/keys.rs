//! Validator public key validation functions.

use crate::consts::cli_consts::PUBKEY_LEN;

/// Check if a given string is a well-formed BLS validator public key.
pub fn is_valid_validator_pubkey(pubkey: &str) -> bool {
    // Must be 98 characters: "0x" + 96 hex digits
    if pubkey.len() != PUBKEY_LEN {
        return false;
    }

    // Must start with "0x" or "0X"
    if !pubkey.starts_with("0x") && !pubkey.starts_with("0X") {
        return false;
    }

    // Check that the remaining 96 characters are all valid hex digits
    pubkey[2..].chars().all(|c| c.is_ascii_hexdigit())
}
