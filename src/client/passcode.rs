// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Login passcode encoding.
//!
//! The backend expects the credentials as a JSON object, percent-encoded and
//! then base64-encoded. The JSON must match the mobile app byte for byte:
//! `", "` and `": "` separators, anything outside printable ASCII escaped
//! as `\uXXXX`.

use std::fmt::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encodes the login passcode for an email address and password.
pub(crate) fn build_passcode(email: &str, password: &str) -> String {
    let json = format!(
        "{{\"email\": {}, \"password\": {}}}",
        json_string(email),
        json_string(password)
    );
    // `/` stays literal in the app's percent-encoding.
    let encoded = urlencoding::encode(&json).replace("%2F", "/");
    STANDARD.encode(encoded)
}

fn json_string(value: &str) -> String {
    let escaped = serde_json::Value::from(value).to_string();
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        if (' '..='~').contains(&c) {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_plain_credentials() {
        assert_eq!(
            build_passcode("user@example.com", "secret"),
            "JTdCJTIyZW1haWwlMjIlM0ElMjAlMjJ1c2VyJTQwZXhhbXBsZS5jb20lMjIlMkMlMjAlMjJwYXNzd29yZCUyMiUzQSUyMCUyMnNlY3JldCUyMiU3RA=="
        );
    }

    #[test]
    fn keeps_slash_and_escapes_non_ascii() {
        assert_eq!(
            build_passcode("a/b@example.com", "pä/ss\""),
            "JTdCJTIyZW1haWwlMjIlM0ElMjAlMjJhL2IlNDBleGFtcGxlLmNvbSUyMiUyQyUyMCUyMnBhc3N3b3JkJTIyJTNBJTIwJTIycCU1Q3UwMGU0L3NzJTVDJTIyJTIyJTdE"
        );
    }

    #[test]
    fn escapes_delete_and_control_characters() {
        assert_eq!(json_string("\u{7f}\u{1}\t"), "\"\\u007f\\u0001\\t\"");
        assert_eq!(
            build_passcode("x~y", "\u{7f}\u{1}\t"),
            "JTdCJTIyZW1haWwlMjIlM0ElMjAlMjJ4fnklMjIlMkMlMjAlMjJwYXNzd29yZCUyMiUzQSUyMCUyMiU1Q3UwMDdmJTVDdTAwMDElNUN0JTIyJTdE"
        );
    }

    #[test]
    fn escapes_astral_characters_as_surrogate_pairs() {
        assert_eq!(json_string("😀"), "\"\\ud83d\\ude00\"");
    }
}
