// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unauthenticated operations: login and service status.

use std::fmt;

use super::Query;

/// Exchanges a login passcode for access tokens.
#[derive(Clone)]
pub struct LoginQuery {
    passcode: String,
}

impl LoginQuery {
    /// Creates a login query for an encoded passcode.
    #[must_use]
    pub fn new(passcode: String) -> Self {
        Self { passcode }
    }
}

impl Query for LoginQuery {
    fn operation(&self) -> &'static str {
        "login"
    }

    fn document(&self) -> &'static str {
        "query login($passcode: String) { login(passcode: $passcode) { user { tokens { accessToken idToken refreshToken } } } }"
    }

    fn variables(&self) -> serde_json::Value {
        serde_json::json!({ "passcode": self.passcode })
    }

    fn requires_login(&self) -> bool {
        false
    }

    fn is_sensitive(&self) -> bool {
        true
    }
}

impl fmt::Debug for LoginQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginQuery").finish_non_exhaustive()
    }
}

/// Asks the backend whether it is operating normally.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceStatusQuery;

impl Query for ServiceStatusQuery {
    fn operation(&self) -> &'static str {
        "status"
    }

    fn document(&self) -> &'static str {
        "{ status { isEverythingOkay } }"
    }

    fn variables(&self) -> serde_json::Value {
        serde_json::json!({})
    }

    fn requires_login(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_carries_passcode() {
        let query = LoginQuery::new("abc".to_string());
        assert_eq!(query.variables(), serde_json::json!({ "passcode": "abc" }));
        assert!(query.document().contains("accessToken"));
    }
}
