// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Login, service status and mutation payloads.

use serde::Deserialize;

use crate::error::ParseError;

/// `data` of a login response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPayload {
    login: Option<LoginNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LoginNode {
    user: Option<LoginUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct LoginUser {
    tokens: Option<LoginTokens>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginTokens {
    access_token: Option<String>,
}

impl LoginPayload {
    /// Returns the access token.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the backend sent no access token.
    pub fn into_access_token(self) -> Result<String, ParseError> {
        self.login
            .and_then(|l| l.user)
            .and_then(|u| u.tokens)
            .and_then(|t| t.access_token)
            .ok_or_else(|| ParseError::MissingField("login.user.tokens.accessToken".to_string()))
    }
}

/// `data` of a service status response.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceStatusPayload {
    status: ServiceStatusNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceStatusNode {
    is_everything_okay: bool,
}

impl ServiceStatusPayload {
    /// Returns whether the backend reports normal operation.
    #[must_use]
    pub fn is_everything_okay(&self) -> bool {
        self.status.is_everything_okay
    }
}

/// `data` of a mutation response: the mutation name mapped to its result.
pub type MutationPayload = std::collections::HashMap<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_access_token() {
        let payload: LoginPayload = serde_json::from_str(
            r#"{"login": {"user": {"tokens": {"accessToken": "abc", "idToken": "x", "refreshToken": "y"}}}}"#,
        )
        .unwrap();
        assert_eq!(payload.into_access_token().unwrap(), "abc");
    }

    #[test]
    fn missing_access_token() {
        let payload: LoginPayload =
            serde_json::from_str(r#"{"login": {"user": null}}"#).unwrap();
        assert!(matches!(
            payload.into_access_token(),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn service_status() {
        let payload: ServiceStatusPayload =
            serde_json::from_str(r#"{"status": {"isEverythingOkay": true}}"#).unwrap();
        assert!(payload.is_everything_okay());
    }
}
