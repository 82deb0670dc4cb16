// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for backend GraphQL responses.
//!
//! Every response is a GraphQL envelope (`data` and/or `errors`). This module
//! unwraps the envelope, classifies reported errors, and maps the vendor's
//! JSON shapes onto the records in [`crate::model`].

mod device;
mod energy;
mod session;

pub use device::{DeviceNode, DevicesPayload};
pub use energy::{EnergyUseDataNode, EnergyUseDataPayload};
pub use session::{LoginPayload, MutationPayload, ServiceStatusPayload};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Error, ParseError};

/// Error code the backend attaches to a rejected login.
const INVALID_CREDENTIALS_CODE: &str = "INVALID_CREDENTIALS";

/// A GraphQL response envelope.
///
/// # Examples
///
/// ```
/// use aosmith_lib::response::GraphQlResponse;
///
/// let json = r#"{"data": {"updateMode": true}}"#;
/// let response: GraphQlResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
/// assert_eq!(response.into_data().unwrap()["updateMode"], true);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Operation result.
    pub data: Option<T>,
    /// Errors reported by the backend.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQlError {
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Vendor specific details.
    #[serde(default)]
    pub extensions: Option<GraphQlErrorExtensions>,
}

/// Vendor specific error details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQlErrorExtensions {
    /// Machine readable error code.
    pub code: Option<String>,
}

impl GraphQlError {
    fn code(&self) -> Option<&str> {
        self.extensions.as_ref().and_then(|e| e.code.as_deref())
    }
}

impl<T> GraphQlResponse<T> {
    /// Returns the operation result, or the errors the backend reported.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidCredentials` if any error carries the
    ///   `INVALID_CREDENTIALS` code
    /// - `Error::Api` for any other reported error
    /// - `Error::Parse` if neither data nor errors are present
    pub fn into_data(self) -> Result<T, Error> {
        if !self.errors.is_empty() {
            if self
                .errors
                .iter()
                .any(|e| e.code() == Some(INVALID_CREDENTIALS_CODE))
            {
                return Err(Error::InvalidCredentials);
            }
            return Err(ApiError {
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            }
            .into());
        }

        self.data
            .ok_or_else(|| ParseError::MissingField("data".to_string()).into())
    }
}

/// Parses a raw response body into a typed GraphQL envelope.
///
/// # Errors
///
/// Returns `ParseError::Json` if the body does not match `T`.
pub fn parse<T: DeserializeOwned>(body: &str) -> Result<GraphQlResponse<T>, ParseError> {
    serde_json::from_str(body).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> GraphQlResponse<serde_json::Value> {
        parse(json).unwrap()
    }

    #[test]
    fn invalid_credentials_code() {
        let response = envelope(
            r#"{"errors": [{"message": "Invalid", "extensions": {"code": "INVALID_CREDENTIALS"}}]}"#,
        );
        assert!(matches!(response.into_data(), Err(Error::InvalidCredentials)));
    }

    #[test]
    fn other_errors_keep_messages() {
        let response = envelope(
            r#"{"data": null, "errors": [{"message": "one"}, {"message": "two", "extensions": {}}]}"#,
        );
        match response.into_data() {
            Err(Error::Api(err)) => assert_eq!(err.messages, vec!["one", "two"]),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn errors_win_over_data() {
        let response = envelope(r#"{"data": {"devices": []}, "errors": [{"message": "oops"}]}"#);
        assert!(matches!(response.into_data(), Err(Error::Api(_))));
    }

    #[test]
    fn missing_data() {
        let response = envelope("{}");
        assert!(matches!(
            response.into_data(),
            Err(Error::Parse(ParseError::MissingField(field))) if field == "data"
        ));
    }

    #[test]
    fn malformed_body() {
        assert!(parse::<serde_json::Value>("not json").is_err());
    }
}
