// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `aosmith_lib` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! client-side parameter validation, transport, response parsing, and errors
//! reported by the backend itself.

use thiserror::Error;

use crate::types::OperationMode;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The backend rejected the email address or password.
    #[error("invalid email address or password")]
    InvalidCredentials,

    /// A parameter was rejected before any request was sent.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// No compatible device with this junction ID is registered.
    #[error("device not found: {0}")]
    DeviceNotFound(String),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The backend answered with GraphQL errors.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A mutation was accepted but did not report success.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Client-side parameter validation failures.
///
/// These are raised before any mutation reaches the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// The setpoint is below the minimum accepted by every water heater.
    #[error("setpoint {actual} is below the minimum of {min}")]
    SetpointBelowMinimum {
        /// Minimum allowed setpoint.
        min: u16,
        /// The requested setpoint.
        actual: u16,
    },

    /// The setpoint is above the maximum reported by the device.
    #[error("setpoint {actual} is above the maximum of {max}")]
    SetpointAboveMaximum {
        /// Maximum setpoint reported by the device.
        max: u16,
        /// The requested setpoint.
        actual: u16,
    },

    /// The device does not list this operation mode.
    #[error("mode {0} is not supported by this device")]
    ModeNotSupported(OperationMode),

    /// A day count was given for a mode without day selection.
    #[error("days are not supported for mode {0}")]
    DaysNotSupported(OperationMode),

    /// The Hot Water+ level is outside 0-3.
    #[error("invalid Hot Water+ level {0}")]
    InvalidHotWaterPlusLevel(u8),

    /// A non-zero Hot Water+ level was given for a mode without Hot Water+.
    #[error("Hot Water+ is not supported for mode {0}")]
    HotWaterPlusNotSupportedForMode(OperationMode),

    /// A Hot Water+ level was given for a device without Hot Water+.
    #[error("Hot Water+ is not supported by this device")]
    HotWaterPlusNotSupportedForDevice,

    /// An operation mode string did not match any known mode.
    #[error("unknown operation mode: {0}")]
    UnknownMode(String),
}

/// Errors related to communication with the backend.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("received status code {0}")]
    Status(u16),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The backend rejected the access token.
    #[error("unauthorized")]
    Unauthorized,

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing backend responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// Errors reported by the backend in the GraphQL `errors` array.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .messages.join(", "))]
pub struct ApiError {
    /// The `message` of every reported error.
    pub messages: Vec<String>,
}

impl ApiError {
    /// Message sent when a device has not reported any energy usage yet.
    pub const NO_ENERGY_DATA: &'static str = "No data to display at this time.";

    /// Returns `true` if the backend reported that no energy usage data exists.
    #[must_use]
    pub fn is_energy_data_unavailable(&self) -> bool {
        self.messages.iter().any(|m| m == Self::NO_ENERGY_DATA)
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_error_display() {
        let err = ParameterError::OutOfRange {
            min: 1,
            max: 100,
            actual: 150,
        };
        assert_eq!(err.to_string(), "value 150 is out of range [1, 100]");
    }

    #[test]
    fn error_from_parameter_error() {
        let err: Error = ParameterError::InvalidHotWaterPlusLevel(4).into();
        assert!(matches!(
            err,
            Error::InvalidParameters(ParameterError::InvalidHotWaterPlusLevel(4))
        ));
    }

    #[test]
    fn mode_error_uses_wire_name() {
        let err = ParameterError::ModeNotSupported(OperationMode::HeatPump);
        assert_eq!(err.to_string(), "mode HEAT_PUMP is not supported by this device");
    }

    #[test]
    fn api_error_joins_messages() {
        let err = ApiError {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.to_string(), "first, second");
        assert!(!err.is_energy_data_unavailable());
    }

    #[test]
    fn api_error_detects_missing_energy_data() {
        let err = ApiError {
            messages: vec![ApiError::NO_ENERGY_DATA.to_string()],
        };
        assert!(err.is_energy_data_unavailable());
    }
}
