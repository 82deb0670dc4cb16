// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GraphQL operations understood by the backend.
//!
//! Every request is a GraphQL document plus its variables, posted to the
//! single `/graphql` endpoint.
//!
//! # Available Operations
//!
//! | Operation | Purpose | Login |
//! |-----------|---------|-------|
//! | [`LoginQuery`] | Exchange the passcode for tokens | no |
//! | [`ServiceStatusQuery`] | Backend health check | no |
//! | [`DevicesQuery`] | Devices with their status | yes |
//! | [`DevicesBasicInfoQuery`] | Device identification only | yes |
//! | [`AllDeviceDataQuery`] | Every field of every device | yes |
//! | [`EnergyUseDataQuery`] | Energy history of one device | yes |
//! | [`UpdateSetpointMutation`] | Change the target temperature | yes |
//! | [`UpdateModeMutation`] | Change the operation mode | yes |
//!
//! # Examples
//!
//! ```
//! use aosmith_lib::query::{Query, UpdateSetpointMutation};
//! use aosmith_lib::types::Setpoint;
//!
//! let mutation = UpdateSetpointMutation::new("junction-1", Setpoint::new(120).unwrap());
//! assert_eq!(mutation.operation(), "updateSetpoint");
//! assert_eq!(mutation.variables()["value"], 120);
//! ```

mod devices;
mod energy;
mod mutation;
mod session;

pub use devices::{AllDeviceDataQuery, DevicesBasicInfoQuery, DevicesQuery};
pub use energy::EnergyUseDataQuery;
pub use mutation::{ModeInput, UpdateModeMutation, UpdateSetpointMutation};
pub use session::{LoginQuery, ServiceStatusQuery};

use serde::Serialize;

/// A GraphQL operation that can be sent to the backend.
pub trait Query {
    /// Returns the operation name, used for logging.
    fn operation(&self) -> &'static str;

    /// Returns the GraphQL document.
    fn document(&self) -> &'static str;

    /// Returns the operation variables.
    fn variables(&self) -> serde_json::Value;

    /// Returns whether the request needs an access token.
    fn requires_login(&self) -> bool {
        true
    }

    /// Returns whether the variables or the answer carry credentials and
    /// must stay out of logs.
    fn is_sensitive(&self) -> bool {
        false
    }

    /// Returns the request body posted to the backend.
    fn to_request(&self) -> GraphQlRequest {
        GraphQlRequest {
            query: self.document(),
            variables: self.variables(),
        }
    }
}

/// JSON body of a GraphQL request.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    /// The GraphQL document.
    pub query: &'static str,
    /// The operation variables.
    pub variables: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(ServiceStatusQuery.to_request()).unwrap();
        assert_eq!(body["query"], "{ status { isEverythingOkay } }");
        assert_eq!(body["variables"], serde_json::json!({}));
    }

    #[test]
    fn only_session_queries_skip_login() {
        assert!(!ServiceStatusQuery.requires_login());
        assert!(!LoginQuery::new("passcode".to_string()).requires_login());
        assert!(DevicesQuery.requires_login());
        assert!(DevicesBasicInfoQuery.requires_login());
    }

    #[test]
    fn only_login_is_sensitive() {
        assert!(LoginQuery::new("passcode".to_string()).is_sensitive());
        assert!(!ServiceStatusQuery.is_sensitive());
        assert!(!DevicesQuery.is_sensitive());
    }
}
