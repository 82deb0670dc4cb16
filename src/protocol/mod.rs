// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport to the water heater backend.
//!
//! The backend exposes a single GraphQL endpoint. [`HttpClient`] posts
//! [`Query`] requests to it; the [`Protocol`] trait lets the
//! [`Client`](crate::Client) run over any other transport.

mod http;

pub use http::{ApiConfig, HttpClient};

use serde::de::DeserializeOwned;

use crate::error::ParseError;
use crate::query::Query;
use crate::response::GraphQlResponse;

/// Raw response to a GraphQL request.
#[derive(Debug, Clone)]
pub struct QueryResponse {
    /// The raw JSON response body.
    body: String,
}

impl QueryResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw JSON response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as a GraphQL envelope around `T`.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<GraphQlResponse<T>, ParseError> {
        crate::response::parse(&self.body)
    }
}

/// Trait for transports that can deliver GraphQL requests to the backend.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Sends a query and returns the raw response.
    ///
    /// # Arguments
    ///
    /// * `query` - The operation to send
    /// * `access_token` - Bearer token for authenticated operations
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Unauthorized` if the backend rejects the
    /// token, and another `ProtocolError` if the request fails.
    async fn send_query<Q: Query + Sync>(
        &self,
        query: &Q,
        access_token: Option<&str>,
    ) -> Result<QueryResponse, crate::error::ProtocolError>;
}
