// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client builder.

use std::fmt;
use std::time::Duration;

use crate::client::Client;
use crate::error::Error;
use crate::protocol::{ApiConfig, HttpClient};

/// Builder for clients talking to the backend over HTTP.
///
/// # Examples
///
/// ```no_run
/// use aosmith_lib::Client;
/// use std::time::Duration;
///
/// # async fn example() -> aosmith_lib::Result<()> {
/// // Lazy login on first use
/// let client = Client::builder("user@example.com", "password")
///     .with_timeout(Duration::from_secs(10))
///     .build()?;
///
/// // Check the credentials right away
/// let client = Client::builder("user@example.com", "password")
///     .build_and_login()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    email: String,
    password: String,
    config: ApiConfig,
}

impl ClientBuilder {
    pub(crate) fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            config: ApiConfig::new(),
        }
    }

    /// Replaces the whole connection configuration.
    #[must_use]
    pub fn with_config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the backend URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Returns the connection configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Builds the client without contacting the backend.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Client<HttpClient>, Error> {
        let protocol = self.config.into_client()?;
        Ok(Client::with_protocol(protocol, self.email, self.password))
    }

    /// Builds the client and logs in immediately.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The base URL is invalid
    /// - The backend cannot be reached
    /// - The credentials are rejected (`Error::InvalidCredentials`)
    pub async fn build_and_login(self) -> Result<Client<HttpClient>, Error> {
        let client = self.build()?;
        client.login().await?;
        Ok(client)
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("email", &self.email)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;

    #[test]
    fn defaults_to_production_backend() {
        let builder = ClientBuilder::new("user@example.com", "password");
        assert_eq!(builder.config().base_url(), ApiConfig::DEFAULT_BASE_URL);
    }

    #[test]
    fn options_reach_config() {
        let builder = ClientBuilder::new("user@example.com", "password")
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(2));
        assert_eq!(builder.config().graphql_url(), "http://localhost:8080/graphql");
        assert_eq!(builder.config().timeout(), Duration::from_secs(2));
    }

    #[test]
    fn build_does_not_log_in() {
        let client = ClientBuilder::new("user@example.com", "password")
            .with_base_url("http://localhost:8080")
            .build()
            .unwrap();
        assert!(!client.is_logged_in());
        assert_eq!(
            client.protocol().config().graphql_url(),
            "http://localhost:8080/graphql"
        );
    }

    #[test]
    fn debug_hides_password() {
        let builder = ClientBuilder::new("user@example.com", "hunter2-secret");
        let debug = format!("{builder:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2-secret"));
    }

    #[test]
    fn invalid_base_url() {
        let result = ClientBuilder::new("user@example.com", "password")
            .with_base_url("ftp://localhost")
            .build();
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::InvalidAddress(_)))
        ));
    }
}
