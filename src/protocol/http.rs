// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the GraphQL backend.

use std::fmt;
use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::protocol::{Protocol, QueryResponse};
use crate::query::Query;

// ============================================================================
// ApiConfig - Backend connection settings
// ============================================================================

/// Connection settings for the backend.
///
/// The backend only answers clients that identify as the vendor's mobile
/// app, so the brand, app version and user agent headers are part of the
/// configuration.
///
/// # Examples
///
/// ```
/// use aosmith_lib::protocol::ApiConfig;
/// use std::fmt;
/// use std::time::Duration;
///
/// // Defaults
/// let config = ApiConfig::new();
/// assert_eq!(config.graphql_url(), "https://r2.wh8.co/graphql");
///
/// // With all options
/// let config = ApiConfig::new()
///     .with_base_url("http://localhost:8080")
///     .with_timeout(Duration::from_secs(5))
///     .with_app_version("13.0.2")
///     .with_user_agent("okhttp/4.9.2");
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
    brand: String,
    app_version: String,
    user_agent: String,
}

impl ApiConfig {
    /// Default backend URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://r2.wh8.co";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);
    /// Brand header sent with every request.
    pub const DEFAULT_BRAND: &'static str = "aosmith";
    /// Mobile app version the client identifies as.
    pub const DEFAULT_APP_VERSION: &'static str = "13.0.2";
    /// User agent of the mobile app.
    pub const DEFAULT_USER_AGENT: &'static str = "okhttp/4.9.2";

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
            brand: Self::DEFAULT_BRAND.to_string(),
            app_version: Self::DEFAULT_APP_VERSION.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets the backend URL (scheme and host, without `/graphql`).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the brand header.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the app version header.
    #[must_use]
    pub fn with_app_version(mut self, app_version: impl Into<String>) -> Self {
        self.app_version = app_version.into();
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the backend URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an HTTP(S) URL or the HTTP
    /// client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProtocolError::InvalidAddress(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            client,
            config: self,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HttpClient - GraphQL over HTTP
// ============================================================================

/// HTTP client posting GraphQL requests to the backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        ApiConfig::new().into_client()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn map_send_error(&self, err: reqwest::Error) -> ProtocolError {
        if err.is_timeout() {
            let millis = u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX);
            ProtocolError::Timeout(millis)
        } else {
            ProtocolError::Http(err)
        }
    }
}

impl Protocol for HttpClient {
    async fn send_query<Q: Query + Sync>(
        &self,
        query: &Q,
        access_token: Option<&str>,
    ) -> Result<QueryResponse, ProtocolError> {
        let request = query.to_request();

        tracing::debug!(
            operation = query.operation(),
            variables = %redacted(query, &request.variables),
            authenticated = access_token.is_some(),
            "Sending GraphQL request"
        );

        let mut builder = self
            .client
            .post(self.config.graphql_url())
            .header("brand", &self.config.brand)
            .header("version", &self.config.app_version)
            .json(&request);

        if let Some(token) = access_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        tracing::debug!(status = response.status().as_u16(), "Received response");

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProtocolError::Unauthorized);
        }

        if !response.status().is_success() {
            return Err(ProtocolError::Status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        tracing::debug!(body = %redacted(query, &body), "Received response body");

        Ok(QueryResponse::new(body))
    }
}

/// Hides credentials of sensitive queries from logs.
fn redacted<'a, Q: Query>(query: &Q, text: &'a dyn fmt::Display) -> &'a dyn fmt::Display {
    if query.is_sensitive() {
        &"<redacted>"
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "https://r2.wh8.co");
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert_eq!(config.brand, "aosmith");
        assert_eq!(config.app_version, "13.0.2");
        assert_eq!(config.user_agent, "okhttp/4.9.2");
    }

    #[test]
    fn base_url_trailing_slash() {
        let config = ApiConfig::new().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.graphql_url(), "http://127.0.0.1:8080/graphql");
    }

    #[test]
    fn config_builder_chain() {
        let config = ApiConfig::new()
            .with_brand("other")
            .with_app_version("1.0")
            .with_user_agent("agent")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.brand, "other");
        assert_eq!(config.app_version, "1.0");
        assert_eq!(config.user_agent, "agent");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn into_client_rejects_non_http_url() {
        let result = ApiConfig::new().with_base_url("r2.wh8.co").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn login_is_redacted_in_logs() {
        let login = crate::query::LoginQuery::new("c2VjcmV0".to_string());
        let variables = login.variables();
        assert_eq!(redacted(&login, &variables).to_string(), "<redacted>");

        let status = crate::query::ServiceStatusQuery;
        let body = "{\"data\": {}}";
        assert_eq!(redacted(&status, &body).to_string(), body);
    }

    #[test]
    fn into_client_keeps_config() {
        let client = ApiConfig::new()
            .with_base_url("http://localhost:1234")
            .into_client()
            .unwrap();
        assert_eq!(client.config().graphql_url(), "http://localhost:1234/graphql");
    }
}
