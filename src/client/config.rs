// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};

use super::ApiClient;
use crate::error::ProtocolError;

/// Header carrying the shared API password.
pub const API_PASSWORD_HEADER: &str = "x-ha-access";

const API_SEGMENT: &str = "/api";

/// Configuration for an [`ApiClient`].
///
/// No timeout is applied unless one is set here; callers can also bound
/// individual calls with `tokio::time::timeout`.
///
/// # Examples
///
/// ```
/// use hass_rest::client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("http://hass.local:8123")
///     .with_api_password("secret")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://hass.local:8123/api/");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    api_password: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the hub at `base_url`.
    ///
    /// The URL is normalized with [`normalize_base_url`].
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            api_password: None,
            timeout: None,
        }
    }

    /// Sets the API password sent in the `x-ha-access` header.
    ///
    /// An empty password is treated as no password.
    #[must_use]
    pub fn with_api_password(mut self, password: impl Into<String>) -> Self {
        let password = password.into();
        self.api_password = (!password.is_empty()).then_some(password);
        self
    }

    /// Sets a timeout applied to every request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` if an API password is configured.
    #[must_use]
    pub fn has_api_password(&self) -> bool {
        self.api_password.is_some()
    }

    /// Returns the request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Creates an [`ApiClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the base URL is not a valid absolute URL
    /// - the password cannot be used as a header value
    /// - the HTTP client cannot be created
    pub fn into_client(self) -> Result<ApiClient, ProtocolError> {
        reqwest::Url::parse(&self.base_url)
            .map_err(|e| ProtocolError::InvalidAddress(format!("{}: {e}", self.base_url)))?;

        let mut headers = HeaderMap::new();
        if let Some(password) = &self.api_password {
            let mut value =
                HeaderValue::from_str(password).map_err(|_| ProtocolError::InvalidCredential)?;
            value.set_sensitive(true);
            headers.insert(API_PASSWORD_HEADER, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        tracing::debug!(
            base_url = %self.base_url,
            authenticated = self.api_password.is_some(),
            "Created Home Assistant API client"
        );

        Ok(ApiClient {
            base_url: self.base_url,
            client,
        })
    }
}

/// Normalizes a hub address to the API base URL.
///
/// The address is lower-cased, trailing slashes are dropped, `/api` is
/// appended unless already present, and a single trailing slash is added.
///
/// # Examples
///
/// ```
/// use hass_rest::client::normalize_base_url;
///
/// assert_eq!(normalize_base_url("HTTP://Host"), "http://host/api/");
/// assert_eq!(normalize_base_url("http://host/"), "http://host/api/");
/// assert_eq!(normalize_base_url("http://host/api"), "http://host/api/");
/// ```
#[must_use]
pub fn normalize_base_url(base_url: &str) -> String {
    let lowered = base_url.trim().to_lowercase();
    let mut url = lowered.trim_end_matches('/').to_string();
    if !url.ends_with(API_SEGMENT) {
        url.push_str(API_SEGMENT);
    }
    url.push('/');
    url
}
