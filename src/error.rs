// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hass_rest` library.
//!
//! Failures are split by the stage that produced them: building the client
//! or talking to the hub ([`ProtocolError`]) and decoding what the hub sent
//! back ([`ParseError`]).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during client setup or HTTP communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response body.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the HTTP status code if the hub answered with a non-success status.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol(ProtocolError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Errors related to client setup and HTTP communication.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The hub answered with a non-success status code.
    #[error("HTTP {status} {reason}: {body}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase, or `Unknown`.
        reason: String,
        /// Response body as returned by the hub.
        body: String,
    },

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The configured API password cannot be sent as a header value.
    #[error("API password is not a valid header value")]
    InvalidCredential,
}

/// Errors related to decoding hub responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not JSON or does not have the expected shape.
    #[error("invalid JSON from `{endpoint}`: {source}")]
    Json {
        /// Relative path of the endpoint that produced the body.
        endpoint: String,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
