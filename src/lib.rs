// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hass_rest` - A Rust client for the Home Assistant REST API.
//!
//! This library provides an async client that maps each REST endpoint of a
//! Home Assistant hub to a typed method.
//!
//! # Supported Endpoints
//!
//! - **Read**: bootstrap, config, discovery info, events, services, states,
//!   camera pictures
//! - **Write**: update entity state, fire events, call services, render
//!   templates, event forwarding
//!
//! # Quick Start
//!
//! ```no_run
//! use hass_rest::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> hass_rest::Result<()> {
//!     let client = ApiClient::with_api_password("http://192.168.1.10:8123", "secret")?;
//!
//!     let config = client.get_config().await?;
//!     println!("Home Assistant {} in {}", config.version, config.time_zone);
//!
//!     let kitchen = client.get_state("light.kitchen").await?;
//!     println!("Kitchen light is {}", kitchen.state);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Calling a Discovered Service
//!
//! Services returned by [`ApiClient::get_services`] carry their own domain and
//! name, so they can be called directly:
//!
//! ```no_run
//! use hass_rest::ApiClient;
//! use serde_json::Map;
//!
//! # async fn example() -> hass_rest::Result<()> {
//! let client = ApiClient::new("http://192.168.1.10:8123")?;
//!
//! let domains = client.get_services().await?;
//! let light = domains.iter().find(|d| d.domain == "light");
//! if let Some(turn_on) = light.and_then(|d| d.service("turn_on")) {
//!     let changed = client
//!         .call_entity_service(turn_on, "light.kitchen", Map::new())
//!         .await?;
//!     println!("{} entities changed", changed.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every method returns [`Result`]. Failures identify their stage: transport
//! and non-success statuses are [`ProtocolError`]s, undecodable bodies are
//! [`ParseError`]s. Nothing is retried.

pub mod client;
pub mod error;
pub mod model;
pub mod request;

pub use client::{ApiClient, ClientConfig, Endpoint};
pub use error::{Error, ParseError, ProtocolError, Result};
pub use model::{
    Bootstrap, Config, DiscoveryInfo, EntityState, Event, MessageResponse, Service, ServiceDomain,
    ServiceField, TemperatureUnit, UnitSystem,
};
