// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relative paths of the hub's REST endpoints.

use std::fmt;

/// One REST endpoint, relative to the normalized `.../api/` base URL.
///
/// Caller-supplied segments are percent-encoded.
///
/// # Examples
///
/// ```
/// use hass_rest::client::Endpoint;
///
/// assert_eq!(Endpoint::State("light.kitchen").path(), "states/light.kitchen");
/// assert_eq!(Endpoint::Service { domain: "light", service: "turn_on" }.path(), "light/turn_on");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `bootstrap`
    Bootstrap,
    /// `config`
    Config,
    /// `discovery_info`
    DiscoveryInfo,
    /// `events`
    Events,
    /// `events/<event_type>`
    Event(&'a str),
    /// `services`
    Services,
    /// `<domain>/<service>`
    Service {
        /// Service domain.
        domain: &'a str,
        /// Service name.
        service: &'a str,
    },
    /// `states`
    States,
    /// `states/<entity_id>`
    State(&'a str),
    /// `camera_proxy/<entity_id>`
    CameraProxy(&'a str),
    /// `template`
    Template,
    /// `event_forwarding`
    EventForwarding,
}

impl Endpoint<'_> {
    /// Returns the path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Bootstrap => "bootstrap".to_string(),
            Self::Config => "config".to_string(),
            Self::DiscoveryInfo => "discovery_info".to_string(),
            Self::Events => "events".to_string(),
            Self::Event(event_type) => format!("events/{}", urlencoding::encode(event_type)),
            Self::Services => "services".to_string(),
            Self::Service { domain, service } => format!(
                "{}/{}",
                urlencoding::encode(domain),
                urlencoding::encode(service)
            ),
            Self::States => "states".to_string(),
            Self::State(entity_id) => format!("states/{}", urlencoding::encode(entity_id)),
            Self::CameraProxy(entity_id) => {
                format!("camera_proxy/{}", urlencoding::encode(entity_id))
            }
            Self::Template => "template".to_string(),
            Self::EventForwarding => "event_forwarding".to_string(),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
