// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request bodies for the mutating endpoints.
//!
//! Each type serializes to exactly the JSON the hub expects. Optional fields
//! that are `None` are left out of the body rather than sent as `null`.
//!
//! | Body | Endpoint |
//! |------|----------|
//! | [`StateUpdate`] | `POST states/<entity_id>` |
//! | [`ServiceCall`] | `POST <domain>/<service>` |
//! | [`TemplateRender`] | `POST template` |
//! | [`EventForwarding`] | `POST event_forwarding` |

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::EntityState;

/// Key the hub uses to target entities in service data.
pub const ENTITY_ID: &str = "entity_id";

/// Body of a state update: only the state value and the attributes.
///
/// # Examples
///
/// ```
/// use hass_rest::model::EntityState;
/// use hass_rest::request::StateUpdate;
///
/// let state = EntityState::new("sensor.door", "open").with_attribute("battery", 80);
/// let body = serde_json::to_value(StateUpdate::from(&state)).unwrap();
/// assert_eq!(body, serde_json::json!({"state": "open", "attributes": {"battery": 80}}));
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StateUpdate<'a> {
    /// New state value.
    pub state: &'a str,
    /// New attribute set.
    pub attributes: &'a Map<String, Value>,
}

impl<'a> From<&'a EntityState> for StateUpdate<'a> {
    fn from(state: &'a EntityState) -> Self {
        Self {
            state: &state.state,
            attributes: &state.attributes,
        }
    }
}

/// Body of a service call, wrapping the caller's data as `serviceData`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceCall<'a, T: ?Sized> {
    /// Service data, serialized as given.
    #[serde(rename = "serviceData")]
    pub service_data: &'a T,
}

impl<'a, T: ?Sized> ServiceCall<'a, T> {
    /// Wraps service data.
    #[must_use]
    pub fn new(service_data: &'a T) -> Self {
        Self { service_data }
    }
}

/// Body of a template rendering request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateRender<'a> {
    /// Template source.
    pub template: &'a str,
}

/// Body of an event forwarding request.
///
/// Removal goes through the same `POST` endpoint with an `_METHOD: DELETE`
/// override in the body, which is what the hub's event forwarding API reads.
///
/// # Examples
///
/// ```
/// use hass_rest::request::EventForwarding;
///
/// let body = serde_json::to_value(EventForwarding::delete("10.0.0.2", None, None)).unwrap();
/// assert_eq!(body, serde_json::json!({"host": "10.0.0.2", "_METHOD": "DELETE"}));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventForwarding<'a> {
    /// Host to forward events to.
    pub host: &'a str,

    /// API password of the receiving hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_password: Option<&'a str>,

    /// Port of the receiving hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(rename = "_METHOD", skip_serializing_if = "Option::is_none")]
    method_override: Option<&'static str>,
}

impl<'a> EventForwarding<'a> {
    /// Body that sets up forwarding.
    #[must_use]
    pub fn add(host: &'a str, api_password: Option<&'a str>, port: Option<u16>) -> Self {
        Self {
            host,
            api_password,
            port,
            method_override: None,
        }
    }

    /// Body that removes forwarding.
    #[must_use]
    pub fn delete(host: &'a str, api_password: Option<&'a str>, port: Option<u16>) -> Self {
        Self {
            method_override: Some("DELETE"),
            ..Self::add(host, api_password, port)
        }
    }

    /// Returns `true` if this body removes forwarding.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.method_override.is_some()
    }
}

/// Adds `entity_id` to service fields unless the caller already set one.
///
/// Nothing is inserted when `entity_id` is empty.
///
/// # Examples
///
/// ```
/// use hass_rest::request::insert_entity_id;
/// use serde_json::{Map, Value};
///
/// let mut fields = Map::new();
/// fields.insert("entity_id".into(), Value::from("light.hall"));
/// insert_entity_id(&mut fields, "light.kitchen");
/// assert_eq!(fields["entity_id"], "light.hall");
/// ```
pub fn insert_entity_id(fields: &mut Map<String, Value>, entity_id: &str) {
    if entity_id.is_empty() || fields.contains_key(ENTITY_ID) {
        return;
    }
    fields.insert(ENTITY_ID.to_string(), Value::from(entity_id));
}
