// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The state of one entity as reported by `GET /api/states`.
///
/// Attributes are schema-less: their shape depends on the entity's
/// integration, so they are kept as raw JSON values.
///
/// # Examples
///
/// ```
/// use hass_rest::model::EntityState;
///
/// let json = r#"{
///     "entity_id": "light.kitchen",
///     "state": "on",
///     "attributes": {"brightness": 180, "friendly_name": "Kitchen"},
///     "last_changed": "2016-05-30T21:43:32.418320+00:00",
///     "last_updated": "2016-05-30T21:43:32.418320+00:00"
/// }"#;
/// let state: EntityState = serde_json::from_str(json).unwrap();
/// assert_eq!(state.domain(), "light");
/// assert_eq!(state.friendly_name(), Some("Kitchen"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    /// Entity identifier, `<domain>.<object_id>`.
    pub entity_id: String,

    /// Current state value.
    pub state: String,

    /// Entity attributes.
    #[serde(default)]
    pub attributes: Map<String, Value>,

    /// Last time the state value changed.
    pub last_changed: DateTime<Utc>,

    /// Last time the state or any attribute was written.
    pub last_updated: DateTime<Utc>,
}

impl EntityState {
    /// Creates a state to push with
    /// [`ApiClient::update_state`](crate::ApiClient::update_state).
    ///
    /// Timestamps are owned by the hub; locally built states carry the Unix
    /// epoch until the hub returns the canonical values.
    #[must_use]
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: Map::new(),
            last_changed: DateTime::<Utc>::UNIX_EPOCH,
            last_updated: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Adds or replaces an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the domain part of the entity id (`light` for `light.kitchen`).
    ///
    /// Returns the whole id if it contains no `.`.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.entity_id
            .split_once('.')
            .map_or(self.entity_id.as_str(), |(domain, _)| domain)
    }

    /// Returns the object id part of the entity id (`kitchen` for `light.kitchen`).
    #[must_use]
    pub fn object_id(&self) -> Option<&str> {
        self.entity_id
            .split_once('.')
            .map(|(_, object_id)| object_id)
    }

    /// Returns a single attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Returns the `friendly_name` attribute if it is a string.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.attribute("friendly_name").and_then(Value::as_str)
    }
}
