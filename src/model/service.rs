// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Services and service domains.
//!
//! The hub lists services grouped by domain, and the per-service records on
//! the wire carry neither their domain nor their own name: both are implied
//! by where the record sits. [`materialize`] copies them into each
//! [`Service`] so the record can be used on its own, e.g. with
//! [`ApiClient::call_entity_service`](crate::ApiClient::call_entity_service).
//!
//! Two wire shapes are accepted for a listing:
//!
//! - an array of domains: `[{"domain": "light", "services": {...}}]`
//! - an object keyed by domain: `{"light": {"services": {...}}}`

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Metadata for one parameter accepted by a service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceField {
    /// What the parameter does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Example value. Non-string examples are kept as their JSON text.
    #[serde(
        default,
        deserialize_with = "example_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<String>,
}

/// One invocable service.
///
/// `domain` and `service_name` are empty straight out of the JSON decoder
/// and filled in by [`materialize`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Service {
    /// Domain the service belongs to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,

    /// Service name within its domain.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_name: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Accepted parameters by name.
    #[serde(default)]
    pub fields: BTreeMap<String, ServiceField>,
}

impl Service {
    /// Creates a service reference without fetching its metadata.
    #[must_use]
    pub fn new(domain: impl Into<String>, service_name: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            service_name: service_name.into(),
            ..Self::default()
        }
    }
}

/// Services grouped under one domain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDomain {
    /// Domain name.
    pub domain: String,

    /// Services by name.
    #[serde(default)]
    pub services: BTreeMap<String, Service>,
}

impl ServiceDomain {
    /// Looks up a service by name.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }
}

/// Copies the domain name and each service's key into the service records.
///
/// A domain without services is returned unchanged.
///
/// # Examples
///
/// ```
/// use hass_rest::model::{ServiceDomain, materialize};
///
/// let json = r#"{"domain": "light", "services": {"turn_on": {"description": "d"}}}"#;
/// let raw: ServiceDomain = serde_json::from_str(json).unwrap();
/// assert!(raw.services["turn_on"].domain.is_empty());
///
/// let domain = materialize(raw);
/// let service = domain.service("turn_on").unwrap();
/// assert_eq!(service.domain, "light");
/// assert_eq!(service.service_name, "turn_on");
/// ```
#[must_use]
pub fn materialize(mut domain: ServiceDomain) -> ServiceDomain {
    for (name, service) in &mut domain.services {
        service.domain.clone_from(&domain.domain);
        service.service_name.clone_from(name);
    }
    domain
}

/// Applies [`materialize`] to every domain of a listing.
#[must_use]
pub fn materialize_all(domains: Vec<ServiceDomain>) -> Vec<ServiceDomain> {
    domains.into_iter().map(materialize).collect()
}

/// A services listing in either wire shape, flattened to a list of domains.
///
/// Only `ServiceDomain::domain` is set here; service records still need
/// [`materialize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ServiceListing(pub(crate) Vec<ServiceDomain>);

impl<'de> Deserialize<'de> for ServiceListing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_listing(deserializer).map(Self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListing {
    List(Vec<ServiceDomain>),
    Keyed(BTreeMap<String, DomainBody>),
}

#[derive(Deserialize)]
struct DomainBody {
    #[serde(default)]
    services: BTreeMap<String, Service>,
}

/// Deserializes a services listing from either wire shape.
pub(crate) fn deserialize_listing<'de, D>(deserializer: D) -> Result<Vec<ServiceDomain>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawListing::deserialize(deserializer)? {
        RawListing::List(domains) => domains,
        RawListing::Keyed(domains) => domains
            .into_iter()
            .map(|(domain, body)| ServiceDomain {
                domain,
                services: body.services,
            })
            .collect(),
    })
}

fn example_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
