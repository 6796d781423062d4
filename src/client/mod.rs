// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the Home Assistant REST API.
//!
//! [`ApiClient`] exposes one async method per endpoint. Every method sends
//! exactly one request; there is no caching, retry, or implicit timeout.
//! The client holds only its base URL and a `reqwest` connection pool, both
//! fixed at construction, so one instance can serve concurrent calls and
//! clones share the same pool.
//!
//! # Examples
//!
//! ```no_run
//! use hass_rest::ApiClient;
//!
//! # async fn example() -> hass_rest::Result<()> {
//! let client = ApiClient::with_api_password("http://hass.local:8123", "secret")?;
//!
//! for state in client.get_states().await? {
//!     println!("{} = {}", state.entity_id, state.state);
//! }
//!
//! client
//!     .call_service("light", "turn_on", &serde_json::json!({"entity_id": "light.kitchen"}))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod endpoint;

pub use config::{API_PASSWORD_HEADER, ClientConfig, normalize_base_url};
pub use endpoint::Endpoint;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ParseError, ProtocolError, Result};
use crate::model::service::ServiceListing;
use crate::model::{
    Bootstrap, Config, DiscoveryInfo, EntityState, Event, MessageResponse, Service, ServiceDomain,
    materialize_all,
};
use crate::request::{EventForwarding, ServiceCall, StateUpdate, TemplateRender, insert_entity_id};

/// Client for one Home Assistant hub.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Creates a client without an API password.
    ///
    /// # Errors
    ///
    /// Returns error if the address is invalid or the HTTP client cannot be
    /// created.
    pub fn new(base_url: impl AsRef<str>) -> std::result::Result<Self, ProtocolError> {
        ClientConfig::new(base_url).into_client()
    }

    /// Creates a client that sends `password` in the `x-ha-access` header.
    ///
    /// # Errors
    ///
    /// Returns error if the address or password is invalid or the HTTP client
    /// cannot be created.
    pub fn with_api_password(
        base_url: impl AsRef<str>,
        password: impl Into<String>,
    ) -> std::result::Result<Self, ProtocolError> {
        ClientConfig::new(base_url)
            .with_api_password(password)
            .into_client()
    }

    /// Returns the normalized base URL, ending in `/api/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the absolute URL of an endpoint.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Fetches configuration, events, services, and states in one call.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn get_bootstrap(&self) -> Result<Bootstrap> {
        let endpoint = Endpoint::Bootstrap;
        let mut bootstrap: Bootstrap = self
            .fetch_json(&endpoint, self.request(Method::GET, &endpoint))
            .await?;
        bootstrap.services = materialize_all(std::mem::take(&mut bootstrap.services));
        Ok(bootstrap)
    }

    /// Fetches the hub configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn get_config(&self) -> Result<Config> {
        self.get_json(&Endpoint::Config).await
    }

    /// Fetches discovery information.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn get_discovery_info(&self) -> Result<DiscoveryInfo> {
        self.get_json(&Endpoint::DiscoveryInfo).await
    }

    /// Lists event types and their listener counts.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn get_events(&self) -> Result<Vec<Event>> {
        self.get_json(&Endpoint::Events).await
    }

    /// Lists services by domain.
    ///
    /// Each returned [`Service`] knows its own domain and name.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn get_services(&self) -> Result<Vec<ServiceDomain>> {
        let listing: ServiceListing = self.get_json(&Endpoint::Services).await?;
        Ok(materialize_all(listing.0))
    }

    /// Fetches the states of all entities.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn get_states(&self) -> Result<Vec<EntityState>> {
        self.get_json(&Endpoint::States).await
    }

    /// Fetches the state of one entity.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails (the hub answers 404 for unknown
    /// entities) or the body cannot be parsed.
    pub async fn get_state(&self, entity_id: &str) -> Result<EntityState> {
        self.get_json(&Endpoint::State(entity_id)).await
    }

    /// Fetches the current image of a camera entity as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_camera_picture(&self, entity_id: &str) -> Result<Vec<u8>> {
        let endpoint = Endpoint::CameraProxy(entity_id);
        let response = self
            .send(&endpoint, self.request(Method::GET, &endpoint))
            .await?;
        let bytes = response.bytes().await.map_err(ProtocolError::Http)?;
        Ok(bytes.to_vec())
    }

    /// Sets the state and attributes of an entity.
    ///
    /// Only `state` and `attributes` are sent. Returns the state as stored by
    /// the hub.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn update_state(&self, state: &EntityState) -> Result<EntityState> {
        self.post_json(
            &Endpoint::State(&state.entity_id),
            &StateUpdate::from(state),
        )
        .await
    }

    /// Fires an event without event data.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn fire_event(&self, event_type: &str) -> Result<MessageResponse> {
        let endpoint = Endpoint::Event(event_type);
        self.fetch_json(&endpoint, self.request(Method::POST, &endpoint))
            .await
    }

    /// Fires an event, sending `event_data` as the request body.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn fire_event_with_data<T>(
        &self,
        event_type: &str,
        event_data: &T,
    ) -> Result<MessageResponse>
    where
        T: Serialize + ?Sized,
    {
        self.post_json(&Endpoint::Event(event_type), event_data)
            .await
    }

    /// Calls a service.
    ///
    /// The result lists every entity whose state changed while the service
    /// ran, which may include entities other than the ones targeted.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn call_service<T>(
        &self,
        domain: &str,
        service: &str,
        service_data: &T,
    ) -> Result<Vec<EntityState>>
    where
        T: Serialize + ?Sized,
    {
        tracing::debug!(domain, service, "Calling service");
        self.post_json(
            &Endpoint::Service { domain, service },
            &ServiceCall::new(service_data),
        )
        .await
    }

    /// Calls a materialized [`Service`] on one entity.
    ///
    /// `entity_id` is added to `fields` unless `fields` already has one or
    /// `entity_id` is empty. The field map is consumed.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn call_entity_service(
        &self,
        service: &Service,
        entity_id: &str,
        mut fields: Map<String, Value>,
    ) -> Result<Vec<EntityState>> {
        insert_entity_id(&mut fields, entity_id);
        self.call_service(&service.domain, &service.service_name, &fields)
            .await
    }

    /// Renders a template and returns the hub's output verbatim.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn run_template(&self, template: &str) -> Result<String> {
        let endpoint = Endpoint::Template;
        let request = self
            .request(Method::POST, &endpoint)
            .json(&TemplateRender { template });
        let response = self.send(&endpoint, request).await?;
        Ok(response.text().await.map_err(ProtocolError::Http)?)
    }

    /// Starts forwarding events to another hub.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn add_event_forwarding(
        &self,
        host: &str,
        api_password: Option<&str>,
        port: Option<u16>,
    ) -> Result<MessageResponse> {
        self.post_json(
            &Endpoint::EventForwarding,
            &EventForwarding::add(host, api_password, port),
        )
        .await
    }

    /// Stops forwarding events to another hub.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body cannot be parsed.
    pub async fn delete_event_forwarding(
        &self,
        host: &str,
        api_password: Option<&str>,
        port: Option<u16>,
    ) -> Result<MessageResponse> {
        self.post_json(
            &Endpoint::EventForwarding,
            &EventForwarding::delete(host, api_password, port),
        )
        .await
    }

    fn request(&self, method: Method, endpoint: &Endpoint<'_>) -> RequestBuilder {
        let url = self.url(endpoint);
        tracing::debug!(method = %method, url = %url, "Sending HTTP request");
        self.client.request(method, url)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<T> {
        self.fetch_json(endpoint, self.request(Method::GET, endpoint))
            .await
    }

    async fn post_json<B, T>(&self, endpoint: &Endpoint<'_>, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(Method::POST, endpoint).json(body);
        self.fetch_json(endpoint, request).await
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<'_>,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(endpoint, request).await?;
        let body = response.text().await.map_err(ProtocolError::Http)?;
        Ok(parse_body(endpoint, &body)?)
    }

    async fn send(&self, endpoint: &Endpoint<'_>, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(ProtocolError::Http)?;
        let status = response.status();

        tracing::debug!(endpoint = %endpoint, status = status.as_u16(), "Received HTTP response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProtocolError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            }
            .into());
        }

        Ok(response)
    }
}

fn parse_body<T: DeserializeOwned>(
    endpoint: &Endpoint<'_>,
    body: &str,
) -> std::result::Result<T, ParseError> {
    serde_json::from_str(body).map_err(|source| ParseError::Json {
        endpoint: endpoint.path(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + Clone>() {}

    #[test]
    fn client_is_shareable() {
        assert_send_sync::<ApiClient>();
    }

    #[test]
    fn endpoint_urls() {
        let client = ApiClient::new("HTTP://Hass.Local:8123/").unwrap();
        assert_eq!(client.base_url(), "http://hass.local:8123/api/");
        assert_eq!(
            client.url(&Endpoint::State("light.kitchen")),
            "http://hass.local:8123/api/states/light.kitchen"
        );
        assert_eq!(
            client.url(&Endpoint::Service {
                domain: "light",
                service: "turn_on"
            }),
            "http://hass.local:8123/api/light/turn_on"
        );
    }

    #[test]
    fn parse_body_reports_endpoint() {
        let err = parse_body::<Vec<Event>>(&Endpoint::Events, "not json").unwrap_err();
        let ParseError::Json { endpoint, .. } = err;
        assert_eq!(endpoint, "events");
    }

    #[test]
    fn parse_body_rejects_error_payload() {
        // A hub error message is not a valid state.
        let result = parse_body::<EntityState>(
            &Endpoint::State("light.x"),
            r#"{"message": "Entity not found."}"#,
        );
        assert!(result.is_err());
    }
}
