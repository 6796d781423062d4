// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bootstrap aggregate.

use serde::{Deserialize, Serialize};

use super::service::deserialize_listing;
use super::{Config, EntityState, Event, ServiceDomain};

/// Everything needed to mirror a hub, fetched in one call.
///
/// Services returned by [`ApiClient::get_bootstrap`](crate::ApiClient::get_bootstrap)
/// are already materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bootstrap {
    /// Hub configuration.
    pub config: Config,

    /// Known event types.
    pub events: Vec<Event>,

    /// Services by domain.
    #[serde(deserialize_with = "deserialize_listing")]
    pub services: Vec<ServiceDomain>,

    /// Current entity states.
    pub states: Vec<EntityState>,
}
