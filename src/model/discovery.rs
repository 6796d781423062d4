// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discovery information.

use serde::{Deserialize, Serialize};

/// Minimal hub information available without authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryInfo {
    /// URL the hub advertises for itself.
    #[serde(rename = "baseUrl", alias = "base_url")]
    pub base_url: String,

    /// Configured location name.
    pub location_name: String,

    /// Whether API calls need the `x-ha-access` password.
    pub requires_api_password: bool,

    /// Hub version string.
    pub version: String,
}
