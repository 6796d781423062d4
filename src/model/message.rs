// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generic acknowledgement response.

use serde::{Deserialize, Serialize};

/// A plain `{"message": "..."}` acknowledgement.
///
/// Returned by endpoints that confirm an action without returning data,
/// such as firing an event or configuring event forwarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message from the hub.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_message() {
        let json = r#"{"message": "Event download_file fired."}"#;
        let response: MessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message, "Event download_file fired.");
    }
}
