// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event listing entries.

use serde::{Deserialize, Serialize};

/// An event type known to the hub and how many listeners it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event type name.
    #[serde(rename = "event")]
    pub event_name: String,

    /// Number of listeners registered for this event type.
    pub listener_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_event_listing() {
        let json = r#"[
            {"event": "state_changed", "listener_count": 5},
            {"event": "time_changed", "listener_count": 2}
        ]"#;
        let events: Vec<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_name, "state_changed");
        assert_eq!(events[0].listener_count, 5);
    }

    #[test]
    fn negative_listener_count_is_rejected() {
        let json = r#"{"event": "x", "listener_count": -1}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }
}
