// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data model for Home Assistant REST resources.
//!
//! Every type here is a snapshot of hub-side data at the time it was
//! fetched. Nothing is kept in sync; fetch again to observe changes.

mod bootstrap;
mod config;
mod discovery;
mod event;
mod message;
pub mod service;
mod state;

pub use bootstrap::Bootstrap;
pub use config::{Config, TemperatureUnit, UnitSystem};
pub use discovery::DiscoveryInfo;
pub use event::Event;
pub use message::MessageResponse;
pub use service::{Service, ServiceDomain, ServiceField, materialize, materialize_all};
pub use state::EntityState;
