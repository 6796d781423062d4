// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hub configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hub-wide configuration returned by `GET /api/config`.
///
/// # Examples
///
/// ```
/// use hass_rest::model::{Config, TemperatureUnit};
///
/// let json = r#"{
///     "components": ["sun", "light", "http"],
///     "latitude": 44.1234,
///     "longitude": 5.5678,
///     "location_home": "Home",
///     "time_zone": "Europe/Paris",
///     "version": "0.56.2",
///     "unit_system": {"length": "km", "mass": "g", "temperature": "°C", "volume": "L"}
/// }"#;
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.has_component("light"));
/// assert_eq!(config.temperature_unit(), Some(TemperatureUnit::Celsius));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Installed component identifiers.
    pub components: Vec<String>,

    /// Home latitude in degrees.
    pub latitude: f64,

    /// Home longitude in degrees.
    pub longitude: f64,

    /// Name of the home zone, on hubs that report it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_home: Option<String>,

    /// IANA time zone name.
    pub time_zone: String,

    /// Hub version string.
    pub version: String,

    /// Configured location name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    /// Home elevation in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,

    /// Units used by the hub.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_system: Option<UnitSystem>,
}

impl Config {
    /// Returns `true` if the given component is loaded.
    #[must_use]
    pub fn has_component(&self, component: &str) -> bool {
        self.components.iter().any(|c| c == component)
    }

    /// Returns the temperature unit, if the hub reports a known one.
    #[must_use]
    pub fn temperature_unit(&self) -> Option<TemperatureUnit> {
        self.unit_system
            .as_ref()
            .and_then(UnitSystem::temperature_unit)
    }
}

/// Unit symbols configured on the hub.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitSystem {
    /// Length unit symbol (`km`, `mi`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,

    /// Mass unit symbol (`g`, `lb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<String>,

    /// Temperature unit symbol (`°C`, `°F`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,

    /// Volume unit symbol (`L`, `gal`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

impl UnitSystem {
    /// Interprets the temperature symbol.
    #[must_use]
    pub fn temperature_unit(&self) -> Option<TemperatureUnit> {
        self.temperature
            .as_deref()
            .and_then(TemperatureUnit::from_symbol)
    }
}

/// Temperature scale used by the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Parses a unit symbol such as `°C` or `F`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim().trim_start_matches('°') {
            "C" | "c" => Some(Self::Celsius),
            "F" | "f" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// Returns the symbol the hub uses for this unit.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
