// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Water heater generations supported by the library.

use std::fmt;

/// Generation of a connected water heater.
///
/// The backend reports the generation through the GraphQL `__typename` of a
/// device's `data` object. Devices of any other generation (gas, tankless,
/// ...) are not supported and are skipped when listing devices.
///
/// # Examples
///
/// ```
/// use aosmith_lib::types::DeviceType;
///
/// let kind = DeviceType::from_typename("RE3Premium").unwrap();
/// assert_eq!(kind, DeviceType::Re3Premium);
/// assert!(kind.supports_hot_water_plus());
/// assert!(DeviceType::from_typename("Mustang").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Next generation heat pump water heater.
    NextGenHeatPump,
    /// Connected electric water heater.
    Re3Connected,
    /// Premium connected electric water heater with Hot Water+.
    Re3Premium,
}

const TYPENAMES: &[(&str, DeviceType)] = &[
    ("NextGenHeatPump", DeviceType::NextGenHeatPump),
    ("RE3Connected", DeviceType::Re3Connected),
    ("RE3Premium", DeviceType::Re3Premium),
];

const _: () = {
    let mut i = 0;
    while i < DeviceType::ALL.len() {
        let mut found = false;
        let mut j = 0;
        while j < TYPENAMES.len() {
            if TYPENAMES[j].1 as u8 == DeviceType::ALL[i] as u8 {
                found = true;
            }
            j += 1;
        }
        assert!(found, "device type without a typename");
        i += 1;
    }
};

impl DeviceType {
    /// Every supported generation.
    pub const ALL: [Self; 3] = [Self::NextGenHeatPump, Self::Re3Connected, Self::Re3Premium];

    /// Returns the GraphQL typename of this generation.
    #[must_use]
    pub fn typename(&self) -> &'static str {
        TYPENAMES
            .iter()
            .find(|(_, kind)| kind == self)
            .map_or("", |(name, _)| name)
    }

    /// Looks up a generation by GraphQL typename.
    #[must_use]
    pub fn from_typename(typename: &str) -> Option<Self> {
        TYPENAMES
            .iter()
            .find(|(name, _)| *name == typename)
            .map(|(_, kind)| *kind)
    }

    /// Returns whether this generation offers the Hot Water+ boost.
    #[must_use]
    pub const fn supports_hot_water_plus(&self) -> bool {
        matches!(self, Self::Re3Premium)
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.typename())
    }
}
