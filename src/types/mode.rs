// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation modes of a water heater.

use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;

/// Behavior profile of a water heater.
///
/// # Examples
///
/// ```
/// use aosmith_lib::types::OperationMode;
///
/// let mode: OperationMode = "HEAT_PUMP".parse().unwrap();
/// assert_eq!(mode, OperationMode::HeatPump);
/// assert_eq!(mode.as_str(), "HEAT_PUMP");
///
/// // Older heaters call the electric mode "STANDARD"
/// assert_eq!("STANDARD".parse::<OperationMode>().unwrap(), OperationMode::Electric);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationMode {
    /// Resistive heating elements only.
    Electric,
    /// Temporary boost for visitors, exits after a number of days.
    Guest,
    /// Heat pump only.
    HeatPump,
    /// Heat pump with electric backup.
    Hybrid,
    /// Minimal heating, exits after a number of days.
    Vacation,
}

/// Wire names understood for each mode. The first entry for a mode is its
/// canonical name.
const MODE_NAMES: &[(&str, OperationMode)] = &[
    ("ELECTRIC", OperationMode::Electric),
    ("STANDARD", OperationMode::Electric),
    ("GUEST", OperationMode::Guest),
    ("HEAT_PUMP", OperationMode::HeatPump),
    ("HYBRID", OperationMode::Hybrid),
    ("VACATION", OperationMode::Vacation),
];

const _: () = {
    let mut i = 0;
    while i < OperationMode::ALL.len() {
        let mut found = false;
        let mut j = 0;
        while j < MODE_NAMES.len() {
            if MODE_NAMES[j].1 as u8 == OperationMode::ALL[i] as u8 {
                found = true;
            }
            j += 1;
        }
        assert!(found, "operation mode without a wire name");
        i += 1;
    }
};

impl OperationMode {
    /// Every operation mode.
    pub const ALL: [Self; 5] = [
        Self::Electric,
        Self::Guest,
        Self::HeatPump,
        Self::Hybrid,
        Self::Vacation,
    ];

    /// Returns the canonical wire name of this mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        MODE_NAMES
            .iter()
            .find(|(_, mode)| mode == self)
            .map_or("", |(name, _)| name)
    }

    /// Looks up a mode by its wire name.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        MODE_NAMES
            .iter()
            .find(|(wire, _)| *wire == name)
            .map(|(_, mode)| *mode)
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| ParameterError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_round_trips_through_canonical_name() {
        for mode in OperationMode::ALL {
            assert_eq!(OperationMode::from_wire(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn standard_is_an_alias_for_electric() {
        assert_eq!(
            OperationMode::from_wire("STANDARD"),
            Some(OperationMode::Electric)
        );
        assert_eq!(OperationMode::Electric.as_str(), "ELECTRIC");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = "TURBO".parse::<OperationMode>().unwrap_err();
        assert_eq!(err, ParameterError::UnknownMode("TURBO".to_string()));
    }

    #[test]
    fn wire_names_are_case_sensitive() {
        assert_eq!(OperationMode::from_wire("hybrid"), None);
    }
}
