// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setpoint and day-count types used when changing a heater's settings.

use std::fmt;

use crate::error::ParameterError;

/// Target water temperature in degrees Fahrenheit.
///
/// Every heater accepts 95°F and above. The upper bound depends on the device
/// and is checked against [`DeviceStatus::temperature_setpoint_maximum`].
///
/// [`DeviceStatus::temperature_setpoint_maximum`]: crate::model::DeviceStatus::temperature_setpoint_maximum
///
/// # Examples
///
/// ```
/// use aosmith_lib::types::Setpoint;
///
/// let setpoint = Setpoint::new(120).unwrap();
/// assert_eq!(setpoint.value(), 120);
/// assert!(Setpoint::new(90).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Setpoint(u16);

impl Setpoint {
    /// Lowest setpoint accepted by any heater.
    pub const MIN: u16 = 95;

    /// Creates a new setpoint.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::SetpointBelowMinimum` below 95°F.
    pub fn new(value: u16) -> Result<Self, ParameterError> {
        if value < Self::MIN {
            return Err(ParameterError::SetpointBelowMinimum {
                min: Self::MIN,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the temperature.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Setpoint {
    type Error = ParameterError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Setpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F", self.0)
    }
}

/// Number of days before a timed mode (vacation, guest, ...) exits.
///
/// # Examples
///
/// ```
/// use aosmith_lib::types::ModeDays;
///
/// assert_eq!(ModeDays::new(5).unwrap().value(), 5);
/// assert_eq!(ModeDays::default().value(), 100);
/// assert!(ModeDays::new(0).is_err());
/// assert!(ModeDays::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModeDays(u8);

impl ModeDays {
    /// Minimum number of days.
    pub const MIN: u8 = 1;
    /// Maximum number of days, also used when none is given.
    pub const MAX: u8 = 100;

    /// Creates a new day count.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` outside 1-100.
    pub fn new(value: u8) -> Result<Self, ParameterError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ParameterError::OutOfRange {
                min: u16::from(Self::MIN),
                max: u16::from(Self::MAX),
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the number of days.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ModeDays {
    fn default() -> Self {
        Self(Self::MAX)
    }
}
