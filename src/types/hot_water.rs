// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hot water availability and the Hot Water+ boost level.
//!
//! Heaters report hot water availability in one of two shapes depending on
//! their generation: a coarse `LOW`/`MEDIUM`/`HIGH` level, or a number
//! counting how much of the tank has been used. [`HotWaterStatus`] keeps the
//! two apart.

use std::fmt;

use crate::error::{ParameterError, ParseError};

/// Coarse hot water availability reported by some generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotWaterLevel {
    /// Little hot water left.
    Low,
    /// About half of the tank is hot.
    Medium,
    /// Tank is fully heated.
    High,
}

impl HotWaterLevel {
    /// Returns the wire name of this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }

    /// Parses a wire level, ignoring case.
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the approximate availability as a percentage.
    #[must_use]
    pub const fn percentage(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 50,
            Self::High => 100,
        }
    }
}

/// Hot water availability of a heater.
///
/// # Examples
///
/// ```
/// use aosmith_lib::types::{HotWaterLevel, HotWaterStatus};
///
/// let coarse = HotWaterStatus::Level(HotWaterLevel::Medium);
/// assert_eq!(coarse.percentage(), 50);
///
/// // The backend counts hot water *used*; 30% used means 70% available
/// let fine = HotWaterStatus::from_used_percentage(30).unwrap();
/// assert_eq!(fine, HotWaterStatus::Percentage(70));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotWaterStatus {
    /// Coarse level reported as `LOW`, `MEDIUM` or `HIGH`.
    Level(HotWaterLevel),
    /// Available hot water as a percentage (0-100).
    Percentage(u8),
}

impl HotWaterStatus {
    /// Builds a status from the backend's "percentage used" counter.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` if `used` is outside 0-100.
    pub fn from_used_percentage(used: i64) -> Result<Self, ParseError> {
        match u8::try_from(used) {
            Ok(used) if used <= 100 => Ok(Self::Percentage(100 - used)),
            _ => Err(ParseError::InvalidValue {
                field: "hotWaterStatus".to_string(),
                message: format!("{used} is out of range [0, 100]"),
            }),
        }
    }

    /// Returns the available hot water as a percentage.
    #[must_use]
    pub const fn percentage(&self) -> u8 {
        match self {
            Self::Level(level) => level.percentage(),
            Self::Percentage(value) => *value,
        }
    }
}

/// Hot Water+ boost level (0-3, where 0 is off).
///
/// # Examples
///
/// ```
/// use aosmith_lib::types::HotWaterPlusLevel;
///
/// let level = HotWaterPlusLevel::new(2).unwrap();
/// assert_eq!(level.value(), 2);
/// assert_eq!(HotWaterPlusLevel::from_wire("THREE").unwrap().value(), 3);
/// assert!(HotWaterPlusLevel::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HotWaterPlusLevel(u8);

const HOT_WATER_PLUS_NAMES: [&str; 4] = ["OFF", "ONE", "TWO", "THREE"];

impl HotWaterPlusLevel {
    /// Hot Water+ disabled.
    pub const OFF: Self = Self(0);

    /// Highest boost level.
    pub const MAX: u8 = 3;

    /// Creates a new level.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidHotWaterPlusLevel` if `value` exceeds 3.
    pub fn new(value: u8) -> Result<Self, ParameterError> {
        if value > Self::MAX {
            return Err(ParameterError::InvalidHotWaterPlusLevel(value));
        }
        Ok(Self(value))
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns whether the boost is active.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.0 > 0
    }

    /// Returns the wire name (`OFF`, `ONE`, `TWO`, `THREE`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        HOT_WATER_PLUS_NAMES[usize::from(self.0)]
    }

    /// Parses a wire name. Unknown names yield `None`.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        HOT_WATER_PLUS_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self)
    }
}

impl fmt::Display for HotWaterPlusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing_ignores_case() {
        assert_eq!(HotWaterLevel::from_wire("low"), Some(HotWaterLevel::Low));
        assert_eq!(HotWaterLevel::from_wire("Medium"), Some(HotWaterLevel::Medium));
        assert_eq!(HotWaterLevel::from_wire("HIGH"), Some(HotWaterLevel::High));
        assert_eq!(HotWaterLevel::from_wire("FULL"), None);
    }

    #[test]
    fn used_percentage_is_inverted() {
        assert_eq!(
            HotWaterStatus::from_used_percentage(0).unwrap(),
            HotWaterStatus::Percentage(100)
        );
        assert_eq!(
            HotWaterStatus::from_used_percentage(100).unwrap(),
            HotWaterStatus::Percentage(0)
        );
    }

    #[test]
    fn used_percentage_out_of_range() {
        assert!(HotWaterStatus::from_used_percentage(101).is_err());
        assert!(HotWaterStatus::from_used_percentage(-1).is_err());
    }

    #[test]
    fn level_and_percentage_stay_distinct() {
        let level = HotWaterStatus::Level(HotWaterLevel::High);
        let percentage = HotWaterStatus::Percentage(100);
        assert_eq!(level.percentage(), percentage.percentage());
        assert_ne!(level, percentage);
    }

    #[test]
    fn hot_water_plus_wire_names() {
        for value in 0..=HotWaterPlusLevel::MAX {
            let level = HotWaterPlusLevel::new(value).unwrap();
            assert_eq!(HotWaterPlusLevel::from_wire(level.as_str()), Some(level));
        }
        assert_eq!(HotWaterPlusLevel::from_wire("FOUR"), None);
        assert_eq!(HotWaterPlusLevel::from_wire(""), None);
    }

    #[test]
    fn hot_water_plus_range() {
        assert!(HotWaterPlusLevel::new(3).is_ok());
        assert_eq!(
            HotWaterPlusLevel::new(4),
            Err(ParameterError::InvalidHotWaterPlusLevel(4))
        );
        assert!(!HotWaterPlusLevel::OFF.is_on());
    }
}
