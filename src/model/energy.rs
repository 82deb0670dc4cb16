// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy usage records.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

/// Energy consumption of a heater.
///
/// # Examples
///
/// ```
/// use aosmith_lib::model::EnergyUseData;
///
/// let data = EnergyUseData::default();
/// assert_eq!(data.lifetime_kwh, 0.0);
/// assert!(data.history.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnergyUseData {
    /// Energy used since installation, in kWh.
    pub lifetime_kwh: f64,
    /// Average consumption per sample, when reported.
    pub average_kwh: Option<f64>,
    /// Date of the first sample, as sent by the backend.
    pub start_date: Option<String>,
    /// Dated consumption samples.
    pub history: Vec<EnergyUseHistoryEntry>,
}

impl EnergyUseData {
    /// Returns the sum of all history samples, in kWh.
    #[must_use]
    pub fn history_total_kwh(&self) -> f64 {
        self.history.iter().map(|e| e.energy_use_kwh).sum()
    }
}

/// A single dated consumption sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyUseHistoryEntry {
    /// Sample date, as sent by the backend.
    pub date: String,
    /// Energy used, in kWh.
    pub energy_use_kwh: f64,
}

impl EnergyUseHistoryEntry {
    /// Parses the sample date.
    ///
    /// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates; returns
    /// `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use aosmith_lib::model::EnergyUseHistoryEntry;
    /// use chrono::NaiveDate;
    ///
    /// let entry = EnergyUseHistoryEntry {
    ///     date: "2024-02-03T00:00:00.000Z".to_string(),
    ///     energy_use_kwh: 1.5,
    /// };
    /// assert_eq!(entry.parsed_date(), NaiveDate::from_ymd_opt(2024, 2, 3));
    /// ```
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        DateTime::<FixedOffset>::parse_from_rfc3339(&self.date)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(&self.date, "%Y-%m-%d"))
            .ok()
    }
}

/// Raw dump of every registered device, for diagnostics.
///
/// Unlike [`Device`](crate::model::Device), this includes devices of
/// unsupported generations and every field the backend exposes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AllDeviceInfo {
    /// Device objects exactly as returned by the backend.
    pub devices: Vec<serde_json::Value>,
    /// Raw energy data keyed by junction ID, for devices where it could be
    /// fetched.
    pub energy_use_data: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, kwh: f64) -> EnergyUseHistoryEntry {
        EnergyUseHistoryEntry {
            date: date.to_string(),
            energy_use_kwh: kwh,
        }
    }

    #[test]
    fn parses_plain_dates() {
        assert_eq!(
            entry("2023-12-31", 0.0).parsed_date(),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
    }

    #[test]
    fn unknown_date_format() {
        assert_eq!(entry("Dec 31", 0.0).parsed_date(), None);
    }

    #[test]
    fn history_total() {
        let data = EnergyUseData {
            lifetime_kwh: 10.0,
            history: vec![entry("2024-01-01", 1.5), entry("2024-01-02", 2.0)],
            ..EnergyUseData::default()
        };
        assert!((data.history_total_kwh() - 3.5).abs() < f64::EPSILON);
    }
}
