// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy usage response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::model::{EnergyUseData, EnergyUseHistoryEntry};

/// `data` of an energy usage response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyUseDataPayload {
    /// The energy usage object, absent if the backend returned nothing.
    pub get_energy_use_data: Option<serde_json::Value>,
}

impl EnergyUseDataPayload {
    /// Maps the payload to [`EnergyUseData`].
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the object is absent or lacks
    /// `lifetimeKwh`/`graphData`.
    pub fn into_energy_use_data(self) -> Result<EnergyUseData, ParseError> {
        let raw = self
            .get_energy_use_data
            .filter(|v| !v.is_null())
            .ok_or_else(|| ParseError::MissingField("getEnergyUseData".to_string()))?;
        Ok(serde_json::from_value::<EnergyUseDataNode>(raw)?.into())
    }
}

/// Energy usage of a device, as sent by the backend.
///
/// # Examples
///
/// ```
/// use aosmith_lib::response::EnergyUseDataNode;
/// use aosmith_lib::model::EnergyUseData;
///
/// let json = r#"{
///     "average": 2.5,
///     "graphData": [{"date": "2024-01-01", "kwh": 2.0}, {"date": "2024-01-02", "kwh": 3}],
///     "lifetimeKwh": 1520.5,
///     "startDate": "2023-01-01"
/// }"#;
/// let node: EnergyUseDataNode = serde_json::from_str(json).unwrap();
/// let data = EnergyUseData::from(node);
/// assert_eq!(data.history.len(), 2);
/// assert_eq!(data.history[1].energy_use_kwh, 3.0);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyUseDataNode {
    lifetime_kwh: f64,
    graph_data: Vec<GraphDataNode>,
    #[serde(default)]
    average: Option<f64>,
    #[serde(default)]
    start_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct GraphDataNode {
    date: String,
    kwh: f64,
}

impl From<EnergyUseDataNode> for EnergyUseData {
    fn from(node: EnergyUseDataNode) -> Self {
        Self {
            lifetime_kwh: node.lifetime_kwh,
            average_kwh: node.average,
            start_date: node.start_date,
            history: node
                .graph_data
                .into_iter()
                .map(|g| EnergyUseHistoryEntry {
                    date: g.date,
                    energy_use_kwh: g.kwh,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_history() {
        let payload: EnergyUseDataPayload = serde_json::from_str(
            r#"{"getEnergyUseData": {"graphData": [{"date": "2024-03-01T00:00:00Z", "kwh": 1.25}], "lifetimeKwh": 42}}"#,
        )
        .unwrap();
        let data = payload.into_energy_use_data().unwrap();
        assert!((data.lifetime_kwh - 42.0).abs() < f64::EPSILON);
        assert_eq!(data.history[0].date, "2024-03-01T00:00:00Z");
        assert_eq!(data.average_kwh, None);
    }

    #[test]
    fn missing_object() {
        let payload: EnergyUseDataPayload =
            serde_json::from_str(r#"{"getEnergyUseData": null}"#).unwrap();
        assert!(matches!(
            payload.into_energy_use_data(),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn missing_lifetime_total() {
        let payload: EnergyUseDataPayload =
            serde_json::from_str(r#"{"getEnergyUseData": {"graphData": []}}"#).unwrap();
        assert!(matches!(
            payload.into_energy_use_data(),
            Err(ParseError::Json(_))
        ));
    }
}
