// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy usage query.

use super::Query;

/// Fetches the energy usage history of a device.
///
/// The backend addresses energy data by DSN and device type rather than by
/// junction ID.
#[derive(Debug, Clone)]
pub struct EnergyUseDataQuery {
    dsn: String,
    device_type: String,
}

impl EnergyUseDataQuery {
    /// Creates the query for a device.
    #[must_use]
    pub fn new(dsn: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            device_type: device_type.into(),
        }
    }
}

impl Query for EnergyUseDataQuery {
    fn operation(&self) -> &'static str {
        "getEnergyUseData"
    }

    fn document(&self) -> &'static str {
        r"
query getEnergyUseData($dsn: String!, $deviceType: DeviceType!) {
    getEnergyUseData(dsn: $dsn, deviceType: $deviceType) {
        average
        graphData {
            date
            kwh
        }
        lifetimeKwh
        startDate
    }
}
"
    }

    fn variables(&self) -> serde_json::Value {
        serde_json::json!({
            "dsn": self.dsn,
            "deviceType": self.device_type,
        })
    }
}
