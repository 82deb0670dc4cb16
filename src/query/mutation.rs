// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mutations changing a heater's settings.
//!
//! Both mutations answer with a bare boolean; anything but `true` means the
//! change was not accepted.

use serde::Serialize;

use super::Query;
use crate::types::{HotWaterPlusLevel, ModeDays, Setpoint};

/// Sets the target temperature of a heater.
#[derive(Debug, Clone)]
pub struct UpdateSetpointMutation {
    junction_id: String,
    setpoint: Setpoint,
}

impl UpdateSetpointMutation {
    /// Creates the mutation.
    #[must_use]
    pub fn new(junction_id: impl Into<String>, setpoint: Setpoint) -> Self {
        Self {
            junction_id: junction_id.into(),
            setpoint,
        }
    }
}

impl Query for UpdateSetpointMutation {
    fn operation(&self) -> &'static str {
        "updateSetpoint"
    }

    fn document(&self) -> &'static str {
        "mutation updateSetpoint($junctionId: String!, $value: Int!) { updateSetpoint(junctionId: $junctionId, value: $value) }"
    }

    fn variables(&self) -> serde_json::Value {
        serde_json::json!({
            "junctionId": self.junction_id,
            "value": self.setpoint.value(),
        })
    }
}

/// The `ModeInput` object of the `updateMode` mutation.
///
/// Build it through [`ModeChange`](crate::client::ModeChange), which checks
/// the combination against the target device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInput {
    /// Mode name, as originally reported by the device.
    pub mode: String,
    /// Days before the mode exits, for modes with day selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u8>,
    /// Hot Water+ level, always present on heaters with Hot Water+.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_water_plus_level: Option<u8>,
}

impl ModeInput {
    pub(crate) fn new(
        mode: impl Into<String>,
        days: Option<ModeDays>,
        hot_water_plus_level: Option<HotWaterPlusLevel>,
    ) -> Self {
        Self {
            mode: mode.into(),
            days: days.map(|d| d.value()),
            hot_water_plus_level: hot_water_plus_level.map(|l| l.value()),
        }
    }
}

/// Switches a heater to another operation mode.
#[derive(Debug, Clone)]
pub struct UpdateModeMutation {
    junction_id: String,
    mode: ModeInput,
}

impl UpdateModeMutation {
    /// Creates the mutation.
    #[must_use]
    pub fn new(junction_id: impl Into<String>, mode: ModeInput) -> Self {
        Self {
            junction_id: junction_id.into(),
            mode,
        }
    }
}

impl Query for UpdateModeMutation {
    fn operation(&self) -> &'static str {
        "updateMode"
    }

    fn document(&self) -> &'static str {
        "mutation updateMode($junctionId: String!, $mode: ModeInput!) { updateMode(junctionId: $junctionId, mode: $mode) }"
    }

    fn variables(&self) -> serde_json::Value {
        serde_json::json!({
            "junctionId": self.junction_id,
            "mode": self.mode,
        })
    }
}
