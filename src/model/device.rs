// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device records.

use crate::types::{DeviceType, HotWaterPlusLevel, HotWaterStatus, OperationMode};

/// A registered water heater.
///
/// Devices are built fresh from every device list fetched from the backend
/// and are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Brand name.
    pub brand: String,
    /// Model number.
    pub model: String,
    /// Heater generation.
    pub device_type: DeviceType,
    /// Device serial number, as used by the energy data query.
    pub dsn: String,
    /// Unique identifier used to address the device.
    pub junction_id: String,
    /// User-assigned name.
    pub name: String,
    /// Serial number of the heater.
    pub serial: String,
    /// Install location chosen by the user.
    pub install_location: String,
    /// Modes the heater can be switched to.
    pub supported_modes: Vec<SupportedOperationModeInfo>,
    /// Whether the heater offers the Hot Water+ boost.
    pub supports_hot_water_plus: bool,
    /// Snapshot of the heater's state.
    pub status: DeviceStatus,
}

impl Device {
    /// Returns the supported mode info for `mode`, if the heater lists it.
    #[must_use]
    pub fn supported_mode(&self, mode: OperationMode) -> Option<&SupportedOperationModeInfo> {
        self.supported_modes.iter().find(|m| m.mode == mode)
    }

    /// Returns whether the heater can be switched to `mode`.
    #[must_use]
    pub fn supports_mode(&self, mode: OperationMode) -> bool {
        self.supported_mode(mode).is_some()
    }
}

/// An operation mode offered by a specific heater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedOperationModeInfo {
    /// The mode.
    pub mode: OperationMode,
    /// The name the backend used for this mode, sent back when selecting it.
    pub original_name: String,
    /// Whether the mode exits automatically after a number of days.
    pub has_day_selection: bool,
    /// Whether Hot Water+ can be combined with this mode.
    pub supports_hot_water_plus: bool,
}

/// State of a heater at the time the device list was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatus {
    /// Firmware version.
    pub firmware_version: String,
    /// Whether the heater is connected to the backend.
    pub is_online: bool,
    /// Active operation mode.
    pub current_mode: OperationMode,
    /// Whether a mode change has not been applied yet.
    pub mode_change_pending: bool,
    /// Target temperature.
    pub temperature_setpoint: u16,
    /// Whether a setpoint change has not been applied yet.
    pub temperature_setpoint_pending: bool,
    /// Target temperature before the last change.
    pub temperature_setpoint_previous: u16,
    /// Highest target temperature the heater accepts.
    pub temperature_setpoint_maximum: u16,
    /// Hot water availability, when reported.
    pub hot_water_status: Option<HotWaterStatus>,
    /// Hot Water+ level, on heaters that report one.
    pub hot_water_plus_level: Option<HotWaterPlusLevel>,
}

/// Identification of a registered device, of any generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceBasicInfo {
    /// Brand name.
    pub brand: String,
    /// Model number.
    pub model: String,
    /// Backend device type, passed back verbatim to the energy query.
    pub device_type: String,
    /// Device serial number.
    pub dsn: String,
    /// Unique identifier used to address the device.
    pub junction_id: String,
    /// User-assigned name.
    pub name: String,
    /// Serial number of the heater.
    pub serial: String,
}
