// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only records returned by the client.
//!
//! Records are built from a single backend response and never mutated
//! locally; fetch again to observe new state.

mod device;
mod energy;

pub use device::{Device, DeviceBasicInfo, DeviceStatus, SupportedOperationModeInfo};
pub use energy::{AllDeviceInfo, EnergyUseData, EnergyUseHistoryEntry};
