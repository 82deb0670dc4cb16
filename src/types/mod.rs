// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for water heater control.
//!
//! Each type either ensures values are within their valid range at
//! construction time, or maps between the backend's wire strings and a
//! closed Rust enum through an explicit lookup table.
//!
//! # Types
//!
//! - [`OperationMode`] - Heater behavior profile (hybrid, heat pump, ...)
//! - [`DeviceType`] - Supported heater generations
//! - [`HotWaterStatus`] - Hot water availability, level or percentage
//! - [`HotWaterPlusLevel`] - Hot Water+ boost level (0-3)
//! - [`Setpoint`] - Target temperature (95°F and above)
//! - [`ModeDays`] - Days before a timed mode exits (1-100)

mod device_type;
mod hot_water;
mod mode;
mod setpoint;

pub use device_type::DeviceType;
pub use hot_water::{HotWaterLevel, HotWaterPlusLevel, HotWaterStatus};
pub use mode::OperationMode;
pub use setpoint::{ModeDays, Setpoint};
