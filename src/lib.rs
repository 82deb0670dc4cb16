// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `AOSmith` Lib - A Rust client for A. O. Smith connected water heaters.
//!
//! This library provides an async API to the vendor's cloud backend, the same
//! GraphQL service the mobile app uses.
//!
//! # Supported Features
//!
//! - **Device listing**: Heat pump and electric heaters with their status
//! - **Temperature control**: Change the target temperature
//! - **Mode control**: Switch operation modes, with day selection and
//!   Hot Water+ levels where the heater supports them
//! - **Energy monitoring**: Lifetime and per-period energy usage
//! - **Diagnostics**: Backend health and raw device data
//!
//! # Supported Devices
//!
//! - Next generation heat pumps (`NEXT_GEN_HEAT_PUMP`)
//! - Connected electric heaters (`RE3_CONNECTED`)
//! - Premium electric heaters with Hot Water+ (`RE3_PREMIUM`)
//!
//! # Quick Start
//!
//! ```no_run
//! use aosmith_lib::Client;
//! use aosmith_lib::types::OperationMode;
//!
//! #[tokio::main]
//! async fn main() -> aosmith_lib::Result<()> {
//!     let client = Client::new("user@example.com", "password")?;
//!
//!     // Logs in on first use
//!     let devices = client.get_devices().await?;
//!
//!     for device in &devices {
//!         println!("{}: {} at {}°F", device.name, device.status.current_mode,
//!             device.status.temperature_setpoint);
//!     }
//!
//!     if let Some(device) = devices.first() {
//!         client.update_setpoint(&device.junction_id, 125).await?;
//!
//!         // Vacation for a week
//!         client.update_mode(&device.junction_id, OperationMode::Vacation, Some(7), None).await?;
//!
//!         let energy = client.get_energy_use_data(&device.junction_id).await?;
//!         println!("Lifetime usage: {} kWh", energy.lifetime_kwh);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Parameters are checked against the device before a mutation is sent:
//!
//! ```no_run
//! use aosmith_lib::{Client, Error};
//! use aosmith_lib::types::OperationMode;
//!
//! # async fn example(client: Client) -> aosmith_lib::Result<()> {
//! match client.update_mode("junction-id", OperationMode::Hybrid, Some(5), None).await {
//!     Err(Error::InvalidParameters(err)) => println!("not sent: {err}"),
//!     Err(Error::InvalidCredentials) => println!("check your login"),
//!     other => other?,
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod protocol;
pub mod query;
pub mod response;
pub mod types;

pub use client::{Client, ClientBuilder, ModeChange};
pub use error::{ApiError, Error, ParameterError, ParseError, ProtocolError, Result};
pub use model::{
    AllDeviceInfo, Device, DeviceBasicInfo, DeviceStatus, EnergyUseData, EnergyUseHistoryEntry,
    SupportedOperationModeInfo,
};
pub use protocol::{ApiConfig, HttpClient, Protocol};
pub use types::{
    DeviceType, HotWaterLevel, HotWaterPlusLevel, HotWaterStatus, ModeDays, OperationMode,
    Setpoint,
};
