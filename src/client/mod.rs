// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for the water heater backend.
//!
//! [`Client`] holds the account credentials and the session token, checks
//! parameters against what devices report about themselves, and maps
//! responses to the records in [`crate::model`].
//!
//! # Session
//!
//! The client logs in lazily, on the first operation that needs an access
//! token. When the backend rejects the token (HTTP 401), the client logs in
//! again and repeats the request once.
//!
//! # Known Devices
//!
//! Every [`Client::get_devices`] call replaces the client's set of known
//! devices. Setpoint and mode changes for a known device are validated
//! without contacting the backend; unknown junction IDs trigger a fresh
//! device list first. A device is forgotten after a successful change so the
//! next change sees its new state.
//!
//! ```no_run
//! use aosmith_lib::Client;
//! use aosmith_lib::types::OperationMode;
//!
//! # async fn example() -> aosmith_lib::Result<()> {
//! let client = Client::new("user@example.com", "password")?;
//!
//! for device in client.get_devices().await? {
//!     println!("{} ({}): {}°F", device.name, device.junction_id, device.status.temperature_setpoint);
//! }
//!
//! client.update_mode("junction-id", OperationMode::Vacation, Some(7), None).await?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod mode_change;
mod passcode;

pub use builder::ClientBuilder;
pub use mode_change::ModeChange;

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;

use crate::error::{Error, ParameterError, ProtocolError, Result};
use crate::model::{AllDeviceInfo, Device, EnergyUseData};
use crate::protocol::{HttpClient, Protocol, QueryResponse};
use crate::query::{
    AllDeviceDataQuery, DevicesBasicInfoQuery, DevicesQuery, EnergyUseDataQuery, LoginQuery,
    Query, ServiceStatusQuery, UpdateModeMutation, UpdateSetpointMutation,
};
use crate::response::{
    DevicesPayload, EnergyUseDataPayload, LoginPayload, MutationPayload, ServiceStatusPayload,
};
use crate::types::{OperationMode, Setpoint};

/// Client for the water heater backend.
///
/// The type parameter `P` is the transport; it defaults to [`HttpClient`].
pub struct Client<P: Protocol = HttpClient> {
    protocol: P,
    email: String,
    password: String,
    access_token: RwLock<Option<String>>,
    known_devices: RwLock<HashMap<String, Device>>,
}

impl Client<HttpClient> {
    /// Creates a client for the production backend.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::builder(email, password).build()
    }

    /// Returns a builder for a client with custom connection settings.
    #[must_use]
    pub fn builder(email: impl Into<String>, password: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(email, password)
    }
}

impl<P: Protocol> Client<P> {
    /// Creates a client over an arbitrary transport.
    pub fn with_protocol(
        protocol: P,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            protocol,
            email: email.into(),
            password: password.into(),
            access_token: RwLock::new(None),
            known_devices: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns whether the client currently holds an access token.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.access_token.read().is_some()
    }

    /// Logs in now instead of on the first operation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCredentials` if the backend rejects the email
    /// address or password.
    pub async fn login(&self) -> Result<()> {
        self.refresh_token().await.map(drop)
    }

    // ========== Operations ==========

    /// Asks the backend whether it is operating normally.
    ///
    /// Does not require logging in.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the answer cannot be parsed.
    pub async fn is_everything_okay(&self) -> Result<bool> {
        let payload: ServiceStatusPayload = self.send(&ServiceStatusQuery).await?;
        Ok(payload.is_everything_okay())
    }

    /// Lists the account's water heaters of supported generations.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidCredentials` if the login is rejected
    /// - `Error::Parse` if the backend returns an unrecognized shape
    /// - `Error::Protocol` / `Error::Api` if the request fails
    pub async fn get_devices(&self) -> Result<Vec<Device>> {
        let payload: DevicesPayload = self.send(&DevicesQuery).await?;
        let devices = payload.into_devices()?;

        let mut known = self.known_devices.write();
        known.clear();
        known.extend(devices.iter().map(|d| (d.junction_id.clone(), d.clone())));
        drop(known);

        tracing::debug!(count = devices.len(), "Fetched devices");
        Ok(devices)
    }

    /// Sets the target temperature of a heater.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidParameters` if the setpoint is below 95°F or above the
    ///   device's maximum
    /// - `Error::DeviceNotFound` if no supported device has this junction ID
    /// - `Error::Rejected` if the backend does not confirm the change
    pub async fn update_setpoint(&self, junction_id: &str, setpoint: u16) -> Result<()> {
        let setpoint = Setpoint::new(setpoint)?;
        let device = self.device(junction_id).await?;

        let max = device.status.temperature_setpoint_maximum;
        if setpoint.value() > max {
            return Err(ParameterError::SetpointAboveMaximum {
                max,
                actual: setpoint.value(),
            }
            .into());
        }

        let mutation = UpdateSetpointMutation::new(junction_id, setpoint);
        let payload: MutationPayload = self.send(&mutation).await?;
        expect_success(&payload, mutation.operation())?;

        self.forget(junction_id);
        tracing::debug!(junction_id, %setpoint, "Updated setpoint");
        Ok(())
    }

    /// Switches a heater to another operation mode.
    ///
    /// # Arguments
    ///
    /// * `junction_id` - The target device
    /// * `mode` - The target mode, which the device must list
    /// * `days` - Days before the mode exits; only for modes with day
    ///   selection (defaults to 100)
    /// * `hot_water_plus_level` - Hot Water+ level (0-3); only for devices
    ///   with Hot Water+, and levels 1-3 only for modes supporting it
    ///
    /// # Errors
    ///
    /// - `Error::InvalidParameters` if the combination is not valid for the
    ///   device; nothing is sent to the backend in that case
    /// - `Error::DeviceNotFound` if no supported device has this junction ID
    /// - `Error::Rejected` if the backend does not confirm the change
    pub async fn update_mode(
        &self,
        junction_id: &str,
        mode: OperationMode,
        days: Option<u8>,
        hot_water_plus_level: Option<u8>,
    ) -> Result<()> {
        let change = ModeChange {
            mode,
            days,
            hot_water_plus_level,
        };
        self.apply_mode_change(junction_id, change).await
    }

    /// Applies a [`ModeChange`] to a heater.
    ///
    /// # Errors
    ///
    /// Same as [`update_mode`](Self::update_mode).
    pub async fn apply_mode_change(&self, junction_id: &str, change: ModeChange) -> Result<()> {
        let device = self.device(junction_id).await?;
        let input = change.validate(&device)?;

        let mutation = UpdateModeMutation::new(junction_id, input);
        let payload: MutationPayload = self.send(&mutation).await?;
        expect_success(&payload, mutation.operation())?;

        self.forget(junction_id);
        tracing::debug!(junction_id, mode = %change.mode, "Updated mode");
        Ok(())
    }

    /// Fetches the energy usage history of a heater.
    ///
    /// Devices that have not reported any usage yet yield an empty record.
    ///
    /// # Errors
    ///
    /// - `Error::DeviceNotFound` if no device has this junction ID
    /// - `Error::Parse` if the backend returns an unrecognized shape
    pub async fn get_energy_use_data(&self, junction_id: &str) -> Result<EnergyUseData> {
        let payload: DevicesPayload = self.send(&DevicesBasicInfoQuery).await?;
        let info = payload
            .into_basic_infos()?
            .into_iter()
            .find(|d| d.junction_id == junction_id)
            .ok_or_else(|| Error::DeviceNotFound(junction_id.to_string()))?;

        let query = EnergyUseDataQuery::new(info.dsn, info.device_type);
        match self.send::<_, EnergyUseDataPayload>(&query).await {
            Ok(payload) => Ok(payload.into_energy_use_data()?),
            Err(Error::Api(err)) if err.is_energy_data_unavailable() => {
                tracing::debug!(junction_id, "No energy usage data yet");
                Ok(EnergyUseData::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Dumps everything the backend knows about every registered device,
    /// including unsupported generations, for diagnostics.
    ///
    /// Energy data is fetched per device on a best-effort basis: failures are
    /// logged and the device is left out of
    /// [`AllDeviceInfo::energy_use_data`].
    ///
    /// # Errors
    ///
    /// Returns error if the device list cannot be fetched.
    pub async fn get_all_device_info(&self) -> Result<AllDeviceInfo> {
        let payload: DevicesPayload = self.send(&AllDeviceDataQuery).await?;
        let devices = payload.devices.unwrap_or_default();

        let mut energy_use_data = HashMap::new();
        for device in &devices {
            let field = |name: &str| device.get(name).and_then(serde_json::Value::as_str);
            let (Some(junction_id), Some(dsn), Some(device_type)) =
                (field("junctionId"), field("dsn"), field("deviceType"))
            else {
                tracing::warn!("Skipping energy data of a device without identification");
                continue;
            };

            let query = EnergyUseDataQuery::new(dsn, device_type);
            match self.send::<_, EnergyUseDataPayload>(&query).await {
                Ok(payload) => {
                    energy_use_data.insert(
                        junction_id.to_string(),
                        payload.get_energy_use_data.unwrap_or_default(),
                    );
                }
                Err(err) => {
                    tracing::warn!(junction_id, error = %err, "Failed to get energy use data");
                }
            }
        }

        Ok(AllDeviceInfo {
            devices,
            energy_use_data,
        })
    }

    // ========== Internals ==========

    /// Returns the device with this junction ID, fetching the device list if
    /// it is not known yet.
    async fn device(&self, junction_id: &str) -> Result<Device> {
        if let Some(device) = self.known_devices.read().get(junction_id) {
            return Ok(device.clone());
        }

        self.get_devices()
            .await?
            .into_iter()
            .find(|d| d.junction_id == junction_id)
            .ok_or_else(|| Error::DeviceNotFound(junction_id.to_string()))
    }

    fn forget(&self, junction_id: &str) {
        self.known_devices.write().remove(junction_id);
    }

    /// Sends a query and unwraps the `data` of its response.
    async fn send<Q, T>(&self, query: &Q) -> Result<T>
    where
        Q: Query + Sync,
        T: DeserializeOwned,
    {
        self.send_raw(query).await?.parse::<T>()?.into_data()
    }

    async fn send_raw<Q: Query + Sync>(&self, query: &Q) -> Result<QueryResponse> {
        if !query.requires_login() {
            return Ok(self.protocol.send_query(query, None).await?);
        }

        let cached = self.access_token.read().clone();
        let token = match cached {
            Some(token) => token,
            None => self.refresh_token().await?,
        };

        match self.protocol.send_query(query, Some(&token)).await {
            Err(ProtocolError::Unauthorized) => {
                tracing::debug!("Access token may be expired, logging in again");
                let token = self.refresh_token().await?;
                Ok(self.protocol.send_query(query, Some(&token)).await?)
            }
            result => Ok(result?),
        }
    }

    async fn refresh_token(&self) -> Result<String> {
        let query = LoginQuery::new(passcode::build_passcode(&self.email, &self.password));
        let response = self.protocol.send_query(&query, None).await?;
        let token = response
            .parse::<LoginPayload>()?
            .into_data()?
            .into_access_token()?;

        *self.access_token.write() = Some(token.clone());
        tracing::debug!("Successfully logged in");
        Ok(token)
    }
}

impl<P: Protocol + fmt::Debug> fmt::Debug for Client<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("protocol", &self.protocol)
            .field("email", &self.email)
            .field("logged_in", &self.is_logged_in())
            .finish_non_exhaustive()
    }
}

fn expect_success(payload: &MutationPayload, operation: &str) -> Result<()> {
    match payload.get(operation).and_then(serde_json::Value::as_bool) {
        Some(true) => Ok(()),
        _ => Err(Error::Rejected(format!("{operation} was not confirmed"))),
    }
}
