// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list response parsing.

use serde::Deserialize;

use crate::error::ParseError;
use crate::model::{Device, DeviceBasicInfo, DeviceStatus, SupportedOperationModeInfo};
use crate::types::{DeviceType, HotWaterLevel, HotWaterPlusLevel, HotWaterStatus, OperationMode};

/// `data` of any device list query.
///
/// Devices are kept as raw JSON until their generation is known, since
/// unsupported generations expose entirely different fields.
///
/// # Examples
///
/// ```
/// use aosmith_lib::response::DevicesPayload;
///
/// let json = r#"{"devices": [{"junctionId": "j1", "data": {"__typename": "Mustang"}}]}"#;
/// let payload: DevicesPayload = serde_json::from_str(json).unwrap();
/// // Unsupported generations are skipped
/// assert!(payload.into_devices().unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DevicesPayload {
    /// Raw device objects.
    pub devices: Option<Vec<serde_json::Value>>,
}

impl DevicesPayload {
    /// Returns the raw device objects.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the device list is absent.
    pub fn into_raw(self) -> Result<Vec<serde_json::Value>, ParseError> {
        self.devices
            .ok_or_else(|| ParseError::MissingField("devices".to_string()))
    }

    /// Maps every device of a supported generation to a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the list is absent, or if a supported device
    /// is incomplete or has an unrecognized shape.
    pub fn into_devices(self) -> Result<Vec<Device>, ParseError> {
        self.into_raw()?
            .into_iter()
            .filter(|raw| {
                let supported = typename(raw).and_then(DeviceType::from_typename).is_some();
                if !supported {
                    tracing::debug!(
                        typename = typename(raw).unwrap_or("<none>"),
                        "Skipping device of unsupported generation"
                    );
                }
                supported
            })
            .map(|raw| {
                let online = raw.get("data").and_then(|d| d.get("isOnline"));
                if online.is_none_or(serde_json::Value::is_null) {
                    return Err(ParseError::UnexpectedFormat(
                        "device data is incomplete".to_string(),
                    ));
                }
                serde_json::from_value::<DeviceNode>(raw)?.into_device()
            })
            .collect()
    }

    /// Maps every device, of any generation, to a [`DeviceBasicInfo`].
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the list is absent or a device lacks an
    /// identification field.
    pub fn into_basic_infos(self) -> Result<Vec<DeviceBasicInfo>, ParseError> {
        self.into_raw()?
            .into_iter()
            .map(|raw| Ok(serde_json::from_value::<BasicInfoNode>(raw)?.into()))
            .collect()
    }
}

fn typename(raw: &serde_json::Value) -> Option<&str> {
    raw.get("data")?.get("__typename")?.as_str()
}

/// A device of a supported generation, as sent by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceNode {
    brand: String,
    model: String,
    dsn: String,
    junction_id: String,
    name: String,
    serial: String,
    install: InstallNode,
    data: DeviceDataNode,
}

#[derive(Debug, Clone, Deserialize)]
struct InstallNode {
    location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeviceDataNode {
    #[serde(rename = "__typename")]
    typename: String,
    temperature_setpoint: u16,
    temperature_setpoint_pending: bool,
    temperature_setpoint_previous: u16,
    temperature_setpoint_maximum: u16,
    modes: Vec<ModeNode>,
    is_online: bool,
    firmware_version: String,
    hot_water_status: Option<RawHotWaterStatus>,
    mode: String,
    mode_pending: bool,
    #[serde(default)]
    hot_water_plus_level: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ModeNode {
    mode: Option<String>,
    controls: Option<String>,
}

/// Hot water status in either of its wire shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawHotWaterStatus {
    Used(i64),
    Level(String),
}

impl DeviceNode {
    /// Maps the node to a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` for unknown generations, modes, controls or
    /// hot water levels, and for an empty junction ID.
    pub fn into_device(self) -> Result<Device, ParseError> {
        let device_type =
            DeviceType::from_typename(&self.data.typename).ok_or_else(|| ParseError::InvalidValue {
                field: "__typename".to_string(),
                message: format!("unknown device type {}", self.data.typename),
            })?;

        if self.junction_id.is_empty() {
            return Err(ParseError::InvalidValue {
                field: "junctionId".to_string(),
                message: "empty junction ID".to_string(),
            });
        }

        let supported_modes = self
            .data
            .modes
            .into_iter()
            .map(ModeNode::into_info)
            .collect::<Result<Vec<_>, _>>()?;

        let status = DeviceStatus {
            firmware_version: self.data.firmware_version,
            is_online: self.data.is_online,
            current_mode: parse_mode(&self.data.mode)?,
            mode_change_pending: self.data.mode_pending,
            temperature_setpoint: self.data.temperature_setpoint,
            temperature_setpoint_pending: self.data.temperature_setpoint_pending,
            temperature_setpoint_previous: self.data.temperature_setpoint_previous,
            temperature_setpoint_maximum: self.data.temperature_setpoint_maximum,
            hot_water_status: self
                .data
                .hot_water_status
                .map(RawHotWaterStatus::into_status)
                .transpose()?,
            hot_water_plus_level: self
                .data
                .hot_water_plus_level
                .as_deref()
                .and_then(HotWaterPlusLevel::from_wire),
        };

        Ok(Device {
            brand: self.brand,
            model: self.model,
            device_type,
            dsn: self.dsn,
            junction_id: self.junction_id,
            name: self.name,
            serial: self.serial,
            install_location: self.install.location.unwrap_or_default(),
            supported_modes,
            supports_hot_water_plus: device_type.supports_hot_water_plus(),
            status,
        })
    }
}

impl ModeNode {
    fn into_info(self) -> Result<SupportedOperationModeInfo, ParseError> {
        let name = self
            .mode
            .ok_or_else(|| ParseError::MissingField("modes.mode".to_string()))?;

        let (has_day_selection, supports_hot_water_plus) = match self.controls.as_deref() {
            None => (false, false),
            Some("SELECT_DAYS") => (true, false),
            Some("HOT_WATER_PLUS") => (false, true),
            Some(other) => {
                return Err(ParseError::InvalidValue {
                    field: "modes.controls".to_string(),
                    message: format!("unknown controls {other}"),
                });
            }
        };

        Ok(SupportedOperationModeInfo {
            mode: parse_mode(&name)?,
            original_name: name,
            has_day_selection,
            supports_hot_water_plus,
        })
    }
}

impl RawHotWaterStatus {
    fn into_status(self) -> Result<HotWaterStatus, ParseError> {
        match self {
            Self::Used(used) => HotWaterStatus::from_used_percentage(used),
            Self::Level(level) => HotWaterLevel::from_wire(&level)
                .map(HotWaterStatus::Level)
                .ok_or_else(|| ParseError::InvalidValue {
                    field: "hotWaterStatus".to_string(),
                    message: format!("unknown level {level}"),
                }),
        }
    }
}

fn parse_mode(name: &str) -> Result<OperationMode, ParseError> {
    OperationMode::from_wire(name).ok_or_else(|| ParseError::InvalidValue {
        field: "mode".to_string(),
        message: format!("unknown mode {name}"),
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BasicInfoNode {
    brand: String,
    model: String,
    device_type: String,
    dsn: String,
    junction_id: String,
    name: String,
    serial: String,
}

impl From<BasicInfoNode> for DeviceBasicInfo {
    fn from(node: BasicInfoNode) -> Self {
        Self {
            brand: node.brand,
            model: node.model,
            device_type: node.device_type,
            dsn: node.dsn,
            junction_id: node.junction_id,
            name: node.name,
            serial: node.serial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn heat_pump() -> serde_json::Value {
        json!({
            "brand": "aosmith",
            "model": "HPTS-50",
            "deviceType": "NEXT_GEN_HEAT_PUMP",
            "dsn": "DSN1",
            "junctionId": "junction-1",
            "name": "Basement",
            "serial": "SN1",
            "install": {"location": "Basement"},
            "data": {
                "__typename": "NextGenHeatPump",
                "temperatureSetpoint": 130,
                "temperatureSetpointPending": false,
                "temperatureSetpointPrevious": 125,
                "temperatureSetpointMaximum": 140,
                "modes": [
                    {"mode": "HYBRID", "controls": null},
                    {"mode": "HEAT_PUMP", "controls": null},
                    {"mode": "ELECTRIC", "controls": "SELECT_DAYS"},
                    {"mode": "VACATION", "controls": "SELECT_DAYS"}
                ],
                "isOnline": true,
                "firmwareVersion": "2.14",
                "hotWaterStatus": "LOW",
                "mode": "HEAT_PUMP",
                "modePending": false
            }
        })
    }

    fn premium() -> serde_json::Value {
        let mut device = heat_pump();
        device["junctionId"] = json!("junction-2");
        device["data"]["__typename"] = json!("RE3Premium");
        device["data"]["modes"] = json!([
            {"mode": "STANDARD", "controls": "HOT_WATER_PLUS"},
            {"mode": "VACATION", "controls": "SELECT_DAYS"}
        ]);
        device["data"]["mode"] = json!("STANDARD");
        device["data"]["hotWaterStatus"] = json!(25);
        device["data"]["hotWaterPlusLevel"] = json!("TWO");
        device
    }

    fn devices(list: Vec<serde_json::Value>) -> Result<Vec<Device>, ParseError> {
        DevicesPayload {
            devices: Some(list),
        }
        .into_devices()
    }

    #[test]
    fn maps_heat_pump() {
        let device = devices(vec![heat_pump()]).unwrap().remove(0);

        assert_eq!(device.device_type, DeviceType::NextGenHeatPump);
        assert_eq!(device.junction_id, "junction-1");
        assert_eq!(device.install_location, "Basement");
        assert!(!device.supports_hot_water_plus);
        assert_eq!(device.status.current_mode, OperationMode::HeatPump);
        assert_eq!(device.status.temperature_setpoint_maximum, 140);
        assert_eq!(
            device.status.hot_water_status,
            Some(HotWaterStatus::Level(HotWaterLevel::Low))
        );
        assert_eq!(device.status.hot_water_plus_level, None);

        let electric = device.supported_mode(OperationMode::Electric).unwrap();
        assert!(electric.has_day_selection);
        assert!(!electric.supports_hot_water_plus);
        assert!(!device.supported_mode(OperationMode::Hybrid).unwrap().has_day_selection);
    }

    #[test]
    fn maps_premium() {
        let device = devices(vec![premium()]).unwrap().remove(0);

        assert!(device.supports_hot_water_plus);
        assert_eq!(device.status.current_mode, OperationMode::Electric);
        assert_eq!(device.status.hot_water_status, Some(HotWaterStatus::Percentage(75)));
        assert_eq!(device.status.hot_water_plus_level.map(|l| l.value()), Some(2));

        let electric = device.supported_mode(OperationMode::Electric).unwrap();
        assert_eq!(electric.original_name, "STANDARD");
        assert!(electric.supports_hot_water_plus);
    }

    #[test]
    fn skips_unsupported_generations() {
        let mut gas = heat_pump();
        gas["data"] = json!({"__typename": "CommercialGas", "isOnline": true});
        let mut untyped = heat_pump();
        untyped["data"] = json!({});

        let list = devices(vec![gas, heat_pump(), untyped]).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn incomplete_device_data() {
        let mut device = heat_pump();
        device["data"]["isOnline"] = json!(null);
        assert!(matches!(
            devices(vec![device]),
            Err(ParseError::UnexpectedFormat(_))
        ));
    }

    #[test]
    fn incomplete_unsupported_device_is_skipped() {
        let legacy = json!({"junctionId": "junction-9", "data": {"__typename": "RE2", "isOnline": null}});
        let list = devices(vec![legacy, heat_pump()]).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].junction_id, "junction-1");
    }

    #[test]
    fn missing_required_key() {
        let mut device = heat_pump();
        device.as_object_mut().unwrap().remove("serial");
        assert!(matches!(devices(vec![device]), Err(ParseError::Json(_))));
    }

    #[test]
    fn unknown_controls() {
        let mut device = heat_pump();
        device["data"]["modes"] = json!([{"mode": "HYBRID", "controls": "SCHEDULE"}]);
        assert!(matches!(
            devices(vec![device]),
            Err(ParseError::InvalidValue { field, .. }) if field == "modes.controls"
        ));
    }

    #[test]
    fn unknown_mode() {
        let mut device = heat_pump();
        device["data"]["mode"] = json!("TURBO");
        assert!(devices(vec![device]).is_err());
    }

    #[test]
    fn unknown_hot_water_level() {
        let mut device = heat_pump();
        device["data"]["hotWaterStatus"] = json!("EMPTY");
        assert!(devices(vec![device]).is_err());
    }

    #[test]
    fn null_hot_water_status() {
        let mut device = heat_pump();
        device["data"]["hotWaterStatus"] = json!(null);
        assert_eq!(devices(vec![device]).unwrap()[0].status.hot_water_status, None);
    }

    #[test]
    fn unknown_hot_water_plus_level_is_absent() {
        let mut device = premium();
        device["data"]["hotWaterPlusLevel"] = json!("MAX");
        assert_eq!(devices(vec![device]).unwrap()[0].status.hot_water_plus_level, None);
    }

    #[test]
    fn empty_junction_id() {
        let mut device = heat_pump();
        device["junctionId"] = json!("");
        assert!(devices(vec![device]).is_err());
    }

    #[test]
    fn missing_device_list() {
        assert!(matches!(
            DevicesPayload::default().into_devices(),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn basic_info_includes_every_generation() {
        let payload = DevicesPayload {
            devices: Some(vec![
                heat_pump(),
                json!({
                    "brand": "aosmith", "model": "G1", "deviceType": "MUSTANG",
                    "dsn": "DSN9", "junctionId": "j9", "name": "Garage", "serial": "SN9"
                }),
            ]),
        };
        let infos = payload.into_basic_infos().unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].device_type, "NEXT_GEN_HEAT_PUMP");
        assert_eq!(infos[1].dsn, "DSN9");
    }
}
