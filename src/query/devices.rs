// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device list queries.
//!
//! All three queries ask the backend to refresh device data first
//! (`forceUpdate: true`) and differ only in the selected fields.

use super::Query;

const DEVICES_DOCUMENT: &str = r"
query devices($forceUpdate: Boolean, $junctionIds: [String]) {
    devices(forceUpdate: $forceUpdate, junctionIds: $junctionIds) {
        brand
        model
        deviceType
        dsn
        junctionId
        name
        serial
        install {
            location
        }
        data {
            __typename
            temperatureSetpoint
            temperatureSetpointPending
            temperatureSetpointPrevious
            temperatureSetpointMaximum
            modes {
                mode
                controls
            }
            isOnline
            ... on NextGenHeatPump {
                firmwareVersion
                hotWaterStatus
                mode
                modePending
            }
            ... on RE3Connected {
                firmwareVersion
                hotWaterStatus
                mode
                modePending
            }
            ... on RE3Premium {
                firmwareVersion
                hotWaterStatus
                mode
                modePending
                hotWaterPlusLevel
            }
        }
    }
}
";

const DEVICES_BASIC_INFO_DOCUMENT: &str = r"
query devices($forceUpdate: Boolean, $junctionIds: [String]) {
    devices(forceUpdate: $forceUpdate, junctionIds: $junctionIds) {
        brand
        model
        deviceType
        dsn
        junctionId
        name
        serial
    }
}
";

const ALL_DEVICE_DATA_DOCUMENT: &str = r"
query devices($forceUpdate: Boolean, $junctionIds: [String]) {
  devices(forceUpdate: $forceUpdate, junctionIds: $junctionIds) {
    alertSettings {
      faultCode {
        major { email sms }
        minor { email sms }
      }
      operatingSetPoint { email sms }
      tankTemperature {
        highTemperature { email sms value }
        lowTemperature { email sms value }
      }
    }
    brand
    deviceType
    dsn
    hardware {
      iosShowsCaptivePortal
      hasBluetooth
      interface
      connectors
    }
    id
    install {
      address
      city
      country
      date
      email
      group
      location
      phone
      postalCode
      professional
      registeredOwner
      registrationDate
      state
    }
    isRegistered
    junctionId
    lastUpdate
    model
    name
    permissions
    productId
    serial
    users {
      contactId
      email
      firstName
      isSelf
      lastName
      permissions
    }
    data {
      __typename
      activeAlerts {
        active
        code
        information {
          en { advancedText advancedTitle text title }
          fr { advancedText advancedTitle text title }
        }
        shouldRestrictChanges
        shouldShowSoftReset
        timestamp
        type
      }
      alertHistory {
        active
        code
        information {
          en { advancedText advancedTitle text title }
          fr { advancedText advancedTitle text title }
        }
        shouldRestrictChanges
        shouldShowSoftReset
        timestamp
        type
      }
      isOnline
      isWifi
      lastUpdate
      signalStrength
      heaterSsid
      ssid
      temperatureSetpoint
      temperatureSetpointPending
      temperatureSetpointPrevious
      temperatureSetpointMaximum
      error
      modes {
        mode
        controls
      }
      ... on HeatPump {
        firmwareVersion
        isAdvancedLoadUpMore
        isDemandResponsePaused
        isEnrolled
        isLeakDetectionOn
        leakDetectionStatus
        mode
        modePending
        canEditTimeOfUse
        hotWaterStatus
        timeOfUseData {
          appliedOn
          energyUsePreference
          tariffCode
          tariffID
          utility
          utilityID
        }
      }
      ... on CommercialGas {
        blockedInletPS
        blockedOutletPS
        blowerProverPS
        burnerOnTime
        ccbVersion
        ecoContact
        elapsedTime
        hasIdr
        ignitionTrials
        isExternalEnabled
        isFlameDetected
        isGasValveOn
        isIdrEnabled
        isIgniterOn
        isUseExternalEnabled
        lowGasPS
        operatingMode
        status
        temperatureActual
        temperatureDifferential
        temperatureDifferentialPending
        temperatureDifferentialPrevious
        totalCycleCount
        uimVersion
      }
      ... on RE3Connected {
        firmwareVersion
        hotWaterStatus
        isAdvancedLoadUpMore
        isCtaUcmPresent
        isDemandResponsePaused
        isEnrolled
        mode
        modePending
        vacationModeRemainingDays
        isLowes
        isAltMcu
        canEditTimeOfUse
        timeOfUseData {
          appliedOn
          energyUsePreference
          tariffCode
          tariffID
          utility
          utilityID
        }
        consumerScheduleData {
          appliedOn
          schedules {
            days
            id
            name
            times { time meridiem }
          }
        }
      }
      ... on NextGenHeatPump {
        firmwareVersion
        hotWaterStatus
        isAdvancedLoadUpMore
        isCtaUcmPresent
        isDemandResponsePaused
        isEnrolled
        mode
        modePending
        vacationModeRemainingDays
        electricModeRemainingDays
        isLowes
        canEditTimeOfUse
        timeOfUseData {
          appliedOn
          energyUsePreference
          tariffCode
          tariffID
          utility
          utilityID
        }
        consumerScheduleData {
          appliedOn
          schedules {
            days
            id
            name
            times { time meridiem }
          }
        }
      }
      ... on RE3Premium {
        firmwareVersion
        hotWaterStatus
        isAdvancedLoadUpMore
        isCtaUcmPresent
        isDemandResponsePaused
        isEnrolled
        mode
        modePending
        vacationModeRemainingDays
        guestModeRemainingDays
        canEditTimeOfUse
        hotWaterPlusLevel
        timeOfUseData {
          appliedOn
          energyUsePreference
          tariffCode
          tariffID
          utility
          utilityID
        }
        consumerScheduleData {
          appliedOn
          schedules {
            days
            id
            name
            times { time meridiem }
          }
        }
      }
      ... on Mustang {
        firmwareVersion
        recirculation {
          recirculationCapability
          pumpModeOnDemand
          timer1 { start end isEnabled isUnset }
          timer2 { start end isEnabled isUnset }
        }
      }
      ... on MustangNCSC {
        firmwareVersion
      }
    }
  }
}

";

fn force_update() -> serde_json::Value {
    serde_json::json!({ "forceUpdate": true })
}

/// Lists devices with their current status.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevicesQuery;

impl Query for DevicesQuery {
    fn operation(&self) -> &'static str {
        "devices"
    }

    fn document(&self) -> &'static str {
        DEVICES_DOCUMENT
    }

    fn variables(&self) -> serde_json::Value {
        force_update()
    }
}

/// Lists device identification only, for every generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevicesBasicInfoQuery;

impl Query for DevicesBasicInfoQuery {
    fn operation(&self) -> &'static str {
        "devicesBasicInfo"
    }

    fn document(&self) -> &'static str {
        DEVICES_BASIC_INFO_DOCUMENT
    }

    fn variables(&self) -> serde_json::Value {
        force_update()
    }
}

/// Lists every field the backend exposes for every device.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDeviceDataQuery;

impl Query for AllDeviceDataQuery {
    fn operation(&self) -> &'static str {
        "allDeviceData"
    }

    fn document(&self) -> &'static str {
        ALL_DEVICE_DATA_DOCUMENT
    }

    fn variables(&self) -> serde_json::Value {
        force_update()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_queries_force_an_update() {
        assert_eq!(DevicesQuery.variables()["forceUpdate"], true);
        assert_eq!(DevicesBasicInfoQuery.variables()["forceUpdate"], true);
        assert_eq!(AllDeviceDataQuery.variables()["forceUpdate"], true);
    }

    #[test]
    fn devices_query_selects_supported_generations() {
        let document = DevicesQuery.document();
        for typename in ["NextGenHeatPump", "RE3Connected", "RE3Premium"] {
            assert!(document.contains(&format!("... on {typename}")));
        }
        assert!(document.contains("hotWaterPlusLevel"));
    }

    #[test]
    fn basic_info_query_skips_status() {
        assert!(!DevicesBasicInfoQuery.document().contains("temperatureSetpoint"));
    }
}
