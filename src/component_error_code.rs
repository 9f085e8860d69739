// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ComponentErrorCode` enum, which represents the
//! errors a component can report.

use crate::wire_enum::wire_enum;

wire_enum!(
    /// All possible errors that can occur in a microgrid component.
    ComponentErrorCode {
        /// Default value when the error is not explicitly set.
        Unspecified = 0 => "COMPONENT_ERROR_CODE_UNSPECIFIED",
        /// The sender could not classify the error.
        Unknown = 1 => "COMPONENT_ERROR_CODE_UNKNOWN",
        /// The component could not be switched on.
        SwitchOnFault = 2 => "COMPONENT_ERROR_CODE_SWITCH_ON_FAULT",
        Undervoltage = 3 => "COMPONENT_ERROR_CODE_UNDERVOLTAGE",
        Overvoltage = 4 => "COMPONENT_ERROR_CODE_OVERVOLTAGE",
        Overcurrent = 5 => "COMPONENT_ERROR_CODE_OVERCURRENT",
        OvercurrentCharging = 6 => "COMPONENT_ERROR_CODE_OVERCURRENT_CHARGING",
        OvercurrentDischarging = 7 => "COMPONENT_ERROR_CODE_OVERCURRENT_DISCHARGING",
        Overtemperature = 8 => "COMPONENT_ERROR_CODE_OVERTEMPERATURE",
        Undertemperature = 9 => "COMPONENT_ERROR_CODE_UNDERTEMPERATURE",
        HighHumidity = 10 => "COMPONENT_ERROR_CODE_HIGH_HUMIDITY",
        FuseError = 11 => "COMPONENT_ERROR_CODE_FUSE_ERROR",
        PrechargeError = 12 => "COMPONENT_ERROR_CODE_PRECHARGE_ERROR",
        /// Values reported by the component are not plausible.
        PlausibilityError = 13 => "COMPONENT_ERROR_CODE_PLAUSIBILITY_ERROR",
        /// The component was shut down because of undervoltage.
        UndervoltageShutdown = 14 => "COMPONENT_ERROR_CODE_UNDERVOLTAGE_SHUTDOWN",
        /// Unexpected failure of the EV control pilot signal.
        EvUnexpectedPilotFailure = 15 => "COMPONENT_ERROR_CODE_EV_UNEXPECTED_PILOT_FAILURE",
        /// Residual current to ground was detected.
        FaultCurrent = 16 => "COMPONENT_ERROR_CODE_FAULT_CURRENT",
        ShortCircuit = 17 => "COMPONENT_ERROR_CODE_SHORT_CIRCUIT",
        /// The component is misconfigured.
        ConfigError = 18 => "COMPONENT_ERROR_CODE_CONFIG_ERROR",
        /// A state was requested that the component cannot enter.
        IllegalComponentStateCodeRequested = 19
            => "COMPONENT_ERROR_CODE_ILLEGAL_COMPONENT_STATE_CODE_REQUESTED",
        /// The hardware of the component cannot be reached.
        HardwareInaccessible = 20 => "COMPONENT_ERROR_CODE_HARDWARE_INACCESSIBLE",
        Internal = 21 => "COMPONENT_ERROR_CODE_INTERNAL",
        /// The component refused a request that was not authorized.
        Unauthorized = 22 => "COMPONENT_ERROR_CODE_UNAUTHORIZED",
        EvChargingCableUnpluggedFromStation = 40
            => "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_UNPLUGGED_FROM_STATION",
        EvChargingCableUnpluggedFromEv = 41
            => "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_UNPLUGGED_FROM_EV",
        EvChargingCableLockFailed = 42 => "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_LOCK_FAILED",
        EvChargingCableInvalid = 43 => "COMPONENT_ERROR_CODE_EV_CHARGING_CABLE_INVALID",
        /// The connected vehicle is not compatible with the charger.
        EvConsumerIncompatible = 44 => "COMPONENT_ERROR_CODE_EV_CONSUMER_INCOMPATIBLE",
        /// The cells of the battery are imbalanced.
        BatteryImbalance = 50 => "COMPONENT_ERROR_CODE_BATTERY_IMBALANCE",
        /// The state of health of the battery is low.
        BatteryLowSoh = 51 => "COMPONENT_ERROR_CODE_BATTERY_LOW_SOH",
        BatteryBlockError = 52 => "COMPONENT_ERROR_CODE_BATTERY_BLOCK_ERROR",
        BatteryControllerError = 53 => "COMPONENT_ERROR_CODE_BATTERY_CONTROLLER_ERROR",
        BatteryRelayError = 54 => "COMPONENT_ERROR_CODE_BATTERY_RELAY_ERROR",
        BatteryCalibrationNeeded = 56 => "COMPONENT_ERROR_CODE_BATTERY_CALIBRATION_NEEDED",
        /// The relay has reached its rated number of switching cycles.
        RelayCycleLimitReached = 60 => "COMPONENT_ERROR_CODE_RELAY_CYCLE_LIMIT_REACHED",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_round_trip() {
        for error_code in ComponentErrorCode::iter() {
            assert_eq!(
                ComponentErrorCode::from_wire(error_code.to_wire()),
                error_code
            );
            assert_eq!(
                ComponentErrorCode::try_from_wire(error_code.to_wire()),
                Ok(error_code)
            );
        }
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes: HashSet<i32> = ComponentErrorCode::iter().map(i32::from).collect();
        assert_eq!(codes.len(), ComponentErrorCode::VARIANTS.len());
        assert_eq!(codes.len(), 35);
    }

    #[test]
    fn test_unknown_codes() {
        // 55 is a gap in the schema.
        for code in [23, 39, 45, 55, 61, -1, i32::MIN, i32::MAX] {
            assert_eq!(
                ComponentErrorCode::from_wire(code),
                ComponentErrorCode::Unspecified
            );
        }
        assert_eq!(
            ComponentErrorCode::from_wire(56),
            ComponentErrorCode::BatteryCalibrationNeeded
        );
        assert_eq!(
            "COMPONENT_ERROR_CODE_BATTERY_LOW_SOH".parse::<ComponentErrorCode>(),
            Ok(ComponentErrorCode::BatteryLowSoh)
        );
    }
}
