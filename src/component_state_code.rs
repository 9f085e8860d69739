// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ComponentStateCode` enum, which represents the
//! operational state of a component.

use crate::wire_enum::wire_enum;

wire_enum!(
    /// All possible states of a microgrid component.
    ///
    /// These are plain tags reported by the component; transitions between
    /// them are decided by the component itself.
    ComponentStateCode {
        /// Default value when the component state is not explicitly set.
        Unspecified = 0 => "COMPONENT_STATE_CODE_UNSPECIFIED",
        /// The component is in an unknown or undefined condition.
        ///
        /// Used when the sender is unable to classify the component into any
        /// other state.
        Unknown = 1 => "COMPONENT_STATE_CODE_UNKNOWN",
        /// The component is in the process of switching off.
        SwitchingOff = 2 => "COMPONENT_STATE_CODE_SWITCHING_OFF",
        /// The component has successfully switched off.
        Off = 3 => "COMPONENT_STATE_CODE_OFF",
        /// The component is in the process of switching on from an off state.
        SwitchingOn = 4 => "COMPONENT_STATE_CODE_SWITCHING_ON",
        /// The component is in standby mode, and not immediately ready for
        /// operation.
        Standby = 5 => "COMPONENT_STATE_CODE_STANDBY",
        /// The component is fully operational and ready for use.
        Ready = 6 => "COMPONENT_STATE_CODE_READY",
        /// The component is actively consuming energy.
        Charging = 7 => "COMPONENT_STATE_CODE_CHARGING",
        /// The component is actively producing or releasing energy.
        Discharging = 8 => "COMPONENT_STATE_CODE_DISCHARGING",
        /// The component is in an error state and may need attention.
        Error = 9 => "COMPONENT_STATE_CODE_ERROR",
        /// The EV charging cable is unplugged from the charging station.
        EvChargingCableUnplugged = 20 => "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_UNPLUGGED",
        /// The EV charging cable is plugged into the charging station.
        EvChargingCablePluggedAtStation = 21
            => "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_PLUGGED_AT_STATION",
        /// The EV charging cable is plugged into the vehicle.
        EvChargingCablePluggedAtEv = 22 => "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_PLUGGED_AT_EV",
        /// The EV charging cable is locked at the charging station end.
        EvChargingCableLockedAtStation = 23
            => "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_LOCKED_AT_STATION",
        /// The EV charging cable is locked at the vehicle end.
        EvChargingCableLockedAtEv = 24 => "COMPONENT_STATE_CODE_EV_CHARGING_CABLE_LOCKED_AT_EV",
        /// The relay is open, no current can flow through.
        RelayOpen = 30 => "COMPONENT_STATE_CODE_RELAY_OPEN",
        /// The relay is closed, current can flow.
        RelayClosed = 31 => "COMPONENT_STATE_CODE_RELAY_CLOSED",
        /// The precharger circuit is open.
        PrechargerOpen = 40 => "COMPONENT_STATE_CODE_PRECHARGER_OPEN",
        /// The precharger is preparing the main circuit for activation.
        PrechargerPrecharging = 41 => "COMPONENT_STATE_CODE_PRECHARGER_PRECHARGING",
        /// The precharger circuit is closed, full current flows to the main
        /// circuit.
        PrechargerClosed = 42 => "COMPONENT_STATE_CODE_PRECHARGER_CLOSED",
    }
);
