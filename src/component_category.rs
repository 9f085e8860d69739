// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `ComponentCategory` enum, which represents the
//! category of a component.

use crate::wire_enum::wire_enum;

wire_enum!(
    /// Possible types of microgrid component.
    ///
    /// Categories that are defined in the schema but not listed here, like
    /// converters or relays, are read as [`ComponentCategory::Unspecified`].
    ComponentCategory {
        /// An unknown component category.
        ///
        /// Useful for error handling, and marking unknown components in a list
        /// of components with otherwise known categories.
        Unspecified = 0 => "COMPONENT_CATEGORY_UNSPECIFIED",
        /// The point where the local microgrid is connected to the grid.
        Grid = 1 => "COMPONENT_CATEGORY_GRID",
        /// A meter, for measuring electrical metrics, e.g., current, voltage,
        /// etc.
        Meter = 2 => "COMPONENT_CATEGORY_METER",
        /// An electricity generator, with batteries or solar energy.
        Inverter = 3 => "COMPONENT_CATEGORY_INVERTER",
        /// A storage system for electrical energy, used by inverters.
        Battery = 5 => "COMPONENT_CATEGORY_BATTERY",
        /// A station for charging electrical vehicles.
        EvCharger = 6 => "COMPONENT_CATEGORY_EV_CHARGER",
        /// A combined heat and power plant.
        Chp = 10 => "COMPONENT_CATEGORY_CHP",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashSet;

    #[test]
    fn test_round_trip() {
        for category in ComponentCategory::iter() {
            assert_eq!(ComponentCategory::from_wire(category.to_wire()), category);
            assert_eq!(
                ComponentCategory::try_from_wire(category.to_wire()),
                Ok(category)
            );
            assert_eq!(
                category.proto_name().parse::<ComponentCategory>(),
                Ok(category)
            );
        }
        assert_eq!(ComponentCategory::iter().count(), 7);
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(ComponentCategory::Meter.to_wire(), 2);
        assert_eq!(ComponentCategory::from_wire(2), ComponentCategory::Meter);
        assert_eq!(ComponentCategory::from_wire(6), ComponentCategory::EvCharger);
        assert_eq!(i32::from(ComponentCategory::Chp), 10);
        assert_eq!(ComponentCategory::from(1), ComponentCategory::Grid);

        let codes: HashSet<i32> = ComponentCategory::iter().map(i32::from).collect();
        assert_eq!(codes.len(), ComponentCategory::VARIANTS.len());
    }

    #[test]
    fn test_unknown_codes() {
        // Converter, relay and hvac exist in the schema, but are not modeled.
        for code in [4, 7, 11, 15, 9999, -1, i32::MIN, i32::MAX] {
            assert_eq!(
                ComponentCategory::from_wire(code),
                ComponentCategory::Unspecified
            );
            assert_eq!(
                ComponentCategory::try_from_wire(code),
                Err(Error::unknown_wire_code(format!(
                    "ComponentCategory has no variant with wire code {code}"
                )))
            );
        }
        assert_eq!(
            ComponentCategory::try_from_wire(0),
            Ok(ComponentCategory::Unspecified)
        );
    }

    #[test]
    fn test_proto_names() {
        assert_eq!(
            ComponentCategory::EvCharger.proto_name(),
            "COMPONENT_CATEGORY_EV_CHARGER"
        );
        assert_eq!(
            "COMPONENT_CATEGORY_CONVERTER".parse::<ComponentCategory>(),
            Err(Error::unknown_proto_name(
                "ComponentCategory has no variant named \"COMPONENT_CATEGORY_CONVERTER\""
            ))
        );
        assert!("component_category_meter"
            .parse::<ComponentCategory>()
            .is_err());
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(ComponentCategory::EvCharger.to_string(), "EvCharger");
        assert_eq!(ComponentCategory::Chp.to_string(), "Chp");
        assert_eq!(ComponentCategory::default(), ComponentCategory::Unspecified);
    }
}
