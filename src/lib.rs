// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

/*!
# Frequenz Microgrid Component Codes

This is a library for converting the integer codes that the microgrid API uses
on the wire for component categories, component states and component errors
into Rust enums, and back.

## Conversions

Each of [`ComponentCategory`], [`ComponentStateCode`] and
[`ComponentErrorCode`] has:

- `from_wire`, which never fails.  Codes that are not part of the enum, for
  example because they were added in a newer version of the API, are read as
  the `Unspecified` variant.
- `to_wire`, which returns the code of a variant.
- `try_from_wire`, for callers that need to tell an explicit `Unspecified`
  apart from an unrecognized code.  It returns an [`Error`] for the latter.

The enums also implement `From<i32>`, `Into<i32>` and [`FromStr`][std::str::FromStr]
for the names used in the protobuf schema, and can be iterated with `iter()`.

```
use frequenz_microgrid_component_codes::ComponentCategory;

assert_eq!(ComponentCategory::Meter.to_wire(), 2);
assert_eq!(ComponentCategory::from_wire(2), ComponentCategory::Meter);
assert_eq!(ComponentCategory::from_wire(9999), ComponentCategory::Unspecified);
```
*/

mod wire_enum;

mod component_category;
pub use component_category::ComponentCategory;

mod component_state_code;
pub use component_state_code::ComponentStateCode;

mod component_error_code;
pub use component_error_code::ComponentErrorCode;

mod error;
pub use error::Error;

/// The protobuf package whose enums this library mirrors.
pub const SCHEMA_PACKAGE: &str = "frequenz.api.common.v1.microgrid.components";
