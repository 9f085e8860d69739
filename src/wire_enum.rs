// License: MIT
// Copyright © 2024 Frequenz Energy-as-a-Service GmbH

//! This module defines the `wire_enum!` macro, which generates an enum that
//! mirrors a protobuf enum, along with the conversions to and from its wire
//! representation.

/// A macro for defining an enum whose variants map to protobuf wire codes.
///
/// Every invocation must declare an `Unspecified` variant.  It is the
/// [`Default`] and the value [`from_wire`] falls back to for codes that are
/// not part of the enum.
macro_rules! wire_enum {
    (
        $(#[$enum_meta:meta])*
        $name:ident {
            $(
                $(#[$meta:meta])*
                $variant:ident = $code:literal => $proto:literal
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl $name {
            /// All variants, in wire-code order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),*];

            #[doc = concat!(
                "Returns the [`", stringify!($name), "`] for the given wire code.\n\n",
                "Codes that are not part of the enum map to [`",
                stringify!($name), "::Unspecified`]."
            )]
            pub fn from_wire(code: i32) -> Self {
                match code {
                    $(
                        $code => Self::$variant,
                    )*
                    _ => {
                        tracing::debug!(
                            "Unrecognized {} wire code {}, using Unspecified.",
                            stringify!($name),
                            code
                        );
                        Self::Unspecified
                    }
                }
            }

            /// Like `from_wire`, but fails for codes that are not part of
            /// the enum instead of falling back to `Unspecified`.
            pub fn try_from_wire(code: i32) -> Result<Self, $crate::Error> {
                match code {
                    $(
                        $code => Ok(Self::$variant),
                    )*
                    _ => Err($crate::Error::unknown_wire_code(format!(
                        "{} has no variant with wire code {}",
                        stringify!($name),
                        code
                    ))),
                }
            }

            /// Returns the wire code of the variant.
            pub fn to_wire(self) -> i32 {
                match self {
                    $(
                        Self::$variant => $code,
                    )*
                }
            }

            /// Returns the name of the variant in the protobuf schema.
            pub fn proto_name(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $proto,
                    )*
                }
            }

            /// Returns an iterator over all variants.
            pub fn iter() -> impl Iterator<Item = Self> {
                Self::VARIANTS.iter().copied()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unspecified
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant => write!(f, "{}", stringify!($variant)),
                    )*
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(
                        $proto => Ok(Self::$variant),
                    )*
                    _ => Err($crate::Error::unknown_proto_name(format!(
                        "{} has no variant named {:?}",
                        stringify!($name),
                        s
                    ))),
                }
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                Self::from_wire(code)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.to_wire()
            }
        }
    };
}

pub(crate) use wire_enum;
