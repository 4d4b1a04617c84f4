//! Macro for implementing Display and FromStr for status enums
//!
//! Records arrive from the remote API with status strings spelled in a few
//! different ways (`"IN_STORAGE"`, `"in-storage"`, `"In Storage"`). The macro
//! generates one canonical snake_case spelling for output and a tolerant
//! parser for input.
//!
//! # Example
//!
//! ```rust
//! use netasset_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum HandoverStatus {
//!     Draft,
//!     InTransit,
//!     Received,
//! }
//!
//! impl_domain_status_conversions!(HandoverStatus {
//!     Draft => "draft",
//!     InTransit => "in_transit",
//!     Received => "received",
//! });
//!
//! assert_eq!(HandoverStatus::InTransit.to_string(), "in_transit");
//! assert_eq!("In-Transit".parse::<HandoverStatus>(), Ok(HandoverStatus::InTransit));
//! ```

/// Normalizes a status string before matching: trims, lowercases and maps
/// `-` and spaces to `_`.
#[doc(hidden)]
#[must_use]
pub fn normalize_status_token(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Implements Display and FromStr traits for status enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their canonical
///   snake_case representation
///
/// Also implements `TryFrom<String>`, so serde can route deserialization
/// through the tolerant parser with `#[serde(try_from = "String")]`.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical snake_case spelling of this value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match $crate::macros::normalize_status_token(s).as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        ::std::stringify!($enum_name),
                        s
                    )),
                }
            }
        }

        impl ::std::convert::TryFrom<::std::string::String> for $enum_name {
            type Error = ::std::string::String;

            fn try_from(s: ::std::string::String) -> ::std::result::Result<Self, Self::Error> {
                ::std::str::FromStr::from_str(&s)
            }
        }
    };
}
