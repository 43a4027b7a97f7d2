//! Macro for implementing Display and FromStr for status-like enums
//!
//! Slot statuses, filter modes and configuration policies all travel as short
//! lowercase words (in persisted JSON, config files, CLI flags). This macro
//! gives each enum one mapping table for both directions.
//!
//! # Example
//!
//! ```rust
//! use boardcount_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum MealShift {
//!     Lunch,
//!     Dinner,
//! }
//!
//! impl_domain_status_conversions!(MealShift {
//!     Lunch => "lunch",
//!     Dinner => "dinner",
//! });
//!
//! assert_eq!(MealShift::Dinner.to_string(), "dinner");
//! assert_eq!("LUNCH".parse::<MealShift>(), Ok(MealShift::Lunch));
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their lowercase word
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// Surrounding whitespace is ignored when parsing, so values read from
/// environment variables or typed input need no extra trimming.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
