//! Errors.

use thiserror::Error;

/// Errors from constructing elements or configuring a theme.
///
/// Element event handling itself never fails; rejected drops are reported as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid mime type {0:?}: expected `type/subtype`")]
    InvalidMimeType(String),

    #[error("invalid color {0:?}: expected `#rrggbb` or `#rrggbbaa`")]
    InvalidColor(String),

    #[error("unknown theme key {0:?}")]
    UnknownThemeKey(String),

    #[error("invalid value {value:?} for theme key {key:?}")]
    InvalidThemeValue { key: String, value: String },
}
