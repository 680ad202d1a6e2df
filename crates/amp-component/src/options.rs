//! Shared helpers for component options builders
//!
//! Builders keep every field as `Option<String>` until `build()`. Required
//! fields are checked one at a time in the builder's declared order and the
//! first absent or empty one aborts the build.

use amp_common::{Error, Result};

/// Take a required field's value, failing if it is unset or empty
pub(crate) fn required(
    component: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(Error::missing_option(component, field)),
    }
}

/// Take an optional field's value, deriving a default when it was never set.
///
/// An explicitly set value is used verbatim, even when empty.
pub(crate) fn or_default(value: Option<&str>, default: impl FnOnce() -> String) -> String {
    value.map_or_else(default, str::to_string)
}
