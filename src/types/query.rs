//! Helpers for query-string and form parameters.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer};

/// Deserialize an optional parameter, treating a blank value (`?city=`) as absent.
///
/// Use together with `#[serde(default)]` so missing keys also become `None`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
