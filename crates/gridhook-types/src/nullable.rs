//! Serde helper for fields where JSON `null` means "not set".

use serde::{Deserialize, Deserializer};

/// Decode `null` the same as a missing key: the type's default value.
///
/// Use together with `#[serde(default)]` so both absent and `null` fields
/// decode.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
