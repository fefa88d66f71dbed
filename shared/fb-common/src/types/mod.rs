//! Domain Types

mod person;
mod search;

pub use person::*;
pub use search::*;

use serde::{Deserialize, Deserializer};

/// Deserialize an optional field, treating an explicit `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
