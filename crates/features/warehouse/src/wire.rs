//! JSON text helpers for warehouse documents.

use crate::error::{WarehouseError, WarehouseErrorExt};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Compact JSON encoding (no whitespace, struct keys in declaration order).
///
/// # Errors
/// Returns [`WarehouseError::Serialization`] if the value cannot be encoded.
pub fn to_json<T>(value: &T) -> Result<String, WarehouseError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).context("Encoding warehouse document")
}

/// # Errors
/// Returns [`WarehouseError::Serialization`] if `raw` is not valid JSON for `T`.
pub fn from_json<T>(raw: &str) -> Result<T, WarehouseError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(raw).context("Decoding warehouse document")
}
