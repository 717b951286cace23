//! Deserializers substituting defaults for `null`.

use serde::{Deserialize, Deserializer};

/// Deserializes a nullable value, replacing `null` with `T::default()`.
///
/// Attach it to a field with the `deserialize_with` attribute:
///
/// ```rust
/// # use serde::Deserialize;
/// #
/// #[derive(Deserialize)]
/// struct Tags {
///     #[serde(deserialize_with = "null_coalesce::des_null_to_default")]
///     tag: Vec<String>,
/// }
///
/// let t: Tags = serde_json::from_str(r#"{ "tag": null }"#).unwrap();
/// assert!(t.tag.is_empty());
/// ```
pub fn des_null_to_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let v = Option::<T>::deserialize(de)?;
    Ok(v.unwrap_or_default())
}

/// Deserializes a nullable 32-bit integer; `null` becomes `0`.
pub fn des_null_to_i32<'de, D>(de: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    des_null_to_default(de)
}

/// Deserializes a nullable 64-bit integer; `null` becomes `0`.
pub fn des_null_to_i64<'de, D>(de: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    des_null_to_default(de)
}

/// Deserializes a nullable boolean; `null` becomes `false`.
pub fn des_null_to_bool<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    des_null_to_default(de)
}

/// Deserializes a nullable double; `null` becomes `0.0`.
pub fn des_null_to_f64<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    des_null_to_default(de)
}

/// Deserializes a nullable single-precision float; `null` becomes `0.0`.
pub fn des_null_to_f32<'de, D>(de: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    des_null_to_default(de)
}

/// Deserializes a nullable string; `null` becomes `""`.
pub fn des_null_to_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    des_null_to_default(de)
}
