//! # null_coalesce
//!
//! The `null_coalesce` crate provides serde field deserializers
//! that substitute the primitive default for a JSON `null` instead
//! of failing the whole document.
//!
//! ## Registering a deserializer
//!
//! Pick the function matching the field's kind and register it with
//! the `deserialize_with` attribute:
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Track {
//!     #[serde(deserialize_with = "null_coalesce::des_null_to_i32")]
//!     listeners: i32,
//!     #[serde(deserialize_with = "null_coalesce::des_null_to_bool")]
//!     streamable: bool,
//!     #[serde(deserialize_with = "null_coalesce::des_null_to_f64")]
//!     duration: f64,
//! }
//!
//! let json = r#"{ "listeners": null, "streamable": null, "duration": 3.5 }"#;
//! let track: Track = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(track.listeners, 0);
//! assert_eq!(track.streamable, false);
//! assert_eq!(track.duration, 3.5);
//! ```
//!
//! A present value always passes through unchanged; `null` maps to `0`,
//! `false`, `0.0` or `""` depending on the function. Add `#[serde(default)]`
//! alongside `deserialize_with` if the key may be missing entirely.
//!

mod des;
pub use crate::des::{
    des_null_to_bool, des_null_to_default, des_null_to_f32, des_null_to_f64, des_null_to_i32,
    des_null_to_i64, des_null_to_string,
};
