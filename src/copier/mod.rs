//! Structural copy of one record type into another.
//!
//! The applications describe the same entities with different Rust types.
//! [`copy`] bridges any two of them without per-type mapping code: the source
//! is serialized to a [`serde_json::Value`], laid over the serialized
//! destination, and the result is deserialized back into the destination.
//!
//! - Fields only the source has are dropped (unless the destination type
//!   denies unknown fields, which is a decoding fault).
//! - Fields only the destination has keep their current value.
//! - Fields both have take the source value, with whatever numeric coercion
//!   JSON numbers allow (an unsigned source may land in a float field).
//!
//! The destination is rebuilt from its own serialized form, so `D` must
//! round-trip through serde unchanged for its untouched fields to stay
//! exactly as they were. Every record in this crate does. Fields marked
//! `#[serde(skip)]` or `#[serde(skip_deserializing)]` do not: they are reset
//! to their default on every successful copy.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use starr::copy;
//!
//! #[derive(Serialize)]
//! struct Source {
//!     name: String,
//!     priority: u32,
//! }
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! #[serde(default)]
//! struct Target {
//!     name: String,
//!     priority: f64,
//!     enabled: bool,
//! }
//!
//! let src = Source { name: "nzb".into(), priority: 25 };
//! let mut dst = Target { enabled: true, ..Target::default() };
//! copy(&src, &mut dst)?;
//!
//! assert_eq!(dst.name, "nzb");
//! assert!((dst.priority - 25.0).abs() < f64::EPSILON);
//! assert!(dst.enabled);
//! # Ok::<(), starr::CopyFault>(())
//! ```

mod error;

pub use error::{CopyFault, CopySide};

use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

/// Shape precondition applied to both sides before copying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Both sides must be struct-shaped (serialize to a JSON object).
    #[default]
    Record,
    /// Both sides must serialize to something other than `null`.
    ///
    /// Non-object values (sequences, scalars) replace the destination wholesale.
    NonNull,
}

impl Strictness {
    /// Human-readable requirement, used in [`CopyFault::NotAddressable`] messages.
    #[must_use]
    pub fn requirement(self) -> &'static str {
        match self {
            Self::Record => "must provide a struct-shaped record",
            Self::NonNull => "must provide a non-nil value",
        }
    }

    fn admits(self, value: &Value) -> bool {
        match self {
            Self::Record => value.is_object(),
            Self::NonNull => !value.is_null(),
        }
    }
}

/// Copies `src` into `dst` by field name, requiring both to be records.
///
/// Equivalent to [`copy_with`] using [`Strictness::Record`].
///
/// `D` must survive a serialize/deserialize round trip; fields it skips
/// during serde are reset to their default. See the [module docs](self).
///
/// # Errors
///
/// Returns [`CopyFault::NotAddressable`] when either side is not a record,
/// [`CopyFault::EncodingFailed`] when a side cannot be serialized, and
/// [`CopyFault::DecodingFailed`] when a matched field has an incompatible shape.
pub fn copy<S, D>(src: &S, dst: &mut D) -> Result<(), CopyFault>
where
    S: Serialize + ?Sized,
    D: Serialize + DeserializeOwned,
{
    copy_with(Strictness::Record, src, dst)
}

/// Copies `src` into `dst` by field name under the given strictness policy.
///
/// The source side is validated first. `dst` is only replaced once the merged
/// value decoded successfully; on error it keeps its previous value.
///
/// Destination fields the source does not name keep their value as long as
/// `D` round-trips through serde. `#[serde(skip)]` fields are reset.
///
/// # Errors
///
/// See [`copy`].
pub fn copy_with<S, D>(strictness: Strictness, src: &S, dst: &mut D) -> Result<(), CopyFault>
where
    S: Serialize + ?Sized,
    D: Serialize + DeserializeOwned,
{
    trace!(
        source = type_name::<S>(),
        destination = type_name::<D>(),
        ?strictness,
        "Copying record"
    );

    let incoming = to_interchange(src, CopySide::Source)?;
    if !strictness.admits(&incoming) {
        return Err(CopyFault::not_addressable(CopySide::Source, strictness));
    }

    let mut merged = to_interchange(&*dst, CopySide::Destination)?;
    if !strictness.admits(&merged) {
        return Err(CopyFault::not_addressable(CopySide::Destination, strictness));
    }

    overlay(&mut merged, incoming);
    *dst = serde_json::from_value(merged).map_err(CopyFault::decoding)?;

    Ok(())
}

fn to_interchange<T: Serialize + ?Sized>(value: &T, side: CopySide) -> Result<Value, CopyFault> {
    serde_json::to_value(value).map_err(|source| CopyFault::encoding(side, source))
}

/// Lays `incoming` over `target`.
///
/// Objects merge key by key, recursively; anything else replaces the slot.
fn overlay(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(existing), Value::Object(fields)) => {
            for (key, value) in fields {
                match existing.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        existing.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    struct Inner {
        host: String,
        port: u16,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Wide {
        name: String,
        priority: i64,
        inner: Inner,
        enable_rss: bool,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Narrow {
        name: String,
        priority: u32,
        extra: String,
    }

    #[derive(Debug, Serialize)]
    struct Marker;

    #[test]
    fn test_overlay_merges_nested_objects() {
        let mut target = json!({"a": 1, "inner": {"host": "old", "port": 80}});
        overlay(&mut target, json!({"inner": {"host": "new"}, "b": true}));
        assert_eq!(
            target,
            json!({"a": 1, "b": true, "inner": {"host": "new", "port": 80}})
        );
    }

    #[test]
    fn test_overlay_replaces_arrays_and_scalars() {
        let mut target = json!({"tags": [1, 2, 3], "name": "old"});
        overlay(&mut target, json!({"tags": [9], "name": null}));
        assert_eq!(target, json!({"tags": [9], "name": null}));
    }

    #[test]
    fn test_copy_keeps_destination_only_fields() {
        let src = Narrow {
            name: "indexer".to_string(),
            priority: 7,
            extra: "dropped".to_string(),
        };
        let mut dst = Wide {
            enable_rss: true,
            inner: Inner {
                host: "localhost".to_string(),
                port: 8989,
            },
            ..Wide::default()
        };

        copy(&src, &mut dst).unwrap();

        assert_eq!(dst.name, "indexer");
        assert_eq!(dst.priority, 7);
        assert!(dst.enable_rss);
        assert_eq!(dst.inner.host, "localhost");
        assert_eq!(dst.inner.port, 8989);
    }

    #[test]
    fn test_copy_rejects_unit_struct_under_record_policy() {
        let mut dst = Wide::default();
        let err = copy(&Marker, &mut dst).unwrap_err();
        assert!(err.is_not_addressable());
        assert_eq!(err.side(), CopySide::Source);
    }

    #[test]
    fn test_copy_with_non_null_accepts_sequences() {
        let src = vec![1_u64, 2, 5];
        let mut dst: Vec<f64> = vec![0.5];
        copy_with(Strictness::NonNull, &src, &mut dst).unwrap();
        assert_eq!(dst, vec![1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_copy_with_non_null_rejects_none() {
        let src: Option<Wide> = None;
        let mut dst = Wide::default();
        let err = copy_with(Strictness::NonNull, &src, &mut dst).unwrap_err();
        assert!(err.is_not_addressable());
        assert_eq!(err.side(), CopySide::Source);

        let mut dst: Option<Wide> = None;
        let err = copy_with(Strictness::NonNull, &Wide::default(), &mut dst).unwrap_err();
        assert_eq!(err.side(), CopySide::Destination);
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    struct WithCache {
        name: String,
        #[serde(skip)]
        cache: Vec<u8>,
    }

    #[test]
    fn test_copy_resets_serde_skipped_destination_fields() {
        let mut dst = WithCache {
            name: "before".to_string(),
            cache: vec![1, 2],
        };
        copy(&json!({"name": "after"}), &mut dst).unwrap();
        assert_eq!(dst.name, "after");
        assert!(dst.cache.is_empty());
    }

    #[test]
    fn test_copy_reports_encoding_failure() {
        let mut src = HashMap::new();
        src.insert(vec![1_u8], 1_u8);
        let mut dst = Wide::default();
        let err = copy_with(Strictness::NonNull, &src, &mut dst).unwrap_err();
        assert_eq!(err.stage(), "encoding");
    }

    #[test]
    fn test_copy_reports_decoding_failure_and_leaves_destination() {
        let src = json!({"name": "kept?", "inner": "not-a-record"});
        let mut dst = Wide {
            name: "original".to_string(),
            ..Wide::default()
        };
        let err = copy(&src, &mut dst).unwrap_err();
        assert_eq!(err.stage(), "decoding");
        assert_eq!(dst.name, "original");
    }
}
