//! Record pieces shared by every application.
//!
//! Indexers, download clients and notifications all carry a list of
//! provider-specific settings whose value type varies per setting. Those
//! values are modelled by [`FieldValue`], which survives a trip through the
//! copier by numeric value rather than by exact variant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dynamically typed setting value.
///
/// Deserialization tries the variants in declaration order, so a whole number
/// always comes back as [`FieldValue::Integer`] when it fits, whichever
/// integer variant it was written from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// JSON `null` or an absent value.
    #[default]
    Null,
    /// Boolean setting.
    Bool(bool),
    /// Signed whole number.
    Integer(i64),
    /// Whole number above `i64::MAX`. Smaller values are always
    /// [`FieldValue::Integer`].
    Unsigned(u64),
    /// Floating-point number.
    Float(f64),
    /// Text setting.
    Text(String),
    /// Multi-valued setting (tag lists, category ids).
    List(Vec<FieldValue>),
    /// Nested object setting.
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Returns true for [`FieldValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text of a [`FieldValue::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value of a [`FieldValue::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns any whole number as `i64`, if it fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Unsigned(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    /// Returns any number as `f64`.
    ///
    /// Whole numbers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Unsigned(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Compares two values, treating numbers as equal when their values match.
    ///
    /// `Unsigned(3)`, `Integer(3)` and `Float(3.0)` are all numerically equal.
    /// Non-numeric values fall back to structural equality.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn numeric_eq(&self, other: &Self) -> bool {
        if let (Some(left), Some(right)) = (self.whole(), other.whole()) {
            return left == right;
        }
        match (self.as_f64(), other.as_f64()) {
            (Some(left), Some(right)) => left == right,
            _ => self == other,
        }
    }

    fn whole(&self) -> Option<i128> {
        match self {
            Self::Integer(value) => Some(i128::from(*value)),
            Self::Unsigned(value) => Some(i128::from(*value)),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// Values that fit in `i64` become [`FieldValue::Integer`], matching what
/// deserialization produces.
impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// A provider setting as sent to the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldInput {
    /// Setting name, e.g. `baseUrl` or `apiKey`.
    pub name: String,
    /// Setting value.
    #[serde(skip_serializing_if = "FieldValue::is_null")]
    pub value: FieldValue,
}

impl FieldInput {
    /// Creates a setting with a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A provider setting as returned by the API, including its UI schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOutput {
    pub advanced: bool,
    pub order: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help_link: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub hidden: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub select_options_provider_action: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    pub privacy: String,
    #[serde(skip_serializing_if = "FieldValue::is_null")]
    pub value: FieldValue,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub select_options: Vec<SelectOption>,
}

impl FieldOutput {
    /// Creates an output setting carrying only a name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

/// One choice of a select-type setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectOption {
    pub divider_after: bool,
    pub order: i64,
    pub value: i64,
    pub hint: String,
    pub name: String,
}

/// Download protocol of an indexer or release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Unknown,
    Usenet,
    Torrent,
}

/// Generic id/name pair used for languages and similar lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Value {
    pub id: i64,
    pub name: String,
}

/// Quality of a release or file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quality {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<BaseQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<QualityRevision>,
}

/// The named quality inside a [`Quality`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseQuality {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub resolution: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub modifier: String,
}

/// Revision of a [`Quality`] (proper/repack tracking).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityRevision {
    pub version: i64,
    pub real: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_repack: Option<bool>,
}

/// Body of a grab request. The release endpoints only need these two fields
/// to find a cached search result again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrabRequest<'a> {
    pub guid: &'a str,
    pub indexer_id: i64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
