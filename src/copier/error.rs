//! Error types for structural copy operations.
//!
//! Every variant renders with the stage it failed in ("copy source",
//! "copy destination", "encoding", "decoding") as its message prefix.

use std::fmt;

use thiserror::Error;

use super::Strictness;

/// Which side of a copy an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySide {
    /// The record being read.
    Source,
    /// The record being written.
    Destination,
}

impl CopySide {
    /// Returns the stage label used in error messages for this side.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "copy source",
            Self::Destination => "copy destination",
        }
    }
}

impl fmt::Display for CopySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that can occur while copying one record into another.
#[derive(Debug, Error)]
pub enum CopyFault {
    /// A side did not satisfy the shape required by the strictness policy.
    #[error("{side}: {}", .strictness.requirement())]
    NotAddressable {
        /// The offending side.
        side: CopySide,
        /// The policy that was violated.
        strictness: Strictness,
    },

    /// A record could not be serialized to the interchange representation.
    #[error("encoding: {source}")]
    EncodingFailed {
        /// The side whose serialization failed.
        side: CopySide,
        /// The underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// The interchange representation could not be written into the destination.
    #[error("decoding: {source}")]
    DecodingFailed {
        /// The underlying deserializer error.
        #[source]
        source: serde_json::Error,
    },
}

impl CopyFault {
    /// Creates a `NotAddressable` error.
    #[must_use]
    pub fn not_addressable(side: CopySide, strictness: Strictness) -> Self {
        Self::NotAddressable { side, strictness }
    }

    /// Creates an `EncodingFailed` error.
    #[must_use]
    pub fn encoding(side: CopySide, source: serde_json::Error) -> Self {
        Self::EncodingFailed { side, source }
    }

    /// Creates a `DecodingFailed` error.
    #[must_use]
    pub fn decoding(source: serde_json::Error) -> Self {
        Self::DecodingFailed { source }
    }

    /// Returns the stage label this fault was raised in.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            Self::NotAddressable { side, .. } => side.label(),
            Self::EncodingFailed { .. } => "encoding",
            Self::DecodingFailed { .. } => "decoding",
        }
    }

    /// Returns the side a fault refers to. Decoding always fails on the destination.
    #[must_use]
    pub fn side(&self) -> CopySide {
        match self {
            Self::NotAddressable { side, .. } | Self::EncodingFailed { side, .. } => *side,
            Self::DecodingFailed { .. } => CopySide::Destination,
        }
    }

    /// Returns true when the fault is a shape precondition failure.
    #[must_use]
    pub fn is_not_addressable(&self) -> bool {
        matches!(self, Self::NotAddressable { .. })
    }
}
