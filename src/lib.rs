//! Starr Library
//!
//! Typed clients for the Lidarr, Prowlarr, Radarr, Readarr and Sonarr APIs,
//! plus the machinery to move records between them. The applications share
//! many entities (indexers, releases) whose JSON shapes overlap without being
//! identical; the copier bridges them by field name.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`copier`] - Structural copy of one record type into another via JSON
//! - [`indexer`] - Indexer copy with identity sanitization (id and tags)
//! - [`failure`] - Picking the real cause out of several optional errors
//! - [`field`] - Record pieces shared by every application
//! - [`client`] - HTTP transport used by the per-application endpoints
//! - [`lidarr`], [`prowlarr`], [`radarr`], [`readarr`], [`sonarr`] - Per-application records and endpoints

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod copier;
pub mod failure;
pub mod field;
pub mod indexer;
pub mod lidarr;
pub mod prowlarr;
pub mod radarr;
pub mod readarr;
pub mod sonarr;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use client::{ArrClient, ClientConfig, ClientError, Request};
pub use copier::{CopyFault, CopySide, Strictness, copy, copy_with};
pub use failure::{first_error, first_failure};
pub use field::{FieldInput, FieldOutput, FieldValue, Protocol, Quality, SelectOption, Value};
pub use indexer::{IndexerInput, IndexerRecord, IndexerSource, copy_indexer};
