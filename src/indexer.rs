//! Copying indexers between applications.
//!
//! Every application stores indexers with a server-assigned `id` and a set of
//! `tags` from its own tag namespace. Neither is meaningful on another server:
//! reusing the id would update an unrelated indexer, and tag ids point at
//! whatever tag happens to own that number. [`copy_indexer`] runs the
//! structural [`copy`] and then clears the id, and the tags unless asked to
//! keep them.
//!
//! The set of records accepted here is closed. [`IndexerSource`] and
//! [`IndexerInput`] are sealed and implemented only for the indexer records of
//! the five supported applications; a new application's indexer shape is added
//! to the list at the bottom of this module.
//!
//! # Example
//!
//! ```
//! use starr::{copy_indexer, prowlarr, sonarr};
//!
//! let src = prowlarr::IndexerOutput {
//!     id: 2,
//!     name: "NZBgeek".to_string(),
//!     tags: vec![1, 2, 5],
//!     ..Default::default()
//! };
//! let mut dst = sonarr::IndexerInput {
//!     enable_rss: true,
//!     ..Default::default()
//! };
//!
//! copy_indexer(&src, &mut dst, false)?;
//! assert_eq!(dst.id, 0);
//! assert!(dst.tags.is_empty());
//! assert_eq!(dst.name, "NZBgeek");
//! assert!(dst.enable_rss);
//! # Ok::<(), starr::CopyFault>(())
//! ```

use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::copier::{CopyFault, copy};
use crate::{lidarr, prowlarr, radarr, readarr, sonarr};

mod sealed {
    pub trait Sealed {}
}

/// Identity every indexer record carries: a server-assigned id and a tag set.
pub trait IndexerRecord: Serialize + DeserializeOwned {
    /// Server-assigned identifier; `0` means "not yet created".
    fn id(&self) -> i64;

    /// Tag ids from the owning server's tag namespace.
    fn tags(&self) -> &[i64];

    /// Resets the identifier to `0`.
    fn clear_id(&mut self);

    /// Empties the tag set.
    fn clear_tags(&mut self);
}

/// Any application's indexer input or output record. Sealed.
pub trait IndexerSource: IndexerRecord + sealed::Sealed {}

/// Any application's indexer input record, the shape accepted when creating
/// an indexer. Sealed.
pub trait IndexerInput: IndexerSource {}

/// Copies an indexer from one application's shape into another's.
///
/// Runs the structural [`copy`], then clears `dst`'s id and, unless
/// `keep_tags` is true, its tags. Only set `keep_tags` when both servers
/// share the same tag ids.
///
/// Returns `dst` for chaining.
///
/// # Errors
///
/// Returns the [`CopyFault`] from the structural copy unchanged; `dst` is not
/// sanitized in that case.
pub fn copy_indexer<'a, S, D>(src: &S, dst: &'a mut D, keep_tags: bool) -> Result<&'a mut D, CopyFault>
where
    S: IndexerSource,
    D: IndexerInput,
{
    copy(src, dst)?;

    dst.clear_id();
    if !keep_tags {
        dst.clear_tags();
    }

    debug!(
        source = type_name::<S>(),
        destination = type_name::<D>(),
        source_id = src.id(),
        keep_tags,
        tags = dst.tags().len(),
        "Copied indexer"
    );

    Ok(dst)
}

macro_rules! indexer_records {
    ($($record:ty => $role:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $record {}

            impl IndexerRecord for $record {
                fn id(&self) -> i64 {
                    self.id
                }

                fn tags(&self) -> &[i64] {
                    &self.tags
                }

                fn clear_id(&mut self) {
                    self.id = 0;
                }

                fn clear_tags(&mut self) {
                    self.tags.clear();
                }
            }

            impl IndexerSource for $record {}

            indexer_records!(@role $record, $role);
        )*
    };
    (@role $record:ty, input) => {
        impl IndexerInput for $record {}
    };
    (@role $record:ty, output) => {};
}

indexer_records! {
    lidarr::IndexerInput => input,
    lidarr::IndexerOutput => output,
    prowlarr::IndexerInput => input,
    prowlarr::IndexerOutput => output,
    radarr::IndexerInput => input,
    radarr::IndexerOutput => output,
    readarr::IndexerInput => input,
    readarr::IndexerOutput => output,
    sonarr::IndexerInput => input,
    sonarr::IndexerOutput => output,
}
