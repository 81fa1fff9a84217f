//! Picking the real cause out of several optional errors.
//!
//! Callers that juggle a few optional upstream error slots plus one error they
//! are guaranteed to have use [`first_failure`] to report a single cause
//! without ever masking that guaranteed fallback.
//!
//! Mixed `(value, Option<error>)` sequences are passed by their error half;
//! the values themselves are never inspected.
//!
//! ```
//! use starr::first_failure;
//!
//! let results: [(&str, Option<&str>); 2] = [("listed", None), ("added", Some("tag missing"))];
//! let cause = first_failure(results.iter().map(|(_, err)| *err), "sync failed");
//! assert_eq!(cause, "tag missing");
//! ```

/// Returns the first present error in `candidates`, or `fallback` if none is set.
///
/// Scanning stops at the first `Some`; later candidates are not consumed.
#[must_use]
pub fn first_failure<E, I>(candidates: I, fallback: E) -> E
where
    I: IntoIterator<Item = Option<E>>,
{
    first_error(candidates).unwrap_or(fallback)
}

/// Returns the first present error in `candidates`, or `None` if none is set.
#[must_use]
pub fn first_error<E, I>(candidates: I) -> Option<E>
where
    I: IntoIterator<Item = Option<E>>,
{
    candidates.into_iter().flatten().next()
}
