// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Anything that can be searched by its text.
//!
//! Bulk operations take `&[C]` for any `C: Candidate` and hand back references
//! into that slice, so callers can search their own records without building
//! a parallel `Vec<String>`. The text is pulled out once per comparison and
//! the rest of the work is the same code path plain strings use.

use std::borrow::Cow;
use std::fmt;

/// A searchable item.
///
/// Implement this for your own types to search them directly:
///
/// ```
/// use std::borrow::Cow;
/// use sift::{find_all, Candidate, Variant};
///
/// struct Track {
///     title: String,
///     plays: u32,
/// }
///
/// impl Candidate for Track {
///     fn text(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.title)
///     }
/// }
///
/// let tracks = vec![
///     Track { title: "Cartwheel".into(), plays: 3 },
///     Track { title: "Foobar".into(), plays: 9 },
/// ];
/// let hits = find_all("whl", &tracks, Variant::FOLD);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].plays, 3);
/// ```
pub trait Candidate {
    fn text(&self) -> Cow<'_, str>;
}

impl Candidate for str {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Candidate for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Candidate for Box<str> {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Candidate for Cow<'_, str> {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn text(&self) -> Cow<'_, str> {
        (**self).text()
    }
}

/// Search a value by its `Display` output.
///
/// The text is rendered on every comparison, so prefer a direct [`Candidate`]
/// impl for hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> Candidate for Displayed<T> {
    fn text(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.to_string())
    }
}
