// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buffered items and the data sources that supply them.

use alloc::vec::Vec;

use crate::ListBounds;

/// A buffered row: an index plus an opaque payload.
///
/// Identity is the `index`; hosts should key rendered rows by it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item<P> {
    /// Position of the item in the logical list.
    pub index: i64,
    /// Caller-defined row content.
    pub payload: P,
}

impl<P> Item<P> {
    /// Creates an item.
    #[must_use]
    pub const fn new(index: i64, payload: P) -> Self {
        Self { index, payload }
    }
}

/// Supplies the items of a requested index range.
///
/// The window engine never constructs [`Item`]s itself. It asks a data source
/// for `count` items starting at some (possibly out-of-range) index and uses
/// only the number of items returned for its padding math. Implementations
/// must:
///
/// - Return the items of `[offset, offset + count - 1]` intersected with the
///   list bounds, in ascending index order, without gaps or duplicates.
/// - Return between `0` and `count` items. An empty result is expected when the
///   requested range lies entirely outside the bounds.
///
/// Any closure `FnMut(i64, usize) -> Vec<Item<P>>` is a data source. For lists
/// whose payload is a pure function of the index, [`RangeSource`] implements
/// the bounds truncation for you.
pub trait DataSource {
    /// Row content type.
    type Payload;

    /// Returns the in-bounds items of `offset..offset + count`, ascending.
    fn fetch(&mut self, offset: i64, count: usize) -> Vec<Item<Self::Payload>>;
}

impl<P, F> DataSource for F
where
    F: FnMut(i64, usize) -> Vec<Item<P>>,
{
    type Payload = P;

    fn fetch(&mut self, offset: i64, count: usize) -> Vec<Item<P>> {
        self(offset, count)
    }
}

/// A [`DataSource`] that materializes payloads from their index.
///
/// Requests are truncated to the configured bounds: items are produced for
/// `max(min_index, offset)..=min(offset + count - 1, max_index)`, and nothing
/// is produced when that range is empty.
///
/// ```rust
/// use understory_buffer_window::{DataSource, ListBounds, RangeSource};
///
/// let mut source = RangeSource::new(ListBounds::new(-2, 5), |i| i * 10);
///
/// let items = source.fetch(-4, 4);
/// assert_eq!(items.iter().map(|item| item.index).collect::<Vec<_>>(), [-2, -1]);
/// assert_eq!(items[0].payload, -20);
///
/// assert!(source.fetch(6, 3).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct RangeSource<F> {
    bounds: ListBounds,
    make_payload: F,
}

impl<F> RangeSource<F> {
    /// Creates a source over `bounds` using `make_payload` for row content.
    #[must_use]
    pub fn new<P>(bounds: ListBounds, make_payload: F) -> Self
    where
        F: FnMut(i64) -> P,
    {
        Self {
            bounds,
            make_payload,
        }
    }

    /// Bounds this source truncates requests to.
    #[must_use]
    pub fn bounds(&self) -> ListBounds {
        self.bounds
    }
}

impl<P, F> DataSource for RangeSource<F>
where
    F: FnMut(i64) -> P,
{
    type Payload = P;

    fn fetch(&mut self, offset: i64, count: usize) -> Vec<Item<P>> {
        if count == 0 {
            return Vec::new();
        }
        let span = i64::try_from(count - 1).unwrap_or(i64::MAX);
        let start = offset.max(self.bounds.min_index);
        let end = offset.saturating_add(span).min(self.bounds.max_index);
        if start > end {
            return Vec::new();
        }
        (start..=end)
            .map(|index| Item::new(index, (self.make_payload)(index)))
            .collect()
    }
}
