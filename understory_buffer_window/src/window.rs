// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The window engine: maps a scroll offset to a buffered window of items.

use alloc::vec::Vec;
use core::iter;
use core::ops::RangeInclusive;

use crate::{DataSource, DerivedConstants, Item, ListBounds, Scalar};

/// Snapshot of the buffered window for one scroll offset.
///
/// A new snapshot is produced for every scroll event and replaces the previous
/// one wholesale. Hosts render, in order, a spacer of `top_padding`, one row
/// per entry of `items`, and a spacer of `bottom_padding` (see
/// [`segments`](Self::segments)). For windows produced by [`recompute`] the
/// three regions always add up to the list's total extent, which keeps the
/// viewport's scrollbar sized as if every row were present.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowState<P, S> {
    /// Extent of the virtualized rows above the buffer.
    pub top_padding: S,
    /// Extent of the virtualized rows below the buffer.
    pub bottom_padding: S,
    /// Buffered rows, contiguous and ascending by index.
    pub items: Vec<Item<P>>,
    /// Scroll offset this window was computed for.
    pub scroll_offset: S,
    /// First index that was requested from the data source.
    ///
    /// This is not clamped to the list bounds, so near the top it can be
    /// smaller than the index of the first buffered item.
    pub base_index: i64,
}

/// One region of a rendered window, in layout order.
#[derive(Debug, PartialEq)]
pub enum Segment<'a, P, S> {
    /// Blank space standing in for virtualized rows.
    Spacer(S),
    /// A buffered row.
    Row(&'a Item<P>),
}

impl<P, S: Scalar> WindowState<P, S> {
    /// Number of buffered rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no rows are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first buffered row.
    #[must_use]
    pub fn first_index(&self) -> Option<i64> {
        self.items.first().map(|item| item.index)
    }

    /// Index of the last buffered row.
    #[must_use]
    pub fn last_index(&self) -> Option<i64> {
        self.items.last().map(|item| item.index)
    }

    /// Inclusive range of buffered indices, or `None` when nothing is buffered.
    #[must_use]
    pub fn buffered_range(&self) -> Option<RangeInclusive<i64>> {
        Some(self.first_index()?..=self.last_index()?)
    }

    /// Returns `true` if the row at `index` is buffered.
    #[must_use]
    pub fn contains_index(&self, index: i64) -> bool {
        self.buffered_range()
            .is_some_and(|range| range.contains(&index))
    }

    /// Combined extent of the buffered rows.
    #[must_use]
    pub fn rendered_extent(&self, item_height: S) -> S {
        S::from_usize(self.items.len()) * item_height
    }

    /// Content-space offset of the buffered row at `position` in [`items`](Self::items).
    #[must_use]
    pub fn row_offset(&self, position: usize, item_height: S) -> S {
        self.top_padding + S::from_usize(position) * item_height
    }

    /// Iterates the regions the host lays out: top spacer, rows, bottom spacer.
    ///
    /// ```rust
    /// use understory_buffer_window::{Item, Segment, WindowState};
    ///
    /// let window = WindowState {
    ///     top_padding: 20.0_f32,
    ///     bottom_padding: 60.0,
    ///     items: vec![Item::new(2, "two"), Item::new(3, "three")],
    ///     scroll_offset: 20.0,
    ///     base_index: 2,
    /// };
    /// let segments: Vec<_> = window.segments().collect();
    /// assert_eq!(segments.len(), 4);
    /// assert_eq!(segments[0], Segment::Spacer(20.0));
    /// assert_eq!(segments[1], Segment::Row(&window.items[0]));
    /// assert_eq!(segments[3], Segment::Spacer(60.0));
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_, P, S>> {
        iter::once(Segment::Spacer(self.top_padding))
            .chain(self.items.iter().map(Segment::Row))
            .chain(iter::once(Segment::Spacer(self.bottom_padding)))
    }
}

/// Lowest index that should be buffered at `scroll_offset`.
///
/// The tolerance extent is subtracted before dividing, so the buffer leads the
/// visible band by one tolerance band in both directions. The result is not
/// clamped: it drops below `min_index` near the top of the list.
#[must_use]
pub fn base_index<S: Scalar>(scroll_offset: S, constants: &DerivedConstants<S>) -> i64 {
    let rows = ((scroll_offset - constants.tolerance_extent()) / constants.item_height())
        .floor_to_i64();
    constants.min_index().saturating_add(rows)
}

/// Computes the window for `scroll_offset`.
///
/// Requests [`buffer_count`](DerivedConstants::buffer_count) items starting at
/// [`base_index`] from `source`, then derives the paddings:
///
/// - `top_padding = max((base_index - min_index) * item_height, 0)`
/// - `bottom_padding = max(total_extent - top_padding - items * item_height, 0)`
///
/// The requested range is passed to the source unclamped; truncating it to
/// `bounds` is the source's job. Debug builds assert that the source honored
/// that contract. Release builds use the returned items as they are.
///
/// ```rust
/// use understory_buffer_window::{LayoutParams, ListBounds, RangeSource, recompute, resolve};
///
/// let bounds = ListBounds::new(-1000, 10_000);
/// let layout = LayoutParams::new(40.0_f64, 12).with_tolerance(4).with_start_index(1);
/// let constants = resolve(bounds, layout).unwrap().constants();
/// let mut source = RangeSource::new(bounds, |i| i);
///
/// let window = recompute(0.0, &constants, bounds, &mut source);
/// assert_eq!(window.base_index, -1004);
/// assert_eq!(window.first_index(), Some(-1000));
/// assert_eq!(window.top_padding, 0.0);
/// ```
pub fn recompute<S, D>(
    scroll_offset: S,
    constants: &DerivedConstants<S>,
    bounds: ListBounds,
    source: &mut D,
) -> WindowState<D::Payload, S>
where
    S: Scalar,
    D: DataSource + ?Sized,
{
    debug_assert!(
        scroll_offset.is_finite(),
        "scroll offset must be finite, got {scroll_offset:?}"
    );
    let buffer_count = constants.buffer_count();
    let base_index = base_index(scroll_offset, constants);

    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("buffer_window_recompute", ?scroll_offset, base_index)
        .entered();

    let items = source.fetch(base_index, buffer_count);
    if cfg!(debug_assertions) {
        check_fetched(&items, base_index, buffer_count, bounds);
    }

    let item_height = constants.item_height();
    let rows_above = base_index.saturating_sub(constants.min_index());
    let top_padding = (S::from_i64(rows_above) * item_height).clamp_non_negative();
    let rendered = S::from_usize(items.len()) * item_height;
    let bottom_padding = (constants.total_extent() - top_padding - rendered).clamp_non_negative();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        fetched = items.len(),
        ?top_padding,
        ?bottom_padding,
        "window recomputed"
    );

    WindowState {
        top_padding,
        bottom_padding,
        items,
        scroll_offset,
        base_index,
    }
}

/// Asserts the data source contract for one fetch.
fn check_fetched<P>(items: &[Item<P>], base_index: i64, count: usize, bounds: ListBounds) {
    debug_assert!(
        items.len() <= count,
        "data source returned {} items for a request of {count}",
        items.len()
    );
    for pair in items.windows(2) {
        debug_assert!(
            pair[0].index.checked_add(1) == Some(pair[1].index),
            "data source items are not contiguous and ascending: {} then {}",
            pair[0].index,
            pair[1].index
        );
    }
    if let (Some(first), Some(last)) = (items.first(), items.last()) {
        let span = i64::try_from(count.saturating_sub(1)).unwrap_or(i64::MAX);
        let requested_end = base_index.saturating_add(span);
        debug_assert!(
            first.index == base_index.max(bounds.min_index),
            "data source started at {} for a request starting at {base_index}",
            first.index
        );
        debug_assert!(
            last.index == requested_end.min(bounds.max_index),
            "data source ended at {} for a request ending at {requested_end}",
            last.index
        );
    }
}
