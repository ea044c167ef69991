// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List bounds, layout parameters, and the configuration resolver.

use alloc::vec::Vec;

use crate::{InvalidConfiguration, Scalar, WindowState};

/// Inclusive index bounds of the logical list.
///
/// Indices are signed so lists may start below zero (for example, a timeline
/// centered on "now").
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListBounds {
    /// Lowest valid index.
    pub min_index: i64,
    /// Highest valid index (inclusive).
    pub max_index: i64,
}

impl ListBounds {
    /// Creates bounds covering `min_index..=max_index`.
    #[must_use]
    pub const fn new(min_index: i64, max_index: i64) -> Self {
        Self {
            min_index,
            max_index,
        }
    }

    /// Creates bounds covering `0..len`.
    ///
    /// `len == 0` yields inverted bounds, which [`resolve`] rejects.
    #[must_use]
    pub fn from_len(len: usize) -> Self {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        Self::new(0, len - 1)
    }

    /// Returns `true` if `index` lies within the bounds.
    #[must_use]
    pub const fn contains(&self, index: i64) -> bool {
        self.min_index <= index && index <= self.max_index
    }

    /// Number of indices in `min_index..=max_index`.
    ///
    /// Returns `None` for inverted bounds or when the count overflows `i64`.
    #[must_use]
    pub const fn index_count(&self) -> Option<i64> {
        if self.min_index > self.max_index {
            return None;
        }
        match self.max_index.checked_sub(self.min_index) {
            Some(span) => span.checked_add(1),
            None => None,
        }
    }
}

/// Layout parameters of a fixed-row-height viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams<S> {
    /// Extent of a single row. Must be positive and finite.
    pub item_height: S,
    /// Number of rows that fit the viewport. Must be at least 1.
    pub visible_count: usize,
    /// Extra rows kept buffered above and below the visible band.
    pub tolerance: usize,
    /// Index the visible band starts at when the scroller is activated.
    ///
    /// Not validated against the list bounds.
    pub start_index: i64,
}

impl<S: Scalar> LayoutParams<S> {
    /// Creates layout parameters with no tolerance, starting at index `0`.
    #[must_use]
    pub fn new(item_height: S, visible_count: usize) -> Self {
        Self {
            item_height,
            visible_count,
            tolerance: 0,
            start_index: 0,
        }
    }

    /// Sets the number of tolerance rows.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: usize) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the initial start index.
    #[must_use]
    pub fn with_start_index(mut self, start_index: i64) -> Self {
        self.start_index = start_index;
        self
    }
}

/// Geometric constants derived once from [`ListBounds`] and [`LayoutParams`].
///
/// Only [`resolve`] constructs these, so every instance satisfies the layout
/// constraints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DerivedConstants<S> {
    item_height: S,
    min_index: i64,
    viewport_extent: S,
    total_extent: S,
    tolerance_extent: S,
    buffer_extent: S,
    buffer_count: usize,
}

impl<S: Scalar> DerivedConstants<S> {
    /// Extent of a single row.
    #[must_use]
    pub fn item_height(&self) -> S {
        self.item_height
    }

    /// Lowest valid index of the list these constants were resolved for.
    #[must_use]
    pub fn min_index(&self) -> i64 {
        self.min_index
    }

    /// `visible_count * item_height`: the fixed extent of the viewport.
    #[must_use]
    pub fn viewport_extent(&self) -> S {
        self.viewport_extent
    }

    /// `(max_index - min_index + 1) * item_height`: the extent of the whole list.
    #[must_use]
    pub fn total_extent(&self) -> S {
        self.total_extent
    }

    /// `tolerance * item_height`.
    #[must_use]
    pub fn tolerance_extent(&self) -> S {
        self.tolerance_extent
    }

    /// `viewport_extent + 2 * tolerance_extent`: the extent of a full buffer.
    #[must_use]
    pub fn buffer_extent(&self) -> S {
        self.buffer_extent
    }

    /// `visible_count + 2 * tolerance`: items requested per fetch.
    #[must_use]
    pub fn buffer_count(&self) -> usize {
        self.buffer_count
    }

    /// Largest scroll offset a viewport of `viewport_extent` can reach.
    ///
    /// Zero when the whole list fits inside the viewport.
    #[must_use]
    pub fn max_scroll_offset(&self) -> S {
        (self.total_extent - self.viewport_extent).clamp_non_negative()
    }
}

/// Output of [`resolve`]: the derived constants plus the initial geometry.
///
/// The initial paddings are deliberately left unclamped so that
/// [`initial_scroll_offset`](Self::initial_scroll_offset) is consistent with
/// them even when `start_index` sits near (or beyond) a bound.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolved<S> {
    constants: DerivedConstants<S>,
    items_above: i64,
    top_padding: S,
    bottom_padding: S,
    initial_scroll_offset: S,
}

impl<S: Scalar> Resolved<S> {
    /// The derived constants.
    #[must_use]
    pub fn constants(&self) -> DerivedConstants<S> {
        self.constants
    }

    /// `start_index - tolerance - min_index`, unclamped.
    #[must_use]
    pub fn items_above(&self) -> i64 {
        self.items_above
    }

    /// `items_above * item_height`, unclamped.
    #[must_use]
    pub fn initial_top_padding(&self) -> S {
        self.top_padding
    }

    /// `total_extent - initial_top_padding`, unclamped.
    #[must_use]
    pub fn initial_bottom_padding(&self) -> S {
        self.bottom_padding
    }

    /// Scroll offset the host must apply to the viewport on activation.
    ///
    /// At this offset the visible band starts exactly at `start_index`, with
    /// the tolerance rows already buffered above it.
    #[must_use]
    pub fn initial_scroll_offset(&self) -> S {
        self.initial_scroll_offset
    }

    /// Returns `true` when the initial scroll offset is exactly zero.
    ///
    /// Setting a viewport that is already at zero to zero raises no scroll
    /// notification, so the host must run one synthetic recompute at offset
    /// zero to populate the first window.
    #[must_use]
    pub fn needs_synthetic_scroll(&self) -> bool {
        self.initial_scroll_offset == S::zero()
    }

    /// Builds the initial, still empty, window.
    #[must_use]
    pub fn initial_window<P>(&self) -> WindowState<P, S> {
        WindowState {
            top_padding: self.top_padding,
            bottom_padding: self.bottom_padding,
            items: Vec::new(),
            scroll_offset: self.initial_scroll_offset,
            base_index: self.constants.min_index.saturating_add(self.items_above),
        }
    }
}

/// Derives the geometric constants and initial window geometry.
///
/// # Errors
///
/// Returns [`InvalidConfiguration`] when `item_height` is not a positive
/// finite extent, `visible_count` is zero, the bounds are inverted, or the
/// derived counts overflow.
///
/// # Example
///
/// ```rust
/// use understory_buffer_window::{LayoutParams, ListBounds, resolve};
///
/// let bounds = ListBounds::new(-1000, 10_000);
/// let layout = LayoutParams::new(40.0_f64, 12)
///     .with_tolerance(4)
///     .with_start_index(1);
///
/// let resolved = resolve(bounds, layout).unwrap();
/// let constants = resolved.constants();
/// assert_eq!(constants.viewport_extent(), 480.0);
/// assert_eq!(constants.total_extent(), 440_040.0);
/// assert_eq!(constants.buffer_count(), 20);
/// assert_eq!(resolved.items_above(), 997);
/// assert_eq!(resolved.initial_scroll_offset(), 40_040.0);
/// ```
pub fn resolve<S: Scalar>(
    bounds: ListBounds,
    layout: LayoutParams<S>,
) -> Result<Resolved<S>, InvalidConfiguration> {
    let item_height = layout.item_height;
    if !item_height.is_finite() || item_height <= S::zero() {
        return Err(InvalidConfiguration::ItemHeightNotPositive);
    }
    if layout.visible_count == 0 {
        return Err(InvalidConfiguration::ZeroVisibleCount);
    }
    if bounds.min_index > bounds.max_index {
        return Err(InvalidConfiguration::InvertedBounds {
            min_index: bounds.min_index,
            max_index: bounds.max_index,
        });
    }
    let index_count = bounds
        .index_count()
        .ok_or(InvalidConfiguration::IndexSpanOverflow)?;
    let buffer_count = layout
        .tolerance
        .checked_mul(2)
        .and_then(|slack| slack.checked_add(layout.visible_count))
        .ok_or(InvalidConfiguration::BufferCountOverflow)?;

    let viewport_extent = S::from_usize(layout.visible_count) * item_height;
    let total_extent = S::from_i64(index_count) * item_height;
    let tolerance_extent = S::from_usize(layout.tolerance) * item_height;
    let buffer_extent = viewport_extent + tolerance_extent + tolerance_extent;

    let tolerance = i64::try_from(layout.tolerance).unwrap_or(i64::MAX);
    let items_above = layout
        .start_index
        .saturating_sub(tolerance)
        .saturating_sub(bounds.min_index);
    let top_padding = S::from_i64(items_above) * item_height;
    let bottom_padding = total_extent - top_padding;
    let initial_scroll_offset = top_padding + tolerance_extent;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        min_index = bounds.min_index,
        max_index = bounds.max_index,
        ?viewport_extent,
        ?total_extent,
        ?tolerance_extent,
        buffer_count,
        items_above,
        ?initial_scroll_offset,
        "resolved buffer window configuration"
    );

    Ok(Resolved {
        constants: DerivedConstants {
            item_height,
            min_index: bounds.min_index,
            viewport_extent,
            total_extent,
            tolerance_extent,
            buffer_extent,
            buffer_count,
        },
        items_above,
        top_padding,
        bottom_padding,
        initial_scroll_offset,
    })
}
