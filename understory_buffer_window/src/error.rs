// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use core::fmt;

/// Error returned by [`resolve`](crate::resolve) when bounds or layout
/// parameters violate their constraints.
///
/// These are programmer errors: the resolver does not try to correct them, and
/// the caller must fix the configuration before activating a scroller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidConfiguration {
    /// `item_height` is zero, negative, NaN, or infinite.
    ItemHeightNotPositive,
    /// `visible_count` is zero.
    ZeroVisibleCount,
    /// `min_index` is greater than `max_index`.
    InvertedBounds {
        /// The configured lower bound.
        min_index: i64,
        /// The configured upper bound.
        max_index: i64,
    },
    /// The number of indices in `min_index..=max_index` does not fit in an `i64`.
    IndexSpanOverflow,
    /// `visible_count + 2 * tolerance` does not fit in a `usize`.
    BufferCountOverflow,
}

impl fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemHeightNotPositive => {
                f.write_str("item height must be a positive, finite extent")
            }
            Self::ZeroVisibleCount => f.write_str("visible count must be at least 1"),
            Self::InvertedBounds {
                min_index,
                max_index,
            } => write!(
                f,
                "list bounds are inverted: min index {min_index} is greater than max index {max_index}"
            ),
            Self::IndexSpanOverflow => f.write_str("list bounds span more indices than fit in i64"),
            Self::BufferCountOverflow => {
                f.write_str("visible count plus twice the tolerance overflows usize")
            }
        }
    }
}

impl core::error::Error for InvalidConfiguration {}
