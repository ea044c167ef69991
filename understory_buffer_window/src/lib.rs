// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_buffer_window --heading-base-level=0

//! Understory Buffer Window: a sliding buffer of fixed-height rows for huge lists.
//!
//! This crate renders a logically huge, index-addressable list inside a
//! fixed-extent scrollable viewport by materializing only a small "buffer
//! window" of rows, while padding keeps the viewport's scrollbar behaving as if
//! every row were present.
//!
//! The core concepts are:
//!
//! - [`ListBounds`] and [`LayoutParams`]: the inclusive index range of the
//!   list, plus row height, visible row count, tolerance rows, and the initial
//!   start index.
//! - [`resolve`]: derives the [`DerivedConstants`] (viewport, total, and
//!   tolerance extents plus the per-fetch buffer count) and the initial scroll
//!   offset, once per configuration.
//! - [`recompute`]: given a scroll offset, requests the buffer's items from a
//!   [`DataSource`] and computes the top and bottom padding of a new
//!   [`WindowState`].
//! - [`VirtualScroller`]: a small controller that owns the data source and the
//!   live window, performs activation (including the synthetic scroll to zero),
//!   and hands every new window to a [`WindowSink`].
//!
//! For any window produced by [`recompute`] within the scrollable range:
//!
//! ```text
//! top_padding + items.len() * item_height + bottom_padding == total_extent
//! ```
//!
//! Paddings are clamped to be non-negative. Near either end of the list the
//! data source returns fewer than `buffer_count` items; the core never pads
//! missing rows with placeholders.
//!
//! This crate deliberately does **not** know about widgets, display trees, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Giving the viewport a fixed extent of
//!   [`viewport_extent`](DerivedConstants::viewport_extent).
//! - Applying [`VirtualScroller::initial_scroll_offset`] after activation.
//! - Calling [`VirtualScroller::on_scroll`] with the raw offset of every scroll
//!   notification.
//! - Laying out each window's [`segments`](WindowState::segments): a spacer,
//!   the rows keyed by [`Item::index`], and another spacer.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_buffer_window::{LayoutParams, ListBounds, RangeSource, VirtualScroller};
//!
//! // Indices -1000..=10000, 40 logical pixels per row, 12 visible rows,
//! // 4 tolerance rows on each side, starting at index 1.
//! let bounds = ListBounds::new(-1000, 10_000);
//! let layout = LayoutParams::new(40.0_f64, 12).with_tolerance(4).with_start_index(1);
//! let source = RangeSource::new(bounds, |i| format!("I am data no. {i}"));
//!
//! let mut scroller = VirtualScroller::activate(bounds, layout, source).unwrap();
//!
//! // The host sets its viewport to the initial offset; the scroll notification
//! // that follows drives the first real window.
//! let offset = scroller.initial_scroll_offset();
//! let window = scroller.on_scroll(offset);
//! assert_eq!(window.len(), 20);
//!
//! let constants = scroller.constants();
//! let window = scroller.window();
//! assert_eq!(
//!     window.top_padding + window.rendered_extent(40.0) + window.bottom_padding,
//!     constants.total_extent(),
//! );
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels). Whole-number row heights keep the padding
//! arithmetic exact.
//!
//! ## Features
//!
//! - `std` (default): compile against the standard library.
//! - `tracing`: emit `tracing` events on resolution and spans around each
//!   recompute.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ListBounds`] and
//!   [`LayoutParams`] so hosts can load them from settings files.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod scalar;
mod scroller;
mod source;
mod window;

pub use config::{DerivedConstants, LayoutParams, ListBounds, Resolved, resolve};
pub use error::InvalidConfiguration;
pub use scalar::Scalar;
pub use scroller::{FnSink, NoopSink, VirtualScroller, WindowSink, sink_fn};
pub use source::{DataSource, Item, RangeSource};
pub use window::{Segment, WindowState, base_index, recompute};
