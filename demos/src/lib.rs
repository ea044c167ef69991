// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the buffer window demos.
//!
//! Run:
//! - `cargo run -p understory_buffer_window_demos --example buffer_window_basics`
//! - `cargo run -p understory_buffer_window_demos --example settings_json -- [settings.json]`

use std::fmt::Write as _;

use understory_buffer_window::{
    DerivedConstants, LayoutParams, ListBounds, RangeSource, Segment, WindowState,
};

/// Bounds used by the demos: a list that starts well below zero.
pub const DEMO_BOUNDS: ListBounds = ListBounds::new(-1000, 10_000);

/// Layout used by the demos: 40px rows, 12 visible, 4 tolerance rows, start at 1.
pub fn demo_layout() -> LayoutParams<f64> {
    LayoutParams::new(40.0, 12)
        .with_tolerance(4)
        .with_start_index(1)
}

/// A data source producing `"I am data no. {i}"` rows within `bounds`.
pub fn demo_source(bounds: ListBounds) -> RangeSource<impl FnMut(i64) -> String> {
    RangeSource::new(bounds, |i| format!("I am data no. {i}"))
}

/// Renders a window as text, one line per segment, marking rows inside the
/// visible band with `>`.
pub fn describe<P: std::fmt::Display>(
    constants: &DerivedConstants<f64>,
    window: &WindowState<P, f64>,
) -> String {
    let visible_start = window.scroll_offset;
    let visible_end = visible_start + constants.viewport_extent();
    let mut out = String::new();
    let mut position = 0;
    for segment in window.segments() {
        match segment {
            Segment::Spacer(extent) => {
                let _ = writeln!(out, "  [spacer {extent}px]");
            }
            Segment::Row(item) => {
                let top = window.row_offset(position, constants.item_height());
                position += 1;
                let marker = if top >= visible_start && top < visible_end {
                    '>'
                } else {
                    ' '
                };
                let _ = writeln!(out, "{marker} {:>6} {}", item.index, item.payload);
            }
        }
    }
    out
}
