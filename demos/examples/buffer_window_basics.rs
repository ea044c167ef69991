// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buffer window basics.
//!
//! Activate a scroller over indices `-1000..=10000`, apply the initial scroll
//! offset like a host viewport would, then replay a few scroll notifications
//! and print the spacer/row layout of each window.
//!
//! Run:
//! - `cargo run -p understory_buffer_window_demos --example buffer_window_basics`

use understory_buffer_window::{DerivedConstants, VirtualScroller, WindowState, sink_fn};
use understory_buffer_window_demos::{DEMO_BOUNDS, demo_layout, demo_source, describe};

fn main() {
    let sink = sink_fn(
        |constants: &DerivedConstants<f64>, window: &WindowState<String, f64>| {
            if window.is_empty() {
                println!("(no rows buffered yet)\n");
                return;
            }
            println!(
                "scroll offset {} -> rows {:?}",
                window.scroll_offset,
                window.buffered_range()
            );
            println!("{}", describe(constants, window));
        },
    );

    let mut scroller = match VirtualScroller::activate_with_sink(
        DEMO_BOUNDS,
        demo_layout(),
        demo_source(DEMO_BOUNDS),
        sink,
    ) {
        Ok(scroller) => scroller,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return;
        }
    };

    let constants = scroller.constants();
    println!(
        "viewport {}px, total {}px, {} rows per fetch",
        constants.viewport_extent(),
        constants.total_extent(),
        constants.buffer_count()
    );

    // The host applies the initial offset; its scroll notification drives the first window.
    let initial = scroller.initial_scroll_offset();
    scroller.on_scroll(initial);

    // A small wheel step, a jump to the very top, and one to the very bottom.
    for offset in [initial + 95.0, 0.0, constants.max_scroll_offset()] {
        scroller.on_scroll(offset);
    }
}
