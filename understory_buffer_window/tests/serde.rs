// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading scroller settings through `serde`.

#![cfg(feature = "serde")]

use serde::Deserialize;
use understory_buffer_window::{LayoutParams, ListBounds, resolve};

#[derive(Deserialize)]
struct Settings {
    bounds: ListBounds,
    layout: LayoutParams<f64>,
}

#[test]
fn settings_load_from_json() {
    let json = r#"{
        "bounds": { "min_index": -1000, "max_index": 10000 },
        "layout": { "item_height": 40.0, "visible_count": 12, "tolerance": 4, "start_index": 1 }
    }"#;
    let settings: Settings = serde_json::from_str(json).unwrap();

    assert_eq!(settings.bounds, ListBounds::new(-1000, 10_000));
    assert_eq!(
        settings.layout,
        LayoutParams::new(40.0, 12)
            .with_tolerance(4)
            .with_start_index(1)
    );
    let resolved = resolve(settings.bounds, settings.layout).unwrap();
    assert_eq!(resolved.initial_scroll_offset(), 40_040.0);
}

#[test]
fn negative_tolerance_is_rejected_by_the_schema() {
    let json = r#"{ "item_height": 40.0, "visible_count": 12, "tolerance": -1, "start_index": 0 }"#;
    assert!(serde_json::from_str::<LayoutParams<f64>>(json).is_err());
}
