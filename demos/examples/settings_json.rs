// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load scroller settings from JSON and trace a scroll session.
//!
//! Without an argument the built-in settings are used. Every resolution and
//! recompute is logged through `tracing`.
//!
//! Run:
//! - `cargo run -p understory_buffer_window_demos --example settings_json`
//! - `cargo run -p understory_buffer_window_demos --example settings_json -- settings.json`

use serde::Deserialize;
use tracing::Level;
use understory_buffer_window::{LayoutParams, ListBounds, VirtualScroller};
use understory_buffer_window_demos::demo_source;

const DEFAULT_SETTINGS: &str = r#"{
    "bounds": { "min_index": -1000, "max_index": 10000 },
    "layout": { "item_height": 40.0, "visible_count": 12, "tolerance": 4, "start_index": -1000 }
}"#;

#[derive(Debug, Deserialize)]
struct Settings {
    bounds: ListBounds,
    layout: LayoutParams<f64>,
}

fn load_settings() -> Result<Settings, Box<dyn std::error::Error>> {
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_SETTINGS.to_owned(),
    };
    Ok(serde_json::from_str(&text)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .init();

    let settings = load_settings()?;
    tracing::info!(?settings, "loaded settings");

    // Starting at the first index resolves to a zero offset, so activation
    // performs the scroll-to-zero recompute itself.
    let mut scroller = VirtualScroller::activate(
        settings.bounds,
        settings.layout,
        demo_source(settings.bounds),
    )?;
    tracing::info!(
        revision = scroller.revision(),
        rows = ?scroller.buffered_range(),
        "activated"
    );

    let step = scroller.constants().item_height() * 7.0;
    for i in 1..=5 {
        let window = scroller.on_scroll(step * f64::from(i));
        tracing::info!(rows = ?window.buffered_range(), "scrolled");
    }
    Ok(())
}
