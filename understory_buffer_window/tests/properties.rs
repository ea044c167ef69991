// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the window engine.
//!
//! Row heights are whole numbers so every padding sum is exact in `f64`.

use proptest::prelude::*;
use understory_buffer_window::{
    DerivedConstants, LayoutParams, ListBounds, RangeSource, Scalar, WindowState, base_index,
    recompute, resolve,
};

#[derive(Copy, Clone, Debug)]
struct Case {
    bounds: ListBounds,
    layout: LayoutParams<f64>,
}

impl Case {
    fn constants(&self) -> DerivedConstants<f64> {
        resolve(self.bounds, self.layout)
            .expect("generated cases are valid")
            .constants()
    }

    /// Largest reachable scroll offset, in whole rows.
    fn max_offset_rows(&self) -> i64 {
        let len = self.bounds.max_index - self.bounds.min_index + 1;
        let visible = i64::try_from(self.layout.visible_count).unwrap();
        (len - visible).max(0)
    }

    fn window_at(&self, scroll_offset: f64) -> WindowState<i64, f64> {
        let mut source = RangeSource::new(self.bounds, |i| i);
        recompute(scroll_offset, &self.constants(), self.bounds, &mut source)
    }
}

fn case() -> impl Strategy<Value = Case> {
    (
        -100_000_i64..100_000,
        1_i64..5_000,
        1_u32..64,
        1_usize..40,
        0_usize..10,
        -60_i64..5_060,
    )
        .prop_map(|(min, len, height, visible, tolerance, start)| Case {
            bounds: ListBounds::new(min, min + len - 1),
            layout: LayoutParams::new(f64::from(height), visible)
                .with_tolerance(tolerance)
                .with_start_index(min + start),
        })
}

/// A case plus a scroll offset inside `[0, total_extent - viewport_extent]`.
fn case_and_offset() -> impl Strategy<Value = (Case, f64)> {
    case().prop_flat_map(|case| {
        let max_px = case.max_offset_rows() * case.layout.item_height.floor_to_i64();
        (Just(case), (0..=max_px).prop_map(|px| px as f64))
    })
}

fn assert_contiguous(window: &WindowState<i64, f64>) -> Result<(), TestCaseError> {
    for pair in window.items.windows(2) {
        prop_assert_eq!(pair[0].index + 1, pair[1].index);
    }
    Ok(())
}

proptest! {
    #[test]
    fn regions_fill_total_extent((case, offset) in case_and_offset()) {
        let constants = case.constants();
        let window = case.window_at(offset);
        prop_assert!(window.top_padding >= 0.0);
        prop_assert!(window.bottom_padding >= 0.0);
        prop_assert_eq!(
            window.top_padding
                + window.rendered_extent(constants.item_height())
                + window.bottom_padding,
            constants.total_extent()
        );
    }

    #[test]
    fn items_are_contiguous_and_within_bounds((case, offset) in case_and_offset()) {
        let constants = case.constants();
        let window = case.window_at(offset);
        prop_assert!(!window.is_empty());
        prop_assert!(window.len() <= constants.buffer_count());
        assert_contiguous(&window)?;
        for item in &window.items {
            prop_assert!(case.bounds.contains(item.index));
            prop_assert_eq!(item.payload, item.index);
        }
    }

    #[test]
    fn buffer_is_full_away_from_the_bounds((case, offset) in case_and_offset()) {
        let constants = case.constants();
        let window = case.window_at(offset);
        let count = i64::try_from(constants.buffer_count()).unwrap();
        let fits = window.base_index >= case.bounds.min_index
            && window.base_index + count - 1 <= case.bounds.max_index;
        if fits {
            prop_assert_eq!(window.len(), constants.buffer_count());
            prop_assert_eq!(window.first_index(), Some(window.base_index));
        } else {
            prop_assert!(window.len() < constants.buffer_count());
        }
    }

    #[test]
    fn recompute_is_idempotent((case, offset) in case_and_offset()) {
        prop_assert_eq!(case.window_at(offset), case.window_at(offset));
    }

    #[test]
    fn paddings_clamp_at_both_ends(case in case()) {
        let constants = case.constants();
        prop_assert_eq!(case.window_at(0.0).top_padding, 0.0);
        prop_assert_eq!(
            case.window_at(constants.max_scroll_offset()).bottom_padding,
            0.0
        );
        prop_assert_eq!(
            case.window_at(constants.max_scroll_offset()).last_index(),
            Some(case.bounds.max_index)
        );
    }

    #[test]
    fn base_index_is_monotonic(
        case in case(),
        a in 0.0_f64..1.0e6,
        b in 0.0_f64..1.0e6,
    ) {
        let constants = case.constants();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(base_index(low, &constants) <= base_index(high, &constants));
    }

    #[test]
    fn initial_offset_lands_visible_band_on_start_index(case in case()) {
        let resolved = resolve(case.bounds, case.layout).unwrap();
        let constants = resolved.constants();
        let offset = resolved.initial_scroll_offset();
        let first_visible =
            case.bounds.min_index + (offset / constants.item_height()).floor_to_i64();
        prop_assert_eq!(first_visible, case.layout.start_index);
        prop_assert_eq!(
            resolved.initial_top_padding() + resolved.initial_bottom_padding(),
            constants.total_extent()
        );
    }
}

#[test]
fn demo_configuration_example() {
    let bounds = ListBounds::new(-1000, 10_000);
    let layout = LayoutParams::new(40.0, 12)
        .with_tolerance(4)
        .with_start_index(1);
    let resolved = resolve(bounds, layout).unwrap();
    let constants = resolved.constants();

    assert_eq!(constants.viewport_extent(), 480.0);
    assert_eq!(constants.total_extent(), 440_040.0);
    assert_eq!(constants.tolerance_extent(), 160.0);
    assert_eq!(constants.buffer_count(), 20);
    assert_eq!(resolved.initial_top_padding(), 39_880.0);
    assert_eq!(resolved.initial_scroll_offset(), 40_040.0);

    let mut source = RangeSource::new(bounds, |i| i);
    let window = recompute(0.0, &constants, bounds, &mut source);
    assert_eq!(window.base_index, -1004);
    assert_eq!(window.buffered_range(), Some(-1000..=-985));
    assert_eq!(window.top_padding, 0.0);
}
