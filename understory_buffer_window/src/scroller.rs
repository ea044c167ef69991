// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns one viewport's buffer window.

use core::ops::RangeInclusive;

use crate::{
    DataSource, DerivedConstants, InvalidConfiguration, LayoutParams, ListBounds, Resolved, Scalar,
    WindowState, recompute, resolve,
};

/// Receives every new window a [`VirtualScroller`] produces.
///
/// This is the hand-off point to the rendering layer: it should lay out a
/// spacer of `top_padding`, the rows, and a spacer of `bottom_padding` inside a
/// viewport of [`viewport_extent`](DerivedConstants::viewport_extent).
pub trait WindowSink<P, S> {
    /// Called with the window that just replaced the previous one.
    fn commit(&mut self, constants: &DerivedConstants<S>, window: &WindowState<P, S>);
}

/// A [`WindowSink`] that ignores every window.
///
/// Hosts that pull [`VirtualScroller::window`] after each scroll event instead
/// of being notified use this.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSink;

impl<P, S> WindowSink<P, S> for NoopSink {
    fn commit(&mut self, _constants: &DerivedConstants<S>, _window: &WindowState<P, S>) {}
}

/// A [`WindowSink`] backed by a closure. Created by [`sink_fn`].
#[derive(Copy, Clone, Debug)]
pub struct FnSink<F>(F);

/// Wraps a closure as a [`WindowSink`].
///
/// ```rust
/// use understory_buffer_window::{LayoutParams, ListBounds, RangeSource, VirtualScroller, sink_fn};
///
/// let bounds = ListBounds::from_len(100);
/// let mut commits = 0;
/// let scroller = VirtualScroller::activate_with_sink(
///     bounds,
///     LayoutParams::new(10.0_f64, 4),
///     RangeSource::new(bounds, |i| i),
///     sink_fn(|_constants, _window| commits += 1),
/// )
/// .unwrap();
/// drop(scroller);
/// // The empty initial window, then the synthetic scroll to zero.
/// assert_eq!(commits, 2);
/// ```
pub fn sink_fn<P, S, F>(f: F) -> FnSink<F>
where
    F: FnMut(&DerivedConstants<S>, &WindowState<P, S>),
{
    FnSink(f)
}

impl<P, S, F> WindowSink<P, S> for FnSink<F>
where
    F: FnMut(&DerivedConstants<S>, &WindowState<P, S>),
{
    fn commit(&mut self, constants: &DerivedConstants<S>, window: &WindowState<P, S>) {
        (self.0)(constants, window);
    }
}

/// Owns the live [`WindowState`] of one viewport.
///
/// A scroller only exists once its configuration has been resolved: the
/// constructors are the single transition from "unconfigured" to "active", and
/// every scroll event afterwards replaces the window with a fresh one.
///
/// Activation follows the host contract for the first frame:
///
/// 1. The host applies [`initial_scroll_offset`](Self::initial_scroll_offset)
///    to its viewport; the resulting scroll notification populates the window
///    through [`on_scroll`](Self::on_scroll).
/// 2. When that offset is exactly zero no notification will fire, so the
///    scroller runs the scroll-to-zero recompute itself during activation.
///
/// ```rust
/// use understory_buffer_window::{LayoutParams, ListBounds, RangeSource, VirtualScroller};
///
/// let bounds = ListBounds::new(-1000, 10_000);
/// let layout = LayoutParams::new(40.0_f64, 12).with_tolerance(4).with_start_index(1);
/// let mut scroller = VirtualScroller::activate(
///     bounds,
///     layout,
///     RangeSource::new(bounds, |i| format!("I am data no. {i}")),
/// )
/// .unwrap();
///
/// let offset = scroller.initial_scroll_offset();
/// let window = scroller.on_scroll(offset);
/// assert_eq!(window.first_index(), Some(-3));
/// assert_eq!(window.items[4].payload, "I am data no. 1");
/// ```
#[derive(Debug)]
pub struct VirtualScroller<S, D: DataSource, R = NoopSink> {
    bounds: ListBounds,
    layout: LayoutParams<S>,
    resolved: Resolved<S>,
    source: D,
    sink: R,
    window: WindowState<D::Payload, S>,
    revision: u64,
}

impl<S: Scalar, D: DataSource> VirtualScroller<S, D> {
    /// Resolves the configuration and activates a scroller without a sink.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] when `bounds` or `layout` violate their
    /// constraints.
    pub fn activate(
        bounds: ListBounds,
        layout: LayoutParams<S>,
        source: D,
    ) -> Result<Self, InvalidConfiguration> {
        Self::activate_with_sink(bounds, layout, source, NoopSink)
    }
}

impl<S, D, R> VirtualScroller<S, D, R>
where
    S: Scalar,
    D: DataSource,
    R: WindowSink<D::Payload, S>,
{
    /// Resolves the configuration and activates a scroller that reports every
    /// new window to `sink`.
    ///
    /// The sink first receives the initial (empty) window, and then the
    /// scroll-to-zero window when the initial scroll offset is zero.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration`] when `bounds` or `layout` violate their
    /// constraints.
    pub fn activate_with_sink(
        bounds: ListBounds,
        layout: LayoutParams<S>,
        source: D,
        sink: R,
    ) -> Result<Self, InvalidConfiguration> {
        let resolved = resolve(bounds, layout)?;
        let mut scroller = Self {
            bounds,
            layout,
            resolved,
            source,
            sink,
            window: resolved.initial_window(),
            revision: 0,
        };
        scroller
            .sink
            .commit(&resolved.constants(), &scroller.window);

        let synthetic = resolved.needs_synthetic_scroll();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            initial_scroll_offset = ?resolved.initial_scroll_offset(),
            synthetic,
            "buffer window activated"
        );
        if synthetic {
            scroller.on_scroll(S::zero());
        }
        Ok(scroller)
    }

    /// Recomputes the window for a new scroll offset and notifies the sink.
    pub fn on_scroll(&mut self, scroll_offset: S) -> &WindowState<D::Payload, S> {
        let constants = self.resolved.constants();
        self.window = recompute(scroll_offset, &constants, self.bounds, &mut self.source);
        self.revision = self.revision.wrapping_add(1);
        self.sink.commit(&constants, &self.window);
        &self.window
    }

    /// Recomputes the window at the last recorded scroll offset.
    ///
    /// Use this after the data source's content changed without the viewport
    /// moving.
    pub fn refresh(&mut self) -> &WindowState<D::Payload, S> {
        self.on_scroll(self.window.scroll_offset)
    }
}

impl<S: Scalar, D: DataSource, R> VirtualScroller<S, D, R> {
    /// The live window.
    #[must_use]
    pub fn window(&self) -> &WindowState<D::Payload, S> {
        &self.window
    }

    /// Number of windows that replaced the initial one.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The constants derived at activation.
    #[must_use]
    pub fn constants(&self) -> DerivedConstants<S> {
        self.resolved.constants()
    }

    /// The full resolver output, including the initial geometry.
    #[must_use]
    pub fn resolved(&self) -> &Resolved<S> {
        &self.resolved
    }

    /// Scroll offset the host must apply to its viewport after activation.
    #[must_use]
    pub fn initial_scroll_offset(&self) -> S {
        self.resolved.initial_scroll_offset()
    }

    /// The list bounds.
    #[must_use]
    pub fn bounds(&self) -> ListBounds {
        self.bounds
    }

    /// The layout parameters.
    #[must_use]
    pub fn layout(&self) -> LayoutParams<S> {
        self.layout
    }

    /// Shared access to the data source.
    #[must_use]
    pub fn source(&self) -> &D {
        &self.source
    }

    /// Mutable access to the data source.
    ///
    /// Call [`refresh`](Self::refresh) afterwards if the buffered rows changed.
    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    /// Shared access to the sink.
    #[must_use]
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    /// Inclusive range of buffered indices, or `None` when nothing is buffered.
    #[must_use]
    pub fn buffered_range(&self) -> Option<RangeInclusive<i64>> {
        self.window.buffered_range()
    }

    /// Returns `true` if the row at `index` is currently buffered.
    #[must_use]
    pub fn is_index_buffered(&self, index: i64) -> bool {
        self.window.contains_index(index)
    }
}
