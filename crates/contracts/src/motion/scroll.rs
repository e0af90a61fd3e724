//! Scroll progress measurement.
//!
//! Every layout reduces to the same three numbers:
//!
//! | layout           | `offset`          | `content_height` | `viewport_height` |
//! |------------------|-------------------|------------------|-------------------|
//! | inner container  | `scrollTop`       | `scrollHeight`   | `clientHeight`    |
//! | sticky section   | `max(0, -rect.top)` | `offsetHeight` | `innerHeight`     |
//! | entering section | `innerHeight - rect.top` | `offsetHeight + innerHeight` | `0` |
//!
//! A sticky section has to be taller than the viewport. Ordinary sections use
//! the entrance form, which runs from the section's top touching the bottom
//! of the viewport to its bottom leaving the top.

use super::clamp01;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Raw DOM measurements for one scrollable region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub content_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, content_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            content_height,
            viewport_height,
        }
    }

    /// Metrics of a tall section with a sticky child, from its bounding rect.
    pub fn from_section(rect_top: f64, section_height: f64, viewport_height: f64) -> Self {
        Self::new((-rect_top).max(0.0), section_height, viewport_height)
    }

    /// Metrics of an ordinary (non-sticky) section passing through the viewport.
    /// Works for sections of any height, including ones shorter than the viewport.
    pub fn from_entrance(rect_top: f64, section_height: f64, viewport_height: f64) -> Self {
        Self::new(
            viewport_height - rect_top,
            section_height + viewport_height,
            0.0,
        )
    }

    /// Distance that can actually be scrolled; `None` when the content fits.
    pub fn scrollable(&self) -> Option<f64> {
        let range = self.content_height - self.viewport_height;
        (range.is_finite() && range > 0.0).then_some(range)
    }

    /// `self` when it can scroll, otherwise `fallback`.
    ///
    /// A scroll container stops overflowing once a narrow layout lets it grow
    /// to its content; the window then carries the scroll instead.
    pub fn or_scrollable(self, fallback: ScrollMetrics) -> ScrollMetrics {
        if self.scrollable().is_some() {
            self
        } else {
            fallback
        }
    }

    /// Absolute offset that corresponds to `progress` inside this region.
    pub fn offset_for(&self, progress: f64) -> f64 {
        self.scrollable()
            .map(|range| clamp01(progress) * range)
            .unwrap_or(0.0)
    }
}

/// Normalised scroll position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    pub fn new(value: f64) -> Self {
        Self(clamp01(value))
    }

    /// `None` when there is nothing to scroll (no division is attempted).
    pub fn from_metrics(metrics: &ScrollMetrics) -> Option<Self> {
        let range = metrics.scrollable()?;
        Some(Self::new(metrics.offset / range))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

impl From<ScrollProgress> for f64 {
    fn from(p: ScrollProgress) -> Self {
        p.0
    }
}

/// At most one pending animation-frame computation.
///
/// `try_acquire` returns `true` only for the first caller since the last
/// `release`; the scroll handler schedules a frame only when it wins.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Progress owner for one observed region.
///
/// Keeps the last good value when a measurement has no scrollable range.
#[derive(Debug, Default)]
pub struct ScrollSequencer {
    gate: FrameGate,
    current: Cell<ScrollProgress>,
}

impl ScrollSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> ScrollProgress {
        self.current.get()
    }

    /// Scroll event: `true` if a frame should be scheduled.
    pub fn request_frame(&self) -> bool {
        self.gate.try_acquire()
    }

    /// Animation frame: measure, store and release the gate.
    pub fn on_frame(&self, metrics: Option<ScrollMetrics>) -> ScrollProgress {
        if let Some(p) = metrics.as_ref().and_then(ScrollProgress::from_metrics) {
            self.current.set(p);
        }
        self.gate.release();
        self.current.get()
    }

    /// Synchronous measurement, used for the initial read on mount and on resize.
    pub fn measure(&self, metrics: &ScrollMetrics) -> ScrollProgress {
        if let Some(p) = ScrollProgress::from_metrics(metrics) {
            self.current.set(p);
        }
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_progress_basic() {
        let m = ScrollMetrics::new(250.0, 1500.0, 1000.0);
        assert_eq!(ScrollProgress::from_metrics(&m).unwrap().value(), 0.5);
    }

    #[test]
    fn test_progress_is_clamped() {
        let over = ScrollMetrics::new(900.0, 1500.0, 1000.0);
        assert_eq!(ScrollProgress::from_metrics(&over).unwrap().value(), 1.0);
        let under = ScrollMetrics::new(-40.0, 1500.0, 1000.0);
        assert_eq!(ScrollProgress::from_metrics(&under).unwrap().value(), 0.0);
    }

    #[test]
    fn test_no_scrollable_range_short_circuits() {
        let equal = ScrollMetrics::new(0.0, 800.0, 800.0);
        assert!(ScrollProgress::from_metrics(&equal).is_none());
        let smaller = ScrollMetrics::new(10.0, 600.0, 800.0);
        assert!(ScrollProgress::from_metrics(&smaller).is_none());

        let seq = ScrollSequencer::new();
        let p = seq.measure(&equal).value();
        assert_eq!(p, 0.0);
        assert!(p.is_finite());
    }

    #[test]
    fn test_sequencer_keeps_last_value_when_range_collapses() {
        let seq = ScrollSequencer::new();
        seq.measure(&ScrollMetrics::new(300.0, 1600.0, 1000.0));
        assert_eq!(seq.progress().value(), 0.5);
        // viewport grew past the content, e.g. after a resize
        let p = seq.measure(&ScrollMetrics::new(300.0, 1600.0, 1600.0));
        assert_eq!(p.value(), 0.5);
    }

    #[test]
    fn test_section_metrics() {
        // 700vh section with a 1000px viewport, top scrolled 3300px out of view
        let m = ScrollMetrics::from_section(-3300.0, 7000.0, 1000.0);
        let p = ScrollProgress::from_metrics(&m).unwrap().value();
        assert!((p - 0.55).abs() < 1e-12);
        // section still below the fold
        let below = ScrollMetrics::from_section(420.0, 7000.0, 1000.0);
        assert_eq!(ScrollProgress::from_metrics(&below).unwrap().value(), 0.0);
    }

    #[test]
    fn test_short_section_needs_entrance_metrics() {
        // 732px section in a 1080px viewport: nothing to pin, so the sticky
        // form never leaves 0
        let seq = ScrollSequencer::new();
        for top in [1080.0, 500.0, 0.0, -300.0, -700.0] {
            assert_eq!(seq.measure(&ScrollMetrics::from_section(top, 732.0, 1080.0)).value(), 0.0);
        }

        let at = |top: f64| {
            ScrollProgress::from_metrics(&ScrollMetrics::from_entrance(top, 732.0, 1080.0))
                .unwrap()
                .value()
        };
        assert_eq!(at(1080.0), 0.0);
        assert_eq!(at(2000.0), 0.0);
        assert!((at(500.0) - 580.0 / 1812.0).abs() < 1e-12);
        assert!(at(0.0) > at(500.0));
        assert_eq!(at(-732.0), 1.0);
    }

    #[test]
    fn test_entrance_of_viewport_sized_section() {
        // last section on the page: scrolled to the bottom it sits exactly in view
        let m = ScrollMetrics::from_entrance(0.0, 1440.0, 1440.0);
        let p = ScrollProgress::from_metrics(&m).unwrap().value();
        assert_eq!(p, 0.5);
    }

    #[test]
    fn test_frame_gate_single_pending() {
        let seq = ScrollSequencer::new();
        assert!(seq.request_frame());
        assert!(!seq.request_frame());
        assert!(!seq.request_frame());
        seq.on_frame(Some(ScrollMetrics::new(100.0, 1100.0, 100.0)));
        assert!((seq.progress().value() - 0.1).abs() < 1e-12);
        assert!(seq.request_frame());
    }

    #[test]
    fn test_frame_releases_gate_without_metrics() {
        let seq = ScrollSequencer::new();
        assert!(seq.request_frame());
        seq.on_frame(None);
        assert!(seq.request_frame());
    }

    #[test]
    fn test_container_falls_back_to_window_when_not_overflowing() {
        let window = ScrollMetrics::new(1200.0, 4800.0, 800.0);
        // container grown to its content on a narrow screen
        let grown = ScrollMetrics::new(0.0, 4100.0, 4100.0);
        let m = grown.or_scrollable(window);
        assert_eq!(m, window);
        assert!((ScrollProgress::from_metrics(&m).unwrap().value() - 0.3).abs() < 1e-12);

        let fixed = ScrollMetrics::new(600.0, 4100.0, 900.0);
        assert_eq!(fixed.or_scrollable(window), fixed);
    }

    #[test]
    fn test_offset_for() {
        let m = ScrollMetrics::new(0.0, 9000.0, 1000.0);
        assert!((m.offset_for(0.4) - 3200.0).abs() < 1e-9);
        assert_eq!(ScrollMetrics::new(0.0, 500.0, 900.0).offset_for(0.4), 0.0);
    }

    proptest! {
        #[test]
        fn prop_sequencer_stays_finite_and_bounded(
            offset in -5000.0f64..20000.0,
            content in 0.0f64..20000.0,
            viewport in 0.0f64..5000.0,
        ) {
            let seq = ScrollSequencer::new();
            let p = seq.measure(&ScrollMetrics::new(offset, content, viewport)).value();
            prop_assert!(p.is_finite());
            prop_assert!((0.0..=1.0).contains(&p));
            if content <= viewport {
                prop_assert_eq!(p, 0.0);
            }
        }
    }
}
