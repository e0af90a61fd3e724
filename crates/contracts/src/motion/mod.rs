//! Scroll-driven animation math.
//!
//! The pipeline used by every animated section:
//! ```text
//! ScrollMetrics ──► ScrollProgress ──► PhaseSchedule ──► Reveal ──► CSS
//!  (DOM sizes)       (0..=1)           (index, local)    (channel values)
//! ```

pub mod bonsai;
pub mod cursor;
pub mod loader;
pub mod pet;
pub mod phase;
pub mod reveal;
pub mod scroll;
pub mod scroll_spy;

pub use phase::{Breakpoints, PhaseReading, PhaseSchedule};
pub use reveal::{Channel, ChannelRange, Easing, Reveal};
pub use scroll::{FrameGate, ScrollMetrics, ScrollProgress, ScrollSequencer};

/// Clamp to `[0, 1]`, mapping NaN to `0`.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Local progress of `p` inside `[start, end]`, clamped to `[0, 1]`.
///
/// A degenerate interval (`end <= start`) is a step: `0` before `start`, `1` after.
pub fn segment_progress(p: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if p >= start { 1.0 } else { 0.0 };
    }
    clamp01((p - start) / (end - start))
}

/// Linear interpolation between `from` and `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.3), 0.3);
        assert_eq!(clamp01(7.0), 1.0);
        assert_eq!(clamp01(f64::NAN), 0.0);
    }

    #[test]
    fn test_segment_progress() {
        assert_eq!(segment_progress(0.1, 0.2, 0.4), 0.0);
        assert!((segment_progress(0.3, 0.2, 0.4) - 0.5).abs() < 1e-12);
        assert_eq!(segment_progress(0.9, 0.2, 0.4), 1.0);
        // degenerate interval
        assert_eq!(segment_progress(0.5, 0.5, 0.5), 1.0);
        assert_eq!(segment_progress(0.4, 0.5, 0.5), 0.0);
    }
}
