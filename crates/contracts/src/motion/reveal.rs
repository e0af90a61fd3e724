//! Declarative reveal mapping: local progress → visual property values.
//!
//! # Example
//! ```
//! use contracts::motion::{Channel, Reveal};
//!
//! let fade_up = Reveal::new()
//!     .channel(Channel::Opacity, 0.0, 1.0)
//!     .channel(Channel::TranslateY, 24.0, 0.0)
//!     .stagger(0.08);
//!
//! // third card, halfway through its section
//! let style = fade_up.style(0.5, 2);
//! assert!(style.contains("opacity:"));
//! ```

use super::{clamp01, lerp};
use std::fmt::Write;

/// Visual property driven by progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Opacity,
    /// Pixels.
    TranslateY,
    Scale,
    /// SVG path units.
    StrokeDashoffset,
}

/// Progress shaping curve. All variants are monotonic and map 0→0, 1→1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = clamp01(t);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    pub channel: Channel,
    pub from: f64,
    pub to: f64,
}

/// Set of channel ranges sharing an easing and a per-item stagger.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reveal {
    channels: Vec<ChannelRange>,
    easing: Easing,
    stagger: f64,
    /// Portion of progress over which one item completes; `1.0` = whole range.
    span: Option<f64>,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard fade-and-rise used for cards and text blocks.
    pub fn fade_up(distance: f64) -> Self {
        Self::new()
            .channel(Channel::Opacity, 0.0, 1.0)
            .channel(Channel::TranslateY, distance, 0.0)
            .easing(Easing::EaseOutCubic)
    }

    /// Path drawn from fully hidden (`length`) to fully visible (`0`).
    pub fn draw_path(length: f64) -> Self {
        Self::new().channel(Channel::StrokeDashoffset, length, 0.0)
    }

    pub fn channel(mut self, channel: Channel, from: f64, to: f64) -> Self {
        self.channels.retain(|c| c.channel != channel);
        self.channels.push(ChannelRange { channel, from, to });
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Delay per item index, in progress units.
    pub fn stagger(mut self, delay: f64) -> Self {
        self.stagger = delay.max(0.0);
        self
    }

    /// Each item completes within `span` of progress after its delay.
    pub fn span(mut self, span: f64) -> Self {
        self.span = (span > 0.0).then_some(span);
        self
    }

    /// Eased, staggered `[0, 1]` progress for item `index`.
    pub fn item_progress(&self, progress: f64, index: usize) -> f64 {
        let shifted = progress - self.stagger * index as f64;
        let scaled = match self.span {
            Some(span) => shifted / span,
            None => shifted,
        };
        self.easing.apply(clamp01(scaled))
    }

    /// Value of `channel` for item `index`; `None` if the channel is not configured.
    pub fn value(&self, channel: Channel, progress: f64, index: usize) -> Option<f64> {
        let range = self.channels.iter().find(|c| c.channel == channel)?;
        Some(lerp(range.from, range.to, self.item_progress(progress, index)))
    }

    /// Inline CSS for the configured channels.
    ///
    /// `StrokeDashoffset` is emitted as the `stroke-dashoffset` property, so
    /// the style can be put straight on an SVG `<path>`.
    pub fn style(&self, progress: f64, index: usize) -> String {
        let t = self.item_progress(progress, index);
        let mut css = String::new();
        let mut transforms = Vec::new();
        for range in &self.channels {
            let v = lerp(range.from, range.to, t);
            match range.channel {
                Channel::Opacity => {
                    let _ = write!(css, "opacity: {:.3};", v);
                }
                Channel::StrokeDashoffset => {
                    let _ = write!(css, "stroke-dashoffset: {:.2};", v);
                }
                Channel::TranslateY => transforms.push(format!("translateY({:.2}px)", v)),
                Channel::Scale => transforms.push(format!("scale({:.4})", v)),
            }
        }
        if !transforms.is_empty() {
            let _ = write!(css, "transform: {};", transforms.join(" "));
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_linear_interpolation() {
        let r = Reveal::new().channel(Channel::Opacity, 0.0, 1.0);
        assert_eq!(r.value(Channel::Opacity, 0.0, 0), Some(0.0));
        assert_eq!(r.value(Channel::Opacity, 0.25, 0), Some(0.25));
        assert_eq!(r.value(Channel::Opacity, 1.0, 0), Some(1.0));
        assert_eq!(r.value(Channel::Scale, 0.5, 0), None);
    }

    #[test]
    fn test_values_are_clamped() {
        let r = Reveal::new().channel(Channel::TranslateY, 40.0, 0.0);
        assert_eq!(r.value(Channel::TranslateY, -1.0, 0), Some(40.0));
        assert_eq!(r.value(Channel::TranslateY, 2.0, 0), Some(0.0));
    }

    #[test]
    fn test_stagger_delays_later_items() {
        let r = Reveal::new().channel(Channel::Opacity, 0.0, 1.0).stagger(0.1);
        assert_eq!(r.value(Channel::Opacity, 0.3, 0), Some(0.3));
        assert!((r.value(Channel::Opacity, 0.3, 2).unwrap() - 0.1).abs() < 1e-12);
        assert_eq!(r.value(Channel::Opacity, 0.3, 5), Some(0.0));
    }

    #[test]
    fn test_span_compresses_item_duration() {
        let r = Reveal::new().channel(Channel::Opacity, 0.0, 1.0).span(0.1);
        assert_eq!(r.value(Channel::Opacity, 0.05, 0), Some(0.5));
        assert_eq!(r.value(Channel::Opacity, 0.5, 0), Some(1.0));
    }

    #[test]
    fn test_draw_path() {
        let r = Reveal::draw_path(200.0);
        assert_eq!(r.value(Channel::StrokeDashoffset, 0.0, 0), Some(200.0));
        assert_eq!(r.value(Channel::StrokeDashoffset, 1.0, 0), Some(0.0));
    }

    #[test]
    fn test_style_output() {
        let style = Reveal::fade_up(20.0).style(1.0, 0);
        assert_eq!(style, "opacity: 1.000;transform: translateY(0.00px);");
        let style = Reveal::new()
            .channel(Channel::Scale, 0.9, 1.0)
            .channel(Channel::TranslateY, 10.0, 0.0)
            .style(0.0, 0);
        assert_eq!(style, "transform: scale(0.9000) translateY(10.00px);");
    }

    #[test]
    fn test_easing_endpoints() {
        for e in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutCubic] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
        }
        assert!((Easing::EaseOutCubic.apply(0.5) - 0.875).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_monotonic_increasing_channel(
            a in -0.5f64..1.5,
            b in -0.5f64..1.5,
            from in -100.0f64..100.0,
            delta in 0.0f64..100.0,
            index in 0usize..6,
            easing in prop_oneof![
                Just(Easing::Linear),
                Just(Easing::EaseOutCubic),
                Just(Easing::EaseInOutCubic)
            ]
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let r = Reveal::new()
                .channel(Channel::Opacity, from, from + delta)
                .easing(easing)
                .stagger(0.05);
            let v_lo = r.value(Channel::Opacity, lo, index).unwrap();
            let v_hi = r.value(Channel::Opacity, hi, index).unwrap();
            prop_assert!(v_lo <= v_hi + 1e-9);
        }

        #[test]
        fn prop_value_within_bounds(p in -1.0f64..2.0, from in -50.0f64..50.0, to in -50.0f64..50.0) {
            let r = Reveal::new().channel(Channel::Scale, from, to);
            let v = r.value(Channel::Scale, p, 0).unwrap();
            let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
            prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
        }
    }
}
