//! Fractal bonsai geometry, grown by scroll progress.
//!
//! The tree is produced as flat lists of segments and blossoms so the canvas
//! layer only has to stroke lines and fill circles.

use super::clamp01;
use std::f64::consts::FRAC_PI_2;

pub const MAX_DEPTH: f64 = 12.0;
pub const MIN_DEPTH: f64 = 2.0;
pub const BRANCH_ANGLE: f64 = 0.35;
pub const LENGTH_SCALE: f64 = 0.78;
pub const WIDTH_SCALE: f64 = 0.7;
/// Blossoms appear once the tree is almost fully grown.
pub const BLOOM_THRESHOLD: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    /// Stroke alpha, thicker (older) branches are more opaque.
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blossom {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BonsaiFrame {
    pub branches: Vec<Branch>,
    pub blossoms: Vec<Blossom>,
}

/// Canvas placement of the trunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeOrigin {
    pub x: f64,
    pub y: f64,
    pub trunk_length: f64,
    pub trunk_width: f64,
}

impl Default for TreeOrigin {
    fn default() -> Self {
        // bottom centre of a 400x400 canvas
        Self {
            x: 200.0,
            y: 400.0,
            trunk_length: 80.0,
            trunk_width: 10.0,
        }
    }
}

/// Recursion budget for `progress`: 2 (stump) at 0, 12 at 1.
pub fn depth_for(progress: f64) -> f64 {
    MIN_DEPTH + clamp01(progress) * (MAX_DEPTH - MIN_DEPTH)
}

/// Deterministic `[0, 1)` noise, stable across frames so blossoms don't flicker.
pub fn seeded_unit(seed: f64) -> f64 {
    let x = (seed * 9301.0 + 49297.0).sin() * 49311.0;
    let f = x - x.floor();
    // tiny negative x rounds up to exactly 1.0
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

pub fn grow(progress: f64, origin: TreeOrigin) -> BonsaiFrame {
    let progress = clamp01(progress);
    let mut frame = BonsaiFrame::default();
    let mut ctx = GrowCtx {
        bloom: progress > BLOOM_THRESHOLD,
        frame: &mut frame,
    };
    ctx.branch(
        origin.x,
        origin.y,
        origin.trunk_length,
        -FRAC_PI_2,
        depth_for(progress),
        origin.trunk_width,
    );
    frame
}

struct GrowCtx<'a> {
    bloom: bool,
    frame: &'a mut BonsaiFrame,
}

impl GrowCtx<'_> {
    fn branch(&mut self, x: f64, y: f64, length: f64, angle: f64, depth: f64, width: f64) {
        if depth <= 0.0 {
            return;
        }
        let x2 = x + length * angle.cos();
        let y2 = y + length * angle.sin();
        self.frame.branches.push(Branch {
            x1: x,
            y1: y,
            x2,
            y2,
            width,
            alpha: 0.3 + (depth / MAX_DEPTH) * 0.7,
        });

        if depth <= 1.0 && self.bloom {
            let seed = self.frame.blossoms.len() as f64;
            self.frame.blossoms.push(Blossom {
                x: x2,
                y: y2,
                radius: 2.0 + seeded_unit(seed) * 2.0,
            });
        }

        let next_length = length * LENGTH_SCALE;
        let next_width = width * WIDTH_SCALE;
        self.branch(x2, y2, next_length, angle - BRANCH_ANGLE, depth - 1.0, next_width);
        self.branch(x2, y2, next_length, angle + BRANCH_ANGLE, depth - 1.0, next_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_depth_for() {
        assert_eq!(depth_for(0.0), 2.0);
        assert_eq!(depth_for(1.0), 12.0);
        assert_eq!(depth_for(0.5), 7.0);
    }

    #[test]
    fn test_stump_has_three_branches() {
        // depth 2 → trunk + two children
        let frame = grow(0.0, TreeOrigin::default());
        assert_eq!(frame.branches.len(), 3);
        assert!(frame.blossoms.is_empty());
        let trunk = frame.branches[0];
        assert!((trunk.x2 - 200.0).abs() < 1e-9);
        assert!((trunk.y2 - 320.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_tree_blooms() {
        let frame = grow(1.0, TreeOrigin::default());
        // 12 full levels: 2^12 - 1 branches
        assert_eq!(frame.branches.len(), 4095);
        // only leaves (depth 1) carry blossoms
        assert_eq!(frame.blossoms.len(), 2048);
        assert!(frame.blossoms.iter().all(|b| (2.0..4.0).contains(&b.radius)));
    }

    #[test]
    fn test_growth_is_monotonic() {
        let mut last = 0;
        for step in 0..=20 {
            let n = grow(step as f64 / 20.0, TreeOrigin::default()).branches.len();
            assert!(n >= last);
            last = n;
        }
    }

    #[test]
    fn test_seeded_unit_is_stable() {
        assert_eq!(seeded_unit(3.0), seeded_unit(3.0));
        for seed in 0..100 {
            let v = seeded_unit(seed as f64);
            assert!((0.0..1.0).contains(&v));
        }
    }

    proptest! {
        #[test]
        fn prop_segments_stay_within_reach(progress in 0.0f64..=1.0) {
            let origin = TreeOrigin::default();
            let frame = grow(progress, origin);
            // geometric series of shrinking branch lengths
            let reach = origin.trunk_length / (1.0 - LENGTH_SCALE) + 1e-6;
            for b in &frame.branches {
                prop_assert!(b.x2.is_finite() && b.y2.is_finite());
                prop_assert!((b.x2 - origin.x).hypot(b.y2 - origin.y) <= reach);
                prop_assert!(b.width > 0.0 && b.width <= origin.trunk_width);
                prop_assert!(b.alpha > 0.3 && b.alpha <= 1.0);
            }
            prop_assert_eq!(frame.blossoms.is_empty(), progress <= BLOOM_THRESHOLD);
        }

        #[test]
        fn prop_seeded_unit_in_unit_interval(seed in -1.0e6f64..1.0e6) {
            let v = seeded_unit(seed);
            prop_assert!((0.0..1.0).contains(&v));
        }
    }
}
