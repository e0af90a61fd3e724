//! Phase / beat partitioning of a progress value.

use super::{clamp01, segment_progress};

/// How `[0, 1]` is cut into segments.
#[derive(Debug, Clone, PartialEq)]
pub enum Breakpoints {
    /// `n` equal segments.
    Uniform(usize),
    /// Explicit cut points, first `0.0`, last `1.0`, strictly increasing.
    Explicit(Vec<f64>),
}

impl Breakpoints {
    /// Materialise the cut points (`segments + 1` values).
    pub fn cuts(&self) -> Result<Vec<f64>, String> {
        match self {
            Breakpoints::Uniform(0) => Err("Uniform breakpoints need at least one segment".into()),
            Breakpoints::Uniform(n) => Ok((0..=*n).map(|i| i as f64 / *n as f64).collect()),
            Breakpoints::Explicit(cuts) => {
                if cuts.len() < 2 {
                    return Err("Explicit breakpoints need at least two cut points".into());
                }
                if cuts.first() != Some(&0.0) || cuts.last() != Some(&1.0) {
                    return Err("Explicit breakpoints must start at 0.0 and end at 1.0".into());
                }
                if cuts.windows(2).any(|w| !(w[0] < w[1])) {
                    return Err(format!("Breakpoints are not strictly increasing: {:?}", cuts));
                }
                Ok(cuts.clone())
            }
        }
    }
}

/// Result of reading a schedule at some progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseReading {
    pub index: usize,
    pub name: Option<&'static str>,
    /// Progress inside the active segment, `[0, 1]`.
    pub local: f64,
}

/// Ordered, optionally named segments of `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSchedule {
    cuts: Vec<f64>,
    names: Vec<&'static str>,
}

impl PhaseSchedule {
    pub fn new(breakpoints: Breakpoints) -> Result<Self, String> {
        Ok(Self {
            cuts: breakpoints.cuts()?,
            names: Vec::new(),
        })
    }

    pub fn uniform(segments: usize) -> Result<Self, String> {
        Self::new(Breakpoints::Uniform(segments))
    }

    pub fn explicit(cuts: &[f64]) -> Result<Self, String> {
        Self::new(Breakpoints::Explicit(cuts.to_vec()))
    }

    /// Attach one name per segment.
    pub fn with_names(mut self, names: &[&'static str]) -> Result<Self, String> {
        if names.len() != self.len() {
            return Err(format!(
                "Expected {} phase names, got {}",
                self.len(),
                names.len()
            ));
        }
        self.names = names.to_vec();
        Ok(self)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.cuts.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bounds(&self, index: usize) -> Option<(f64, f64)> {
        (index < self.len()).then(|| (self.cuts[index], self.cuts[index + 1]))
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    /// Segment containing `progress`; `1.0` belongs to the last segment.
    pub fn index_of(&self, progress: f64) -> usize {
        let p = clamp01(progress);
        let last = self.len() - 1;
        // cuts[0] == 0.0 <= p, so at least one cut is passed
        let passed = self.cuts.iter().take_while(|&&c| c <= p).count();
        (passed - 1).min(last)
    }

    pub fn read(&self, progress: f64) -> PhaseReading {
        let index = self.index_of(progress);
        PhaseReading {
            index,
            name: self.name(index),
            local: self.local(progress, index),
        }
    }

    /// Local progress of an arbitrary segment (0 before it, 1 after it).
    pub fn local(&self, progress: f64, index: usize) -> f64 {
        match self.bounds(index) {
            Some((start, end)) => segment_progress(clamp01(progress), start, end),
            None => 0.0,
        }
    }

    /// Local progress of every segment at once.
    pub fn locals(&self, progress: f64) -> Vec<f64> {
        (0..self.len()).map(|i| self.local(progress, i)).collect()
    }
}

/// Split a local progress into `beats` equal beats, each with its own `[0, 1]`.
pub fn beat_progress(local: f64, beats: usize) -> Vec<f64> {
    (0..beats)
        .map(|i| {
            let start = i as f64 / beats as f64;
            let end = (i + 1) as f64 / beats as f64;
            segment_progress(clamp01(local), start, end)
        })
        .collect()
}

/// Two-part split of the whole range at `portion`: progress within the
/// head (`[0, portion]`) and within the tail (`[portion, 1]`).
pub fn split_at(progress: f64, portion: f64) -> (f64, f64) {
    let p = clamp01(progress);
    (
        segment_progress(p, 0.0, portion),
        segment_progress(p, portion, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DEPTHS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.82, 1.0];

    fn depth_schedule() -> PhaseSchedule {
        PhaseSchedule::explicit(&DEPTHS)
            .unwrap()
            .with_names(&["Surface", "Roots", "Deep Earth", "Bedrock", "Magma Core"])
            .unwrap()
    }

    #[test]
    fn test_scenario_deep_earth() {
        let reading = depth_schedule().read(0.55);
        assert_eq!(reading.index, 2);
        assert_eq!(reading.name, Some("Deep Earth"));
        assert!((reading.local - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_end_resolves_to_last_segment() {
        let reading = depth_schedule().read(1.0);
        assert_eq!(reading.index, 4);
        assert_eq!(reading.local, 1.0);

        let uniform = PhaseSchedule::uniform(5).unwrap().read(1.0);
        assert_eq!(uniform.index, 4);
        assert_eq!(uniform.local, 1.0);
    }

    #[test]
    fn test_boundaries_belong_to_next_segment() {
        let s = depth_schedule();
        assert_eq!(s.index_of(0.0), 0);
        assert_eq!(s.index_of(0.2), 1);
        assert_eq!(s.index_of(0.82), 4);
        assert_eq!(s.index_of(0.8199), 3);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let s = PhaseSchedule::uniform(4).unwrap();
        assert_eq!(s.read(-3.0).index, 0);
        assert_eq!(s.read(-3.0).local, 0.0);
        assert_eq!(s.read(12.0).index, 3);
        assert_eq!(s.read(f64::NAN).index, 0);
    }

    #[test]
    fn test_invalid_breakpoints() {
        assert!(PhaseSchedule::uniform(0).is_err());
        assert!(PhaseSchedule::explicit(&[0.0]).is_err());
        assert!(PhaseSchedule::explicit(&[0.1, 1.0]).is_err());
        assert!(PhaseSchedule::explicit(&[0.0, 0.5, 0.5, 1.0]).is_err());
        assert!(PhaseSchedule::uniform(3).unwrap().with_names(&["a"]).is_err());
    }

    #[test]
    fn test_locals() {
        let l = depth_schedule().locals(0.5);
        assert_eq!(l.len(), 5);
        assert_eq!(l[0], 1.0);
        assert_eq!(l[1], 1.0);
        assert!((l[2] - 0.5).abs() < 1e-9);
        assert_eq!(l[3], 0.0);
        assert_eq!(l[4], 0.0);
    }

    #[test]
    fn test_beat_progress() {
        let beats = beat_progress(0.5, 4);
        assert_eq!(beats, vec![1.0, 1.0, 0.0, 0.0]);
        let beats = beat_progress(0.5, 3);
        assert_eq!(beats[0], 1.0);
        assert!((beats[1] - 0.5).abs() < 1e-9);
        assert_eq!(beats[2], 0.0);
    }

    #[test]
    fn test_split_at() {
        let (missions, education) = split_at(0.6, 0.75);
        assert!((missions - 0.8).abs() < 1e-9);
        assert_eq!(education, 0.0);
        let (missions, education) = split_at(0.875, 0.75);
        assert_eq!(missions, 1.0);
        assert!((education - 0.5).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_reading_in_range(p in 0.0f64..=1.0, segments in 1usize..12) {
            let s = PhaseSchedule::uniform(segments).unwrap();
            let r = s.read(p);
            prop_assert!(r.index < segments);
            prop_assert!((0.0..=1.0).contains(&r.local));
        }

        #[test]
        fn prop_explicit_reading_in_range(
            p in 0.0f64..=1.0,
            mut inner in proptest::collection::vec(0.01f64..0.99, 0..8)
        ) {
            inner.sort_by(|a, b| a.partial_cmp(b).unwrap());
            inner.dedup();
            let mut cuts = vec![0.0];
            cuts.extend(inner);
            cuts.push(1.0);
            let s = PhaseSchedule::explicit(&cuts).unwrap();
            let r = s.read(p);
            prop_assert!(r.index < s.len());
            prop_assert!((0.0..=1.0).contains(&r.local));
            let (start, end) = s.bounds(r.index).unwrap();
            prop_assert!(start <= p && (p < end || (p == 1.0 && end == 1.0)));
        }

        #[test]
        fn prop_index_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let s = PhaseSchedule::explicit(&DEPTHS).unwrap();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(s.index_of(lo) <= s.index_of(hi));
        }
    }
}
