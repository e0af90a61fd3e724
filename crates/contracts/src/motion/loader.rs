//! Loading screen timelines.

use super::reveal::Easing;
use std::collections::VecDeque;

/// Eased 0→100 loader used by the cinematic layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedLoader {
    pub duration_ms: f64,
    /// Pause between reaching 100% and dismissing the overlay.
    pub exit_delay_ms: u32,
}

impl Default for EasedLoader {
    fn default() -> Self {
        Self {
            duration_ms: 2400.0,
            exit_delay_ms: 400,
        }
    }
}

impl EasedLoader {
    /// Percentage at `elapsed_ms` after start.
    pub fn percent(&self, elapsed_ms: f64) -> f64 {
        Easing::EaseOutCubic.apply(elapsed_ms / self.duration_ms) * 100.0
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Stroke offset of the circular gauge (radius `r`) at `percent`.
    pub fn ring_offset(r: f64, percent: f64) -> f64 {
        2.0 * std::f64::consts::PI * r * (1.0 - percent.clamp(0.0, 100.0) / 100.0)
    }
}

const BOOT_STEPS: [&str; 10] = [
    "LOAD_KERNEL_V2.4",
    "BYPASS_SECURE_BOOT",
    "ALLOCATE_VRAM_BLOCKS",
    "DECRYPT_USER_PROFILE",
    "MOUNT_VIRTUAL_DOM",
    "COMPILE_WASM_BUNDLE",
    "FETCH_GITHUB_GRAPH",
    "OPTIMIZE_RENDER_TREE",
    "ESTABLISH_UPLINK",
    "ACCESS_GRANTED",
];

/// Terminal-style boot screen of the studio layout.
///
/// Two independent timers drive it: `LINE_INTERVAL_MS` appends a log line,
/// `PROGRESS_INTERVAL_MS` advances the bar by a random step.
#[derive(Debug, Clone, PartialEq)]
pub struct BootSequence {
    progress: f64,
    lines: VecDeque<String>,
    next_step: usize,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl BootSequence {
    pub const LINE_INTERVAL_MS: u32 = 250;
    pub const PROGRESS_INTERVAL_MS: u32 = 50;
    pub const EXIT_DELAY_MS: u32 = 800;
    /// Largest progress step per tick (percent).
    pub const MAX_STEP: f64 = 4.0;
    const VISIBLE_LINES: usize = 6;

    pub fn new() -> Self {
        let mut lines = VecDeque::with_capacity(Self::VISIBLE_LINES);
        lines.push_back("INITIALIZING SYSTEM...".to_string());
        Self {
            progress: 0.0,
            lines,
            next_step: 0,
        }
    }

    /// Append the next boot line; `false` once all steps are printed.
    pub fn tick_line(&mut self) -> bool {
        let Some(step) = BOOT_STEPS.get(self.next_step) else {
            return false;
        };
        self.lines.push_back(format!("> {} [OK]", step));
        if self.lines.len() > Self::VISIBLE_LINES {
            self.lines.pop_front();
        }
        self.next_step += 1;
        true
    }

    /// Advance the bar by `unit * MAX_STEP` where `unit` is a random `[0, 1)`.
    pub fn tick_progress(&mut self, unit: f64) {
        if self.is_complete() {
            return;
        }
        self.progress = (self.progress + unit.clamp(0.0, 1.0) * Self::MAX_STEP).min(100.0);
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.progress.floor().min(100.0) as u32)
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eased_loader() {
        let l = EasedLoader::default();
        assert_eq!(l.percent(0.0), 0.0);
        assert!((l.percent(1200.0) - 87.5).abs() < 1e-9);
        assert_eq!(l.percent(5000.0), 100.0);
        assert!(!l.is_finished(2399.0));
        assert!(l.is_finished(2400.0));
    }

    #[test]
    fn test_ring_offset() {
        assert_eq!(EasedLoader::ring_offset(34.0, 100.0), 0.0);
        let full = EasedLoader::ring_offset(34.0, 0.0);
        assert!((full - 2.0 * std::f64::consts::PI * 34.0).abs() < 1e-9);
    }

    #[test]
    fn test_boot_lines_window() {
        let mut boot = BootSequence::new();
        assert_eq!(boot.lines(), vec!["INITIALIZING SYSTEM...".to_string()]);
        let mut printed = 0;
        while boot.tick_line() {
            printed += 1;
        }
        assert_eq!(printed, BOOT_STEPS.len());
        let lines = boot.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines.last().unwrap(), "> ACCESS_GRANTED [OK]");
        assert!(!boot.tick_line());
    }

    #[test]
    fn test_boot_progress_completes() {
        let mut boot = BootSequence::new();
        let mut ticks = 0;
        while !boot.is_complete() {
            boot.tick_progress(0.5);
            ticks += 1;
        }
        assert_eq!(ticks, 50);
        assert_eq!(boot.progress(), 100.0);
        assert_eq!(boot.percent_label(), "100%");
        boot.tick_progress(1.0);
        assert_eq!(boot.progress(), 100.0);
    }
}
