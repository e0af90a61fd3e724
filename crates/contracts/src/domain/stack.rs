//! Tech stack desktop: a tall sticky section that boots a fake OS and then
//! opens one window per skill area as the visitor scrolls.
//!
//! ```text
//! 0 ─── 0.22 ── 0.25 ── 0.35 ── 0.48 ── 0.61 ── 0.74 ─── 1
//! │ boot log    │
//!        terminal ▸ processes ▸ ml studio ▸ cloud ▸ databases
//! ```
//!
//! Each window has its own local progress over `WINDOW_SPAN` after it opens.

use crate::motion::bonsai::seeded_unit;
use crate::motion::{clamp01, segment_progress, PhaseSchedule};
use once_cell::sync::Lazy;
use std::fmt::Write;

/// Section height in viewport heights.
pub const STACK_SECTION_VH: u32 = 700;
/// The boot log covers progress `[0, BOOT_UNTIL)`.
pub const BOOT_UNTIL: f64 = 0.25;
/// Boot line `i` appears once boot progress passes `i * BOOT_LINE_STEP`.
pub const BOOT_LINE_STEP: f64 = 0.12;
/// Progress at which each window opens, in `DesktopWindow::ALL` order.
pub const WINDOW_OPENS: [f64; 5] = [0.22, 0.35, 0.48, 0.61, 0.74];
/// Progress over which an open window plays its own animation.
pub const WINDOW_SPAN: f64 = 0.15;
/// Hover time on the desktop before the notification pops up.
pub const EASTER_EGG_DELAY_MS: u32 = 2000;
pub const EASTER_EGG_MESSAGE: &str =
    "New message from AWS: Your Lambda function processed 847,293 records today.";
/// CPU bars are re-sampled this often while the monitor is open.
pub const CPU_SAMPLE_MS: u32 = 200;
/// CPU percentage above which a bar is drawn hot.
pub const CPU_HOT_PERCENT: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesktopWindow {
    Terminal,
    Processes,
    MlStudio,
    Cloud,
    Databases,
}

impl DesktopWindow {
    pub const ALL: [DesktopWindow; 5] = [
        DesktopWindow::Terminal,
        DesktopWindow::Processes,
        DesktopWindow::MlStudio,
        DesktopWindow::Cloud,
        DesktopWindow::Databases,
    ];

    pub fn index(self) -> usize {
        match self {
            DesktopWindow::Terminal => 0,
            DesktopWindow::Processes => 1,
            DesktopWindow::MlStudio => 2,
            DesktopWindow::Cloud => 3,
            DesktopWindow::Databases => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DesktopWindow::Terminal => "bash — Python Advanced",
            DesktopWindow::Processes => "Data Engineering Processes",
            DesktopWindow::MlStudio => "ML & 3D Vision — PyTorch Studio",
            DesktopWindow::Cloud => "AWS Console — Live",
            DesktopWindow::Databases => "DB Connections — Active",
        }
    }

    pub fn taskbar_label(self) -> &'static str {
        TASKBAR_LABELS[self.index()]
    }

    pub fn taskbar_icon(self) -> &'static str {
        match self {
            DesktopWindow::Terminal => ">_",
            DesktopWindow::Processes => "📊",
            DesktopWindow::MlStudio => "🧊",
            DesktopWindow::Cloud => "☁️",
            DesktopWindow::Databases => "💾",
        }
    }

    pub fn opens_at(self) -> f64 {
        WINDOW_OPENS[self.index()]
    }
}

const TASKBAR_LABELS: [&str; 5] = ["Terminal", "Monitor", "ML Studio", "AWS", "Databases"];

/// Which window is focused. The terminal keeps focus through the boot log.
pub static ACTIVE_WINDOW: Lazy<PhaseSchedule> = Lazy::new(|| {
    PhaseSchedule::explicit(&[0.0, 0.35, 0.48, 0.61, 0.74, 1.0])
        .and_then(|s| s.with_names(&TASKBAR_LABELS))
        .expect("desktop focus breakpoints are valid")
});

/// Everything the desktop needs to know about one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopFrame {
    progress: f64,
}

impl DesktopFrame {
    pub fn at(progress: f64) -> Self {
        Self {
            progress: clamp01(progress),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn booting(&self) -> bool {
        self.progress < BOOT_UNTIL
    }

    pub fn boot_progress(&self) -> f64 {
        segment_progress(self.progress, 0.0, BOOT_UNTIL)
    }

    pub fn boot_line_visible(&self, index: usize) -> bool {
        self.boot_progress() > index as f64 * BOOT_LINE_STEP
    }

    /// The bar runs slightly ahead of the log and saturates at 100.
    pub fn boot_bar_percent(&self) -> f64 {
        (self.boot_progress() * 120.0).min(100.0)
    }

    pub fn is_open(&self, window: DesktopWindow) -> bool {
        self.progress > window.opens_at()
    }

    pub fn local(&self, window: DesktopWindow) -> f64 {
        let start = window.opens_at();
        segment_progress(self.progress, start, start + WINDOW_SPAN)
    }

    pub fn active(&self) -> DesktopWindow {
        DesktopWindow::ALL[ACTIVE_WINDOW.index_of(self.progress)]
    }

    pub fn terminal_lines(&self) -> usize {
        let shown = (self.local(DesktopWindow::Terminal) * TERMINAL_LINES.len() as f64).floor();
        (shown as usize).min(TERMINAL_LINES.len())
    }

    pub fn wallpaper_opacity(&self) -> f64 {
        if self.booting() {
            0.0
        } else {
            0.04 + self.progress * 0.02
        }
    }
}

/// Threshold stagger: item `index` shows once `local > offset + index * step`.
pub fn revealed(local: f64, index: usize, offset: f64, step: f64) -> bool {
    local > offset + index as f64 * step
}

/// Animated CPU percentage of process `index`, never below 10.
pub fn cpu_percent(base: f64, index: usize, now_ms: f64) -> f64 {
    let wobble = (now_ms / (800.0 + index as f64 * 200.0)).sin() * 0.15;
    ((base + wobble) * 100.0).max(10.0)
}

/// `(x, y, x spread, y spread)` per corner, noise seeds counted from 1.
type RoughCorner = (f64, f64, f64, f64);

const CUBE_BACK_ROUGH: [RoughCorner; 4] = [
    (55.0, 15.0, 10.0, 10.0),
    (135.0, 18.0, 10.0, 6.0),
    (142.0, 95.0, 8.0, 10.0),
    (58.0, 102.0, 8.0, 6.0),
];
const CUBE_FRONT_ROUGH: [RoughCorner; 4] = [
    (75.0, 40.0, 12.0, 10.0),
    (155.0, 42.0, 10.0, 8.0),
    (162.0, 130.0, 6.0, 10.0),
    (78.0, 138.0, 10.0, 6.0),
];
const CUBE_BACK_CLEAN: &str = "60,20 140,20 140,100 60,100";
const CUBE_FRONT_CLEAN: &str = "80,45 160,45 160,135 80,135";

/// SVG polygon points for the back and front cube faces.
///
/// Noisy until the model "converges" halfway through the window.
pub fn cube_faces(local: f64) -> (String, String) {
    if local > 0.5 {
        return (CUBE_BACK_CLEAN.to_string(), CUBE_FRONT_CLEAN.to_string());
    }
    (rough_face(&CUBE_BACK_ROUGH, 1), rough_face(&CUBE_FRONT_ROUGH, 9))
}

fn rough_face(corners: &[RoughCorner], first_seed: u32) -> String {
    let mut points = String::new();
    for (i, &(x, y, dx, dy)) in corners.iter().enumerate() {
        let seed = (first_seed + 2 * i as u32) as f64;
        if i > 0 {
            points.push(' ');
        }
        let _ = write!(
            points,
            "{:.2},{:.2}",
            x + seeded_unit(seed) * dx,
            y + seeded_unit(seed + 1.0) * dy
        );
    }
    points
}

pub const BOOT_LINES: [&str; 7] = [
    "BADRISH OS v2.0 — INITIALIZING",
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
    "RAM CHECK:         8/8 CORES OK",
    "SKILL MODULES:     LOADING...",
    "EXPERIENCE ENGINE: MOUNTING...",
    "PIPELINE RUNTIME:  CONNECTED",
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Command,
    Output,
    Success,
    Status,
    Blank,
}

impl LineKind {
    pub fn class(self) -> &'static str {
        match self {
            LineKind::Command => "term-command",
            LineKind::Output => "term-output",
            LineKind::Success => "term-success",
            LineKind::Status => "term-status",
            LineKind::Blank => "term-blank",
        }
    }
}

pub const TERMINAL_LINES: [(&str, LineKind); 8] = [
    ("$ python --version", LineKind::Command),
    ("Python 3.11.4", LineKind::Output),
    ("", LineKind::Blank),
    ("$ import torch, spark, pandas, sklearn", LineKind::Command),
    ("[✓] All modules loaded", LineKind::Success),
    ("", LineKind::Blank),
    ("$ run pipeline --scale 1TB --daily", LineKind::Command),
    ("Pipeline status: ██████████ 100% · 0 errors", LineKind::Status),
];

pub const LANGUAGE_CHIPS: [&str; 5] = ["Python", "SQL", "C++", "TypeScript", "Bash"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Process {
    pub name: &'static str,
    pub cpu: f64,
    pub status: &'static str,
    pub note: &'static str,
}

pub const PROCESSES: [Process; 6] = [
    Process { name: "apache-spark", cpu: 0.7, status: "RUNNING", note: "1TB/day pipelines" },
    Process { name: "airflow-scheduler", cpu: 0.5, status: "RUNNING", note: "DAG orchestration" },
    Process { name: "aws-glue-etl", cpu: 0.85, status: "ACTIVE", note: "ETL transforms" },
    Process { name: "kafka-consumer", cpu: 0.35, status: "LISTENING", note: "Event streaming" },
    Process { name: "dbt-transform", cpu: 0.65, status: "RUNNING", note: "Data modeling" },
    Process { name: "kubernetes-daemon", cpu: 0.55, status: "HEALTHY", note: "Container orchestration" },
];

pub const ML_LABELS: [&str; 5] = ["PyTorch", "Voxel51", "Foxglove", "MLflow", "Pandera"];

/// Node on the cloud diagram; `x`/`y` are percentages of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudService {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const CLOUD_SERVICES: [CloudService; 6] = [
    CloudService { name: "S3", x: 20.0, y: 30.0, icon: "📦", color: "#34d399" },
    CloudService { name: "Lambda", x: 50.0, y: 20.0, icon: "⚡", color: "#f59e0b" },
    CloudService { name: "SageMaker", x: 50.0, y: 55.0, icon: "🧠", color: "#8b5cf6" },
    CloudService { name: "EKS", x: 80.0, y: 35.0, icon: "⎈", color: "#3b82f6" },
    CloudService { name: "API GW", x: 20.0, y: 65.0, icon: "🌐", color: "#6366f1" },
    CloudService { name: "CloudWatch", x: 80.0, y: 70.0, icon: "📊", color: "#ef4444" },
];

/// Dashed links between cloud nodes, as indices into `CLOUD_SERVICES`.
pub const CLOUD_LINKS: [(usize, usize); 4] = [(0, 1), (1, 3), (0, 2), (2, 5)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DbConnection {
    pub name: &'static str,
    pub ping: &'static str,
    pub status: &'static str,
    pub color: &'static str,
}

pub const DB_CONNECTIONS: [DbConnection; 6] = [
    DbConnection { name: "PostgreSQL", ping: "12ms", status: "CONNECTED", color: "#336791" },
    DbConnection { name: "MongoDB", ping: "8ms", status: "CONNECTED", color: "#47A248" },
    DbConnection { name: "DynamoDB", ping: "3ms", status: "CONNECTED", color: "#4053D6" },
    DbConnection { name: "Aurora", ping: "—", status: "STANDBY", color: "#FF9900" },
    DbConnection { name: "MySQL", ping: "15ms", status: "CONNECTED", color: "#4479A1" },
    DbConnection { name: "Timestream", ping: "↑", status: "STREAMING", color: "#8b5cf6" },
];

/// `(name, icon)` pairs for the tool band shown once the desktop is up.
pub const TOOLS_TICKER: [(&str, &str); 15] = [
    ("Python", "🐍"),
    ("TypeScript", "TS"),
    ("AWS", "☁️"),
    ("Kubernetes", "⎈"),
    ("Docker", "🐳"),
    ("Kafka", "📨"),
    ("Spark", "⚡"),
    ("Airflow", "💨"),
    ("Terraform", "🏗️"),
    ("PostgreSQL", "🐘"),
    ("React", "⚛️"),
    ("Next.js", "▲"),
    ("Tailwind", "🌊"),
    ("PyTorch", "🔥"),
    ("Scikit-learn", "🧠"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_phase() {
        let start = DesktopFrame::at(0.0);
        assert!(start.booting());
        assert!(!start.boot_line_visible(0));
        assert_eq!(start.boot_bar_percent(), 0.0);

        let mid = DesktopFrame::at(0.1);
        assert!((mid.boot_progress() - 0.4).abs() < 1e-12);
        // 0.4 > 3 * 0.12, 0.4 < 4 * 0.12
        assert!(mid.boot_line_visible(3));
        assert!(!mid.boot_line_visible(4));
        assert!((mid.boot_bar_percent() - 48.0).abs() < 1e-9);

        // bar saturates before the log ends
        assert_eq!(DesktopFrame::at(0.22).boot_bar_percent(), 100.0);
        assert!(!DesktopFrame::at(BOOT_UNTIL).booting());
    }

    #[test]
    fn test_windows_open_strictly_after_their_start() {
        let f = DesktopFrame::at(0.22);
        assert!(!f.is_open(DesktopWindow::Terminal));
        let f = DesktopFrame::at(0.2201);
        assert!(f.is_open(DesktopWindow::Terminal));
        assert!(!f.is_open(DesktopWindow::Processes));

        let end = DesktopFrame::at(1.0);
        assert!(DesktopWindow::ALL.iter().all(|&w| end.is_open(w)));
    }

    #[test]
    fn test_window_local_progress() {
        let f = DesktopFrame::at(0.295);
        assert!((f.local(DesktopWindow::Terminal) - 0.5).abs() < 1e-9);
        assert_eq!(f.local(DesktopWindow::Processes), 0.0);
        assert_eq!(DesktopFrame::at(0.9).local(DesktopWindow::Cloud), 1.0);
    }

    #[test]
    fn test_active_window() {
        assert_eq!(DesktopFrame::at(0.1).active(), DesktopWindow::Terminal);
        assert_eq!(DesktopFrame::at(0.34).active(), DesktopWindow::Terminal);
        assert_eq!(DesktopFrame::at(0.35).active(), DesktopWindow::Processes);
        assert_eq!(DesktopFrame::at(0.5).active(), DesktopWindow::MlStudio);
        assert_eq!(DesktopFrame::at(0.7).active(), DesktopWindow::Cloud);
        assert_eq!(DesktopFrame::at(1.0).active(), DesktopWindow::Databases);
        assert_eq!(ACTIVE_WINDOW.name(3), Some("AWS"));
    }

    #[test]
    fn test_terminal_types_line_by_line() {
        assert_eq!(DesktopFrame::at(0.2).terminal_lines(), 0);
        // local 0.6 of eight lines
        assert_eq!(DesktopFrame::at(0.31).terminal_lines(), 4);
        assert_eq!(DesktopFrame::at(0.5).terminal_lines(), TERMINAL_LINES.len());
    }

    #[test]
    fn test_staggered_thresholds() {
        // language chips: 0.8 + i * 0.03
        assert!(revealed(0.81, 0, 0.8, 0.03));
        assert!(!revealed(0.81, 1, 0.8, 0.03));
        // process rows: i * 0.12, first row right after opening
        assert!(revealed(0.01, 0, 0.0, 0.12));
        assert!(!revealed(0.0, 0, 0.0, 0.12));
        assert!(revealed(0.61, 5, 0.0, 0.12));
    }

    #[test]
    fn test_cpu_percent() {
        assert!((cpu_percent(0.7, 0, 0.0) - 70.0).abs() < 1e-9);
        // floor at 10 even on a low base with a negative swing
        let low = cpu_percent(0.0, 0, 800.0 * -std::f64::consts::FRAC_PI_2);
        assert_eq!(low, 10.0);
        for i in 0..PROCESSES.len() {
            let v = cpu_percent(PROCESSES[i].cpu, i, 12_345.0);
            assert!((10.0..=100.0).contains(&v), "{} -> {}", PROCESSES[i].name, v);
        }
    }

    #[test]
    fn test_cube_converges() {
        let (back, front) = cube_faces(0.2);
        assert_ne!(back, CUBE_BACK_CLEAN);
        assert_eq!(back.split(' ').count(), 4);
        assert_eq!(front.split(' ').count(), 4);
        // deterministic between frames
        assert_eq!(cube_faces(0.3), (back, front));
        assert_eq!(cube_faces(0.51).0, CUBE_BACK_CLEAN);
        assert_eq!(cube_faces(1.0).1, CUBE_FRONT_CLEAN);
    }

    #[test]
    fn test_wallpaper_hidden_during_boot() {
        assert_eq!(DesktopFrame::at(0.2).wallpaper_opacity(), 0.0);
        assert!((DesktopFrame::at(1.0).wallpaper_opacity() - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_cloud_links_point_at_services() {
        assert!(CLOUD_LINKS
            .iter()
            .all(|&(a, b)| a < CLOUD_SERVICES.len() && b < CLOUD_SERVICES.len() && a != b));
    }
}
