//! Static portfolio content shared by both layouts and the chat backend.

use crate::motion::phase::PhaseSchedule;
use once_cell::sync::Lazy;

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub github_username: &'static str,
    pub bio: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Badrish Madapuji Srinivasan",
    headline: "Data Engineer & ML Researcher",
    location: "Bremen, Germany",
    email: "badrish41@gmail.com",
    github_username: "baddy1411",
    bio: "I am a Data Engineer and Creative Technologist based in Bremen, Germany. \
          Currently pursuing my M.Sc. in Data Engineering, I bridge the gap between complex backend logic \
          (Spark, Kafka, AWS) and accessible, beautiful digital experiences. With a background in Mechanical \
          Engineering and hands-on experience at Riot Labz and Capgemini, I specialize in building scalable \
          data pipelines and production-grade ML systems.",
};

pub struct NavLink {
    pub name: &'static str,
    /// Section element id.
    pub anchor: &'static str,
}

pub const STUDIO_NAV: [NavLink; 6] = [
    NavLink { name: "About", anchor: "about" },
    NavLink { name: "Projects", anchor: "projects" },
    NavLink { name: "Experience", anchor: "experience" },
    NavLink { name: "Certifications", anchor: "certifications" },
    NavLink { name: "Hiring", anchor: "hiring" },
    NavLink { name: "Contact", anchor: "contact" },
];

pub const CINEMATIC_NAV: [NavLink; 5] = [
    NavLink { name: "About", anchor: "about" },
    NavLink { name: "Stack", anchor: "stack" },
    NavLink { name: "Experience", anchor: "experience" },
    NavLink { name: "Projects", anchor: "projects" },
    NavLink { name: "Contact", anchor: "contact" },
];

pub struct Skill {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const SKILLS: [Skill; 12] = [
    Skill { name: "Python", description: "Pseudo-code that actually runs. Mostly `import magic`.", category: "Data Engineering" },
    Skill { name: "SQL", description: "SELECT * FROM stackoverflow WHERE solution = TRUE;", category: "Data Engineering" },
    Skill { name: "Apache Spark", description: "Setting CPUs on fire to count words efficiently.", category: "Data Engineering" },
    Skill { name: "Kafka", description: "Because HTTP is too slow for my anxiety.", category: "Data Engineering" },
    Skill { name: "Airflow", description: "Crontab with a God complex and a UI.", category: "Data Engineering" },
    Skill { name: "AWS", description: "My credit card's worst nightmare.", category: "Cloud & Ops" },
    Skill { name: "Docker", description: "\"But it works on my machine...\"", category: "Cloud & Ops" },
    Skill { name: "Kubernetes", description: "YAML-Driven Development.", category: "Cloud & Ops" },
    Skill { name: "Terraform", description: "Infrastructure as Config (and sometimes disaster).", category: "Cloud & Ops" },
    Skill { name: "PyTorch", description: "The framework she told you not to worry about.", category: "AI & ML" },
    Skill { name: "MLflow", description: "Herding model cats.", category: "AI & ML" },
    Skill { name: "Grafana", description: "Dark mode dashboards to impress managers.", category: "Visualization" },
];

/// Skill categories in first-appearance order.
pub fn skill_categories() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for skill in SKILLS.iter() {
        if !out.contains(&skill.category) {
            out.push(skill.category);
        }
    }
    out
}

pub struct Job {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EXPERIENCE: [Job; 3] = [
    Job {
        company: "Riot Labz Pvt. Ltd.",
        role: "Software Developer (Data Infrastructure)",
        period: "Jan 2024 – Jul 2024",
        description: "Built a FastAPI ingestion service for real-time IoT telemetry (MQTT, 50K+ msgs/day). Migrated legacy storage to MySQL, reducing query latency by 60%.",
    },
    Job {
        company: "Capgemini",
        role: "Software Engineer / Analyst",
        period: "Feb 2022 – Nov 2023",
        description: "Designed and deployed ETL pipelines for financial clients processing 2TB+ of transaction data using SQL and Python.",
    },
    Job {
        company: "Bosch India",
        role: "Graduate Engineer Trainee",
        period: "Oct 2020 – Jan 2021",
        description: "Monitored manufacturing equipment sensors and automated Excel-based reporting with Python, saving 5+ hours per week.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub tech: &'static [&'static str],
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Meldify AI (Co-Founder)",
        description: "An AI-powered digital janitor that scrubs messy CSVs: automated schema detection and null handling via Gemini.",
        link: "#",
        tech: &["FastAPI", "React", "Gemini", "Pandas"],
    },
    Project {
        title: "Silicon Content Forecasting",
        description: "LSTM/Transformer models predicting blast furnace silicon content on 1M+ sensor records, Spark pipeline on Kubernetes.",
        link: "#",
        tech: &["TensorFlow", "Apache Spark", "Kubernetes", "Python"],
    },
    Project {
        title: "Predictive Maintenance Pipeline",
        description: "End-to-end MLOps pipeline for NASA CMAPSS: Docker training, MLflow tracking, CI/CD to SageMaker.",
        link: "#",
        tech: &["AWS SageMaker", "MLflow", "Airflow", "Docker"],
    },
    Project {
        title: "Real-Time Stock Market Pipeline",
        description: "Live prices from Finnhub through Kafka (10K+ events/min), Spark Structured Streaming, Grafana dashboards.",
        link: "#",
        tech: &["Kafka", "Spark Streaming", "Grafana"],
    },
];

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub link: Option<&'static str>,
    pub verification_id: Option<&'static str>,
}

pub const CERTIFICATIONS: [Certification; 2] = [
    Certification {
        name: "AWS Certified Data Engineer – Associate",
        issuer: "Amazon Web Services (AWS)",
        date: "Sep 2025",
        link: Some("https://aws.amazon.com/certification/certified-data-engineer-associate/"),
        verification_id: Some("649db95bec3f414ba1d08a8fdc866ead"),
    },
    Certification {
        name: "Buffering next achievement...",
        issuer: "Currently farming XP & reading docs",
        date: "Soon™",
        link: None,
        verification_id: None,
    },
];

pub struct SocialLink {
    pub platform: &'static str,
    pub url: &'static str,
    /// Icon name in the frontend icon set.
    pub icon: &'static str,
}

pub const SOCIALS: [SocialLink; 3] = [
    SocialLink { platform: "Email", url: "mailto:badrish41@gmail.com", icon: "mail" },
    SocialLink { platform: "LinkedIn", url: "https://www.linkedin.com/in/badrishms/", icon: "linkedin" },
    SocialLink { platform: "GitHub", url: "https://github.com/baddy1411", icon: "github" },
];

pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HIRING_HEADLINE: &str = "Why should you hire me?";
pub const HIRING_OFFERINGS: [Offering; 3] = [
    Offering {
        title: "Production-Grade Code",
        description: "Typed, tested and containerized code ready for deployment, not scripts that only work on my machine.",
    },
    Offering {
        title: "Business-First Mindset",
        description: "A 1% accuracy gain isn't worth a 500% latency increase. I optimize for business value.",
    },
    Offering {
        title: "Full-Stack Data Fluency",
        description: "From ingesting raw logs with Kafka to visualizing trends in Grafana, the whole data lifecycle.",
    },
];

// ---------------------------------------------------------------------------
// Cinematic layout
// ---------------------------------------------------------------------------

pub const HERO_DESCRIPTORS: [&str; 4] = [
    "Building production AWS pipelines at 1TB/day",
    "Optimizing 3D computer vision datasets",
    "Driving Net-Zero intelligence systems",
    "M.Sc. Data Engineering · Constructor University",
];
pub const HERO_ROTATE_MS: u32 = 3500;

/// About section: a 700vh dig through five depth layers.
pub const ABOUT_SECTION_VH: u32 = 700;
pub const ABOUT_LAYER_CUTS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.82, 1.0];
pub const ABOUT_LAYER_NAMES: [&str; 5] = ["Surface", "Roots", "Deep Earth", "Bedrock", "Magma Core"];
/// Background per layer, darkening with depth.
pub const ABOUT_LAYER_BACKGROUNDS: [&str; 5] = ["#0a0e12", "#0d0a08", "#0b0808", "#080606", "#0d0505"];

/// One paragraph per layer, deeper layers get more personal.
pub const ABOUT_LAYER_COPY: [&str; 5] = [
    "Data Engineer in Bremen, building pipelines that survive Monday mornings.",
    "Roots in Mechanical Engineering: sensors, vibration analysis and a Jetson Nano that ran hot.",
    "Deep Earth: Spark, Kafka, Airflow and AWS, glued together with typed Python and tests.",
    "Bedrock: a 1% accuracy gain is not worth a 500% latency increase. Ship what the business needs.",
    "Magma Core: turning noisy industrial data into decisions, one reproducible pipeline at a time.",
];

pub static ABOUT_LAYERS: Lazy<PhaseSchedule> = Lazy::new(|| {
    PhaseSchedule::explicit(&ABOUT_LAYER_CUTS)
        .and_then(|s| s.with_names(&ABOUT_LAYER_NAMES))
        .expect("about layer breakpoints are valid")
});

/// Experience missions, one uniform segment each.
pub static MISSION_SCHEDULE: Lazy<PhaseSchedule> = Lazy::new(|| {
    PhaseSchedule::uniform(MISSIONS.len()).expect("at least one mission")
});

/// Project scenes, one uniform segment each.
pub static SCENE_SCHEDULE: Lazy<PhaseSchedule> = Lazy::new(|| {
    PhaseSchedule::uniform(SCENES.len()).expect("at least one scene")
});

pub const BIO_WORDS: [&str; 19] = [
    "Pragmatic", "Data", "Engineer", "with", "2+", "years", "of", "production", "experience",
    "building", "AWS-based", "data", "platforms,", "MLOps", "infrastructure,", "and", "real-time",
    "sensor", "systems.",
];

pub struct Mission {
    pub code: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    /// One line per beat, revealed in order.
    pub beats: &'static [&'static str],
}

/// Experience section: 1200vh, 75% missions then 25% education.
pub const EXPERIENCE_SECTION_VH: u32 = 1200;
pub const MISSION_PORTION: f64 = 0.75;

pub const MISSIONS: [Mission; 5] = [
    Mission {
        code: "FORGE",
        company: "Constructor University",
        role: "Research Assistant · 3D Vision",
        period: "2025 – now",
        beats: &["Dataset audit", "Active learning loop", "+12% accuracy"],
    },
    Mission {
        code: "MINDTREE",
        company: "Riot Labz",
        role: "Software Developer",
        period: "2024",
        beats: &["MQTT ingestion", "MySQL migration", "60% faster queries"],
    },
    Mission {
        code: "CAPGEMINI",
        company: "Capgemini",
        role: "Software Engineer",
        period: "2022 – 2023",
        beats: &["Client onboarding", "ETL at 2TB+", "Report automation", "15% faster turnaround"],
    },
    Mission {
        code: "OAKTER",
        company: "Bosch India",
        role: "Graduate Engineer Trainee",
        period: "2020 – 2021",
        beats: &["Sensor monitoring", "Python reporting", "5h/week saved"],
    },
    Mission {
        code: "SMS",
        company: "Sri Ramakrishna Engineering College",
        role: "B.E. Mechanical Engineering",
        period: "2017 – 2021",
        beats: &["Mechanics", "Jetson Nano", "FFT waveforms", "Graduation"],
    },
];

pub struct Degree {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: [Degree; 2] = [
    Degree {
        school: "Constructor University, Bremen",
        degree: "M.Sc. Data Engineering",
        period: "2024 – 2026",
    },
    Degree {
        school: "Sri Ramakrishna Engineering College",
        degree: "B.E. Mechanical Engineering",
        period: "2017 – 2021",
    },
];

pub struct Scene {
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Beat cut points inside the scene.
    pub beat_cuts: &'static [f64],
    pub beat_captions: &'static [&'static str],
}

/// Projects section: 900vh, one scene per fifth of the scroll.
pub const PROJECTS_SECTION_VH: u32 = 900;
/// Scroll hint disappears once the visitor has clearly started scrolling.
pub const PROJECTS_HINT_UNTIL: f64 = 0.12;

pub const SCENES: [Scene; 5] = [
    Scene {
        number: "01",
        title: "Automated Evaluation Factory",
        subtitle: "Active learning pipeline",
        beat_cuts: &[0.0, 0.3, 0.6, 0.85, 1.0],
        beat_captions: &["Raw frames arrive", "Model flags uncertainty", "+12% accuracy", "Distribution balanced"],
    },
    Scene {
        number: "02",
        title: "4D Perception Engine",
        subtitle: "Sensor fusion system",
        beat_cuts: &[0.0, 0.3, 0.6, 0.8, 1.0],
        beat_captions: &["Point cloud", "Temporal fusion", "Object tracks", "Deployed"],
    },
    Scene {
        number: "03",
        title: "Carbon Intelligence Platform",
        subtitle: "Net-zero monitoring",
        beat_cuts: &[0.0, 0.3, 0.6, 0.8, 1.0],
        beat_captions: &["Bronze · Silver · Gold", "Data drop", "Anomaly: 65ms", "Architecture"],
    },
    Scene {
        number: "04",
        title: "Vehicle Telematics",
        subtitle: "Real-time fleet analytics",
        beat_cuts: &[0.0, 0.25, 0.5, 0.75, 1.0],
        beat_captions: &["Fleet online", "CAN bus decode", "Live map", "Alerts"],
    },
    Scene {
        number: "05",
        title: "Serverless DaaS Portal",
        subtitle: "Data provisioning",
        beat_cuts: &[0.0, 0.3, 0.55, 0.8, 1.0],
        beat_captions: &["Request", "Approval", "Provisioned", "Audited"],
    },
];

/// Beat schedule of every scene, indexed like `SCENES`.
pub static SCENE_BEATS: Lazy<Vec<PhaseSchedule>> = Lazy::new(|| {
    SCENES
        .iter()
        .map(|scene| PhaseSchedule::explicit(scene.beat_cuts).expect("scene beat cuts are valid"))
        .collect()
});

/// Fed to the model as its system instruction.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are an AI assistant for Badrish Madapuji Srinivasan's portfolio website.
Your name is "Badrish AI".

Badrish is a Master of Science in Data Engineering candidate at Constructor University, Bremen, Germany (Exp. Jun 2026).

CORE COMPETENCIES:
- Data Engineering: Spark, Kafka, Airflow, dbt, ETL/ELT.
- Cloud & Ops: AWS (S3, Glue, SageMaker), Docker, Kubernetes, Terraform.
- AI/ML: TensorFlow, PyTorch, Scikit-learn, LangGraph, RAG.

EXPERIENCE:
1. Riot Labz (Jan 2024 - Jul 2024): Software Developer. Built IoT ingestion for 50k+ msgs/day, migrated to MySQL.
2. Capgemini (Feb 2022 - Nov 2023): Software Engineer. ETL pipelines for finance (2TB+ data).
3. Bosch India (Oct 2020 - Jan 2021): Trainee. Manufacturing sensor monitoring.

PROJECTS:
- Meldify AI (Co-Founder): AI-powered data cleaning platform using Gemini & Pandas.
- Silicon Forecast: LSTM/Transformers for blast furnaces (Spark/K8s).
- Predictive Maintenance: MLOps with SageMaker/MLflow.
- Stock Market Pipeline: Kafka/Spark Streaming/Grafana.

EDUCATION:
- M.Sc. Data Engineering, Constructor University (2024-2026).
- B.E. Mechanical Engineering, Sri Ramakrishna Engineering College (2017-2021).

CONTACT:
- Email: badrish41@gmail.com

Tone: Professional but with a slight dry wit. You are aware you are on a minimalist, "cool" developer portfolio.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_layers() {
        let layers = &*ABOUT_LAYERS;
        assert_eq!(layers.len(), 5);
        assert_eq!(layers.read(0.55).name, Some("Deep Earth"));
        assert_eq!(ABOUT_LAYER_BACKGROUNDS.len(), layers.len());
        assert_eq!(ABOUT_LAYER_COPY.len(), layers.len());
    }

    #[test]
    fn test_scene_beats_are_valid() {
        assert_eq!(SCENE_BEATS.len(), SCENES.len());
        for (scene, beats) in SCENES.iter().zip(SCENE_BEATS.iter()) {
            assert_eq!(beats.len(), scene.beat_captions.len(), "scene {}", scene.number);
        }
        // same instance on every access
        assert!(std::ptr::eq(&SCENE_BEATS[0], &SCENE_BEATS[0]));
        assert_eq!(SCENE_BEATS[4].read(0.6).index, 2);
    }

    #[test]
    fn test_uniform_schedules() {
        assert_eq!(MISSION_SCHEDULE.len(), 5);
        assert_eq!(SCENE_SCHEDULE.read(0.5).index, 2);
        assert_eq!(SCENE_SCHEDULE.read(1.0).index, 4);
    }

    #[test]
    fn test_missions_have_beats() {
        assert!(MISSIONS.iter().all(|m| (3..=4).contains(&m.beats.len())));
    }

    #[test]
    fn test_skill_categories() {
        assert_eq!(
            skill_categories(),
            vec!["Data Engineering", "Cloud & Ops", "AI & ML", "Visualization"]
        );
    }
}
