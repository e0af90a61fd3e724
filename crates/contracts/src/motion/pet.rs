//! Virtual pet mood machine.
//!
//! Time is passed in explicitly (milliseconds, any monotonic origin) so the
//! machine is deterministic; the widget feeds it DOM events and a periodic
//! `tick`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetMood {
    #[default]
    Idle,
    Watching,
    Dizzy,
    Sleeping,
    Happy,
}

impl PetMood {
    /// Speech bubble above the pet, if any.
    pub fn bubble(&self) -> Option<&'static str> {
        match self {
            PetMood::Sleeping => Some("Zzz..."),
            PetMood::Happy => Some("♥"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Pet {
    mood: PetMood,
    /// Mouse inactivity deadline; reaching it puts the pet to sleep.
    sleep_at: Option<f64>,
    /// End of a transient mood (dizzy, happy).
    recover_at: Option<f64>,
}

impl Pet {
    pub const SLEEP_AFTER_MS: f64 = 5000.0;
    pub const DIZZY_MS: f64 = 800.0;
    pub const HAPPY_MS: f64 = 2000.0;
    /// Minimum |wheel delta| that makes the pet dizzy.
    pub const DIZZY_WHEEL_DELTA: f64 = 50.0;
    /// Maximum pupil travel in SVG units.
    pub const MAX_EYE_TRAVEL: f64 = 3.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(&self) -> PetMood {
        self.mood
    }

    pub fn on_mouse_move(&mut self, now: f64) {
        self.mood = match self.mood {
            PetMood::Sleeping => PetMood::Idle,
            PetMood::Idle | PetMood::Watching => PetMood::Watching,
            other => other,
        };
        self.sleep_at = Some(now + Self::SLEEP_AFTER_MS);
    }

    pub fn on_wheel(&mut self, delta_y: f64, now: f64) {
        if delta_y.abs() > Self::DIZZY_WHEEL_DELTA {
            self.mood = PetMood::Dizzy;
            self.recover_at = Some(now + Self::DIZZY_MS);
        }
    }

    pub fn on_click(&mut self, now: f64) {
        self.mood = PetMood::Happy;
        self.recover_at = Some(now + Self::HAPPY_MS);
    }

    /// Apply expired deadlines. Returns `true` if the mood changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let before = self.mood;
        if self.recover_at.is_some_and(|t| now >= t) {
            self.recover_at = None;
            self.mood = PetMood::Idle;
        }
        if self.sleep_at.is_some_and(|t| now >= t) {
            self.sleep_at = None;
            self.mood = PetMood::Sleeping;
        }
        self.mood != before
    }

    /// Pupil offset toward the pointer; zero unless watching.
    pub fn eye_offset(&self, pet_center: (f64, f64), pointer: (f64, f64)) -> (f64, f64) {
        if self.mood != PetMood::Watching {
            return (0.0, 0.0);
        }
        let dx = pointer.0 - pet_center.0;
        let dy = pointer.1 - pet_center.1;
        let angle = dy.atan2(dx);
        let dist = (dx.hypot(dy) / 50.0).min(Self::MAX_EYE_TRAVEL);
        (angle.cos() * dist, angle.sin() * dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_wakes_and_watches() {
        let mut pet = Pet::new();
        pet.on_mouse_move(0.0);
        assert_eq!(pet.mood(), PetMood::Watching);
        assert!(pet.tick(5000.0));
        assert_eq!(pet.mood(), PetMood::Sleeping);
        pet.on_mouse_move(6000.0);
        assert_eq!(pet.mood(), PetMood::Idle);
        pet.on_mouse_move(6100.0);
        assert_eq!(pet.mood(), PetMood::Watching);
    }

    #[test]
    fn test_mouse_move_extends_sleep_deadline() {
        let mut pet = Pet::new();
        pet.on_mouse_move(0.0);
        pet.on_mouse_move(4000.0);
        assert!(!pet.tick(5000.0));
        assert_eq!(pet.mood(), PetMood::Watching);
        pet.tick(9000.0);
        assert_eq!(pet.mood(), PetMood::Sleeping);
    }

    #[test]
    fn test_wheel_dizzy_then_recovers() {
        let mut pet = Pet::new();
        pet.on_wheel(20.0, 0.0);
        assert_eq!(pet.mood(), PetMood::Idle);
        pet.on_wheel(-120.0, 0.0);
        assert_eq!(pet.mood(), PetMood::Dizzy);
        assert_eq!(pet.mood().bubble(), None);
        pet.tick(799.0);
        assert_eq!(pet.mood(), PetMood::Dizzy);
        pet.tick(800.0);
        assert_eq!(pet.mood(), PetMood::Idle);
    }

    #[test]
    fn test_click_happy() {
        let mut pet = Pet::new();
        pet.on_click(100.0);
        assert_eq!(pet.mood(), PetMood::Happy);
        assert_eq!(pet.mood().bubble(), Some("♥"));
        // moving the mouse does not interrupt the happy face
        pet.on_mouse_move(200.0);
        assert_eq!(pet.mood(), PetMood::Happy);
        pet.tick(2100.0);
        assert_eq!(pet.mood(), PetMood::Idle);
    }

    #[test]
    fn test_eye_offset() {
        let mut pet = Pet::new();
        assert_eq!(pet.eye_offset((0.0, 0.0), (100.0, 0.0)), (0.0, 0.0));
        pet.on_mouse_move(0.0);
        let (x, y) = pet.eye_offset((0.0, 0.0), (100.0, 0.0));
        assert!((x - 2.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
        let (x, y) = pet.eye_offset((0.0, 0.0), (0.0, 1000.0));
        assert!(x.abs() < 1e-9);
        assert!((y - 3.0).abs() < 1e-9);
    }
}
