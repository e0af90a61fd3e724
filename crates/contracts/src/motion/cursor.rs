//! Custom cursor dot for the cinematic theme.
//!
//! The dot is centred on the pointer and grows into a ring over links and
//! buttons. It stays hidden until the first mouse move.

/// Media query under which no custom cursor is rendered.
pub const TOUCH_LAYOUT_QUERY: &str = "(max-width: 768px)";
/// Selector of elements that enlarge the dot.
pub const INTERACTIVE_SELECTOR: &str = "a, button";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorDot {
    x: f64,
    y: f64,
    hovering: bool,
    visible: bool,
}

impl CursorDot {
    pub const SIZE: f64 = 12.0;
    pub const HOVER_SIZE: f64 = 40.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move(&mut self, x: f64, y: f64, over_interactive: bool) {
        self.x = x;
        self.y = y;
        self.hovering = over_interactive;
        self.visible = true;
    }

    /// Pointer left the document.
    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    pub fn on_enter(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn size(&self) -> f64 {
        if self.hovering {
            Self::HOVER_SIZE
        } else {
            Self::SIZE
        }
    }

    /// Top-left corner that centres the dot on the pointer.
    pub fn origin(&self) -> (f64, f64) {
        let half = self.size() / 2.0;
        (self.x - half, self.y - half)
    }

    pub fn style(&self) -> String {
        let (left, top) = self.origin();
        let size = self.size();
        format!(
            "left: {:.1}px; top: {:.1}px; width: {size}px; height: {size}px; opacity: {};",
            left,
            top,
            if self.visible { 1 } else { 0 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_first_move() {
        let mut dot = CursorDot::new();
        assert!(!dot.is_visible());
        assert!(dot.style().contains("opacity: 0;"));
        dot.on_move(100.0, 50.0, false);
        assert!(dot.is_visible());
        assert!(dot.style().contains("opacity: 1;"));
    }

    #[test]
    fn test_centred_on_pointer() {
        let mut dot = CursorDot::new();
        dot.on_move(100.0, 50.0, false);
        assert_eq!(dot.size(), 12.0);
        assert_eq!(dot.origin(), (94.0, 44.0));

        dot.on_move(100.0, 50.0, true);
        assert!(dot.is_hovering());
        assert_eq!(dot.size(), 40.0);
        assert_eq!(dot.origin(), (80.0, 30.0));
        assert!(dot.style().starts_with("left: 80.0px; top: 30.0px; width: 40px;"));
    }

    #[test]
    fn test_leave_and_enter_document() {
        let mut dot = CursorDot::new();
        dot.on_move(10.0, 10.0, true);
        dot.on_leave();
        assert!(!dot.is_visible());
        // position is kept for when the pointer comes back
        assert_eq!(dot.origin(), (-10.0, -10.0));
        dot.on_enter();
        assert!(dot.is_visible());
    }
}
