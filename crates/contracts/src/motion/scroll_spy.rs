//! Active navigation section from scroll position.

/// Section anchor with its top offset inside the scroll container.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAnchor {
    pub id: String,
    pub top: f64,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Spy line sits one third down the viewport.
pub fn spy_line(scroll_top: f64, viewport_height: f64) -> f64 {
    scroll_top + viewport_height / 3.0
}

/// Last section (in document order) whose top is at or above the spy line.
///
/// Returns the first section when the line is above everything, `None` for
/// an empty list.
pub fn active_section(anchors: &[SectionAnchor], line: f64) -> Option<&str> {
    anchors
        .iter()
        .filter(|a| a.top <= line)
        .last()
        .or_else(|| anchors.first())
        .map(|a| a.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<SectionAnchor> {
        vec![
            SectionAnchor::new("about", 0.0),
            SectionAnchor::new("projects", 900.0),
            SectionAnchor::new("experience", 2000.0),
            SectionAnchor::new("contact", 3100.0),
        ]
    }

    #[test]
    fn test_active_section() {
        let a = anchors();
        assert_eq!(active_section(&a, spy_line(0.0, 900.0)), Some("about"));
        assert_eq!(active_section(&a, spy_line(600.0, 900.0)), Some("projects"));
        assert_eq!(active_section(&a, spy_line(1699.0, 900.0)), Some("projects"));
        assert_eq!(active_section(&a, spy_line(1700.0, 900.0)), Some("experience"));
        assert_eq!(active_section(&a, 99_999.0), Some("contact"));
    }

    #[test]
    fn test_line_above_all_sections() {
        let a = vec![SectionAnchor::new("hero", 120.0), SectionAnchor::new("about", 800.0)];
        assert_eq!(active_section(&a, 10.0), Some("hero"));
        assert_eq!(active_section(&[], 10.0), None);
    }
}
