//! Contact form → `mailto:` link. Nothing is sent to a server.

use serde::{Deserialize, Serialize};

/// How long the "Message Ready!" state stays before the form resets.
pub const SUCCESS_RESET_MS: u32 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl ContactStatus {
    pub fn button_label(&self) -> &'static str {
        match self {
            ContactStatus::Idle => "Send Message",
            ContactStatus::Submitting => "Opening Mail...",
            ContactStatus::Success => "Message Ready!",
        }
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self, ContactStatus::Idle)
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".into());
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(format!("'{}' is not an email address", email)),
        }
        if self.message.trim().is_empty() {
            return Err("Message is required".into());
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Inquiry from {}", self.name.trim())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name.trim(),
            self.email.trim(),
            self.message
        )
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn mailto_uri(&self, recipient: &str) -> Result<String, String> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            message: "Let's talk pipelines & engines.".into(),
        }
    }

    #[test]
    fn test_mailto_uri() {
        let uri = filled().mailto_uri("badrish41@gmail.com").unwrap();
        assert_eq!(
            uri,
            "mailto:badrish41@gmail.com?subject=Portfolio%20Inquiry%20from%20Ada%20Lovelace\
             &body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0ALet%27s%20talk%20pipelines%20%26%20engines."
        );
    }

    #[test]
    fn test_required_fields() {
        let mut f = filled();
        f.name = "  ".into();
        assert!(f.mailto_uri("x@y.z").is_err());

        let mut f = filled();
        f.email = "not-an-email".into();
        assert!(f.validate().is_err());

        let mut f = filled();
        f.message = String::new();
        assert_eq!(f.validate(), Err("Message is required".to_string()));

        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ContactStatus::default().button_label(), "Send Message");
        assert!(ContactStatus::Idle.accepts_input());
        assert!(!ContactStatus::Success.accepts_input());
    }
}
