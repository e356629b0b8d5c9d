use std::time::{Duration, Instant};

/// Transient one-line message shown in the message bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Option<Instant>,
    pub timeout: Duration,
}

impl StatusMessage {
    pub fn new(timeout: Duration) -> Self {
        Self {
            text: String::new(),
            set_at: None,
            timeout,
        }
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.set_at = None;
    }

    /// Whether the message should still be drawn at `now`.
    pub fn is_visible_at(&self, now: Instant) -> bool {
        match self.set_at {
            Some(set_at) => {
                !self.text.is_empty() && now.saturating_duration_since(set_at) < self.timeout
            }
            None => false,
        }
    }

    /// The text to draw at `now`, if it has not expired.
    pub fn visible_text(&self, now: Instant) -> Option<&str> {
        self.is_visible_at(now).then_some(self.text.as_str())
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
