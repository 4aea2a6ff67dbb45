//! Toast notifications queued by the view and drained by the page.

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    /// CSS modifier used by the page.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    /// The message body to display.
    pub text: String,
}

/// Ordered queue of toasts waiting to be shown.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Push a success toast.
    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text.into());
    }

    /// Push an error toast.
    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text.into());
    }

    fn push(&mut self, level: ToastLevel, text: String) {
        self.toasts.push(Toast { level, text });
    }

    /// Toasts not yet shown, oldest first.
    #[must_use]
    pub fn peek(&self) -> &[Toast] {
        &self.toasts
    }

    /// Remove and return every queued toast.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_drain_toasts_in_push_order() {
        let mut queue = ToastQueue::default();
        queue.success("saved");
        queue.error("failed");

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].level, ToastLevel::Success);
        assert_eq!(drained[1].text, "failed");
        assert!(queue.peek().is_empty());
    }

    #[test]
    fn should_keep_duplicate_messages() {
        let mut queue = ToastQueue::default();
        queue.error("Error updating workshop.");
        queue.error("Error updating workshop.");
        assert_eq!(queue.peek().len(), 2);
    }
}
