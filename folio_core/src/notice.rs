//! User-facing notifications (toasts).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
    Info,
}

impl Tone {
    /// CSS modifier class.
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Success => "toast-success",
            Tone::Error => "toast-error",
            Tone::Info => "toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone,
        }
    }

    pub fn message_sent() -> Self {
        Self::new(
            "Thanks! I'll reply soon. 🚀",
            "Your message has been sent successfully!",
            Tone::Success,
        )
    }

    pub fn submission_failed() -> Self {
        Self::new(
            "Oops! Something went wrong",
            "Please try again or contact me directly via email.",
            Tone::Error,
        )
    }

    pub fn copied(label: &str) -> Self {
        Self::new(
            "Copied to clipboard! 📋",
            format!("{label} copied successfully"),
            Tone::Info,
        )
    }

    pub fn shortcut_activated(description: &str) -> Self {
        Self::new("Easter egg activated! 🥚", description, Tone::Info)
    }
}

/// Sink for notices.
pub trait Notify {
    fn notify(&mut self, notice: Notice);
}

impl Notify for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// How many toasts may be on screen at once.
pub const TOAST_LIMIT: usize = 3;

/// Bounded stack of visible toasts, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<(u64, Notice)>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    /// Push a notice and return its id for later dismissal. The oldest
    /// toast is evicted when the queue is full.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(0, (id, notice));
        self.items.truncate(self.limit);
        id
    }

    /// Returns `false` if the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|(toast_id, _)| *toast_id != id);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Notice)> {
        self.items.iter().map(|(id, notice)| (*id, notice))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notify for ToastQueue {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_newest_first_and_evicts_oldest() {
        let mut queue = ToastQueue::with_limit(2);
        let first = queue.push(Notice::copied("Email"));
        let second = queue.push(Notice::message_sent());
        let third = queue.push(Notice::submission_failed());

        let ids: Vec<u64> = queue.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![third, second]);
        assert!(!queue.dismiss(first));
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Notice::copied("Phone"));
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn copied_notice_names_the_value() {
        let notice = Notice::copied("Phone/WhatsApp");
        assert_eq!(notice.description, "Phone/WhatsApp copied successfully");
        assert_eq!(notice.tone, Tone::Info);
    }

    #[test]
    fn zero_limit_still_shows_one_toast() {
        let mut queue = ToastQueue::with_limit(0);
        queue.push(Notice::message_sent());
        assert_eq!(queue.len(), 1);
    }
}
