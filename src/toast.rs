//! Toast Notifications
//!
//! Success and error popups with a countdown bar.

use uuid::Uuid;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3500;

// ============ Messages ============

pub const LOGIN_SUCCESS: &str = "Login success!";
pub const LOGOUT_SUCCESS: &str = "Logout Success!";
pub const REGISTER_SUCCESS: &str = "Register success! Please login.";
pub const RESET_LINK_SENT: &str = "Reset link has been sent to your email!";
pub const ARTWORK_SAVED: &str = "Artwork saved successfully!";
pub const ARTWORK_UPDATED: &str = "Artwork updated successfully!";
pub const ARTWORK_DELETED: &str = "Artwork successfully deleted!";
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const PHOTO_REMOVED: &str = "Profile photo deleted!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success!",
            ToastKind::Error => "Error!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: format!("toast-{}", Uuid::new_v4()),
            kind,
            message: message.into(),
            duration_ms: TOAST_DURATION_MS,
        }
    }
}

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Add a toast and return its id (for timed dismissal)
    pub fn push(&mut self, toast: Toast) -> String {
        let id = toast.id.clone();
        self.toasts.push(toast);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> String {
        self.push(Toast::new(ToastKind::Success, message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> String {
        self.push(Toast::new(ToastKind::Error, message))
    }

    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.success("Login success!");
        let second = queue.error("Wrong password");
        assert_ne!(first, second);

        let kinds: Vec<ToastKind> = queue.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error]);

        assert!(queue.dismiss(&first));
        assert!(!queue.dismiss(&first));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().unwrap().message, "Wrong password");
    }

    #[test]
    fn test_toast_defaults() {
        let toast = Toast::new(ToastKind::Error, "Failed to delete artwork!");
        assert_eq!(toast.duration_ms, 3500);
        assert_eq!(toast.kind.title(), "Error!");
        assert!(toast.id.starts_with("toast-"));
    }
}
