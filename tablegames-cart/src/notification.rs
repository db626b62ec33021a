//! Transient notification banners.

/// Default lifetime of a banner before it removes itself.
pub const AUTO_DISMISS_MS: u32 = 3000;

/// Inline style pinning a banner to the top-right corner of the viewport.
pub const BANNER_STYLE: &str =
    "position: fixed; top: 20px; right: 20px; z-index: 9999; min-width: 300px;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Bootstrap contextual class for this kind.
    #[must_use]
    pub const fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    /// Full class attribute of the banner element.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!(
            "alert {} alert-dismissible fade show",
            self.kind.alert_class()
        )
    }
}
