//! Presentation rules for the navbar cart counter badge.

/// Stable id of the badge element.
pub const COUNTER_ID: &str = "cart-counter";

/// Classes given to a badge created on demand.
pub const COUNTER_CLASSES: &str =
    "position-absolute top-0 start-100 translate-middle badge rounded-pill bg-danger";

/// What the badge should show for a given count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeState {
    pub text: String,
    pub visible: bool,
}

impl BadgeState {
    #[must_use]
    pub fn for_count(count: i64) -> Self {
        Self {
            text: count.to_string(),
            visible: count > 0,
        }
    }

    /// Value for the `display` style property.
    #[must_use]
    pub const fn display(&self) -> &'static str {
        if self.visible { "inline" } else { "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_counts_are_shown() {
        let badge = BadgeState::for_count(5);
        assert_eq!(badge.text, "5");
        assert!(badge.visible);
        assert_eq!(badge.display(), "inline");
    }

    #[test]
    fn zero_and_negative_counts_are_hidden_but_written() {
        let zero = BadgeState::for_count(0);
        assert_eq!(zero.text, "0");
        assert_eq!(zero.display(), "none");
        assert!(!BadgeState::for_count(-1).visible);
    }
}
