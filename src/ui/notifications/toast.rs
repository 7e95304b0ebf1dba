// SPDX-License-Identifier: MPL-2.0
//! Presentational projection of notifications.
//!
//! Toasts are what a view renders: the text plus everything derived from the
//! severity (icon, style class, accessibility role) and the dismissing flag
//! that drives the exit transition. Building them here keeps that mapping in
//! one place.

use super::manager::Message;
use super::notification::{Notification, NotificationId, Severity};
use super::store::Snapshot;

/// ARIA role a toast is announced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaRole {
    /// Interrupting announcement.
    Alert,
    /// Advisory status update.
    Status,
}

impl AriaRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AriaRole::Alert => "alert",
            AriaRole::Status => "status",
        }
    }
}

/// Value of the `aria-live` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaLive {
    Assertive,
    Polite,
}

impl AriaLive {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AriaLive::Assertive => "assertive",
            AriaLive::Polite => "polite",
        }
    }
}

impl Severity {
    /// Errors interrupt; everything else is announced politely.
    #[must_use]
    pub fn aria_role(self) -> AriaRole {
        match self {
            Severity::Error => AriaRole::Alert,
            _ => AriaRole::Status,
        }
    }

    #[must_use]
    pub fn aria_live(self) -> AriaLive {
        match self.aria_role() {
            AriaRole::Alert => AriaLive::Assertive,
            AriaRole::Status => AriaLive::Polite,
        }
    }

    /// Name of the icon shown next to the text.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notification => "info",
            Severity::System => "check",
            Severity::Loading => "spinner",
        }
    }
}

/// Render-ready description of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView<'a> {
    pub id: NotificationId,
    pub text: &'a str,
    pub severity: Severity,
    pub role: AriaRole,
    pub live: AriaLive,
    pub icon: &'static str,
    /// Space-separated classes, including `is-dismissing` during the exit
    /// transition.
    pub class: String,
    pub dismissing: bool,
}

impl ToastView<'_> {
    /// Message the close button emits.
    #[must_use]
    pub fn on_close(&self) -> Message {
        Message::Dismiss(self.id)
    }
}

/// Toast view builder.
pub struct Toast;

impl Toast {
    /// Builds the view of a single notification.
    #[must_use]
    pub fn view(notification: &Notification) -> ToastView<'_> {
        let severity = notification.severity();
        let dismissing = notification.is_dismissing();

        let mut class = format!("hover-message hover-message--{severity}");
        if dismissing {
            class.push_str(" is-dismissing");
        }

        ToastView {
            id: notification.id(),
            text: notification.text(),
            severity,
            role: severity.aria_role(),
            live: severity.aria_live(),
            icon: severity.icon_name(),
            class,
            dismissing,
        }
    }

    /// Builds views for a whole snapshot, keeping its newest-first order.
    #[must_use]
    pub fn view_overlay(snapshot: &Snapshot) -> Vec<ToastView<'_>> {
        snapshot.iter().map(Self::view).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(severity: Severity) -> Notification {
        Notification::new(NotificationId::from_raw(1), "text".into(), severity)
    }

    #[test]
    fn error_is_assertive_alert() {
        assert_eq!(Severity::Error.aria_role(), AriaRole::Alert);
        assert_eq!(Severity::Error.aria_live(), AriaLive::Assertive);
    }

    #[test]
    fn other_severities_are_polite_status() {
        for severity in Severity::ALL.into_iter().filter(|s| *s != Severity::Error) {
            assert_eq!(severity.aria_role(), AriaRole::Status, "{severity}");
            assert_eq!(severity.aria_live(), AriaLive::Polite, "{severity}");
        }
    }

    #[test]
    fn view_carries_severity_class() {
        let n = notification(Severity::Warning);
        let view = Toast::view(&n);

        assert_eq!(view.class, "hover-message hover-message--warning");
        assert_eq!(view.icon, "warning");
        assert_eq!(view.text, "text");
        assert!(!view.dismissing);
    }

    #[test]
    fn dismissing_entry_gets_exit_class() {
        let mut n = notification(Severity::System);
        n.apply(crate::ui::notifications::Transition::Dismiss);

        let view = Toast::view(&n);
        assert!(view.dismissing);
        assert!(view.class.ends_with(" is-dismissing"));
    }

    #[test]
    fn close_button_emits_dismiss() {
        let n = notification(Severity::Loading);
        let view = Toast::view(&n);
        assert!(matches!(view.on_close(), Message::Dismiss(id) if id == n.id()));
    }

    #[test]
    fn overlay_keeps_snapshot_order() {
        let snapshot: Snapshot = vec![
            Notification::new(NotificationId::from_raw(2), "b".into(), Severity::Error),
            Notification::new(NotificationId::from_raw(1), "a".into(), Severity::System),
        ]
        .into();

        let views = Toast::view_overlay(&snapshot);
        let texts: Vec<_> = views.iter().map(|v| v.text).collect();
        assert_eq!(texts, vec!["b", "a"]);
        assert_eq!(views[0].role.as_str(), "alert");
        assert_eq!(views[1].live.as_str(), "polite");
    }
}
