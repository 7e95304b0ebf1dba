// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` entry, the `Severity` enum and the
//! per-message lifecycle state machine.

use std::fmt;
use std::time::Instant;

/// Identifier of a notification.
///
/// Ids are handed out by the [`Manager`](super::Manager) in strictly
/// increasing order starting at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level determines auto-close duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Failure the user must acknowledge (never auto-closes).
    Error,
    /// Problem that doesn't block operation (10s).
    Warning,
    /// Ordinary feedback (5s).
    Notification,
    /// Short-lived system status (3s).
    #[default]
    System,
    /// Work in progress, closed by whoever started it (never auto-closes).
    Loading,
}

impl Severity {
    /// All severities, in display-priority order.
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Warning,
        Severity::Notification,
        Severity::System,
        Severity::Loading,
    ];

    /// Returns whether messages of this severity persist until dismissed.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        matches!(self, Severity::Error | Severity::Loading)
    }

    /// Stable lowercase name, used for CSS classes and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notification => "notification",
            Severity::System => "system",
            Severity::Loading => "loading",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle phase of a single message.
///
/// `Removed` is terminal. Entries in that phase are no longer in the store,
/// so a stored entry is always `Active` or `Dismissing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Dismissing,
    Removed,
}

/// Inputs that move a message through its [`Phase`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Manual dismissal or auto-close expiry.
    Dismiss,
    /// The exit animation finished (or was skipped).
    Finalize,
}

impl Phase {
    /// Returns the phase reached by applying `transition`, or `None` when the
    /// transition is not allowed from this phase.
    ///
    /// Only `Active → Dismissing → Removed` exists, which is what makes the
    /// first dismissal win: the second one finds the entry already
    /// `Dismissing` and gets `None`.
    #[must_use]
    pub fn next(self, transition: Transition) -> Option<Phase> {
        match (self, transition) {
            (Phase::Active, Transition::Dismiss) => Some(Phase::Dismissing),
            (Phase::Dismissing, Transition::Finalize) => Some(Phase::Removed),
            _ => None,
        }
    }
}

/// A notification held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    text: String,
    severity: Severity,
    phase: Phase,
    created_at: Instant,
}

impl Notification {
    pub(super) fn new(id: NotificationId, text: String, severity: Severity) -> Self {
        Self {
            id,
            text,
            severity,
            phase: Phase::Active,
            created_at: Instant::now(),
        }
    }

    /// Applies a lifecycle transition. Returns `false` and leaves the entry
    /// untouched when the transition is not allowed.
    pub(super) fn apply(&mut self, transition: Transition) -> bool {
        match self.phase.next(transition) {
            Some(next) => {
                self.phase = next;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// The display text, exactly as it was passed to `show`.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the exit animation should be playing.
    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        self.phase == Phase::Dismissing
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
