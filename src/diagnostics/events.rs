// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification lifecycle tracking.

use chrono::{DateTime, Utc};

use crate::ui::notifications::{NotificationId, Severity};

/// Why a message entered the dismissing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissCause {
    /// `dismiss` was called (close button, programmatic dismissal).
    Manual,
    /// The severity's auto-close timer expired.
    AutoClose,
}

/// The lifecycle step an event records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    /// A message was added to the store.
    Shown {
        id: NotificationId,
        severity: Severity,
        text: String,
    },
    /// A message started its exit animation.
    DismissStarted {
        id: NotificationId,
        cause: DismissCause,
    },
    /// A message left the store after its exit animation.
    Removed { id: NotificationId },
    /// The store was emptied at once.
    Cleared { count: usize },
}

/// A timestamped lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEvent {
    pub recorded_at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current wall-clock time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            recorded_at: Utc::now(),
            kind,
        }
    }

    /// Returns the message this event concerns, if any.
    #[must_use]
    pub fn notification_id(&self) -> Option<NotificationId> {
        match &self.kind {
            DiagnosticEventKind::Shown { id, .. }
            | DiagnosticEventKind::DismissStarted { id, .. }
            | DiagnosticEventKind::Removed { id } => Some(*id),
            DiagnosticEventKind::Cleared { .. } => None,
        }
    }
}
