// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the store and the timer registry. It creates entries,
//! schedules their auto-close, runs the dismiss → remove sequence and clears
//! everything on request. All mutation happens synchronously inside one
//! method call, so ordering is exactly the call order.

use super::notification::{Notification, NotificationId, Phase, Severity, Transition};
use super::scheduler::{ManualClock, Scheduler, TimerEvent};
use super::store::{Snapshot, Store};
use super::timers::{TimerKind, TimerRegistry};
use super::timings::Timings;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, DismissCause};
use std::time::Duration;
use tokio::sync::watch;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification (close button).
    Dismiss(NotificationId),
    /// A scheduled timer expired.
    Timer(TimerEvent),
    /// Drop every notification at once.
    ClearAll,
}

/// Manages the active notifications and their timers.
#[derive(Debug)]
pub struct Manager<S> {
    store: Store,
    timers: TimerRegistry,
    scheduler: S,
    timings: Timings,
    /// Last id handed out; ids start at 1.
    last_id: u64,
    /// Optional diagnostics handle for lifecycle events.
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Scheduler> Manager<S> {
    /// Creates an empty manager with default timings.
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self::with_timings(scheduler, Timings::default())
    }

    #[must_use]
    pub fn with_timings(scheduler: S, timings: Timings) -> Self {
        Self {
            store: Store::new(),
            timers: TimerRegistry::new(),
            scheduler,
            timings,
            last_id: 0,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a message and returns its id.
    ///
    /// The entry is placed at the head of the list. If `severity` has a
    /// finite duration, an auto-close timer is scheduled for it.
    pub fn show(&mut self, text: impl Into<String>, severity: Severity) -> NotificationId {
        self.last_id += 1;
        let id = NotificationId::from_raw(self.last_id);
        let text = text.into();

        self.log(|| DiagnosticEventKind::Shown {
            id,
            severity,
            text: text.clone(),
        });
        self.store.prepend(Notification::new(id, text, severity));

        if let Some(delay) = self.timings.auto_close(severity) {
            if let Some(handle) = self.scheduler.schedule(delay, id, TimerKind::AutoClose) {
                self.timers.insert(id, TimerKind::AutoClose, handle);
            }
        }

        tracing::debug!(%id, %severity, "hover message shown");
        id
    }

    /// Shows a [`Severity::Notification`] message.
    pub fn notify(&mut self, text: impl Into<String>) -> NotificationId {
        self.show(text, Severity::Notification)
    }

    /// Shows a [`Severity::Warning`] message.
    pub fn warn(&mut self, text: impl Into<String>) -> NotificationId {
        self.show(text, Severity::Warning)
    }

    /// Shows a [`Severity::Error`] message. It stays until dismissed.
    pub fn error(&mut self, text: impl Into<String>) -> NotificationId {
        self.show(text, Severity::Error)
    }

    /// Shows a [`Severity::Loading`] message. It stays until dismissed.
    pub fn loading(&mut self, text: impl Into<String>) -> NotificationId {
        self.show(text, Severity::Loading)
    }

    /// Shows a [`Severity::System`] message.
    pub fn system(&mut self, text: impl Into<String>) -> NotificationId {
        self.show(text, Severity::System)
    }

    /// Starts the exit of a message.
    ///
    /// The entry is flagged dismissing right away and removed once the exit
    /// animation has run. Unknown ids and entries already on their way out
    /// are ignored.
    ///
    /// Returns `true` if this call started the dismissal.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.begin_dismiss(id, DismissCause::Manual)
    }

    /// Removes every message and cancels every timer, skipping exit
    /// animations.
    pub fn clear_all(&mut self) {
        for handle in self.timers.drain() {
            self.scheduler.cancel(handle);
        }
        let count = self.store.clear();

        self.log(|| DiagnosticEventKind::Cleared { count });
        tracing::debug!(count, "hover messages cleared");
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Timer(event) => self.fire(*event),
            Message::ClearAll => self.clear_all(),
        }
    }

    /// Processes an expired timer.
    ///
    /// Events whose handle no longer fills its registry slot were cancelled
    /// or superseded after they were sent and are dropped.
    pub fn fire(&mut self, event: TimerEvent) {
        if !self.timers.release(event.id, event.kind, event.handle) {
            tracing::trace!(id = %event.id, kind = ?event.kind, "ignoring stale timer");
            return;
        }
        self.scheduler.cancel(event.handle);

        match event.kind {
            TimerKind::AutoClose => {
                self.begin_dismiss(event.id, DismissCause::AutoClose);
            }
            TimerKind::Removal => self.finalize(event.id),
        }
    }

    /// Returns a receiver holding the current list, updated on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.store.subscribe()
    }

    /// Returns the current list.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    /// Returns the active notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.store.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.store.get(id)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.store.is_empty()
    }

    /// Number of timers currently registered.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }

    #[must_use]
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn begin_dismiss(&mut self, id: NotificationId, cause: DismissCause) -> bool {
        if self.timers.is_pending(id, TimerKind::Removal) {
            return false;
        }
        if self.store.get(id).map(Notification::phase) != Some(Phase::Active) {
            return false;
        }

        // The losing trigger must find nothing left to fire.
        if let Some(handle) = self.timers.take(id, TimerKind::AutoClose) {
            self.scheduler.cancel(handle);
        }
        if !self.store.apply(id, Transition::Dismiss) {
            return false;
        }

        self.log(|| DiagnosticEventKind::DismissStarted { id, cause });
        tracing::debug!(%id, ?cause, "hover message dismissing");

        match self
            .scheduler
            .schedule(self.timings.exit_animation(), id, TimerKind::Removal)
        {
            Some(handle) => {
                self.timers.insert(id, TimerKind::Removal, handle);
            }
            None => self.finalize(id),
        }
        true
    }

    fn finalize(&mut self, id: NotificationId) {
        for handle in self.timers.remove(id) {
            self.scheduler.cancel(handle);
        }
        if !self.store.apply(id, Transition::Finalize) {
            return;
        }
        if self.store.remove(id).is_some() {
            self.log(|| DiagnosticEventKind::Removed { id });
            tracing::debug!(%id, "hover message removed");
        }
    }

    fn log(&self, kind: impl FnOnce() -> DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind());
        }
    }
}

impl Manager<ManualClock> {
    /// Creates a manager on a fresh virtual clock.
    #[must_use]
    pub fn manual() -> Self {
        Self::new(ManualClock::new())
    }

    /// Advances virtual time by `by`, firing every timer that comes due,
    /// including timers scheduled by earlier firings inside the window.
    pub fn advance(&mut self, by: Duration) {
        let target = self.scheduler.now() + by;
        while let Some(event) = self.scheduler.pop_due(target) {
            self.fire(event);
        }
        self.scheduler.settle_at(target);
    }
}
