// SPDX-License-Identifier: MPL-2.0
//! Per-message bookkeeping of pending timers.
//!
//! Each message owns at most one auto-close timer and at most one removal
//! timer. The registry records which handle currently fills each slot, so a
//! timer event that arrives after its slot was cleared or refilled can be
//! recognised as stale and ignored.

use super::notification::NotificationId;
use std::collections::HashMap;

/// Opaque handle to a scheduled timer, unique per scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Wraps a scheduler-assigned value. Schedulers must not reuse values.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Moves the message into the dismissing state.
    AutoClose,
    /// Removes a dismissing message from the store.
    Removal,
}

/// Pending timers of one message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSlots {
    pub auto_close: Option<TimerHandle>,
    pub removal: Option<TimerHandle>,
}

impl TimerSlots {
    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<TimerHandle> {
        match kind {
            TimerKind::AutoClose => &mut self.auto_close,
            TimerKind::Removal => &mut self.removal,
        }
    }

    fn slot(&self, kind: TimerKind) -> Option<TimerHandle> {
        match kind {
            TimerKind::AutoClose => self.auto_close,
            TimerKind::Removal => self.removal,
        }
    }

    fn handles(self) -> impl Iterator<Item = TimerHandle> {
        self.auto_close.into_iter().chain(self.removal)
    }

    fn is_empty(&self) -> bool {
        self.auto_close.is_none() && self.removal.is_none()
    }
}

#[derive(Debug, Default)]
pub struct TimerRegistry {
    slots: HashMap<NotificationId, TimerSlots>,
}

impl TimerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `handle` in the `kind` slot of `id`.
    ///
    /// Returns the handle previously in that slot. Callers cancel it, so a
    /// slot never holds two live timers.
    pub fn insert(
        &mut self,
        id: NotificationId,
        kind: TimerKind,
        handle: TimerHandle,
    ) -> Option<TimerHandle> {
        self.slots.entry(id).or_default().slot_mut(kind).replace(handle)
    }

    /// Empties the `kind` slot of `id` and returns its handle.
    pub fn take(&mut self, id: NotificationId, kind: TimerKind) -> Option<TimerHandle> {
        let slots = self.slots.get_mut(&id)?;
        let handle = slots.slot_mut(kind).take();
        if slots.is_empty() {
            self.slots.remove(&id);
        }
        handle
    }

    /// Empties the `kind` slot of `id` only if it holds `handle`.
    ///
    /// Returns `false` for a stale handle (cancelled or superseded), leaving
    /// the registry untouched.
    pub fn release(&mut self, id: NotificationId, kind: TimerKind, handle: TimerHandle) -> bool {
        if self.pending(id, kind) != Some(handle) {
            return false;
        }
        self.take(id, kind);
        true
    }

    /// Returns the handle in the `kind` slot of `id`, if any.
    #[must_use]
    pub fn pending(&self, id: NotificationId, kind: TimerKind) -> Option<TimerHandle> {
        self.slots.get(&id).and_then(|slots| slots.slot(kind))
    }

    #[must_use]
    pub fn is_pending(&self, id: NotificationId, kind: TimerKind) -> bool {
        self.pending(id, kind).is_some()
    }

    /// Erases the entry of `id` and returns every handle it held.
    pub fn remove(&mut self, id: NotificationId) -> Vec<TimerHandle> {
        self.slots
            .remove(&id)
            .map(|slots| slots.handles().collect())
            .unwrap_or_default()
    }

    /// Erases every entry and returns every handle held.
    pub fn drain(&mut self) -> Vec<TimerHandle> {
        self.slots
            .drain()
            .flat_map(|(_, slots)| slots.handles())
            .collect()
    }

    /// Number of pending timers across all messages.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.slots.values().map(|slots| slots.handles().count()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
