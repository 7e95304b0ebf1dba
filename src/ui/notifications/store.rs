// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of active notifications.
//!
//! The store is the only writer of the list. Every mutation publishes an
//! immutable [`Snapshot`] on a `watch` channel; views subscribe to that
//! channel and never see the writable state.

use super::notification::{Notification, NotificationId, Transition};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::watch;

/// Immutable copy of the store contents, newest first.
pub type Snapshot = Arc<[Notification]>;

#[derive(Debug)]
pub struct Store {
    /// Newest first.
    entries: VecDeque<Notification>,
    publisher: watch::Sender<Snapshot>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(Snapshot::from(Vec::new()));
        Self {
            entries: VecDeque::new(),
            publisher,
        }
    }

    /// Returns a receiver that always holds the latest snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.publisher.subscribe()
    }

    /// Returns the most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.publisher.borrow().clone()
    }

    /// Inserts `notification` at the head of the list.
    pub fn prepend(&mut self, notification: Notification) {
        self.entries.push_front(notification);
        self.publish();
    }

    /// Applies a lifecycle transition to the entry `id`.
    ///
    /// Returns `false` when the entry is missing or the transition is not
    /// allowed from its current phase; nothing is published then.
    pub fn apply(&mut self, id: NotificationId, transition: Transition) -> bool {
        let applied = self
            .entries
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.apply(transition));
        if applied {
            self.publish();
        }
        applied
    }

    /// Removes the entry `id`, keeping the order of the others.
    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.entries.iter().position(|n| n.id() == id)?;
        let removed = self.entries.remove(pos);
        self.publish();
        removed
    }

    /// Removes every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.publish();
        count
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id() == id)
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn publish(&self) {
        let snapshot: Snapshot = self.entries.iter().cloned().collect();
        self.publisher.send_replace(snapshot);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
