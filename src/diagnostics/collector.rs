// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing lifecycle events.
//!
//! The collector owns a bounded channel. Handles push into it without
//! blocking, and the owner drains it into a circular buffer on its own
//! schedule.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self, error::TrySendError, Receiver, Sender};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Events are dropped when the channel is
/// full or the collector is gone; diagnostics never stall the lifecycle.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle event.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    /// Attempts to send an event, returning an error if the channel is full.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the internal channel buffer is full,
    /// or `TrySendError::Closed` if the collector has been dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Central collector for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Kept so handles can be minted at any time.
    event_tx: Sender<DiagnosticEvent>,
    started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a new collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = mpsc::channel(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    ///
    /// Returns the number of events drained.
    pub fn process_pending(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            drained += 1;
        }
        drained
    }

    /// Returns stored events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// When this collector was created.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Drops all stored events. Pending channel events are kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_buffered_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log(DiagnosticEventKind::Cleared { count: 2 });
        assert!(collector.is_empty());

        assert_eq!(collector.process_pending(), 1);
        assert_eq!(collector.len(), 1);
        let first = collector.events().next().expect("event should be stored");
        assert_eq!(first.kind, DiagnosticEventKind::Cleared { count: 2 });
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for count in 0..DIAGNOSTICS_CHANNEL_CAPACITY {
            handle
                .try_log(DiagnosticEventKind::Cleared { count })
                .expect("channel should have room");
        }

        let overflow = handle.try_log(DiagnosticEventKind::Cleared { count: 0 });
        assert!(matches!(overflow, Err(TrySendError::Full(_))));
        // Fire-and-forget variant silently drops.
        handle.log(DiagnosticEventKind::Cleared { count: 0 });
    }

    #[test]
    fn buffer_evicts_oldest_beyond_capacity() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(0));
        let handle = collector.handle();
        let capacity = BufferCapacity::new(0).value();

        for count in 0..capacity + 5 {
            handle.log(DiagnosticEventKind::Cleared { count });
        }
        collector.process_pending();

        assert_eq!(collector.len(), capacity);
        let oldest = collector.events().next().expect("buffer should not be empty");
        assert_eq!(oldest.kind, DiagnosticEventKind::Cleared { count: 5 });
    }

    #[test]
    fn closed_collector_reports_closed() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        drop(collector);

        let result = handle.try_log(DiagnosticEventKind::Cleared { count: 1 });
        assert!(matches!(result, Err(TrySendError::Closed(_))));
    }
}
