// SPDX-License-Identifier: MPL-2.0
//! Timer facilities the notification manager can run on.
//!
//! Timers never call back into the manager directly. A fired timer yields a
//! [`TimerEvent`] that the owner feeds to
//! [`Manager::handle_message`](super::Manager::handle_message), the same
//! "messages up" flow the rest of the UI uses.
//!
//! - [`TokioScheduler`]: real time, one sleeping task per timer
//! - [`ManualClock`]: virtual time advanced explicitly, for tests and replays
//! - [`Unscheduled`]: no timer facility at all

use super::notification::NotificationId;
use super::timers::{TimerHandle, TimerKind};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A timer that has expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub id: NotificationId,
    pub kind: TimerKind,
    pub handle: TimerHandle,
}

/// A facility that can run a timer once after a delay.
pub trait Scheduler {
    /// Arranges for a [`TimerEvent`] to be delivered after `delay`.
    ///
    /// Returns `None` when no timer can be scheduled. The manager then
    /// treats the delay as infinite for auto-close and as zero for removal.
    fn schedule(&mut self, delay: Duration, id: NotificationId, kind: TimerKind)
        -> Option<TimerHandle>;

    /// Cancels a pending timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

// =============================================================================
// Unscheduled
// =============================================================================

/// Environment without a timer facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unscheduled;

impl Scheduler for Unscheduled {
    fn schedule(&mut self, _: Duration, _: NotificationId, _: TimerKind) -> Option<TimerHandle> {
        None
    }

    fn cancel(&mut self, _: TimerHandle) {}
}

// =============================================================================
// ManualClock
// =============================================================================

/// Deterministic virtual clock.
///
/// Time only moves when the owner advances it, which makes exact deadlines
/// like "removed 220ms after dismissal" observable.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_handle: u64,
    /// Keyed by deadline, then handle, so equal deadlines fire in
    /// scheduling order.
    pending: BTreeMap<(Duration, TimerHandle), TimerEvent>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the clock was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have not fired or been cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerEvent> {
        let (&(deadline, handle), _) = self.pending.first_key_value()?;
        if deadline > until {
            return None;
        }
        self.deadlines.remove(&handle);
        let event = self.pending.remove(&(deadline, handle))?;
        self.now = self.now.max(deadline);
        Some(event)
    }

    /// Moves the clock forward to `instant` without firing anything.
    pub(super) fn settle_at(&mut self, instant: Duration) {
        self.now = self.now.max(instant);
    }
}

impl Scheduler for ManualClock {
    fn schedule(
        &mut self,
        delay: Duration,
        id: NotificationId,
        kind: TimerKind,
    ) -> Option<TimerHandle> {
        self.next_handle += 1;
        let handle = TimerHandle::from_raw(self.next_handle);
        let deadline = self.now + delay;
        self.pending
            .insert((deadline, handle), TimerEvent { id, kind, handle });
        self.deadlines.insert(handle, deadline);
        Some(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(deadline) = self.deadlines.remove(&handle) {
            self.pending.remove(&(deadline, handle));
        }
    }
}

// =============================================================================
// TokioScheduler
// =============================================================================

/// Real-time scheduler backed by the tokio timer.
///
/// Each timer is a spawned task that sleeps, then sends its event on the
/// channel returned by [`TokioScheduler::new`]. Cancelling aborts the task.
/// An abort can race with a send that already happened; the manager drops
/// such late events because their handle is no longer registered.
#[derive(Debug)]
pub struct TokioScheduler {
    events: mpsc::UnboundedSender<TimerEvent>,
    tasks: HashMap<TimerHandle, AbortHandle>,
    next_handle: u64,
}

impl TokioScheduler {
    /// Creates the scheduler and the receiver its timer events arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            events,
            tasks: HashMap::new(),
            next_handle: 0,
        };
        (scheduler, receiver)
    }

    /// Number of timer tasks not yet cancelled or acknowledged.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for TokioScheduler {
    /// Returns `None` when called outside a tokio runtime.
    fn schedule(
        &mut self,
        delay: Duration,
        id: NotificationId,
        kind: TimerKind,
    ) -> Option<TimerHandle> {
        let runtime = tokio::runtime::Handle::try_current().ok()?;

        self.next_handle += 1;
        let handle = TimerHandle::from_raw(self.next_handle);
        let event = TimerEvent { id, kind, handle };
        let events = self.events.clone();

        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means nobody is driving the manager any more.
            let _ = events.send(event);
        });
        self.tasks.insert(handle, task.abort_handle());
        Some(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> NotificationId {
        NotificationId::from_raw(n)
    }

    #[test]
    fn unscheduled_never_schedules() {
        let mut scheduler = Unscheduled;
        assert!(scheduler
            .schedule(Duration::from_millis(1), id(1), TimerKind::AutoClose)
            .is_none());
    }

    #[test]
    fn manual_clock_fires_in_deadline_order() {
        let mut clock = ManualClock::new();
        let late = clock
            .schedule(Duration::from_millis(300), id(1), TimerKind::AutoClose)
            .unwrap();
        let early = clock
            .schedule(Duration::from_millis(100), id(2), TimerKind::AutoClose)
            .unwrap();

        assert_eq!(clock.pop_due(Duration::from_millis(50)), None);

        let first = clock.pop_due(Duration::from_millis(500)).unwrap();
        assert_eq!(first.handle, early);
        assert_eq!(clock.now(), Duration::from_millis(100));

        let second = clock.pop_due(Duration::from_millis(500)).unwrap();
        assert_eq!(second.handle, late);
        assert_eq!(clock.now(), Duration::from_millis(300));
        assert_eq!(clock.pending_count(), 0);
    }

    #[test]
    fn manual_clock_cancel_removes_timer() {
        let mut clock = ManualClock::new();
        let handle = clock
            .schedule(Duration::from_millis(10), id(1), TimerKind::Removal)
            .unwrap();

        clock.cancel(handle);
        clock.cancel(handle);

        assert_eq!(clock.pending_count(), 0);
        assert_eq!(clock.pop_due(Duration::from_secs(1)), None);
    }

    #[test]
    fn manual_clock_handles_are_unique() {
        let mut clock = ManualClock::new();
        let a = clock.schedule(Duration::ZERO, id(1), TimerKind::AutoClose);
        let b = clock.schedule(Duration::ZERO, id(1), TimerKind::Removal);
        assert_ne!(a, b);
    }

    #[test]
    fn tokio_scheduler_is_unavailable_outside_runtime() {
        let (mut scheduler, _events) = TokioScheduler::new();
        assert!(scheduler
            .schedule(Duration::from_millis(5), id(1), TimerKind::AutoClose)
            .is_none());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_delivers_after_delay() {
        let (mut scheduler, mut events) = TokioScheduler::new();
        let start = tokio::time::Instant::now();

        let handle = scheduler
            .schedule(Duration::from_millis(220), id(7), TimerKind::Removal)
            .expect("runtime is available");

        let event = events.recv().await.expect("timer should fire");
        assert_eq!(
            event,
            TimerEvent {
                id: id(7),
                kind: TimerKind::Removal,
                handle
            }
        );
        assert!(start.elapsed() >= Duration::from_millis(220));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_cancel_prevents_delivery() {
        let (mut scheduler, mut events) = TokioScheduler::new();

        let cancelled = scheduler
            .schedule(Duration::from_millis(100), id(1), TimerKind::AutoClose)
            .unwrap();
        let kept = scheduler
            .schedule(Duration::from_millis(200), id(2), TimerKind::AutoClose)
            .unwrap();
        scheduler.cancel(cancelled);

        let event = events.recv().await.expect("second timer should fire");
        assert_eq!(event.handle, kept);
        assert_eq!(scheduler.pending_count(), 1);
    }
}
