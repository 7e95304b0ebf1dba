// SPDX-License-Identifier: MPL-2.0
//! Hover/toast notification system for user feedback.
//!
//! Notifications appear temporarily to report what other parts of the
//! application did (saved, failed, still working) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` entry, `Severity`, lifecycle `Phase`
//! - [`timers`] - `TimerRegistry` of pending auto-close and removal timers
//! - [`store`] - `Store` of active entries, published as read-only snapshots
//! - [`manager`] - `Manager`, the lifecycle controller
//! - [`scheduler`] - timer facilities (`TokioScheduler`, `ManualClock`, `Unscheduled`)
//! - [`toast`] - `Toast` view model with accessibility metadata
//!
//! # Usage
//!
//! ```
//! use hover_messages::ui::notifications::{Manager, ManualClock};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new(ManualClock::new());
//! let feed = manager.subscribe();
//!
//! let id = manager.warn("Disk almost full");
//! assert_eq!(feed.borrow()[0].id(), id);
//!
//! // Warnings close after 10s, then play a 220ms exit animation.
//! manager.advance(Duration::from_millis(10_000));
//! assert!(manager.get(id).unwrap().is_dismissing());
//! manager.advance(Duration::from_millis(220));
//! assert!(manager.get(id).is_none());
//! ```
//!
//! # Design Considerations
//!
//! - Durations: 3s system, 5s notification, 10s warning; errors and loading
//!   stay until dismissed
//! - Exit animation: 220ms between dismissal and removal
//! - Accessibility: errors are assertive alerts, the rest polite status

mod manager;
mod notification;
mod scheduler;
mod store;
mod timers;
mod timings;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Phase, Severity, Transition};
pub use scheduler::{ManualClock, Scheduler, TimerEvent, TokioScheduler, Unscheduled};
pub use store::{Snapshot, Store};
pub use timers::{TimerHandle, TimerKind, TimerRegistry, TimerSlots};
pub use timings::Timings;
pub use toast::{AriaLive, AriaRole, Toast, ToastView};
