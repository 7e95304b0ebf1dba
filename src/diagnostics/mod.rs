// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting notification lifecycle events.
//!
//! A [`DiagnosticsHandle`] attached to the notification manager reports every
//! show, dismissal, removal and clear. The [`DiagnosticsCollector`] keeps the
//! most recent events in a memory-bounded [`CircularBuffer`].

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissCause};
