// SPDX-License-Identifier: MPL-2.0
//! `hover_messages` manages transient hover/toast notifications.
//!
//! It keeps an ordered, newest-first list of messages, closes them after a
//! per-severity delay, gives each one an exit animation window before
//! removal, and publishes every change as a read-only snapshot for views.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
