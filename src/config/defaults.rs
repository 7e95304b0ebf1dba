// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-close**: Per-severity display durations and their bounds
//! - **Exit animation**: Delay between dismissal and removal
//! - **Diagnostics**: Lifecycle event buffer sizing

// ==========================================================================
// Auto-close Defaults
// ==========================================================================

/// Default auto-close delay for warnings (in milliseconds).
pub const DEFAULT_WARNING_MS: u64 = 10_000;

/// Default auto-close delay for plain notifications (in milliseconds).
pub const DEFAULT_NOTIFICATION_MS: u64 = 5_000;

/// Default auto-close delay for system messages (in milliseconds).
pub const DEFAULT_SYSTEM_MS: u64 = 3_000;

/// Shortest auto-close delay a settings file may configure.
pub const MIN_AUTO_CLOSE_MS: u64 = 500;

/// Longest auto-close delay a settings file may configure.
pub const MAX_AUTO_CLOSE_MS: u64 = 120_000;

// ==========================================================================
// Exit Animation Defaults
// ==========================================================================

/// Time a dismissed message stays in the store so the view can animate it out.
pub const EXIT_ANIMATION_MS: u64 = 220;

/// Upper bound for a configured exit animation.
pub const MAX_EXIT_ANIMATION_MS: u64 = 2_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events retained by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4_096;

/// Pending events the diagnostics channel holds before dropping new ones.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 100;
