// SPDX-License-Identifier: MPL-2.0
//! User interface state.
//!
//! Follows the Elm-style "state down, messages up" pattern: components own
//! their state and change only in response to messages.
//!
//! - [`notifications`] - Hover/toast notification system for user feedback

pub mod notifications;
