// SPDX-License-Identifier: MPL-2.0
//! Auto-close and exit animation durations.

use super::notification::Severity;
use crate::config::{
    NotificationsConfig, DEFAULT_NOTIFICATION_MS, DEFAULT_SYSTEM_MS, DEFAULT_WARNING_MS,
    EXIT_ANIMATION_MS, MAX_AUTO_CLOSE_MS, MAX_EXIT_ANIMATION_MS, MIN_AUTO_CLOSE_MS,
};
use std::time::Duration;

/// Durations the manager schedules its timers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    warning: Duration,
    notification: Duration,
    system: Duration,
    exit_animation: Duration,
}

impl Timings {
    /// Builds timings from the `[notifications]` settings section.
    ///
    /// Unset fields keep their defaults; set ones are clamped to the allowed
    /// range.
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        let auto_close = |value: Option<u64>, default: u64| {
            Duration::from_millis(
                value
                    .unwrap_or(default)
                    .clamp(MIN_AUTO_CLOSE_MS, MAX_AUTO_CLOSE_MS),
            )
        };

        Self {
            warning: auto_close(config.warning_ms, DEFAULT_WARNING_MS),
            notification: auto_close(config.notification_ms, DEFAULT_NOTIFICATION_MS),
            system: auto_close(config.system_ms, DEFAULT_SYSTEM_MS),
            exit_animation: Duration::from_millis(
                config
                    .exit_animation_ms
                    .unwrap_or(EXIT_ANIMATION_MS)
                    .min(MAX_EXIT_ANIMATION_MS),
            ),
        }
    }

    /// Returns the auto-close delay for `severity`.
    /// Returns `None` for severities that stay until dismissed.
    #[must_use]
    pub fn auto_close(&self, severity: Severity) -> Option<Duration> {
        match severity {
            Severity::Warning => Some(self.warning),
            Severity::Notification => Some(self.notification),
            Severity::System => Some(self.system),
            Severity::Error | Severity::Loading => None,
        }
    }

    /// Time between entering the dismissing state and removal.
    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        self.exit_animation
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            warning: Duration::from_millis(DEFAULT_WARNING_MS),
            notification: Duration::from_millis(DEFAULT_NOTIFICATION_MS),
            system: Duration::from_millis(DEFAULT_SYSTEM_MS),
            exit_animation: Duration::from_millis(EXIT_ANIMATION_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_durations_match_severity_table() {
        let timings = Timings::default();
        assert_eq!(
            timings.auto_close(Severity::Warning),
            Some(Duration::from_millis(10_000))
        );
        assert_eq!(
            timings.auto_close(Severity::Notification),
            Some(Duration::from_millis(5_000))
        );
        assert_eq!(
            timings.auto_close(Severity::System),
            Some(Duration::from_millis(3_000))
        );
        assert_eq!(timings.auto_close(Severity::Error), None);
        assert_eq!(timings.auto_close(Severity::Loading), None);
        assert_eq!(timings.exit_animation(), Duration::from_millis(220));
    }

    #[test]
    fn empty_config_equals_defaults() {
        assert_eq!(
            Timings::from_config(&NotificationsConfig::default()),
            Timings::default()
        );
    }

    #[test]
    fn config_values_are_clamped() {
        let config = NotificationsConfig {
            warning_ms: Some(1),
            system_ms: Some(u64::MAX),
            exit_animation_ms: Some(60_000),
            ..NotificationsConfig::default()
        };
        let timings = Timings::from_config(&config);

        assert_eq!(
            timings.auto_close(Severity::Warning),
            Some(Duration::from_millis(MIN_AUTO_CLOSE_MS))
        );
        assert_eq!(
            timings.auto_close(Severity::System),
            Some(Duration::from_millis(MAX_AUTO_CLOSE_MS))
        );
        assert_eq!(
            timings.exit_animation(),
            Duration::from_millis(MAX_EXIT_ANIMATION_MS)
        );
    }

    #[test]
    fn config_cannot_make_persistent_severities_expire() {
        let config = NotificationsConfig {
            warning_ms: Some(2_000),
            ..NotificationsConfig::default()
        };
        let timings = Timings::from_config(&config);
        assert_eq!(timings.auto_close(Severity::Error), None);
        assert_eq!(timings.auto_close(Severity::Loading), None);
    }
}
