//! Desktop notification adapter (notify-rust) plus a no-op fallback.

use notify_rust::{Notification, NotificationHandle, Timeout, Urgency};

use crate::ports::{Notifier, Permission, RiskAlert, ALERT_TAG};

/// Notifier backed by the desktop notification daemon.
///
/// Capability detection is the D-Bus session bus: without one there is no
/// notification surface and every call degrades to a silent no-op. The
/// desktop surface has no user-grant step, so a detected capability reports
/// `Granted` directly.
pub struct DesktopNotifier {
    permission: Permission,
    /// Handle of the live alert; a new alert supersedes it (one logical
    /// channel per workflow instance).
    current: Option<NotificationHandle>,
}

impl DesktopNotifier {
    #[must_use]
    pub fn new() -> Self {
        let capable = std::env::var_os("DBUS_SESSION_BUS_ADDRESS").is_some();
        Self {
            permission: if capable {
                Permission::Granted
            } else {
                Permission::Denied
            },
            current: None,
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for DesktopNotifier {
    fn permission(&self) -> Permission {
        self.permission
    }

    fn request_permission(&mut self) -> Permission {
        self.permission
    }

    fn show(&mut self, alert: &RiskAlert) {
        if self.permission != Permission::Granted {
            return;
        }

        // Supersede the previous alert on the same logical channel.
        if let Some(previous) = self.current.take() {
            previous.close();
        }

        let mut notification = Notification::new();
        notification
            .appname(ALERT_TAG)
            .summary(&alert.title)
            .body(&alert.body)
            .icon(alert.icon);

        if alert.requires_interaction {
            // Must not auto-hide until the user dismisses it.
            notification.timeout(Timeout::Never).urgency(Urgency::Critical);
        } else {
            notification.timeout(Timeout::Default);
        }

        // Fire and forget: a failed show is not an error.
        match notification.show() {
            Ok(handle) => self.current = Some(handle),
            Err(e) => tracing::debug!("Notification dropped: {}", e),
        }
    }
}

/// No-op notifier for tests, headless runs and opted-out users.
#[derive(Debug, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn permission(&self) -> Permission {
        Permission::Denied
    }

    fn request_permission(&mut self) -> Permission {
        Permission::Denied
    }

    fn show(&mut self, _alert: &RiskAlert) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PredictionResult;

    #[test]
    fn test_noop_notifier_denies_and_ignores() {
        let mut notifier = NoopNotifier;
        assert_eq!(notifier.permission(), Permission::Denied);
        assert_eq!(notifier.request_permission(), Permission::Denied);

        let result = PredictionResult {
            disease: true,
            message: "High risk".to_string(),
            confidence: None,
        };
        // Must not panic or error without a notification surface.
        notifier.show(&RiskAlert::for_result(&result));
    }
}
