use serde::{Deserialize, Serialize};

/// A server-configured exposure score range mapped to a user-facing message.
///
/// Buckets in a configuration are mutually exclusive and kept sorted by
/// `min_risk_score` ascending; the settings store enforces the ordering on
/// ingest so out-of-order payloads still classify deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBucket {
    pub min_risk_score: i64,
    pub max_risk_score: i64,
    pub alert_title: String,
    pub alert_message: String,
    /// Text for the OS-level notification shown when a score lands here.
    pub system_notification: String,
    pub link_url: String,
    /// Whether the "request a callback" action is offered for this bucket.
    #[serde(default)]
    pub callback_enabled: bool,
}

impl RiskBucket {
    /// Inclusive range check: `min <= score <= max`.
    pub fn contains(&self, score: i64) -> bool {
        self.min_risk_score <= score && score <= self.max_risk_score
    }
}

/// A remotely configured in-app announcement.
///
/// Entries are validated element-wise on receipt — a malformed announcement
/// is dropped, never allowed to fail the whole settings fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub title: String,
    pub message: String,
    pub link_text: String,
    pub link: String,
    /// RFC 3339 timestamp string as delivered by the server.
    pub created_at: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_link: Option<String>,
}

/// Daily window during which no reminder may fire.
///
/// The window may wrap midnight (`start_hour > end_hour`, e.g. 22 → 7).
/// Occurrences landing inside it are deferred to `end_hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuietHours {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl QuietHours {
    /// Whether the given hour-of-day falls inside the quiet window.
    pub fn contains_hour(&self, hour: u8) -> bool {
        if self.start_hour <= self.end_hour {
            self.start_hour <= hour && hour < self.end_hour
        } else {
            // Wraps midnight: quiet from start..24 and 0..end.
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// Remote cadence rules for diary reminders.
///
/// Both local device notifications and in-app reminder banners are derived
/// from this one config. The `Default` impl is the documented disabled
/// fallback whenever the remote payload is missing or fails
/// [`ReminderNotificationConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderNotificationConfig {
    pub enabled: bool,
    /// Gap between successive reminder occurrences.
    pub interval_hours: u32,
    /// Number of occurrences scheduled per reschedule.
    pub max_scheduled: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiet_hours: Option<QuietHours>,
    #[serde(default)]
    pub notification_title: String,
    #[serde(default)]
    pub notification_body: String,
}

impl ReminderNotificationConfig {
    /// One week — an interval above this makes the reminder pointless.
    pub const MAX_INTERVAL_HOURS: u32 = 168;
    /// Cap on occurrences issued per reschedule.
    pub const MAX_SCHEDULED: u32 = 50;

    /// Check the cadence invariants, returning the first violation as a
    /// human-readable reason. A disabled config is always valid — its cadence
    /// fields are never read.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if self.interval_hours == 0 || self.interval_hours > Self::MAX_INTERVAL_HOURS {
            return Err(format!(
                "intervalHours must be within 1..={} (got {})",
                Self::MAX_INTERVAL_HOURS,
                self.interval_hours
            ));
        }
        if self.max_scheduled == 0 || self.max_scheduled > Self::MAX_SCHEDULED {
            return Err(format!(
                "maxScheduled must be within 1..={} (got {})",
                Self::MAX_SCHEDULED,
                self.max_scheduled
            ));
        }
        if let Some(q) = self.quiet_hours {
            if q.start_hour >= 24 || q.end_hour >= 24 {
                return Err(format!(
                    "quietHours out of range (start {}, end {})",
                    q.start_hour, q.end_hour
                ));
            }
        }
        if self.notification_body.trim().is_empty() {
            return Err("notificationBody must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ReminderNotificationConfig {
    /// The safe fallback: reminders off, no cadence.
    fn default() -> Self {
        Self {
            enabled: false,
            interval_hours: 0,
            max_scheduled: 0,
            quiet_hours: None,
            notification_title: String::new(),
            notification_body: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_config() -> ReminderNotificationConfig {
        ReminderNotificationConfig {
            enabled: true,
            interval_hours: 24,
            max_scheduled: 7,
            quiet_hours: None,
            notification_title: "Diary reminder".to_string(),
            notification_body: "Remember to log where you have been".to_string(),
        }
    }

    #[test]
    fn disabled_default_is_valid() {
        assert!(ReminderNotificationConfig::default().validate().is_ok());
    }

    #[test]
    fn enabled_config_requires_cadence() {
        let mut config = enabled_config();
        assert!(config.validate().is_ok());

        config.interval_hours = 0;
        assert!(config.validate().is_err());

        config = enabled_config();
        config.max_scheduled = ReminderNotificationConfig::MAX_SCHEDULED + 1;
        assert!(config.validate().is_err());

        config = enabled_config();
        config.notification_body = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn quiet_hours_must_be_real_hours() {
        let mut config = enabled_config();
        config.quiet_hours = Some(QuietHours {
            start_hour: 22,
            end_hour: 25,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn quiet_window_wrapping_midnight() {
        let q = QuietHours {
            start_hour: 22,
            end_hour: 7,
        };
        assert!(q.contains_hour(23));
        assert!(q.contains_hour(3));
        assert!(!q.contains_hour(7));
        assert!(!q.contains_hour(12));
    }

    #[test]
    fn quiet_window_same_day() {
        let q = QuietHours {
            start_hour: 9,
            end_hour: 17,
        };
        assert!(q.contains_hour(9));
        assert!(q.contains_hour(16));
        assert!(!q.contains_hour(17));
        assert!(!q.contains_hour(8));
    }
}
